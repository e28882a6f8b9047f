use criterion::{Criterion, criterion_group, criterion_main};
use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use geotag_report::features::diagnostics::Diagnostic;
use geotag_report::features::extraction::ExtractOptions;
use geotag_report::{ExifDecoder, MetadataDecoder, dms_to_decimal, extract};
use std::hint::black_box;
use std::io::Cursor;

fn geotagged_tiff() -> Vec<u8> {
    let rationals = |v: [(u32, u32); 3]| Value::Rational(v.into_iter().map(Rational::from).collect());
    let fields = [
        Field {
            tag: Tag::GPSLatitudeRef,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![b"N".to_vec()]),
        },
        Field {
            tag: Tag::GPSLatitude,
            ifd_num: In::PRIMARY,
            value: rationals([(52, 1), (22, 1), (4512, 100)]),
        },
        Field {
            tag: Tag::GPSLongitudeRef,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![b"E".to_vec()]),
        },
        Field {
            tag: Tag::GPSLongitude,
            ifd_num: In::PRIMARY,
            value: rationals([(4, 1), (53, 1), (5795, 100)]),
        },
    ];
    let mut writer = Writer::new();
    for field in &fields {
        writer.push_field(field);
    }
    let mut buffer = Cursor::new(Vec::new());
    writer.write(&mut buffer, true).unwrap();
    buffer.into_inner()
}

fn bench(c: &mut Criterion) {
    c.bench_function("dms_to_decimal", |b| {
        b.iter(|| dms_to_decimal(black_box(41.0), black_box(24.0), black_box(12.2)));
    });

    let bytes = geotagged_tiff();
    c.bench_function("exif_decoder.decode", |b| {
        b.iter(|| ExifDecoder.decode(black_box(&bytes)).unwrap());
    });

    let dir = tempfile::TempDir::new().unwrap();
    let paths: Vec<_> = (0..100)
        .map(|i| {
            let path = dir.path().join(format!("{i:03}.tif"));
            std::fs::write(&path, &bytes).unwrap();
            path
        })
        .collect();

    c.bench_function("extract 100 files", |b| {
        b.iter(|| {
            extract(
                &paths,
                ExtractOptions::default(),
                &ExifDecoder,
                Vec::<Diagnostic>::new(),
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
