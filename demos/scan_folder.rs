use geotag_report::features::diagnostics::Diagnostic;
use geotag_report::{GeotagScanner, ScanConfig};
use regex::Regex;

/// Scan the JPEGs below a folder and print each location with its signed coordinates,
/// followed by the files that could not be read.
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let input = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let config = ScanConfig::builder()
        .input(input)
        .pattern(Regex::new(r"(?i)\.jpe?g$")?)
        .build();
    let scanner = GeotagScanner::builder().config(config).build()?;

    let paths = scanner.collect_paths()?;
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let result = scanner.extract(&paths, &mut diagnostics)?;

    for record in &result.records {
        println!(
            "{}\t{}, {}\t({:.6}, {:.6})",
            record.filename,
            record.latitude,
            record.longitude,
            record.latitude.signed(),
            record.longitude.signed()
        );
    }
    for diagnostic in &diagnostics {
        println!("unreadable: {} ({})", diagnostic.path.display(), diagnostic.description);
    }
    println!("{} of {} file(s) have a location", result.records.len(), paths.len());

    Ok(())
}
