use crate::features::error::ReportError;
use crate::features::gps::GeoRecord;
use clap::ValueEnum;
use std::fmt::Write;
use std::path::Path;

const HEADER: [&str; 3] = ["Filename", "Latitude", "Longitude"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Csv,
    Html,
    Json,
}

impl ReportFormat {
    /// Picks the report format: an explicit choice wins, otherwise the output
    /// file's extension decides, falling back to CSV.
    pub fn resolve(explicit: Option<Self>, output: Option<&Path>) -> Self {
        if let Some(format) = explicit {
            return format;
        }
        let extension = output
            .and_then(Path::extension)
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("html" | "htm") => Self::Html,
            Some("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

pub fn render(records: &[GeoRecord], format: ReportFormat) -> Result<String, ReportError> {
    Ok(match format {
        ReportFormat::Csv => render_csv(records),
        ReportFormat::Html => render_html(records),
        ReportFormat::Json => serde_json::to_string_pretty(records)?,
    })
}

fn cells(record: &GeoRecord) -> [String; 3] {
    [
        record.filename.clone(),
        record.latitude.to_string(),
        record.longitude.to_string(),
    ]
}

pub fn render_csv(records: &[GeoRecord]) -> String {
    let mut out = String::new();
    push_csv_line(&mut out, HEADER);
    for record in records {
        push_csv_line(&mut out, cells(record));
    }
    out
}

fn push_csv_line<S: AsRef<str>>(out: &mut String, fields: [S; 3]) {
    let line: Vec<String> = fields.iter().map(|f| csv_field(f.as_ref())).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn render_html(records: &[GeoRecord]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>GPS locations</title>\n</head>\n<body>\n<table>\n",
    );
    out.push_str("<tr>");
    for heading in HEADER {
        let _ = write!(out, "<th>{heading}</th>");
    }
    out.push_str("</tr>\n");
    for record in records {
        out.push_str("<tr>");
        for cell in cells(record) {
            let _ = write!(out, "<td>{}</td>", html_escape(&cell));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n</body>\n</html>\n");
    out
}

fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
