use geotag_report::{GeotagScanner, ScanConfig};

/// Print a CSV of every geotagged photo below the given folder (default: the current directory).
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let input = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let config = ScanConfig::builder().input(input).build();
    let scanner = GeotagScanner::builder().config(config).build()?;
    scanner.run()?;

    Ok(())
}
