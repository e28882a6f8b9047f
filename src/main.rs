use clap::Parser;
use geotag_report::{FailurePolicy, GeotagScanner, ReportFormat, ScanConfig};
use regex::Regex;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Collect EXIF GPS data from all images below a folder.
#[derive(Parser, Debug)]
#[command(name = "geotag_report")]
#[command(version)]
struct Args {
    /// Folder (or single file) to scan. A path, not a glob; filter names with --match
    #[arg(short, long, default_value = ".")]
    input: PathBuf,

    /// Only scan files whose name matches this regular expression
    #[arg(long = "match", value_name = "REGEX", value_parser = Regex::new)]
    pattern: Option<Regex>,

    /// Also scan hidden files and folders
    #[arg(long)]
    hidden: bool,

    /// File to write results to. Writes to stdout if not set
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force: bool,

    /// Output format. Defaults to csv unless the output file ends with .html or .json
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Fail if any file cannot be parsed for EXIF GPS data, instead of skipping it
    #[arg(long)]
    fail_on_error: bool,

    /// Don't log file parse errors to stderr
    #[arg(short, long)]
    quiet: bool,

    /// More log output (-v: info, -vv: debug). RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for ScanConfig {
    fn from(args: Args) -> Self {
        let failure_policy = if args.fail_on_error {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Skip
        };
        ScanConfig::builder()
            .input(args.input)
            .maybe_pattern(args.pattern)
            .include_hidden(args.hidden)
            .maybe_output(args.output)
            .force(args.force)
            .maybe_format(args.format)
            .failure_policy(failure_policy)
            .quiet(args.quiet)
            .build()
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "geotag_report=warn",
        1 => "geotag_report=info",
        _ => "geotag_report=debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let scanner = GeotagScanner::builder().config(args.into()).build()?;
    scanner.run()?;

    Ok(())
}
