use crate::features::error::OutputError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes the rendered report to `target`, or to stdout when there is none.
///
/// An existing file is only replaced when `force` is set, and a directory is
/// never replaced.
pub fn write_report(target: Option<&Path>, text: &str, force: bool) -> Result<(), OutputError> {
    let Some(target) = target else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
        return Ok(());
    };

    if target.exists() {
        if !force {
            return Err(OutputError::AlreadyExists(target.to_path_buf()));
        }
        if target.is_dir() {
            return Err(OutputError::IsDirectory(target.to_path_buf()));
        }
    }

    fs::write(target, text)?;
    tracing::info!("Report written to {}", target.display());
    Ok(())
}
