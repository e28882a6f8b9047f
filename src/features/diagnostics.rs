use std::io::Write;
use std::path::{Path, PathBuf};

/// Receives one message per file that could not be decoded.
pub trait DiagnosticSink {
    fn report(&mut self, path: &Path, description: &str);
}

/// Writes diagnostics to standard error, one line per failed file.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, path: &Path, description: &str) {
        let mut stderr = std::io::stderr().lock();
        // Nothing sensible left to do if stderr itself is gone.
        let _ = writeln!(stderr, "{description} File: {}", path.display());
    }
}

/// A diagnostic captured by a collecting sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub description: String,
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, path: &Path, description: &str) {
        self.push(Diagnostic {
            path: path.to_path_buf(),
            description: description.to_owned(),
        });
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, path: &Path, description: &str) {
        (**self).report(path, description);
    }
}
