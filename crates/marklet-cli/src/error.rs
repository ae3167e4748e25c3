use std::fmt;
use std::io;
use std::path::Path;

/// Error kinds for categorizing CLI failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Bad command line
    Usage,
    /// Input document could not be read
    Read,
    /// Output could not be written or encoded
    Write,
    /// Stylesheet could not be loaded
    Template,
    /// Some documents failed; the rest were converted
    Partial,
}

/// A categorized CLI error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Human-readable error message
    pub message: String,
    /// Error categorization
    pub kind: CliErrorKind,
}

impl CliError {
    /// Create a new error.
    pub fn new(kind: CliErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Create an error for a malformed command line.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(CliErrorKind::Usage, message)
    }

    /// Create an error for an unreadable input document.
    pub fn read(path: &Path, err: io::Error) -> Self {
        Self::new(
            CliErrorKind::Read,
            format!("failed to read '{}': {}", path.display(), err),
        )
    }

    /// Create an error for an unwritable output file.
    pub fn write(path: &Path, err: impl fmt::Display) -> Self {
        Self::new(
            CliErrorKind::Write,
            format!("failed to write '{}': {}", path.display(), err),
        )
    }

    /// Create an error for an unreadable stylesheet.
    pub fn template(path: &Path, err: io::Error) -> Self {
        Self::new(
            CliErrorKind::Template,
            format!("failed to load stylesheet '{}': {}", path.display(), err),
        )
    }

    /// Create the summary error for a run where some documents failed.
    pub fn partial(failed: usize, total: usize) -> Self {
        Self::new(
            CliErrorKind::Partial,
            format!("{} of {} document(s) failed", failed, total),
        )
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            CliErrorKind::Usage => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_file() {
        let err = CliError::read(
            Path::new("missing.md"),
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.kind, CliErrorKind::Read);
        assert_eq!(err.to_string(), "failed to read 'missing.md': not found");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn usage_errors_exit_with_two() {
        assert_eq!(CliError::usage("bad").exit_code(), 2);
    }
}
