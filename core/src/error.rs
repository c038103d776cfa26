//! # Error Handling
//!
//! Provides the `AppError` enum shared by the transformer and the CLI.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// A missing target file is not represented here: it is a normal
/// [`Outcome`](crate::transformer::Outcome) of processing.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors from the progress sink.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Read or write failure on the target file, with its path.
    #[from(ignore)]
    #[display("General Error: {_0}")]
    General(String),
}

impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::PermissionDenied, "denied");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert_eq!(format!("{}", app_err), "IO Error: denied");
    }

    #[test]
    fn test_general_display() {
        let app_err = AppError::General("Failed to read file \"a.ts\"".into());
        assert_eq!(
            format!("{}", app_err),
            "General Error: Failed to read file \"a.ts\""
        );
    }
}
