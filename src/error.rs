use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for svgcon operations
#[derive(Error, Debug)]
pub enum SvgconError {
    /// IO error when reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The index file to patch does not exist
    #[error("Index file not found: {path}")]
    IndexNotFound { path: PathBuf },

    /// Clipboard content is missing or is not SVG markup
    #[error("no valid SVG content found (expected markup starting with '<svg')")]
    InvalidSvgPayload,

    /// Regex compilation error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, SvgconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SvgconError::IndexNotFound {
            path: PathBuf::from("/project/src/constants/icons.ts"),
        };
        assert_eq!(
            format!("{err}"),
            "Index file not found: /project/src/constants/icons.ts"
        );

        let err = SvgconError::InvalidSvgPayload;
        assert!(format!("{err}").contains("<svg"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "test");
        let err: SvgconError = io_err.into();
        assert!(matches!(err, SvgconError::Io(_)));
    }
}
