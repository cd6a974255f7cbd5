//! Generator errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the generation of one template file.
///
/// Output written before the error is incomplete and must be discarded.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The output sink failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A void element (`<br>`, `<input>`, ...) was given children.
    #[error("void element <{tag}> must not have child elements")]
    VoidElementChildren { tag: String },
}

/// Errors raised while loading `tempera.config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON for [`crate::GeneratorOptions`].
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GenerateError::VoidElementChildren { tag: "br".into() };
        assert_eq!(err.to_string(), "void element <br> must not have child elements");

        let err = GenerateError::from(io::Error::new(io::ErrorKind::WriteZero, "full"));
        assert_eq!(err.to_string(), "IO error: full");
    }
}
