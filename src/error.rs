// Error taxonomy for a single probe run. Every variant is terminal: the
// binary prints it and exits non-zero. Non-200 HTTP answers are not
// errors, see `ui::Outcome::Rejected`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("wrong number of arguments")]
    Usage,

    #[error("Error: Image file '{}' not found", .0.display())]
    ImageNotFound(PathBuf),

    #[error("Failed to read image file '{}': {source}", path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bearer token contains characters not allowed in an HTTP header")]
    InvalidToken,

    #[error("❌ Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("❌ Request failed: invalid response body: {0}")]
    InvalidResponse(String),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ProbeError {
    /// Process exit status for this error. All failures share status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_path() {
        let err = ProbeError::ImageNotFound(PathBuf::from("missing/diagram.png"));
        assert_eq!(
            err.to_string(),
            "Error: Image file 'missing/diagram.png' not found"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn usage_exits_with_one() {
        assert_eq!(ProbeError::Usage.exit_code(), 1);
    }
}
