use std::fmt;

/// Result type for payload decoding
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Failure conditions of the query-to-passport pipeline.
///
/// The two kinds must never collapse into one generic message: the card
/// has to tell a missing QR payload apart from an unreadable one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The `data` parameter was absent (or present with an empty value)
    MissingData,
    /// The parameter was present but could not be decoded or parsed
    CorruptData(String),
}

impl DecodeError {
    /// Copy shown on the error card, one distinct message per kind.
    pub fn user_message(&self) -> &'static str {
        match self {
            DecodeError::MissingData => {
                "No batch data found. Please scan a valid Scanchain QR code."
            }
            DecodeError::CorruptData(_) => "Invalid or corrupted QR code data. Please scan again.",
        }
    }

    /// Stable machine-readable tag for JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::MissingData => "missing_data",
            DecodeError::CorruptData(_) => "corrupt_data",
        }
    }

    /// Parser or decoder detail, available for corrupt payloads only.
    pub fn detail(&self) -> Option<&str> {
        match self {
            DecodeError::MissingData => None,
            DecodeError::CorruptData(detail) => Some(detail),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MissingData => write!(f, "missing data parameter"),
            DecodeError::CorruptData(detail) => write!(f, "corrupt data parameter: {}", detail),
        }
    }
}

impl std::error::Error for DecodeError {}
