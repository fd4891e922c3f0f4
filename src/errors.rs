use std::fmt;
use thiserror::Error;

/// Error type for STG4 decoding, encoding and file handling
///
/// Every structural decode failure carries the byte offset at which it was
/// detected. All decode variants are fatal for the current call: a failed
/// decode never yields a partial tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StageError {
    // ========== I/O ERRORS (1000-1099) ==========
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Error reading file contents
    #[error("Failed to read file {path}: {reason}")]
    FileReadError { path: String, reason: String },

    /// Error writing file contents
    #[error("Failed to write file {path}: {reason}")]
    FileWriteError { path: String, reason: String },

    /// JSON text could not be converted to or from a stage tree
    #[error("JSON conversion failed: {reason}")]
    JsonError { reason: String },

    // ========== FORMAT ERRORS (2000-2099) ==========
    /// Leading magic number is not 1020
    #[error("Invalid STG4 magic: expected {expected}, found {found} at offset {offset}")]
    BadMagic {
        expected: u32,
        found: u32,
        offset: usize,
    },

    /// Fixed record header does not hold its constant value
    #[error("Invalid {record} header: expected {expected}, found {found} at offset {offset}")]
    InvalidHeader {
        record: &'static str,
        expected: u32,
        found: u32,
        offset: usize,
    },

    /// End marker did not match (only raised in strict mode)
    #[error("Unexpected end marker: expected {expected}, found {found} at offset {offset}")]
    EndMarkerMismatch {
        expected: u32,
        found: u32,
        offset: usize,
    },

    /// Bytes left after the end marker (only raised in strict mode)
    #[error("{count} trailing bytes after end marker at offset {offset}")]
    TrailingBytes { offset: usize, count: usize },

    // ========== STRUCTURE ERRORS (3000-3099) ==========
    /// Read past the end of the buffer
    #[error("Unexpected end of data at offset {offset}: needed {needed} bytes, only {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A field the format requires is declared absent
    #[error("Missing required field {field} at offset {offset}")]
    MissingRequiredField { field: &'static str, offset: usize },

    /// Fixed-length string is not valid UTF-8
    #[error("Invalid text at offset {offset}: {reason}")]
    InvalidText { offset: usize, reason: String },

    // ========== VARIANT ERRORS (4000-4099) ==========
    /// Sub-type discriminant outside the closed variant set
    #[error("Unknown {family} type {discriminant} at offset {offset}")]
    UnknownVariant {
        family: &'static str,
        discriminant: u8,
        offset: usize,
    },

    // ========== RESOURCE ERRORS (5000-5099) ==========
    /// Sequence count exceeds the safety ceiling
    #[error("Array size {count} exceeds maximum of {limit} at offset {offset}")]
    ArrayTooLarge {
        count: u32,
        limit: usize,
        offset: usize,
    },

    // ========== ENCODE ERRORS (6000-6099) ==========
    /// Sequence has more elements than a decoder would accept
    #[error("Sequence of {count} elements exceeds maximum of {limit} at output offset {offset}")]
    SequenceTooLarge {
        count: usize,
        limit: usize,
        offset: usize,
    },

    /// String cannot be written without changing its meaning
    #[error("Text declaring {length} bytes at output offset {offset} cannot be encoded: prefixes 0 and 1 are reserved for empty text")]
    UnrepresentableText { offset: usize, length: usize },
}

impl StageError {
    /// Get the error code for machine-readable processing
    pub fn code(&self) -> u16 {
        match self {
            Self::FileNotFound { .. } => 1001,
            Self::FileReadError { .. } => 1002,
            Self::FileWriteError { .. } => 1003,
            Self::JsonError { .. } => 1004,

            Self::BadMagic { .. } => 2001,
            Self::InvalidHeader { .. } => 2002,
            Self::EndMarkerMismatch { .. } => 2003,
            Self::TrailingBytes { .. } => 2004,

            Self::UnexpectedEof { .. } => 3001,
            Self::MissingRequiredField { .. } => 3002,
            Self::InvalidText { .. } => 3004,

            Self::UnknownVariant { .. } => 4001,

            Self::ArrayTooLarge { .. } => 5001,

            Self::SequenceTooLarge { .. } => 6001,
            Self::UnrepresentableText { .. } => 6002,
        }
    }

    /// Get the error category for grouping related errors
    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            1000..=1099 => ErrorCategory::IO,
            2000..=2099 => ErrorCategory::Format,
            3000..=3099 => ErrorCategory::Structure,
            4000..=4099 => ErrorCategory::Variant,
            5000..=5099 => ErrorCategory::Resource,
            6000..=6099 => ErrorCategory::Encode,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Byte offset at which the failure was detected, when it has one
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::BadMagic { offset, .. }
            | Self::InvalidHeader { offset, .. }
            | Self::EndMarkerMismatch { offset, .. }
            | Self::TrailingBytes { offset, .. }
            | Self::UnexpectedEof { offset, .. }
            | Self::MissingRequiredField { offset, .. }
            | Self::InvalidText { offset, .. }
            | Self::UnknownVariant { offset, .. }
            | Self::ArrayTooLarge { offset, .. }
            | Self::SequenceTooLarge { offset, .. }
            | Self::UnrepresentableText { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Get suggested action for handling this error
    pub fn suggested_action(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "Check file path and ensure file exists",
            Self::BadMagic { .. } => "Verify this is a STG4 stage file (format 1020)",
            Self::UnexpectedEof { .. } => "File appears to be corrupted or truncated",
            Self::UnknownVariant { .. } => "File may use event types from a newer editor version",
            Self::ArrayTooLarge { .. } => "A length field is corrupt or the file is adversarial",
            Self::JsonError { .. } => "Check the JSON against a file produced by decoding",
            Self::UnrepresentableText { .. } => "Use a string of 0 or at least 2 bytes",
            _ => "Check file integrity",
        }
    }
}

/// Error categories for grouping related error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    IO,
    Format,
    Structure,
    Variant,
    Resource,
    Encode,
    Unknown,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IO => write!(f, "I/O"),
            Self::Format => write!(f, "Format"),
            Self::Structure => write!(f, "Structure"),
            Self::Variant => write!(f, "Variant"),
            Self::Resource => write!(f, "Resource"),
            Self::Encode => write!(f, "Encode"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Result type alias for stage operations
pub type StageResult<T> = Result<T, StageError>;

/// Non-fatal conditions reported next to a successfully decoded tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    /// Terminal sentinel differs from 123456789
    EndMarkerMismatch {
        expected: u32,
        found: u32,
        offset: usize,
    },
    /// Bytes remain after the terminal sentinel
    TrailingBytes { offset: usize, count: usize },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndMarkerMismatch {
                expected,
                found,
                offset,
            } => write!(
                f,
                "unexpected end marker: expected {}, got {} at offset {}",
                expected, found, offset
            ),
            Self::TrailingBytes { offset, count } => {
                write!(f, "{} trailing bytes after end marker at offset {}", count, offset)
            },
        }
    }
}

impl From<DecodeWarning> for StageError {
    fn from(warning: DecodeWarning) -> Self {
        match warning {
            DecodeWarning::EndMarkerMismatch {
                expected,
                found,
                offset,
            } => StageError::EndMarkerMismatch {
                expected,
                found,
                offset,
            },
            DecodeWarning::TrailingBytes { offset, count } => {
                StageError::TrailingBytes { offset, count }
            },
        }
    }
}
