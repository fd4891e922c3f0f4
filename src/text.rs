//! Value types for strings and opaque byte regions.

use std::borrow::Cow;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Length-prefixed string as stored in a stage file
///
/// Serializes as a plain JSON string in the common case. The two shapes a
/// JSON string cannot carry losslessly get an object form: an empty string
/// written with a length prefix of 1, and payload bytes that are not UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StageText {
    Text(String),
    Blank { length_prefix: u32 },
    Raw { raw: Vec<u8> },
}

impl Default for StageText {
    fn default() -> Self {
        StageText::Text(String::new())
    }
}

impl StageText {
    pub(crate) fn from_wire(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => StageText::Text(text),
            Err(e) => StageText::Raw {
                raw: e.into_bytes(),
            },
        }
    }

    /// The string, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StageText::Text(text) => Some(text.as_str()),
            StageText::Blank { .. } => Some(""),
            StageText::Raw { raw } => std::str::from_utf8(raw).ok(),
        }
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self {
            StageText::Text(text) => Cow::Borrowed(text.as_str()),
            StageText::Blank { .. } => Cow::Borrowed(""),
            StageText::Raw { raw } => String::from_utf8_lossy(raw),
        }
    }

    /// Payload bytes as they appear after the length prefix.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            StageText::Text(text) => text.as_bytes(),
            StageText::Blank { .. } => &[],
            StageText::Raw { raw } => raw.as_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl From<&str> for StageText {
    fn from(value: &str) -> Self {
        StageText::Text(value.to_string())
    }
}

impl From<String> for StageText {
    fn from(value: String) -> Self {
        StageText::Text(value)
    }
}

impl fmt::Display for StageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Fixed-length byte region whose meaning is unknown
///
/// The length is part of the type, so a decoded region always re-encodes to
/// the same number of bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reserved<const N: usize>(Vec<u8>);

impl<const N: usize> Reserved<N> {
    pub const LEN: usize = N;

    pub(crate) fn from_wire(bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), N);
        Reserved(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Default for Reserved<N> {
    fn default() -> Self {
        Reserved(vec![0; N])
    }
}

impl<const N: usize> From<[u8; N]> for Reserved<N> {
    fn from(bytes: [u8; N]) -> Self {
        Reserved(bytes.to_vec())
    }
}

impl<const N: usize> TryFrom<Vec<u8>> for Reserved<N> {
    type Error = String;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.len() != N {
            return Err(format!(
                "reserved region must be {} bytes, got {}",
                N,
                bytes.len()
            ));
        }
        Ok(Reserved(bytes))
    }
}

impl<const N: usize> Serialize for Reserved<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, const N: usize> Deserialize<'de> for Reserved<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Reserved::try_from(bytes).map_err(D::Error::custom)
    }
}
