//! Scalar wrappers that keep every on-disk bit pattern through a JSON round trip.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 64-bit float field of a stage record
///
/// Equality is bitwise, so NaN payloads and signed zeros compare the way
/// they are stored. Finite values serialize as JSON numbers; NaN and the
/// infinities have no JSON number form and serialize as `{"bits": <u64>}`.
#[derive(Clone, Copy, Default)]
pub struct StageFloat(f64);

impl StageFloat {
    pub fn from_bits(bits: u64) -> Self {
        StageFloat(f64::from_bits(bits))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_bits(self) -> u64 {
        self.0.to_bits()
    }
}

impl PartialEq for StageFloat {
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Eq for StageFloat {}

impl From<f64> for StageFloat {
    fn from(value: f64) -> Self {
        StageFloat(value)
    }
}

impl From<StageFloat> for f64 {
    fn from(value: StageFloat) -> Self {
        value.0
    }
}

impl fmt::Debug for StageFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for StageFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FloatRepr {
    Number(f64),
    Bits { bits: u64 },
}

impl Serialize for StageFloat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = if self.0.is_finite() {
            FloatRepr::Number(self.0)
        } else {
            FloatRepr::Bits { bits: self.to_bits() }
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StageFloat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match FloatRepr::deserialize(deserializer)? {
            FloatRepr::Number(value) => StageFloat(value),
            FloatRepr::Bits { bits } => StageFloat::from_bits(bits),
        })
    }
}

/// Inherit flag byte
///
/// Any nonzero byte means the palette value applies. The stored byte is kept
/// as is, so files carrying values other than 0 and 1 re-encode unchanged.
/// Serializes as a JSON bool for 0 and 1, and as the raw number otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InheritFlag(u8);

impl InheritFlag {
    pub const fn from_byte(byte: u8) -> Self {
        InheritFlag(byte)
    }

    pub fn byte(self) -> u8 {
        self.0
    }

    pub fn is_set(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for InheritFlag {
    fn from(value: bool) -> Self {
        InheritFlag(value as u8)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Byte(u8),
}

impl Serialize for InheritFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match self.0 {
            0 => FlagRepr::Bool(false),
            1 => FlagRepr::Bool(true),
            byte => FlagRepr::Byte(byte),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for InheritFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match FlagRepr::deserialize(deserializer) {
            Ok(FlagRepr::Bool(value)) => Ok(InheritFlag::from(value)),
            Ok(FlagRepr::Byte(byte)) => Ok(InheritFlag(byte)),
            Err(_) => Err(D::Error::custom(
                "inherit flag must be a bool or a byte value",
            )),
        }
    }
}
