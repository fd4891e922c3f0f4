//! Lossless codec for STG4 stage files (format 1020).
//!
//! [`decode`] walks a complete buffer into a [`StageFile`] tree and
//! [`encode`] writes the tree back out byte for byte. The tree serializes
//! with serde, so it can be edited as JSON in between.

#[macro_use]
mod macros;

pub mod cursor;
pub mod driver;
pub mod errors;
pub mod events;
pub mod parser_config;
pub mod records;
pub mod sequence;
pub mod stage;
pub mod text;
pub mod traits;
pub mod utils;
pub mod values;

pub use cursor::{ByteReader, ByteWriter};
pub use driver::{decode, decode_bytes, decode_with_config, encode, encode_with_config, Decoded, StageAccumulator};
pub use errors::*;
pub use parser_config::*;
pub use stage::*;
pub use text::{Reserved, StageText};
pub use traits::*;
pub use values::{InheritFlag, StageFloat};
