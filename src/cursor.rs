//! Positioned little-endian reader and writer over STG4 byte buffers.
//!
//! There is no alignment padding anywhere in the format. Reading past the end
//! of the buffer is always an error, never a zero fill.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::errors::{StageError, StageResult};
use crate::parser_config::CodecConfig;
use crate::text::StageText;
use crate::traits::{StageDecode, StageEncode};
use crate::values::InheritFlag;

/// Read cursor with a monotonically increasing position
pub struct ByteReader {
    data: Bytes,
    len: usize,
    config: CodecConfig,
}

impl ByteReader {
    pub fn new(data: Bytes) -> Self {
        Self::with_config(data, CodecConfig::default())
    }

    pub fn with_config(data: Bytes, config: CodecConfig) -> Self {
        let len = data.len();
        Self { data, len, config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Current byte position from the start of the buffer.
    pub fn position(&self) -> usize {
        self.len - self.data.remaining()
    }

    /// Bytes left after the current position.
    pub fn remaining(&self) -> usize {
        self.data.remaining()
    }

    fn ensure(&self, needed: usize) -> StageResult<()> {
        if self.data.remaining() < needed {
            return Err(StageError::UnexpectedEof {
                offset: self.position(),
                needed,
                available: self.data.remaining(),
            });
        }
        Ok(())
    }

    /// Decode any record or primitive at the current position.
    pub fn read<T: StageDecode>(&mut self) -> StageResult<T> {
        T::decode(self)
    }

    pub fn read_u8(&mut self) -> StageResult<u8> {
        self.ensure(1)?;
        Ok(self.data.get_u8())
    }

    pub fn read_i8(&mut self) -> StageResult<i8> {
        self.ensure(1)?;
        Ok(self.data.get_i8())
    }

    pub fn read_u16(&mut self) -> StageResult<u16> {
        self.ensure(2)?;
        Ok(self.data.get_u16_le())
    }

    pub fn read_i16(&mut self) -> StageResult<i16> {
        self.ensure(2)?;
        Ok(self.data.get_i16_le())
    }

    pub fn read_u32(&mut self) -> StageResult<u32> {
        self.ensure(4)?;
        Ok(self.data.get_u32_le())
    }

    pub fn read_i32(&mut self) -> StageResult<i32> {
        self.ensure(4)?;
        Ok(self.data.get_i32_le())
    }

    pub fn read_f32(&mut self) -> StageResult<f32> {
        self.ensure(4)?;
        Ok(self.data.get_f32_le())
    }

    pub fn read_f64(&mut self) -> StageResult<f64> {
        self.ensure(8)?;
        Ok(self.data.get_f64_le())
    }

    /// Read an inherit flag byte. Every byte value is accepted and kept.
    pub fn read_flag(&mut self) -> StageResult<InheritFlag> {
        Ok(InheritFlag::from_byte(self.read_u8()?))
    }

    /// Read `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> StageResult<Vec<u8>> {
        self.ensure(len)?;
        Ok(self.data.copy_to_bytes(len).to_vec())
    }

    /// Read a u32 length-prefixed string.
    ///
    /// A prefix of 0 or 1 is an empty string with no payload.
    pub fn read_string(&mut self) -> StageResult<StageText> {
        let length = self.read_u32()?;
        match length {
            0 => Ok(StageText::default()),
            1 => Ok(StageText::Blank { length_prefix: 1 }),
            _ => {
                let bytes = self.read_bytes(length as usize)?;
                Ok(StageText::from_wire(bytes))
            },
        }
    }

    /// Read a UTF-8 string of a caller-supplied length with no prefix.
    pub fn read_fixed_string(&mut self, len: usize) -> StageResult<String> {
        let offset = self.position();
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes).map_err(|e| StageError::InvalidText {
            offset,
            reason: e.to_string(),
        })
    }

    /// Read a u32 and check it against a fixed record header.
    pub fn expect_header(&mut self, record: &'static str, expected: u32) -> StageResult<()> {
        let offset = self.position();
        let found = self.read_u32()?;
        if found != expected {
            return Err(StageError::InvalidHeader {
                record,
                expected,
                found,
                offset,
            });
        }
        Ok(())
    }

    pub fn skip(&mut self, len: usize) -> StageResult<()> {
        self.ensure(len)?;
        self.data.advance(len);
        Ok(())
    }
}

/// Write cursor appending little-endian values to a growable buffer
pub struct ByteWriter {
    buffer: BytesMut,
    config: CodecConfig,
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            buffer: BytesMut::new(),
            config,
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.buffer.len()
    }

    /// Encode any record or primitive at the end of the buffer.
    pub fn write<T: StageEncode + ?Sized>(&mut self, value: &T) -> StageResult<()> {
        value.encode(self)
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buffer.put_u8(value);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.buffer.put_i8(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buffer.put_u16_le(value);
    }

    pub fn write_i16(&mut self, value: i16) {
        self.buffer.put_i16_le(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buffer.put_u32_le(value);
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buffer.put_i32_le(value);
    }

    pub fn write_f32(&mut self, value: f32) {
        self.buffer.put_f32_le(value);
    }

    pub fn write_f64(&mut self, value: f64) {
        self.buffer.put_f64_le(value);
    }

    pub fn write_flag(&mut self, value: InheritFlag) {
        self.buffer.put_u8(value.byte());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.put_slice(bytes);
    }

    /// Write a u32 length-prefixed string.
    pub fn write_string(&mut self, text: &StageText) -> StageResult<()> {
        let offset = self.position();
        match text {
            StageText::Blank { length_prefix } => {
                if *length_prefix > 1 {
                    return Err(StageError::UnrepresentableText {
                        offset,
                        length: *length_prefix as usize,
                    });
                }
                self.write_u32(*length_prefix);
            },
            _ => {
                let bytes = text.as_bytes();
                if bytes.len() == 1 {
                    return Err(StageError::UnrepresentableText { offset, length: 1 });
                }
                let length = u32::try_from(bytes.len()).map_err(|_| {
                    StageError::UnrepresentableText {
                        offset,
                        length: bytes.len(),
                    }
                })?;
                self.write_u32(length);
                self.write_bytes(bytes);
            },
        }
        Ok(())
    }

    /// Write a string with no length prefix.
    pub fn write_fixed_string(&mut self, value: &str) {
        self.write_bytes(value.as_bytes());
    }

    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buffer.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(bytes: Vec<u8>) -> ByteReader {
        ByteReader::new(Bytes::from(bytes))
    }

    #[test]
    fn test_little_endian_numbers() {
        let mut data = Vec::new();
        data.extend_from_slice(&0xFCu8.to_le_bytes());
        data.extend_from_slice(&(-2i16).to_le_bytes());
        data.extend_from_slice(&1020u32.to_le_bytes());
        data.extend_from_slice(&(-5i32).to_le_bytes());
        data.extend_from_slice(&1.5f32.to_le_bytes());
        data.extend_from_slice(&0.25f64.to_le_bytes());

        let mut r = reader(data);
        assert_eq!(r.read_u8().unwrap(), 0xFC);
        assert_eq!(r.read_i16().unwrap(), -2);
        assert_eq!(r.read_u32().unwrap(), 1020);
        assert_eq!(r.read_i32().unwrap(), -5);
        assert_eq!(r.read_f32().unwrap(), 1.5);
        assert_eq!(r.read_f64().unwrap(), 0.25);
        assert_eq!(r.position(), 23);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_read_past_end_is_error() {
        let mut r = reader(vec![1, 2, 3]);
        let err = r.read_u32().unwrap_err();
        assert_eq!(
            err,
            StageError::UnexpectedEof {
                offset: 0,
                needed: 4,
                available: 3
            }
        );
        // nothing consumed on failure
        assert_eq!(r.position(), 0);
        assert_eq!(r.read_u16().unwrap(), 0x0201);
        assert!(r.skip(2).is_err());
    }

    #[test]
    fn test_string_prefix_zero_and_one_are_empty() {
        let mut r = reader(vec![0, 0, 0, 0, 1, 0, 0, 0, 0xAA]);
        assert_eq!(r.read_string().unwrap().as_str(), Some(""));
        let blank = r.read_string().unwrap();
        assert!(blank.is_empty());
        assert_eq!(blank, StageText::Blank { length_prefix: 1 });
        // the byte after a prefix of 1 is not part of the string
        assert_eq!(r.position(), 8);
        assert_eq!(r.read_u8().unwrap(), 0xAA);
    }

    #[test]
    fn test_string_prefix_two_needs_two_bytes() {
        let mut r = reader(vec![2, 0, 0, 0, b'o', b'k']);
        assert_eq!(r.read_string().unwrap().as_str(), Some("ok"));

        let mut r = reader(vec![2, 0, 0, 0, b'o']);
        assert!(matches!(
            r.read_string(),
            Err(StageError::UnexpectedEof {
                offset: 4,
                needed: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_string_round_trip_keeps_prefix_quirk() {
        let mut r = reader(vec![1, 0, 0, 0, 0, 0, 0, 0]);
        let first = r.read_string().unwrap();
        let second = r.read_string().unwrap();

        let mut w = ByteWriter::new();
        w.write_string(&first).unwrap();
        w.write_string(&second).unwrap();
        assert_eq!(w.into_vec(), vec![1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_single_byte_string_is_unrepresentable() {
        let mut w = ByteWriter::new();
        w.write_u8(9);
        let err = w.write_string(&StageText::from("x")).unwrap_err();
        assert_eq!(err, StageError::UnrepresentableText { offset: 1, length: 1 });
    }

    #[test]
    fn test_fixed_string_and_skip() {
        let mut r = reader(b"STG4\x00\x00abc".to_vec());
        assert_eq!(r.read_fixed_string(4).unwrap(), "STG4");
        r.skip(2).unwrap();
        assert_eq!(r.read_fixed_string(3).unwrap(), "abc");

        let mut r = reader(vec![0xFF, 0xFE]);
        assert!(matches!(
            r.read_fixed_string(2),
            Err(StageError::InvalidText { offset: 0, .. })
        ));

        let mut w = ByteWriter::new();
        w.write_fixed_string("STG4");
        assert_eq!(w.into_vec(), b"STG4".to_vec());
    }

    #[test]
    fn test_flag_bytes() {
        let mut r = reader(vec![0, 1, 2]);
        assert!(!r.read_flag().unwrap().is_set());
        assert!(r.read_flag().unwrap().is_set());
        let odd = r.read_flag().unwrap();
        assert_eq!(odd.byte(), 2);
        assert!(odd.is_set());

        let mut w = ByteWriter::new();
        w.write_flag(odd);
        assert_eq!(w.into_vec(), vec![2]);
    }

    #[test]
    fn test_expect_header() {
        let mut r = reader(vec![10, 0, 0, 0, 9, 0, 0, 0]);
        r.expect_header("Flow", 10).unwrap();
        assert_eq!(
            r.expect_header("Flow", 10).unwrap_err(),
            StageError::InvalidHeader {
                record: "Flow",
                expected: 10,
                found: 9,
                offset: 4
            }
        );
    }

    #[test]
    fn test_writer_layout() {
        let mut w = ByteWriter::new();
        w.write_u32(1020);
        w.write_i16(-1);
        w.write_flag(InheritFlag::from(true));
        w.write_f64(2.0);
        assert_eq!(w.position(), 15);
        let bytes = w.into_vec();
        assert_eq!(&bytes[..4], &[0xFC, 0x03, 0x00, 0x00]);
        assert_eq!(&bytes[4..7], &[0xFF, 0xFF, 0x01]);
        assert_eq!(&bytes[7..], &2.0f64.to_le_bytes());
    }
}
