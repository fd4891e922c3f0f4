//! Count-prefixed sequences with a safety ceiling.
//!
//! Every array field in a stage file is a u32 element count followed by the
//! elements in order. The count is checked against the ceiling before any
//! element is decoded or any storage is reserved.

use crate::cursor::{ByteReader, ByteWriter};
use crate::errors::StageResult;
use crate::traits::{StageDecode, StageEncode};

/// Read a count-prefixed sequence with a per-element decoder.
pub fn read_sequence_with<T, F>(reader: &mut ByteReader, mut decode_element: F) -> StageResult<Vec<T>>
where
    F: FnMut(&mut ByteReader) -> StageResult<T>,
{
    let offset = reader.position();
    let count = reader.read_u32()?;
    reader.config().check_sequence_len(count, offset)?;

    let mut elements = Vec::with_capacity(count as usize);
    for _ in 0..count {
        elements.push(decode_element(reader)?);
    }
    Ok(elements)
}

pub fn read_sequence<T: StageDecode>(reader: &mut ByteReader) -> StageResult<Vec<T>> {
    read_sequence_with(reader, T::decode)
}

/// Write the element count, then each element in order.
pub fn write_sequence_with<T, F>(
    writer: &mut ByteWriter,
    elements: &[T],
    mut encode_element: F,
) -> StageResult<()>
where
    F: FnMut(&mut ByteWriter, &T) -> StageResult<()>,
{
    writer
        .config()
        .check_output_len(elements.len(), writer.position())?;
    writer.write_u32(elements.len() as u32);
    for element in elements {
        encode_element(writer, element)?;
    }
    Ok(())
}

pub fn write_sequence<T: StageEncode>(writer: &mut ByteWriter, elements: &[T]) -> StageResult<()> {
    write_sequence_with(writer, elements, |w, element| element.encode(w))
}

impl<T: StageDecode> StageDecode for Vec<T> {
    fn decode(reader: &mut ByteReader) -> StageResult<Self> {
        read_sequence(reader)
    }
}

impl<T: StageEncode> StageEncode for Vec<T> {
    fn encode(&self, writer: &mut ByteWriter) -> StageResult<()> {
        write_sequence(writer, self)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::errors::StageError;
    use crate::parser_config::CodecConfig;

    fn reader(bytes: Vec<u8>) -> ByteReader {
        ByteReader::new(Bytes::from(bytes))
    }

    #[test]
    fn test_sequence_preserves_order() {
        let mut data = 3u32.to_le_bytes().to_vec();
        data.extend_from_slice(&[7, 0, 9, 0, 1, 0]);
        let mut r = reader(data);
        let values: Vec<u16> = read_sequence(&mut r).unwrap();
        assert_eq!(values, vec![7, 9, 1]);

        let mut w = ByteWriter::new();
        write_sequence(&mut w, &values).unwrap();
        assert_eq!(w.into_vec(), vec![3, 0, 0, 0, 7, 0, 9, 0, 1, 0]);
    }

    #[test]
    fn test_ceiling_rejects_before_elements() {
        let mut data = vec![0xAB; 6];
        data.extend_from_slice(&14097u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 32]);
        let mut r = reader(data);
        r.skip(6).unwrap();

        let mut calls = 0;
        let err = read_sequence_with(&mut r, |r| {
            calls += 1;
            r.read_u8()
        })
        .unwrap_err();

        assert_eq!(
            err,
            StageError::ArrayTooLarge {
                count: 14097,
                limit: 14096,
                offset: 6
            }
        );
        assert_eq!(calls, 0);
        assert_eq!(r.position(), 6 + 4);
    }

    #[test]
    fn test_ceiling_accepts_limit() {
        let mut data = 14096u32.to_le_bytes().to_vec();
        data.extend_from_slice(&vec![1u8; 14096]);
        let mut r = reader(data);
        let values: Vec<u8> = read_sequence(&mut r).unwrap();
        assert_eq!(values.len(), 14096);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_truncated_sequence_is_eof() {
        let mut data = 2u32.to_le_bytes().to_vec();
        data.extend_from_slice(&[1, 0, 0, 0]);
        let mut r = reader(data);
        let result: StageResult<Vec<u32>> = read_sequence(&mut r);
        assert!(matches!(
            result,
            Err(StageError::UnexpectedEof { offset: 8, .. })
        ));
    }

    #[test]
    fn test_writer_refuses_oversized_sequence() {
        let config = CodecConfig {
            max_sequence_len: 2,
            ..CodecConfig::default()
        };
        let mut w = ByteWriter::with_config(config);
        w.write_u8(0);
        let err = write_sequence(&mut w, &[1u8, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            StageError::SequenceTooLarge {
                count: 3,
                limit: 2,
                offset: 1
            }
        );
        assert_eq!(w.position(), 1);
    }
}
