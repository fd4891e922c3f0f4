use crate::cursor::{ByteReader, ByteWriter};
use crate::errors::StageResult;
use crate::text::{Reserved, StageText};
use crate::values::{InheritFlag, StageFloat};

pub trait StageDecode {
    fn decode(reader: &mut ByteReader) -> StageResult<Self>
    where
        Self: Sized;
}

pub trait StageEncode {
    fn encode(&self, writer: &mut ByteWriter) -> StageResult<()>;
}

macro_rules! primitive_codec {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            impl StageDecode for $ty {
                fn decode(reader: &mut ByteReader) -> StageResult<Self> {
                    reader.$read()
                }
            }

            impl StageEncode for $ty {
                fn encode(&self, writer: &mut ByteWriter) -> StageResult<()> {
                    writer.$write(*self);
                    Ok(())
                }
            }
        )*
    };
}

primitive_codec! {
    u8 => read_u8, write_u8;
    i8 => read_i8, write_i8;
    u16 => read_u16, write_u16;
    i16 => read_i16, write_i16;
    u32 => read_u32, write_u32;
    i32 => read_i32, write_i32;
    f32 => read_f32, write_f32;
    f64 => read_f64, write_f64;
    InheritFlag => read_flag, write_flag;
}

impl StageDecode for StageFloat {
    fn decode(reader: &mut ByteReader) -> StageResult<Self> {
        Ok(StageFloat::from(reader.read_f64()?))
    }
}

impl StageEncode for StageFloat {
    fn encode(&self, writer: &mut ByteWriter) -> StageResult<()> {
        writer.write_f64(self.value());
        Ok(())
    }
}

impl StageDecode for StageText {
    fn decode(reader: &mut ByteReader) -> StageResult<Self> {
        reader.read_string()
    }
}

impl StageEncode for StageText {
    fn encode(&self, writer: &mut ByteWriter) -> StageResult<()> {
        writer.write_string(self)
    }
}

impl<const N: usize> StageDecode for Reserved<N> {
    fn decode(reader: &mut ByteReader) -> StageResult<Self> {
        Ok(Reserved::from_wire(reader.read_bytes(N)?))
    }
}

impl<const N: usize> StageEncode for Reserved<N> {
    fn encode(&self, writer: &mut ByteWriter) -> StageResult<()> {
        writer.write_bytes(self.as_bytes());
        Ok(())
    }
}

/// Runs of u32 words whose meaning is unknown.
impl<const N: usize> StageDecode for [u32; N] {
    fn decode(reader: &mut ByteReader) -> StageResult<Self> {
        let mut words = [0u32; N];
        for word in words.iter_mut() {
            *word = reader.read_u32()?;
        }
        Ok(words)
    }
}

impl<const N: usize> StageEncode for [u32; N] {
    fn encode(&self, writer: &mut ByteWriter) -> StageResult<()> {
        for word in self {
            writer.write_u32(*word);
        }
        Ok(())
    }
}
