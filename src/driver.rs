//! Entry points for turning whole buffers into stage trees and back.
//!
//! Decoding is all-or-nothing: input is accumulated into one buffer and
//! decoded once. There is no partial or resumable decode.

use std::path::Path;

use bytes::{Bytes, BytesMut};
use log::debug;

use crate::cursor::{ByteReader, ByteWriter};
use crate::errors::{DecodeWarning, StageError, StageResult};
use crate::parser_config::CodecConfig;
use crate::stage::StageFile;
use crate::traits::StageEncode;

/// A successfully decoded stage and the non-fatal conditions seen on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub stage: StageFile,
    pub warnings: Vec<DecodeWarning>,
}

/// Decode a complete stage file with default limits
pub fn decode(data: &[u8]) -> StageResult<Decoded> {
    decode_with_config(data, &CodecConfig::default())
}

pub fn decode_with_config(data: &[u8], config: &CodecConfig) -> StageResult<Decoded> {
    decode_bytes(Bytes::copy_from_slice(data), config)
}

/// Decode a complete stage file without copying the buffer
pub fn decode_bytes(data: Bytes, config: &CodecConfig) -> StageResult<Decoded> {
    debug!("decoding {} bytes", data.len());
    let mut reader = ByteReader::with_config(data, config.clone());
    let (stage, warnings) = StageFile::decode_from(&mut reader)?;
    Ok(Decoded { stage, warnings })
}

/// Encode a stage tree with default limits
pub fn encode(stage: &StageFile) -> StageResult<Vec<u8>> {
    encode_with_config(stage, &CodecConfig::default())
}

pub fn encode_with_config(stage: &StageFile, config: &CodecConfig) -> StageResult<Vec<u8>> {
    let mut writer = ByteWriter::with_config(config.clone());
    stage.encode(&mut writer)?;
    debug!("encoded stage into {} bytes", writer.position());
    Ok(writer.into_vec())
}

/// Collects chunks of a stage file as they arrive, then decodes once
#[derive(Debug, Default)]
pub struct StageAccumulator {
    buffer: BytesMut,
    config: CodecConfig,
}

impl StageAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            buffer: BytesMut::new(),
            config,
        }
    }

    pub fn push(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
    }

    /// Bytes collected so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn finish(self) -> StageResult<Decoded> {
        decode_bytes(self.buffer.freeze(), &self.config)
    }
}

impl StageFile {
    /// Read and decode a stage file from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> StageResult<Decoded> {
        Self::from_path_with_config(path, &CodecConfig::default())
    }

    pub fn from_path_with_config<P: AsRef<Path>>(
        path: P,
        config: &CodecConfig,
    ) -> StageResult<Decoded> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StageError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => StageError::FileReadError {
                path: path.display().to_string(),
                reason: e.to_string(),
            },
        })?;
        decode_bytes(Bytes::from(data), config)
    }

    /// Encode and write the stage to disk
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> StageResult<()> {
        self.write_to_path_with_config(path, &CodecConfig::default())
    }

    pub fn write_to_path_with_config<P: AsRef<Path>>(
        &self,
        path: P,
        config: &CodecConfig,
    ) -> StageResult<()> {
        let path = path.as_ref();
        let data = encode_with_config(self, config)?;
        std::fs::write(path, data).map_err(|e| StageError::FileWriteError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn to_json_pretty(&self) -> StageResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StageError::JsonError {
            reason: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> StageResult<StageFile> {
        serde_json::from_str(json).map_err(|e| StageError::JsonError {
            reason: e.to_string(),
        })
    }
}
