use crate::errors::{StageError, StageResult};

/// Largest element count accepted for any count-prefixed sequence.
pub const MAX_SEQUENCE_LEN: usize = 14096;

/// Resource limits and strictness settings for the stage codec
///
/// The sequence ceiling is the only guard against corrupt or adversarial
/// length fields, and it is checked before the destination is allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum element count of any sequence (decode and encode)
    pub max_sequence_len: usize,

    /// Treat a wrong end marker or trailing bytes as fatal instead of a warning
    pub strict_end_marker: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_sequence_len: MAX_SEQUENCE_LEN,
            strict_end_marker: false,
        }
    }
}

impl CodecConfig {
    /// Configuration that rejects files with a damaged end marker
    pub fn strict() -> Self {
        Self {
            strict_end_marker: true,
            ..Self::default()
        }
    }

    /// Check a decoded count field against the ceiling
    pub fn check_sequence_len(&self, count: u32, offset: usize) -> StageResult<()> {
        if count as usize > self.max_sequence_len {
            return Err(StageError::ArrayTooLarge {
                count,
                limit: self.max_sequence_len,
                offset,
            });
        }
        Ok(())
    }

    /// Check a sequence about to be written against the ceiling
    pub fn check_output_len(&self, count: usize, offset: usize) -> StageResult<()> {
        if count > self.max_sequence_len || u32::try_from(count).is_err() {
            return Err(StageError::SequenceTooLarge {
                count,
                limit: self.max_sequence_len,
                offset,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ceiling() {
        let config = CodecConfig::default();
        assert_eq!(config.max_sequence_len, 14096);
        assert!(!config.strict_end_marker);
        assert!(config.check_sequence_len(14096, 0).is_ok());
        assert!(matches!(
            config.check_sequence_len(14097, 8),
            Err(StageError::ArrayTooLarge {
                count: 14097,
                offset: 8,
                ..
            })
        ));
    }

    #[test]
    fn test_strict_preset() {
        let config = CodecConfig::strict();
        assert!(config.strict_end_marker);
        assert_eq!(config.max_sequence_len, MAX_SEQUENCE_LEN);
        assert!(matches!(
            config.check_output_len(MAX_SEQUENCE_LEN + 1, 4),
            Err(StageError::SequenceTooLarge { offset: 4, .. })
        ));
    }
}
