use serde::{Deserialize, Serialize};

use crate::cursor::{ByteReader, ByteWriter};
use crate::errors::StageResult;
use crate::events::Command;
use crate::records::{BasicCondition, KeyCondition};
use crate::text::StageText;
use crate::traits::{StageDecode, StageEncode};

/// Fixed header preceding every flow.
pub const FLOW_HEADER: u32 = 10;

/// Event script: trigger metadata, conditions, key inputs and the command list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Flow {
    pub id: u8,
    pub group: u8,
    pub test_play_only: u8,
    pub basic_condition_judgment_type: u8,
    pub basic_condition_once_met_always_met: u8,
    pub timing: u8,
    pub target_character_involved_in_timing: u8,
    pub target_number_of_character_involved_in_timing: u8,
    pub ease_of_input_with_multiple_key_conditions: u8,
    pub allow_continuous_execution_by_holding_key: u8,
    /// Kept verbatim; the memo carries its own length prefix.
    pub memo_count: u32,
    pub memo: StageText,
    pub conditions: Vec<BasicCondition>,
    pub key_conditions: Vec<KeyCondition>,
    pub commands: Vec<Command>,
}

impl StageDecode for Flow {
    fn decode(reader: &mut ByteReader) -> StageResult<Self> {
        reader.expect_header("flow", FLOW_HEADER)?;
        Ok(Flow {
            id: reader.read()?,
            group: reader.read()?,
            test_play_only: reader.read()?,
            basic_condition_judgment_type: reader.read()?,
            basic_condition_once_met_always_met: reader.read()?,
            timing: reader.read()?,
            target_character_involved_in_timing: reader.read()?,
            target_number_of_character_involved_in_timing: reader.read()?,
            ease_of_input_with_multiple_key_conditions: reader.read()?,
            allow_continuous_execution_by_holding_key: reader.read()?,
            memo_count: reader.read()?,
            memo: reader.read()?,
            conditions: reader.read()?,
            key_conditions: reader.read()?,
            commands: reader.read()?,
        })
    }
}

impl StageEncode for Flow {
    fn encode(&self, writer: &mut ByteWriter) -> StageResult<()> {
        writer.write_u32(FLOW_HEADER);
        writer.write(&self.id)?;
        writer.write(&self.group)?;
        writer.write(&self.test_play_only)?;
        writer.write(&self.basic_condition_judgment_type)?;
        writer.write(&self.basic_condition_once_met_always_met)?;
        writer.write(&self.timing)?;
        writer.write(&self.target_character_involved_in_timing)?;
        writer.write(&self.target_number_of_character_involved_in_timing)?;
        writer.write(&self.ease_of_input_with_multiple_key_conditions)?;
        writer.write(&self.allow_continuous_execution_by_holding_key)?;
        writer.write(&self.memo_count)?;
        writer.write(&self.memo)?;
        writer.write(&self.conditions)?;
        writer.write(&self.key_conditions)?;
        writer.write(&self.commands)
    }
}
