use serde::{Deserialize, Serialize};

use crate::cursor::{ByteReader, ByteWriter};
use crate::errors::{StageError, StageResult};
use crate::records::BasicCondition;
use crate::text::StageText;
use crate::traits::{StageDecode, StageEncode};
use crate::values::InheritFlag;

/// Block template from the stage palette
///
/// `name_count` is kept verbatim. Only one name string follows it on the
/// wire, whatever the count says, and a count of zero is rejected in both
/// directions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    pub header: u32,
    pub inherit_palette: u8,
    pub inherit_palette_data: u16,
    pub any_of_appearance_conditions_true: u8,
    pub appearance_condition_once_met_always_true: u8,
    pub image_number: u16,
    pub image_type: u16,
    pub unknown1: u8,
    pub in_front_of_character: u8,
    pub transparency: u8,
    pub mark_display: u8,
    pub mark_number: u8,
    pub unknown2: u8,
    pub block_type: u8,
    pub invalid_faction: u8,
    pub action: u8,
    pub action_parameter: u32,
    pub acquired_item_palette: u8,
    pub acquired_item_palette_data_number: u16,
    pub block_summon_invalid: u8,
    pub name_count: u32,
    pub name: StageText,
    pub position_x: i16,
    pub position_y: i16,
    pub inherited_data_count: u32,
    pub inherit_block_name: InheritFlag,
    pub inherit_appearance_condition: InheritFlag,
    pub inherit_image: InheritFlag,
    pub inherit_in_front_of_character: InheritFlag,
    pub inherit_transparency: InheritFlag,
    pub inherit_mark: InheritFlag,
    pub inherit_block_type: InheritFlag,
    pub inherit_invalid_faction: InheritFlag,
    pub inherit_action: InheritFlag,
    pub inherit_acquired_item: InheritFlag,
    pub inherit_block_summon: InheritFlag,
    pub display_conditions: Vec<BasicCondition>,
}

impl StageDecode for Block {
    fn decode(reader: &mut ByteReader) -> StageResult<Self> {
        let header = reader.read()?;
        let inherit_palette = reader.read()?;
        let inherit_palette_data = reader.read()?;
        let any_of_appearance_conditions_true = reader.read()?;
        let appearance_condition_once_met_always_true = reader.read()?;
        let image_number = reader.read()?;
        let image_type = reader.read()?;
        let unknown1 = reader.read()?;
        let in_front_of_character = reader.read()?;
        let transparency = reader.read()?;
        let mark_display = reader.read()?;
        let mark_number = reader.read()?;
        let unknown2 = reader.read()?;
        let block_type = reader.read()?;
        let invalid_faction = reader.read()?;
        let action = reader.read()?;
        let action_parameter = reader.read()?;
        let acquired_item_palette = reader.read()?;
        let acquired_item_palette_data_number = reader.read()?;
        let block_summon_invalid = reader.read()?;

        let count_offset = reader.position();
        let name_count: u32 = reader.read()?;
        if name_count == 0 {
            return Err(StageError::MissingRequiredField {
                field: "block name",
                offset: count_offset,
            });
        }
        let name = reader.read()?;

        Ok(Block {
            header,
            inherit_palette,
            inherit_palette_data,
            any_of_appearance_conditions_true,
            appearance_condition_once_met_always_true,
            image_number,
            image_type,
            unknown1,
            in_front_of_character,
            transparency,
            mark_display,
            mark_number,
            unknown2,
            block_type,
            invalid_faction,
            action,
            action_parameter,
            acquired_item_palette,
            acquired_item_palette_data_number,
            block_summon_invalid,
            name_count,
            name,
            position_x: reader.read()?,
            position_y: reader.read()?,
            inherited_data_count: reader.read()?,
            inherit_block_name: reader.read()?,
            inherit_appearance_condition: reader.read()?,
            inherit_image: reader.read()?,
            inherit_in_front_of_character: reader.read()?,
            inherit_transparency: reader.read()?,
            inherit_mark: reader.read()?,
            inherit_block_type: reader.read()?,
            inherit_invalid_faction: reader.read()?,
            inherit_action: reader.read()?,
            inherit_acquired_item: reader.read()?,
            inherit_block_summon: reader.read()?,
            display_conditions: reader.read()?,
        })
    }
}

impl StageEncode for Block {
    fn encode(&self, writer: &mut ByteWriter) -> StageResult<()> {
        writer.write(&self.header)?;
        writer.write(&self.inherit_palette)?;
        writer.write(&self.inherit_palette_data)?;
        writer.write(&self.any_of_appearance_conditions_true)?;
        writer.write(&self.appearance_condition_once_met_always_true)?;
        writer.write(&self.image_number)?;
        writer.write(&self.image_type)?;
        writer.write(&self.unknown1)?;
        writer.write(&self.in_front_of_character)?;
        writer.write(&self.transparency)?;
        writer.write(&self.mark_display)?;
        writer.write(&self.mark_number)?;
        writer.write(&self.unknown2)?;
        writer.write(&self.block_type)?;
        writer.write(&self.invalid_faction)?;
        writer.write(&self.action)?;
        writer.write(&self.action_parameter)?;
        writer.write(&self.acquired_item_palette)?;
        writer.write(&self.acquired_item_palette_data_number)?;
        writer.write(&self.block_summon_invalid)?;

        if self.name_count == 0 {
            return Err(StageError::MissingRequiredField {
                field: "block name",
                offset: writer.position(),
            });
        }
        writer.write(&self.name_count)?;
        writer.write(&self.name)?;

        writer.write(&self.position_x)?;
        writer.write(&self.position_y)?;
        writer.write(&self.inherited_data_count)?;
        writer.write(&self.inherit_block_name)?;
        writer.write(&self.inherit_appearance_condition)?;
        writer.write(&self.inherit_image)?;
        writer.write(&self.inherit_in_front_of_character)?;
        writer.write(&self.inherit_transparency)?;
        writer.write(&self.inherit_mark)?;
        writer.write(&self.inherit_block_type)?;
        writer.write(&self.inherit_invalid_faction)?;
        writer.write(&self.inherit_action)?;
        writer.write(&self.inherit_acquired_item)?;
        writer.write(&self.inherit_block_summon)?;
        writer.write(&self.display_conditions)
    }
}
