//! Stage test data builders
//!
//! `StageBuilder` assembles `StageFile` trees with a fluent API; the free
//! functions produce raw buffers written out byte by byte, independent of
//! the encoder.

#![allow(dead_code)]

use stg4_codec::events::command_details::{MovementDetails, WaitDetails};
use stg4_codec::events::details::{ExecutionTiming, GameWaitDetails, MessageDetails};
use stg4_codec::events::{Command, CommandDetails, Flow, ItemEffect, ItemEffectDetails};
use stg4_codec::records::{
    Background, BasicCondition, Block, Character, Item, KeyCondition, StageVar,
};
use stg4_codec::{
    encode, InheritFlag, StageBlock, StageCharacter, StageConfig, StageFile, StageFloat, StageItem,
    StageResult, StageText,
};

pub const MAGIC: u32 = 1020;
pub const END_MARKER: u32 = 123456789;

/// Byte count of a stage with zeroed scalars and empty sequences
pub const ZEROED_STAGE_LEN: usize = 696;

/// Offset of the palette block count in a zeroed stage
pub const PALETTE_BLOCKS_OFFSET: usize = 4 + 21 * 4 + 8 + 141 * 4;

/// Hand-built minimal stage: magic, zeroed scalars, empty sequences, end marker
pub fn zeroed_stage_bytes() -> Vec<u8> {
    let mut data = Vec::with_capacity(ZEROED_STAGE_LEN);
    data.extend_from_slice(&MAGIC.to_le_bytes());
    // 21 scalar words before gravity
    for _ in 0..21 {
        data.extend_from_slice(&0u32.to_le_bytes());
    }
    data.extend_from_slice(&0f64.to_le_bytes());
    // 149 words: scalars, collisions, hitboxes, name, ranking, death fades,
    // palette and placement counts
    for _ in 0..149 {
        data.extend_from_slice(&0u32.to_le_bytes());
    }
    data.extend_from_slice(&END_MARKER.to_le_bytes());
    data
}

/// Overwrite the final four bytes of a buffer
pub fn with_end_marker(mut data: Vec<u8>, marker: u32) -> Vec<u8> {
    let len = data.len();
    data[len - 4..].copy_from_slice(&marker.to_le_bytes());
    data
}

/// Main builder for stage trees
#[derive(Debug, Default)]
pub struct StageBuilder {
    stage: StageFile,
}

impl StageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the global settings block
    pub fn config<F>(mut self, f: F) -> Self
    where
        F: FnOnce(StageConfig) -> StageConfig,
    {
        self.stage.config = f(self.stage.config);
        self
    }

    pub fn stage_name(mut self, name: &str) -> Self {
        self.stage.config.stage_name_count = 1;
        self.stage.config.stage_name = StageText::from(name);
        self
    }

    pub fn palette_block(mut self, name: &str) -> Self {
        self.stage.palette.blocks.push(block(name));
        self
    }

    pub fn palette_character(mut self, character: Character) -> Self {
        self.stage.palette.characters.push(character);
        self
    }

    pub fn palette_item(mut self, item: Item) -> Self {
        self.stage.palette.items.push(item);
        self
    }

    pub fn place_block(mut self, position: u32, name: &str) -> Self {
        self.stage.blocks.push(StageBlock {
            position,
            block: block(name),
        });
        self
    }

    pub fn place_character(mut self, position: u32, character: Character) -> Self {
        self.stage.characters.push(StageCharacter {
            position,
            character,
        });
        self
    }

    pub fn place_item(mut self, position: u32, item: Item) -> Self {
        self.stage.items.push(StageItem { position, item });
        self
    }

    pub fn background(mut self, image_path: &str, scroll_speed: f64) -> Self {
        self.stage.backgrounds.push(Background {
            display_from_start: 1,
            horizontal_scroll_speed: StageFloat::from(scroll_speed),
            image_path: StageText::from(image_path),
            ..Background::default()
        });
        self
    }

    pub fn stage_var(mut self, name: &str) -> Self {
        self.stage.stage_vars.push(StageVar {
            count_primary: 1,
            count_secondary: 0,
            variable_name: StageText::from(name),
        });
        self
    }

    pub fn build(self) -> StageFile {
        self.stage
    }

    pub fn build_bytes(self) -> StageResult<Vec<u8>> {
        encode(&self.stage)
    }
}

pub fn block(name: &str) -> Block {
    Block {
        header: 4,
        image_number: 1,
        name_count: 1,
        name: StageText::from(name),
        inherit_image: InheritFlag::from(true),
        ..Block::default()
    }
}

/// Character with a patrol flow: wait, walk, then a message on contact
pub fn patrolling_character(name: &str) -> Character {
    let flow = Flow {
        id: 1,
        memo: StageText::from("patrol"),
        conditions: vec![BasicCondition {
            header: 1,
            condition_type: 2,
            right_side_constant: 10,
            ..BasicCondition::default()
        }],
        key_conditions: vec![KeyCondition {
            header: 1,
            x_key: 1,
            ..KeyCondition::default()
        }],
        commands: vec![
            Command::new(CommandDetails::Wait(WaitDetails {
                timing: ExecutionTiming {
                    execution_time: 60,
                    ..ExecutionTiming::default()
                },
                ..WaitDetails::default()
            })),
            Command::new(CommandDetails::GroundMovement(MovementDetails::default())),
            Command::new(CommandDetails::Message(MessageDetails {
                message: StageText::from("halt!"),
                ..MessageDetails::default()
            })),
        ],
        ..Flow::default()
    };

    Character {
        header: 3,
        hp: 30,
        faction: 1,
        character_names: vec![StageText::from(name)],
        inherit_hp: InheritFlag::from(true),
        flows: vec![flow],
        ..Character::default()
    }
}

/// Item whose effect pauses the game
pub fn pausing_item(name: &str, wait: u32) -> Item {
    Item {
        header: 2,
        item_name_count: 1,
        item_name: StageText::from(name),
        item_effects: vec![ItemEffect::new(ItemEffectDetails::GameWait(GameWaitDetails {
            game_wait_execution_time: wait,
            ..GameWaitDetails::default()
        }))],
        ..Item::default()
    }
}
