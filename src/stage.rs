//! Top-level stage file record.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::cursor::{ByteReader, ByteWriter};
use crate::errors::{DecodeWarning, StageError, StageResult};
use crate::records::{
    ActorHitbox, Background, Block, Character, DeathFade, EnemyCollision, Item, PlayerCollision,
    StageVar,
};
use crate::text::StageText;
use crate::traits::StageEncode;
use crate::utils::{END_MARKER, STAGE_MAGIC};
use crate::values::StageFloat;

wire_record! {
    /// Global stage settings stored right after the magic number
    pub struct StageConfig {
        pub some_count: u32,
        pub item_width: u32,
        pub chunk_width: u32,
        pub chunk_pow: u32,
        pub height: u32,
        pub enable_horizontal_scroll_minimum: u32,
        pub enable_horizontal_scroll_maximum: u32,
        pub enable_vertical_scroll_minimum: u32,
        pub enable_vertical_scroll_maximum: u32,
        pub horizontal_scroll_minimum_value: u32,
        pub horizontal_scroll_maximum_value: u32,
        pub vertical_scroll_minimum_value: u32,
        pub vertical_scroll_maximum_value: u32,
        pub frame_rate: u32,
        pub enable_time_limit: u32,
        /// Seconds
        pub time_limit_duration: u32,
        pub warning_sound_start_time: u32,
        pub enable_side_scroll: u32,
        pub enable_vertical_scroll: u32,
        pub autoscroll_speed: u32,
        pub vertical_scroll_speed: u32,
        pub gravity: StageFloat,
        pub hit_detection_level: u32,
        pub character_shot_collision_detection_accuracy: u32,
        pub bgm_number: u32,
        pub bgm_loop_playback: u32,
        pub dont_restart_bgm_if_no_change: u32,
        pub enable_z_coordinate: u32,
        pub inherit_status_from_stock: u32,
        pub store_status_to_stock: u32,
        pub show_status_window: u32,
        pub switch_scene_immediately_on_clear: u32,
        pub allow_replay_save: u32,
        pub show_stage: u32,
        pub show_ready: u32,
        pub show_clear: u32,
        pub show_gameover: u32,
        pub player_collision: PlayerCollision,
        pub enemy_collision: EnemyCollision,
        pub item_collision_width: u32,
        pub item_collision_height: u32,
        pub player_hitbox: ActorHitbox,
        pub enemy_hitbox: ActorHitbox,
        /// Editor undo depth
        pub undo_max_times: u32,
        pub x_coordinate_upper_limit: u32,
        pub y_coordinate_upper_limit: u32,
        pub unknown_words: [u32; 12],
        pub disable_damage_outside_screen: u32,
        pub player_invincibility_from_same_enemy_duration: u32,
        pub player_invincibility_duration: u32,
        pub enemy_invincibility_from_same_player_duration: u32,
        pub enemy_invincibility_duration: u32,
        pub stage_name_count: u32,
        pub stage_name: StageText,
    }
}

wire_record! {
    /// Score weights used by the clear ranking
    pub struct Ranking {
        pub ranking_size: u32,
        pub score: u32,
        pub remaining_time: u32,
        pub clear_time: u32,
        pub remaining_hp: u32,
        pub remaining_sp: u32,
    }
}

wire_record! {
    /// One death fade per actor category, in file order
    pub struct DeathFades {
        pub nonblock_enemy: DeathFade,
        pub block_enemy: DeathFade,
        pub item: DeathFade,
        pub player: DeathFade,
        pub enemy: DeathFade,
    }
}

wire_record! {
    /// Entity templates the editor offers for placement
    pub struct StagePalette {
        pub blocks: Vec<Block>,
        pub characters: Vec<Character>,
        pub items: Vec<Item>,
    }
}

wire_record! {
    /// A block placed on the stage; an independent copy, not a palette reference
    pub struct StageBlock {
        pub position: u32,
        pub block: Block,
    }
}

wire_record! {
    pub struct StageCharacter {
        pub position: u32,
        pub character: Character,
    }
}

wire_record! {
    pub struct StageItem {
        pub position: u32,
        pub item: Item,
    }
}

/// Decoded stage file
///
/// The magic number and the end marker are not stored: decode checks them
/// and encode writes the fixed values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StageFile {
    pub config: StageConfig,
    pub ranking: Ranking,
    pub death_fades: DeathFades,
    pub palette: StagePalette,
    pub blocks: Vec<StageBlock>,
    pub characters: Vec<StageCharacter>,
    pub items: Vec<StageItem>,
    pub backgrounds: Vec<Background>,
    pub stage_vars: Vec<StageVar>,
}

impl StageFile {
    /// Decode a whole stage file from `reader`.
    ///
    /// End marker drift is returned as warnings unless the reader's config
    /// asks for a strict end marker, in which case the first one is an error.
    pub fn decode_from(reader: &mut ByteReader) -> StageResult<(StageFile, Vec<DecodeWarning>)> {
        let offset = reader.position();
        let magic = reader.read_u32()?;
        if magic != STAGE_MAGIC {
            return Err(StageError::BadMagic {
                expected: STAGE_MAGIC,
                found: magic,
                offset,
            });
        }

        let stage = StageFile {
            config: reader.read()?,
            ranking: reader.read()?,
            death_fades: reader.read()?,
            palette: reader.read()?,
            blocks: reader.read()?,
            characters: reader.read()?,
            items: reader.read()?,
            backgrounds: reader.read()?,
            stage_vars: reader.read()?,
        };

        let mut warnings = Vec::new();
        let marker_offset = reader.position();
        let marker = reader.read_u32()?;
        if marker != END_MARKER {
            warnings.push(DecodeWarning::EndMarkerMismatch {
                expected: END_MARKER,
                found: marker,
                offset: marker_offset,
            });
        }
        if reader.remaining() > 0 {
            warnings.push(DecodeWarning::TrailingBytes {
                offset: reader.position(),
                count: reader.remaining(),
            });
        }

        if reader.config().strict_end_marker {
            if let Some(warning) = warnings.first() {
                return Err(warning.clone().into());
            }
        }
        for warning in &warnings {
            warn!("{}", warning);
        }

        debug!(
            "decoded stage: {} palette blocks, {} placed blocks, {} characters, {} items, {} backgrounds",
            stage.palette.blocks.len(),
            stage.blocks.len(),
            stage.characters.len(),
            stage.items.len(),
            stage.backgrounds.len()
        );
        Ok((stage, warnings))
    }
}

impl StageEncode for StageFile {
    fn encode(&self, writer: &mut ByteWriter) -> StageResult<()> {
        writer.write_u32(STAGE_MAGIC);
        writer.write(&self.config)?;
        writer.write(&self.ranking)?;
        writer.write(&self.death_fades)?;
        writer.write(&self.palette)?;
        writer.write(&self.blocks)?;
        writer.write(&self.characters)?;
        writer.write(&self.items)?;
        writer.write(&self.backgrounds)?;
        writer.write(&self.stage_vars)?;
        writer.write_u32(END_MARKER);
        Ok(())
    }
}
