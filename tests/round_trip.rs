//! Whole-file decode and encode scenarios
//!
//! Buffers are built either by hand (see `fixtures::zeroed_stage_bytes`) or
//! through `StageBuilder`, then pushed through the public entry points.

use stg4_codec::events::CommandDetails;
use stg4_codec::{
    decode, decode_with_config, encode, CodecConfig, DecodeWarning, ErrorCategory, StageAccumulator,
    StageConfig, StageError, StageFile, StageFloat,
};

mod fixtures;
use fixtures::builders::*;

#[test]
fn test_zeroed_stage_decodes_to_literal_zeroes() {
    let data = zeroed_stage_bytes();
    assert_eq!(data.len(), ZEROED_STAGE_LEN);

    let decoded = decode(&data).unwrap();
    assert!(decoded.warnings.is_empty());

    let stage = &decoded.stage;
    for fade in [
        &stage.death_fades.nonblock_enemy,
        &stage.death_fades.block_enemy,
        &stage.death_fades.item,
        &stage.death_fades.player,
        &stage.death_fades.enemy,
    ] {
        assert_eq!(fade.list_size, 0);
        assert_eq!(fade.block_end, 0);
    }
    assert_eq!(stage.config.player_hitbox.shot_width, 0);
    assert_eq!(stage.config.enemy_hitbox.character_height, 0);
    assert_eq!(stage.config.gravity, StageFloat::from(0.0));
    assert!(stage.palette.blocks.is_empty());
    assert!(stage.stage_vars.is_empty());

    assert_eq!(encode(stage).unwrap(), data);
}

#[test]
fn test_magic_gate() {
    let mut data = zeroed_stage_bytes();
    data[0..4].copy_from_slice(&1019u32.to_le_bytes());
    let err = decode(&data).unwrap_err();
    assert_eq!(
        err,
        StageError::BadMagic {
            expected: 1020,
            found: 1019,
            offset: 0
        }
    );
    assert_eq!(err.category(), ErrorCategory::Format);
}

#[test]
fn test_end_marker_tolerance() {
    let data = with_end_marker(zeroed_stage_bytes(), 0);
    let decoded = decode(&data).unwrap();
    assert_eq!(decoded.stage, StageFile::default());
    assert_eq!(
        decoded.warnings,
        vec![DecodeWarning::EndMarkerMismatch {
            expected: END_MARKER,
            found: 0,
            offset: ZEROED_STAGE_LEN - 4
        }]
    );

    // Encoding writes the fixed marker back.
    assert_eq!(encode(&decoded.stage).unwrap(), zeroed_stage_bytes());

    let err = decode_with_config(&data, &CodecConfig::strict()).unwrap_err();
    assert!(matches!(err, StageError::EndMarkerMismatch { found: 0, .. }));
}

#[test]
fn test_sequence_ceiling_in_file() {
    let mut data = zeroed_stage_bytes();
    data[PALETTE_BLOCKS_OFFSET..PALETTE_BLOCKS_OFFSET + 4]
        .copy_from_slice(&14097u32.to_le_bytes());
    let err = decode(&data).unwrap_err();
    assert_eq!(
        err,
        StageError::ArrayTooLarge {
            count: 14097,
            limit: 14096,
            offset: PALETTE_BLOCKS_OFFSET
        }
    );

    let mut data = zeroed_stage_bytes();
    data[PALETTE_BLOCKS_OFFSET..PALETTE_BLOCKS_OFFSET + 4].copy_from_slice(&u32::MAX.to_le_bytes());
    assert!(matches!(
        decode(&data),
        Err(StageError::ArrayTooLarge { count: u32::MAX, .. })
    ));
}

#[test]
fn test_count_within_ceiling_but_past_buffer_is_eof() {
    let mut data = zeroed_stage_bytes();
    data[PALETTE_BLOCKS_OFFSET..PALETTE_BLOCKS_OFFSET + 4].copy_from_slice(&2u32.to_le_bytes());
    assert!(matches!(
        decode(&data),
        Err(StageError::UnexpectedEof { .. })
    ));
}

fn rich_stage() -> StageFile {
    StageBuilder::new()
        .stage_name("Grassland 1")
        .config(|c| StageConfig {
            frame_rate: 60,
            gravity: StageFloat::from(0.75),
            time_limit_duration: 300,
            ..c
        })
        .palette_block("ground")
        .palette_block("brick")
        .palette_character(patrolling_character("walker"))
        .palette_item(pausing_item("clock", 90))
        .place_block(17, "ground")
        .place_block(18, "brick")
        .place_character(40, patrolling_character("walker"))
        .place_item(55, pausing_item("clock", 120))
        .background("bg/hills.png", 0.5)
        .stage_var("coins")
        .build()
}

#[test]
fn test_rich_stage_round_trip() {
    let stage = rich_stage();
    let bytes = encode(&stage).unwrap();
    assert_eq!(&bytes[bytes.len() - 4..], &END_MARKER.to_le_bytes());

    let decoded = decode(&bytes).unwrap();
    assert!(decoded.warnings.is_empty());
    assert_eq!(decoded.stage, stage);
    assert_eq!(decoded.stage.characters[0].character.name(), "walker");
    assert!(matches!(
        decoded.stage.characters[0].character.flows[0].commands[2].details,
        CommandDetails::Message(_)
    ));

    assert_eq!(encode(&decoded.stage).unwrap(), bytes);
}

#[test]
fn test_json_round_trip() {
    let stage = rich_stage();
    let json = stage.to_json_pretty().unwrap();
    assert!(json.contains("Grassland 1"));

    let back = StageFile::from_json(&json).unwrap();
    assert_eq!(back, stage);
    assert_eq!(encode(&back).unwrap(), encode(&stage).unwrap());
}

#[test]
fn test_non_finite_floats_survive_json() {
    let quiet_nan = 0x7FF8_0000_0000_0000u64;
    let payload_nan = 0xFFF4_0000_DEAD_BEEFu64;

    let mut stage = StageBuilder::new()
        .config(|c| StageConfig {
            gravity: StageFloat::from_bits(quiet_nan),
            ..c
        })
        .background("bg/void.png", f64::INFINITY)
        .build();
    stage.backgrounds[0].vertical_auto_scroll_speed = StageFloat::from(f64::NEG_INFINITY);
    stage.backgrounds[0].vertical_scroll_speed = StageFloat::from_bits(payload_nan);
    stage.backgrounds[0].horizontal_auto_scroll_speed = StageFloat::from(-0.0);

    let bytes = encode(&stage).unwrap();
    let decoded = decode(&bytes).unwrap();
    assert_eq!(decoded.stage, stage);
    assert_eq!(encode(&decoded.stage).unwrap(), bytes);

    let json = decoded.stage.to_json_pretty().unwrap();
    assert!(!json.contains("null"));
    let back = StageFile::from_json(&json).unwrap();
    assert_eq!(back, stage);
    assert_eq!(back.config.gravity.to_bits(), quiet_nan);
    assert_eq!(back.backgrounds[0].vertical_scroll_speed.to_bits(), payload_nan);
    assert_eq!(back.backgrounds[0].horizontal_scroll_speed.value(), f64::INFINITY);
    assert_eq!(encode(&back).unwrap(), bytes);
}

#[test]
fn test_accumulator_with_uneven_chunks() {
    let bytes = encode(&rich_stage()).unwrap();
    let mut accumulator = StageAccumulator::new();
    let mut rest = bytes.as_slice();
    let mut size = 1;
    while !rest.is_empty() {
        let take = size.min(rest.len());
        accumulator.push(&rest[..take]);
        rest = &rest[take..];
        size *= 3;
    }
    assert_eq!(accumulator.len(), bytes.len());
    assert_eq!(accumulator.finish().unwrap().stage, rich_stage());
}

#[test]
fn test_truncation_anywhere_is_an_error() {
    let bytes = encode(&rich_stage()).unwrap();
    for cut in (0..bytes.len()).step_by(37) {
        let result = decode(&bytes[..cut]);
        assert!(
            matches!(result, Err(StageError::UnexpectedEof { .. })),
            "cut at {} gave {:?}",
            cut,
            result.map(|_| ())
        );
    }
}

#[test]
fn test_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("stg4_codec_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("level.stg4_1020");

    let stage = rich_stage();
    stage.write_to_path(&path).unwrap();
    let decoded = StageFile::from_path(&path).unwrap();
    assert_eq!(decoded.stage, stage);

    std::fs::remove_dir_all(&dir).unwrap();
}
