//! Detail payloads that only commands carry: movement, attacks, summons and
//! flow control.

use crate::events::details::ExecutionTiming;
use crate::records::BasicCondition;
use crate::text::Reserved;
use crate::values::StageFloat;

wire_record! {
    pub struct WaitDetails {
        pub timing: ExecutionTiming,
        pub reserved: Reserved<33>,
    }
}

wire_record! {
    pub struct LinearMovementDetails {
        pub timing: ExecutionTiming,
        pub reserved1: Reserved<3>,
        pub animation_and_other_type: u16,
        pub reserved2: Reserved<16>,
        pub movement_direction_setting_type: u8,
        pub movement_direction_direction: u8,
        pub movement_direction_angle: u16,
        pub movement_direction_angle_double: u16,
        pub movement_direction_angle_reverse_rotation_if_facing_right: u8,
        pub movement_direction_target_x_present: u8,
        pub movement_direction_target_y_present: u8,
        pub movement_direction_target_x: u16,
        pub movement_direction_target_y: u16,
        pub movement_direction_target_x_dot: u16,
        pub movement_direction_target_y_dot: u16,
        pub movement_direction_target_type: u8,
        pub movement_direction_target_coordinate_unit: u8,
        pub reserved3: Reserved<1>,
        pub movement_direction_execute_until_target_coordinate_reached: u8,
        pub movement_direction_invalidate_horizontal_movement: u8,
        pub movement_direction_invalidate_vertical_movement: u8,
        pub movement_direction_target_x_flip_if_facing_right: u8,
        pub movement_direction_target_y_flip_if_facing_right: u8,
        pub movement_direction_reverse_speed_if_direction_changes: u8,
        pub movement_direction_prevent_blur: u8,
        pub movement_direction_dont_change_character_direction: u8,
        pub time_speed_distance_setting_type: u8,
        pub time_speed_distance_speed: u16,
        pub time_speed_distance_speed_double: u16,
        pub time_speed_distance_distance: u16,
        pub time_speed_distance_distance_double: u16,
        pub time_speed_distance_distance_unit: u8,
        pub reserved4: Reserved<4>,
        pub inertia_present: u8,
        pub inertia_max_speed: u16,
        pub inertia_speed_correction_on_direction_change: StageFloat,
        pub animation_type: u8,
        pub reserved5: Reserved<21>,
    }
}

wire_record! {
    /// Ground, circular, charge, guided, screen-avoidance movement and
    /// movement invalidation all share this shape.
    pub struct MovementDetails {
        pub timing: ExecutionTiming,
        pub reserved: Reserved<96>,
    }
}

wire_record! {
    pub struct DirectionChangeDetails {
        pub timing: ExecutionTiming,
        pub reserved: Reserved<37>,
    }
}

wire_record! {
    pub struct JumpDetails {
        pub reserved1: Reserved<5>,
        pub sound_effect: u16,
        pub play_if_outside_screen: u8,
        pub animation: u16,
        pub reserved2: Reserved<28>,
        pub jump_type: u32,
        pub max_jump_inertial_movement_speed: u32,
        pub max_jump_height: u32,
        pub min_jump_inertial_movement_speed: u32,
        pub min_jump_height: u32,
    }
}

wire_record! {
    /// Damage block closing both shot and sword payloads
    pub struct AttackHit {
        pub power: u32,
        pub reserved1: Reserved<2>,
        pub impact: u8,
        pub effect: u16,
        pub acquired_item_palette_type: u8,
        pub acquired_item_palette_number: u16,
        pub reserved2: Reserved<9>,
        pub attack: u8,
        pub attack_id: u8,
        pub reserved3: Reserved<16>,
    }
}

wire_record! {
    pub struct ShotDetails {
        pub timing: ExecutionTiming,
        pub sound_effect: u16,
        pub play_if_outside_screen: u8,
        pub animation: u16,
        pub reserved: Reserved<20>,
        pub number_of_shots_fired: u8,
        pub formation: u8,
        pub firing_parameter1: u16,
        pub firing_parameter2: u16,
        pub firing_parameter3: u16,
        pub target: u8,
        pub direction: u8,
        pub set_angle_to_target: u8,
        pub firing_target: u8,
        pub angle_offset: u16,
        pub angle_offset_double: u16,
        pub angle_offset_reverse_rotation_if_facing_right: u8,
        pub angle_dispersion: u16,
        pub change_firing_position_according_to_angle: u8,
        pub number_of_doubles: u8,
        pub firing_position_offset_x: u16,
        pub firing_position_offset_x_double: u16,
        pub firing_position_offset_y: u16,
        pub firing_position_offset_y_double: u16,
        pub firing_position_offset_x_flip_if_facing_right: u8,
        pub firing_position_offset_y_flip_if_facing_right: u8,
        pub graphic: u16,
        pub z_coordinate: u8,
        pub transparency: u8,
        pub faction_same_as_user: u8,
        pub faction: u16,
        pub gigantic: u16,
        pub movement_type: u8,
        pub movement_type_parameter1: u16,
        pub movement_type_parameter2: u16,
        pub movement_type_parameter3: u16,
        pub movement_target: u8,
        pub synchronize_with_auto_scroll: u8,
        pub speed: u16,
        pub speed_double: u16,
        pub acceleration_enabled: u8,
        pub acceleration: u16,
        pub acceleration_double: u16,
        pub flight_distance: u16,
        pub flight_distance_valid: u8,
        pub flight_distance_double: u16,
        pub flight_distance_does_not_disappear_at_end: u8,
        pub disappearance_time_valid: u8,
        pub disappearance_time: u16,
        pub disappearance_time_double: u16,
        pub penetrate_blocks: u8,
        pub penetrate_actors: u8,
        pub penetrate_block_actors: u8,
        pub disappear_on_hitting_shot: u8,
        pub value_for_disappearing_on_hitting_shot: u8,
        pub hit: AttackHit,
    }
}

wire_record! {
    /// Unlike the other attack payloads, execution time is a single u32 here.
    pub struct SwordDetails {
        pub execution_time: u32,
        pub parallel_execution: u8,
        pub sound_effect: u16,
        pub play_if_outside_screen: u8,
        pub animation: u16,
        pub reserved1: Reserved<53>,
        pub z_coordinate: u8,
        pub transparency: u8,
        pub faction_same_as_user: u8,
        pub faction: u16,
        pub gigantic: u16,
        pub sword_type: u32,
        pub reserved2: Reserved<30>,
        pub hit: AttackHit,
    }
}

wire_record! {
    /// Common body of the three summon commands
    pub struct SummonDetails {
        pub timing: ExecutionTiming,
        pub sound_effect: u16,
        pub play_sound_effect_if_outside_screen: u8,
        pub animation: u8,
        pub reserved1: Reserved<21>,
        pub count: u8,
        pub formation: u8,
        pub interval: u16,
        pub number_of_columns: u16,
        pub column_interval: u16,
        pub target: u8,
        pub direction: u8,
        pub reserved2: Reserved<1>,
        pub target2: u8,
        pub reserved3: Reserved<9>,
        pub summon_position_offset_x: u32,
        pub summon_position_offset_y: u32,
        pub summon_position_offset_x_flip: u8,
        pub summon_position_offset_y_flip: u8,
        pub reserved4: Reserved<5>,
        pub faction: u8,
        pub reserved5: Reserved<21>,
        pub existence_time: u16,
        pub existence_time_present: u8,
        pub reserved6: Reserved<28>,
        pub palette_type: u8,
        pub palette_data_number: u16,
        pub faction_specification_method: u8,
        pub set_acquired_score_to_0: u8,
        pub direction_flip: u8,
        pub attack: u8,
        pub attack_flow: u8,
        pub reserved7: Reserved<16>,
    }
}

wire_record! {
    /// Block and character summons, which also report back to a flow variable
    pub struct ActorSummonDetails {
        pub summon: SummonDetails,
        pub return_value_to_flow_variable: u8,
        pub reserved: Reserved<3>,
    }
}

wire_record! {
    pub struct FlowOperationDetails {
        pub reserved1: Reserved<34>,
        pub condition_present: u8,
        pub judgment_type: u8,
        pub reserved2: Reserved<4>,
        pub conditions: Vec<BasicCondition>,
        pub reserved3: Reserved<8>,
        pub operation: u32,
        pub target_flow: u32,
        pub id: u32,
        pub target_character: u32,
        pub assign_return_value_to_flow_variable: u32,
    }
}

wire_record! {
    pub struct TargetSettingDetails {
        pub reserved1: Reserved<38>,
        pub reserved2: Reserved<68>,
    }
}
