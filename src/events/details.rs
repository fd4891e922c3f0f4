//! Detail payloads shared by item effects and commands.
//!
//! Each payload is a fixed-shape record. `Reserved` regions are bytes whose
//! meaning is unknown; they are carried through unchanged.

use crate::events::Flow;
use crate::text::{Reserved, StageText};

wire_record! {
    /// Leading timing block of the time-driven payloads
    pub struct ExecutionTiming {
        pub execution_time: u16,
        pub execution_time_double: u16,
        pub parallel_execution: u8,
    }
}

wire_record! {
    /// Replaces the owner's flows (item effects only)
    pub struct FlowChangeDetails {
        pub reserved1: Reserved<30>,
        pub flows: Vec<Flow>,
        pub reserved2: Reserved<4>,
        pub operation: u32,
        pub reserved3: Reserved<4>,
    }
}

wire_record! {
    pub struct StageClearDetails {
        pub reserved1: Reserved<14>,
        pub path: StageText,
        pub reserved2: Reserved<20>,
        pub stage_transition: u32,
        pub number: u32,
        pub change_world_map_position: u32,
        pub world_map_position_x: u32,
        pub world_map_position_y: u32,
        pub change_initial_position: u32,
        pub initial_position_x: u32,
        pub initial_position_y: u32,
        pub initial_position_main_character_direction: u32,
        pub execute_autosave: u32,
        pub add_clear_text_to_replay: u32,
    }
}

wire_record! {
    pub struct GameWaitDetails {
        pub timing: ExecutionTiming,
        pub reserved: Reserved<33>,
        pub game_wait_execution_time: u32,
    }
}

wire_record! {
    pub struct MessageDetails {
        pub reserved1: Reserved<14>,
        pub message: StageText,
        pub reserved2: Reserved<20>,
        pub display_position_specification_method: u32,
        pub coordinate_x: u32,
        pub coordinate_y: u32,
        pub display_position_offset_x: u32,
        pub display_position_offset_y: u32,
        pub auto_adjust_to_not_go_off_screen: u32,
        pub display_time_specification_method: u32,
        pub display_time: u32,
        pub pause: u32,
        pub display_variables: u32,
        pub follow_screen: u32,
        pub auto_update: u32,
        pub message_id_present: u32,
        pub message_id: u32,
        pub window_display: u32,
        pub message_clear: u32,
        pub update_interval: u32,
        pub instant_display: u32,
        pub coordinate_unit: u32,
        pub set_options: u32,
        pub assign_return_value_to_flow_variable: u32,
    }
}

wire_record! {
    pub struct WarpDetails {
        pub reserved1: Reserved<26>,
        pub setting_type: u8,
        pub direction: u8,
        pub reserved2: Reserved<5>,
        pub target_x_present: u8,
        pub target_y_present: u8,
        pub target_x_bl: u16,
        pub target_y_bl: u16,
        pub target_x_dot: u16,
        pub target_y_dot: u16,
        pub target_type: u8,
        pub target_unit: u8,
        pub gigantic_character_coordinate_position: u8,
        pub reserved3: Reserved<3>,
        pub target_x_flip_if_facing_right: u8,
        pub target_y_flip_if_facing_right: u8,
        pub reserved4: Reserved<8>,
        pub distance: u16,
        pub distance_double: u16,
        pub reserved5: Reserved<38>,
        pub assign_return_value_to_flow: u32,
    }
}

wire_record! {
    /// Arithmetic on a status or variable
    pub struct StatusOperationDetails {
        pub reserved1: Reserved<38>,
        pub operation_target_type: u8,
        pub reserved2: Reserved<4>,
        pub operation_target_variable_type: u8,
        pub reserved3: Reserved<2>,
        pub operation_target_variable_number: u16,
        pub reserved4: Reserved<4>,
        pub operation_target_target: u8,
        pub reserved5: Reserved<3>,
        pub operation_target_status: u8,
        pub reserved6: Reserved<1>,
        pub operation_target_flow_variable_number: u8,
        pub reserved7: Reserved<3>,
        pub operator_type: u8,
        pub reserved8: Reserved<3>,
        pub calculation_content_type: u32,
        pub calculation_content_constant: u32,
        pub calculation_content_random_lower_limit: u32,
        pub calculation_content_random_upper_limit: u32,
        pub calculation_content_variable_type: u32,
        pub calculation_content_variable_number: u32,
        pub calculation_content_target: u32,
        pub calculation_content_status: u32,
        pub calculation_content_flow_variable_number: u32,
        pub reserved9: Reserved<36>,
    }
}

wire_record! {
    /// Toggles a status flag
    pub struct StatusOperation2Details {
        pub reserved1: Reserved<38>,
        pub target: u32,
        pub status: u32,
        pub on: u32,
        pub reserved2: Reserved<12>,
    }
}

wire_record! {
    pub struct DisappearanceDetails {
        pub reserved: Reserved<38>,
        pub target: u32,
        pub faction: u32,
        pub range: u32,
        pub assign_return_value_to_flow_variable: u32,
    }
}

wire_record! {
    pub struct ItemAcquisitionDetails {
        pub reserved: Reserved<38>,
        pub palette_type: u32,
        pub palette_data_number: u32,
    }
}

wire_record! {
    pub struct GraphicChangeDetails {
        pub reserved: Reserved<38>,
        pub image_type: u32,
        pub image_number: u32,
        pub offset: u32,
    }
}

wire_record! {
    pub struct AnimationSetChangeDetails {
        pub reserved: Reserved<38>,
        pub animation_set: u32,
    }
}

wire_record! {
    /// Timing followed by 41 unknown bytes
    ///
    /// Shared by animation execution, background change and BGM playback.
    pub struct TimedDetails {
        pub timing: ExecutionTiming,
        pub reserved: Reserved<41>,
    }
}

wire_record! {
    pub struct EffectExecutionDetails {
        pub reserved1: Reserved<38>,
        pub reserved2: Reserved<40>,
    }
}

wire_record! {
    /// Character or screen effect
    pub struct EffectPlaybackDetails {
        pub reserved: Reserved<38>,
        pub effect: u32,
        pub execution_type: u32,
        pub loop_execution: u32,
    }
}

wire_record! {
    pub struct PictureDisplayDetails {
        pub timing: ExecutionTiming,
        pub reserved: Reserved<113>,
    }
}

wire_record! {
    pub struct SoundEffectPlaybackDetails {
        pub reserved1: Reserved<7>,
        pub play_if_outside_screen: u8,
        pub reserved2: Reserved<30>,
        pub sound_effect: u32,
    }
}

wire_record! {
    pub struct CodeExecutionDetails {
        pub timing: ExecutionTiming,
        pub reserved1: Reserved<9>,
        pub code: StageText,
        pub reserved2: Reserved<20>,
    }
}

wire_record! {
    pub struct ArrangementDetails {
        pub reserved: Reserved<38>,
        pub command: u32,
        pub parameter: u32,
        pub operator_type: u32,
        pub variable_type: u32,
        pub variable_number: u32,
    }
}

wire_record! {
    pub struct LoopDetails {
        pub reserved: Reserved<38>,
        pub repeat_count: u32,
        pub command_count: u32,
    }
}
