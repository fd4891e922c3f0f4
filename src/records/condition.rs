use crate::text::Reserved;

wire_record! {
    /// A single comparison predicate
    ///
    /// Used as an appearance gate on entities and as a trigger inside flows
    /// and flow-operation commands. Each side names a constant, a random
    /// range, a status of some target, or a common/stage/flow variable.
    pub struct BasicCondition {
        pub header: u32,
        pub condition_type: u8,
        pub right_side_constant: u32,
        pub right_side_random_lower_limit: u32,
        pub right_side_random_upper_limit: u32,
        pub left_side_status_target: u8,
        pub left_side_status_number: u8,
        pub left_side_type: u8,
        pub left_side_common_variable_or_stage_variable: u8,
        pub left_side_variable_number: u16,
        pub left_side_flow_variable_number: u8,
        pub right_side_type: u8,
        pub right_side_status_target: u8,
        pub right_side_status_number: u8,
        pub right_side_common_variable_or_stage_variable: u8,
        pub right_side_variable_number: u16,
        pub right_side_flow_variable_number: u8,
        pub how_to_compare: u8,
        pub specify_in_percent: u8,
        pub left_side_coordinate_type: u8,
        pub right_side_coordinate_type: u8,
        pub left_side_gigantic_character_coordinate_position: u8,
        pub right_side_gigantic_character_coordinate_position: u8,
        pub reserved: Reserved<5>,
    }
}

wire_record! {
    /// Directional and action key combination with its timing window
    pub struct KeyCondition {
        pub header: u32,
        pub right_and_left_to_front_and_back: u8,
        pub minimum_input_time: u16,
        pub maximum_input_time: u16,
        pub input_time_1_to_infinity: u8,
        pub judgment_type: u8,
        pub reserved: u32,
        pub number_of_key_data: u32,
        pub direction_key_neutral: u8,
        pub left_key: u8,
        pub right_key: u8,
        pub up_key: u8,
        pub down_key: u8,
        pub up_left_key: u8,
        pub down_left_key: u8,
        pub up_right_key: u8,
        pub down_right_key: u8,
        pub any_direction_key: u8,
        pub action_key_neutral: u8,
        pub z_key: u8,
        pub x_key: u8,
        pub c_key: u8,
        pub v_key: u8,
        pub a_key: u8,
        pub s_key: u8,
        pub d_key: u8,
        pub f_key: u8,
    }
}
