use std::borrow::Cow;

use crate::events::Flow;
use crate::records::BasicCondition;
use crate::text::StageText;
use crate::values::InheritFlag;

wire_record! {
    /// Character template from the stage palette
    ///
    /// The name is stored as a count-prefixed list of strings. The editor
    /// only ever shows the first one; the rest are kept so the record
    /// re-encodes byte for byte.
    pub struct Character {
        pub header: u32,
        pub inherit_palette: u8,
        pub inherit_palette_data_number: u16,
        pub any_of_appearance_conditions_true: u8,
        pub appearance_condition_once_met_always_true: u8,
        pub facing_right: u8,
        pub number_of_doubles: u8,
        pub appearance_position_offset_x_bl: u16,
        pub appearance_position_offset_x_dot: u16,
        pub appearance_position_offset_y_bl: u16,
        pub appearance_position_offset_y_dot: u16,
        pub appearance_position_offset_x_flip_if_facing_right: u8,
        pub appearance_position_offset_y_flip_if_facing_right: u8,
        pub image_number: u16,
        pub image_type: u8,
        pub image_offset: u16,
        pub animation_set: u16,
        pub z_coordinate: u8,
        pub transparency: u8,
        pub initial_character_effect: u16,
        pub initial_character_effect_execution_type: u8,
        pub initial_character_effect_loop_execution: u8,
        pub character_effect_on_death: u16,
        pub character_effect_on_death_execution_type: u8,
        pub mark_display: u8,
        pub mark_number: u16,
        pub operation: u16,
        pub faction: u8,
        pub character_id: u8,
        pub flying: u8,
        pub direction_fixed: u8,
        pub invincible: u8,
        pub invincible_effect: u8,
        pub block: u8,
        pub gigantic: u8,
        pub synchronize_with_auto_scroll: u8,
        pub line_of_sight: u8,
        pub line_of_sight_range: u8,
        pub hp: u32,
        pub sp: u32,
        pub stopping_ease_during_inertial_movement: u16,
        pub body_hit_detection_range: u8,
        pub body_hit_power: u32,
        pub body_hit_impact: u8,
        pub body_hit_effect: u16,
        pub defense: u32,
        pub impact_resistance: u8,
        pub score: u32,
        pub holds_item_at_same_position: u8,
        pub has_group: u8,
        pub group_number: u16,
        pub action_condition_range: u8,
        pub action_condition_judgment_type: u8,
        pub character_names: Vec<StageText>,
        pub position_x: u16,
        pub position_y: u16,
        pub unknown_count: i32,
        pub inherited_data_count: u32,
        pub inherit_character_name: InheritFlag,
        pub inherit_operation: InheritFlag,
        pub inherit_faction: InheritFlag,
        pub inherit_character_id: InheritFlag,
        pub inherit_appearance_condition: InheritFlag,
        pub inherit_facing_right: InheritFlag,
        pub inherit_number_of_doubles: InheritFlag,
        pub inherit_initial_position_offset_x: InheritFlag,
        pub inherit_initial_position_offset_y: InheritFlag,
        pub inherit_image: InheritFlag,
        pub inherit_animation_set: InheritFlag,
        pub inherit_z_coordinate: InheritFlag,
        pub inherit_transparency: InheritFlag,
        pub inherit_initial_character_effect: InheritFlag,
        pub inherit_character_effect_on_death: InheritFlag,
        pub inherit_mark: InheritFlag,
        pub inherit_direction_fixed: InheritFlag,
        pub inherit_flying: InheritFlag,
        pub inherit_invincible: InheritFlag,
        pub inherit_block: InheritFlag,
        pub inherit_gigantic: InheritFlag,
        pub inherit_synchronize_with_auto_scroll: InheritFlag,
        pub inherit_line_of_sight: InheritFlag,
        pub inherit_hp: InheritFlag,
        pub inherit_sp: InheritFlag,
        pub inherit_body_hit_detection_range: InheritFlag,
        pub inherit_body_hit_power: InheritFlag,
        pub inherit_body_hit_impact: InheritFlag,
        pub inherit_body_hit_effect: InheritFlag,
        pub inherit_defense: InheritFlag,
        pub inherit_impact_resistance: InheritFlag,
        pub inherit_stopping_ease_during_inertial_movement: InheritFlag,
        pub inherit_action_condition: InheritFlag,
        pub inherit_group: InheritFlag,
        pub inherit_score: InheritFlag,
        pub inherit_holds_item_at_same_position: InheritFlag,
        pub inherit_action: InheritFlag,
        pub conditions: Vec<BasicCondition>,
        pub flows: Vec<Flow>,
    }
}

impl Character {
    /// Display name: the first stored name, or empty when there is none.
    pub fn name(&self) -> Cow<'_, str> {
        self.character_names
            .first()
            .map(StageText::to_string_lossy)
            .unwrap_or(Cow::Borrowed(""))
    }
}
