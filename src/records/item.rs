use crate::events::ItemEffect;
use crate::records::BasicCondition;
use crate::text::StageText;
use crate::values::InheritFlag;

wire_record! {
    /// Item template from the stage palette
    pub struct Item {
        pub header: u32,
        pub inherit_palette: u8,
        pub inherit_palette_data_number: u16,
        pub any_of_appearance_conditions_true: u8,
        pub appearance_condition_once_met_always_true: u8,
        pub appearance_position_offset_x_dot: u16,
        pub appearance_position_offset_y_dot: u16,
        pub image_number: u16,
        pub image_type: u8,
        pub frame: u16,
        pub z_coordinate: u8,
        pub transparency: u8,
        pub mark_display: u8,
        pub mark_number: u16,
        pub display_above_head_on_acquisition: u8,
        pub acquisition_type: u8,
        pub gigantic: u8,
        pub sound_effect: u16,
        /// Always 1 in editor output; kept verbatim.
        pub item_name_count: u32,
        pub item_name: StageText,
        pub position_x: u16,
        pub position_y: u16,
        pub number_of_inherited_data: u32,
        pub inherit_item_name: InheritFlag,
        pub inherit_appearance_condition: InheritFlag,
        pub inherit_initial_position_offset_x: InheritFlag,
        pub inherit_initial_position_offset_y: InheritFlag,
        pub inherit_image: InheritFlag,
        pub inherit_z_coordinate: InheritFlag,
        pub inherit_transparency: InheritFlag,
        pub inherit_mark: InheritFlag,
        pub inherit_gigantic: InheritFlag,
        pub inherit_acquisition_type: InheritFlag,
        pub inherit_display_above_head_on_acquisition: InheritFlag,
        pub inherit_sound_effect: InheritFlag,
        pub inherit_effect: InheritFlag,
        pub conditions: Vec<BasicCondition>,
        pub item_effects: Vec<ItemEffect>,
    }
}
