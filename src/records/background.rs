use crate::text::{Reserved, StageText};
use crate::values::StageFloat;

wire_record! {
    /// One background layer
    pub struct Background {
        pub start: u32,
        pub display_from_start: u32,
        pub specified_by_color: u32,
        pub color_number: u32,
        pub display_in_front_of_character: u32,
        pub horizontal_scroll_speed: StageFloat,
        pub vertical_scroll_speed: StageFloat,
        pub horizontal_auto_scroll: u32,
        pub vertical_auto_scroll: u32,
        pub horizontal_auto_scroll_speed: StageFloat,
        pub vertical_auto_scroll_speed: StageFloat,
        pub reserved: Reserved<20>,
        pub image_path: StageText,
    }
}

wire_record! {
    /// Stage variable declaration
    pub struct StageVar {
        pub count_primary: u32,
        pub count_secondary: u32,
        pub variable_name: StageText,
    }
}
