wire_record! {
    /// Player collision box sizes, anchor positions and debug display settings
    pub struct PlayerCollision {
        pub walking_block_width: u32,
        pub walking_block_height: u32,
        pub flying_block_width: u32,
        pub flying_block_height: u32,
        pub walking_character_width: u32,
        pub walking_character_height: u32,
        pub flying_character_width: u32,
        pub flying_character_height: u32,
        pub shot_width: u32,
        pub shot_height: u32,
        pub item_width: u32,
        pub item_height: u32,
        pub walking_block_position: u32,
        pub flying_block_position: u32,
        pub walking_character_position: u32,
        pub flying_character_position: u32,
        pub block_display: u32,
        pub character_display: u32,
        pub shot_display: u32,
        pub item_display: u32,
        pub block_display_color: u32,
        pub character_display_color: u32,
        pub shot_display_color: u32,
        pub item_display_color: u32,
    }
}

wire_record! {
    /// Enemy collision box sizes and anchor positions
    pub struct EnemyCollision {
        pub walking_block_width: u32,
        pub walking_block_height: u32,
        pub flying_block_width: u32,
        pub flying_block_height: u32,
        pub walking_character_width: u32,
        pub walking_character_height: u32,
        pub flying_character_width: u32,
        pub flying_character_height: u32,
        pub shot_width: u32,
        pub shot_height: u32,
        pub walking_block_position: u32,
        pub flying_block_position: u32,
        pub walking_character_position: u32,
        pub flying_character_position: u32,
    }
}

wire_record! {
    pub struct ActorHitbox {
        pub shot_width: u32,
        pub shot_height: u32,
        pub character_width: u32,
        pub character_height: u32,
    }
}

wire_record! {
    /// Fade-out behaviour when an actor leaves the visible area or dies
    pub struct DeathFade {
        pub list_size: u32,
        pub auto_disappear_left: u32,
        pub auto_disappear_right: u32,
        pub auto_disappear_top: u32,
        pub auto_disappear_bottom: u32,
        pub disappear_left_range: u32,
        pub disappear_right_range: u32,
        pub disappear_top_range: u32,
        pub disappear_bottom_range: u32,
        pub block_end: u32,
    }
}
