//! Event scripting records
//!
//! A [`Flow`] owns conditions, key conditions and a list of [`Command`]s.
//! Commands and item effects are tagged unions: a fixed header, a filler
//! byte, a discriminant byte, then the payload the discriminant selects.

pub mod command;
pub mod command_details;
pub mod details;
pub mod flow;
pub mod item_effect;


pub use command::{Command, CommandDetails, COMMAND_HEADER};
pub use flow::{Flow, FLOW_HEADER};
pub use item_effect::{ItemEffect, ItemEffectDetails, ITEM_EFFECT_HEADER};
