//! Leaf and entity records
//!
//! Fixed-shape configuration leaves (collision boxes, hitboxes, death fades,
//! backgrounds, stage variables, conditions) and the three entity templates
//! (Block, Character, Item) that embed them.

pub mod background;
pub mod block;
pub mod character;
pub mod collision;
pub mod condition;
pub mod item;


pub use background::{Background, StageVar};
pub use block::Block;
pub use character::Character;
pub use collision::{ActorHitbox, DeathFade, EnemyCollision, PlayerCollision};
pub use condition::{BasicCondition, KeyCondition};
pub use item::Item;
