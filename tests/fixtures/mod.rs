//! Test fixtures and data generators
//!
//! This module contains builders and hand-made buffers for stage file tests.

pub mod builders;

pub use builders::*;
