//! Core types shared across loggen crates
//!
//! - **Levels**: the fixed severity scale and the logger threshold
//! - **Schema constants**: canonical field keys, template placeholders and
//!   naming patterns

pub mod level;
pub mod schema;

pub use level::{Level, ParseLevelError, Threshold};
