//! Materialized logger
//!
//! - [`Logger`]: cheap, cloneable handle with an atomic threshold
//! - Sinks: console (stdout, stderr or an in-memory buffer) and file
//! - Macros: `log_debug!` .. `log_critical!`

pub mod handle;
pub mod macros;
pub mod sinks;

pub use handle::Logger;
pub use sinks::{ConsoleTarget, SharedBuffer};
