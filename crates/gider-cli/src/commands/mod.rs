//! CLI command implementations
//!
//! - `forecast` - Offline forecast from a JSON file
//! - `serve` - Web server command

pub mod forecast;
pub mod serve;

pub use forecast::*;
pub use serve::*;
