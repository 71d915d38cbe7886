//! Command handlers: bridge CLI args -> store/workflow -> output formatting.

pub mod config_cmd;
pub mod flights;
pub mod options;
pub mod util;
