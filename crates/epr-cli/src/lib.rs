//! CLI library components for the ePR report tools.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
