//! CLI commands

pub mod content;
pub mod resolve;
pub mod table;
pub mod video;
