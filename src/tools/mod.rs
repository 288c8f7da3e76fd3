//! MCP tool implementations

pub mod estimates;
pub mod log;
pub mod recommendations;
pub mod status;
