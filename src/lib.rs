//! Calorie Tracker (caltrack) Library
//!
//! Calorie estimation from free-text food descriptions, plus the daily log
//! and recommendations served over MCP.

pub mod build_info;
pub mod config;
pub mod estimator;
pub mod mcp;
pub mod models;
pub mod session;
pub mod tools;

pub use estimator::Estimator;
pub use models::{DietPreference, EstimateResponse, MatchResult};
