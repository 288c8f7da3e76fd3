//! Data models
//!
//! Plain structs shared by the estimator, the session and the MCP tools.

mod diet;
mod estimate;
mod food_entry;
mod meal;

pub use diet::{DietClass, DietPreference};
pub use estimate::{Confidence, EstimateResponse, MatchResult};
pub use food_entry::{FoodEntry, Variation};
pub use meal::{MealRecord, MealType};
