//! Estimate results
//!
//! What the estimator hands back for one food description.

use serde::{Deserialize, Serialize};

use super::DietClass;

/// How the calorie figure was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Matched a table entry
    High,
    /// Fallback heuristic
    Low,
}

/// One recognized (or guessed) food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    /// Human label such as "2 servings"
    pub quantity: String,
    pub calories: i64,
    pub confidence: Confidence,
    pub diet_class: DietClass,
}

/// Full estimate for a description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub items: Vec<MatchResult>,
    pub total_calories: i64,
    /// Empty unless a vegetarian preference caused items to be skipped
    pub dietary_note: String,
}

impl EstimateResponse {
    /// True when the result came from the fallback heuristic
    pub fn is_fallback(&self) -> bool {
        self.items.len() == 1 && self.items[0].confidence == Confidence::Low
    }
}
