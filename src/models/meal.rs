//! Meal record model
//!
//! An entry in the session's append-only daily log.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::MatchResult;

/// Meal type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    #[default]
    Unspecified,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::Unspecified => "unspecified",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            "snack" => MealType::Snack,
            _ => MealType::Unspecified,
        }
    }
}

/// A logged meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: u64,
    pub logged_at: DateTime<Local>,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub description: String,
    pub items: Vec<MatchResult>,
    pub calories: i64,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub dietary_note: String,
}
