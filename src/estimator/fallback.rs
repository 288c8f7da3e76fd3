//! Fallback estimate for descriptions that match no table entry
//!
//! A coarse guess by food category, reported with low confidence.

use crate::models::{Confidence, DietClass, MatchResult};

/// Calories when nothing in the text hints at a category
pub const DEFAULT_CALORIES: f64 = 250.0;

/// Name used when the text has no words at all
pub const UNKNOWN_FOOD: &str = "Unknown food";

/// Category keywords and their calorie guess, checked in order
const CATEGORIES: &[(&[&str], f64)] = &[
    (&["salad", "fruit", "greens"], 80.0),
    (&["soup", "broth"], 120.0),
    (&["pizza", "burger", "fried", "kebab", "biryani", "pasta"], 450.0),
    (&["coffee", "latte", "tea", "chai"], 60.0),
];

const LARGER_PORTION_HINTS: &[&str] = &["two", "2", "slice", "slices"];
const LARGER_PORTION_FACTOR: f64 = 1.5;

/// Guess calories for a lowercased description
pub fn estimate_general(text: &str) -> MatchResult {
    let mut calories = CATEGORIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, cal)| *cal)
        .unwrap_or(DEFAULT_CALORIES);

    if LARGER_PORTION_HINTS.iter().any(|h| text.contains(h)) {
        calories *= LARGER_PORTION_FACTOR;
    }

    let name = text.split_whitespace().take(3).collect::<Vec<_>>().join(" ");

    MatchResult {
        name: if name.is_empty() { UNKNOWN_FOOD.to_string() } else { name },
        quantity: "1 serving".to_string(),
        calories: calories.round() as i64,
        confidence: Confidence::Low,
        diet_class: DietClass::Mixed,
    }
}
