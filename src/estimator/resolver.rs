//! Food-description resolver
//!
//! Matches a description against the food table and turns every hit into a
//! calorie figure:
//!
//! 1. every entry whose name occurs in the lowercased text is a hit, in table order
//! 2. under a vegetarian preference, non-vegetarian hits are dropped and remembered
//! 3. quantity comes from the first matching quantity rule (shared by all hits)
//! 4. every variation keyword present multiplies the running factor
//! 5. calories = round(base x quantity x factor)
//!
//! With no hits, a single low-confidence guess from [`fallback`] is returned.
//!
//! Matching is plain substring search. A name that occurs inside another name
//! or inside a variation keyword counts again ("veggie burger" also hits
//! "burger"), which keeps results identical to the existing widget.

use std::time::Duration;

use tracing::debug;

use super::fallback;
use super::quantity::{resolve_quantity, QuantityRule, QUANTITY_RULES};
use super::table::FOOD_TABLE;
use crate::models::{Confidence, DietPreference, EstimateResponse, FoodEntry, MatchResult};

/// Calorie estimator over a food table and a quantity rule list
#[derive(Debug, Clone, Copy)]
pub struct Estimator<'a> {
    foods: &'a [FoodEntry],
    quantity_rules: &'a [QuantityRule],
    latency: Duration,
}

impl Estimator<'static> {
    /// Estimator over the built-in tables
    pub fn builtin() -> Self {
        Self::new(FOOD_TABLE, &QUANTITY_RULES)
    }
}

impl Default for Estimator<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Estimator<'a> {
    pub fn new(foods: &'a [FoodEntry], quantity_rules: &'a [QuantityRule]) -> Self {
        Self {
            foods,
            quantity_rules,
            latency: Duration::ZERO,
        }
    }

    /// Artificial delay applied by [`Estimator::analyze`]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn foods(&self) -> &'a [FoodEntry] {
        self.foods
    }

    /// Estimate calories for a description.
    ///
    /// `text` is expected to be trimmed and non-empty; callers enforce that.
    /// The result depends only on the arguments.
    pub fn estimate(&self, text: &str, preference: DietPreference) -> EstimateResponse {
        let description = text.to_lowercase();

        let mut items = Vec::new();
        let mut excluded = Vec::new();

        for entry in self.foods.iter().filter(|e| description.contains(e.name)) {
            if !preference.allows(entry.diet_class) {
                debug!(food = entry.name, "skipped for vegetarian preference");
                excluded.push(entry.display_name());
                continue;
            }
            items.push(self.resolve_entry(entry, &description));
        }

        if items.is_empty() {
            let guess = fallback::estimate_general(&description);
            debug!(name = %guess.name, calories = guess.calories, "no table match, using fallback");
            items.push(guess);
        }

        let total_calories = items.iter().fold(0_i64, |acc, i| acc.saturating_add(i.calories));

        let dietary_note = if preference == DietPreference::Vegetarian && !excluded.is_empty() {
            format!(
                "⚠️ Note: {} skipped to match your vegetarian preference.",
                excluded.join(", ")
            )
        } else {
            String::new()
        };

        EstimateResponse {
            items,
            total_calories,
            dietary_note,
        }
    }

    /// Same as [`Estimator::estimate`], behind the asynchronous interface
    /// callers use for what used to be a remote analysis call.
    pub async fn analyze(&self, text: &str, preference: DietPreference) -> EstimateResponse {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.estimate(text, preference)
    }

    fn resolve_entry(&self, entry: &FoodEntry, description: &str) -> MatchResult {
        let quantity = resolve_quantity(description, self.quantity_rules);

        let multiplier = entry
            .variations_in(description)
            .fold(quantity.multiplier, |acc, v| acc * v.factor);

        // `as` saturates at i64::MAX for absurd quantities
        let calories = (entry.base_calories * quantity.quantity as f64 * multiplier).round() as i64;

        debug!(
            food = entry.name,
            quantity = quantity.quantity,
            multiplier,
            calories,
            "matched food"
        );

        MatchResult {
            name: entry.display_name(),
            quantity: quantity.label(),
            calories,
            confidence: Confidence::High,
            diet_class: entry.diet_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietClass, Variation};

    fn estimate(text: &str, preference: DietPreference) -> EstimateResponse {
        Estimator::builtin().estimate(text, preference)
    }

    fn names(resp: &EstimateResponse) -> Vec<&str> {
        resp.items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_single_keyword_plain() {
        let resp = estimate("dal", DietPreference::Unset);
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].name, "Dal");
        assert_eq!(resp.items[0].calories, 115);
        assert_eq!(resp.items[0].quantity, "1 serving");
        assert_eq!(resp.items[0].confidence, Confidence::High);
        assert_eq!(resp.total_calories, 115);
        assert!(resp.dietary_note.is_empty());
    }

    #[test]
    fn test_word_quantity() {
        let resp = estimate("two rice", DietPreference::Unset);
        assert_eq!(names(&resp), vec!["Rice"]);
        assert_eq!(resp.items[0].quantity, "2 servings");
        assert_eq!(resp.items[0].calories, 260);
    }

    #[test]
    fn test_numeric_quantity_with_variation() {
        // 3 x 115 x bowl 1.2
        let resp = estimate("3 bowls of dal", DietPreference::Unset);
        assert_eq!(resp.items[0].quantity, "3 servings");
        assert_eq!(resp.items[0].calories, 414);
    }

    #[test]
    fn test_plate_chicken_biryani() {
        let resp = estimate("one plate chicken biryani", DietPreference::Unset);
        // biryani x chicken 1.2 x plate 1.5, then chicken itself in table order
        assert_eq!(names(&resp), vec!["Biryani", "Chicken"]);
        assert_eq!(resp.items[0].calories, 522);
        assert_eq!(resp.items[0].quantity, "1 serving");
        assert_eq!(resp.items[1].calories, 165);
        assert_eq!(resp.total_calories, 687);
    }

    #[test]
    fn test_variations_compound() {
        // pizza: large 1.5 x margherita 0.9
        let resp = estimate("large margherita pizza", DietPreference::Unset);
        let expected = (266.0_f64 * 1.0 * (1.0 * 1.5 * 0.9)).round() as i64;
        assert_eq!(resp.items[0].calories, expected);
        assert_eq!(expected, 359);
    }

    #[test]
    fn test_half_multiplier() {
        let resp = estimate("half dosa", DietPreference::Unset);
        assert_eq!(resp.items[0].quantity, "1 serving");
        assert_eq!(resp.items[0].calories, 67);
    }

    #[test]
    fn test_fullwidth_digit_is_not_a_count() {
        // half 0.5 x slice 0.5
        let resp = estimate("２ slices half pizza", DietPreference::Unset);
        assert_eq!(names(&resp), vec!["Pizza"]);
        assert_eq!(resp.items[0].quantity, "1 serving");
        assert_eq!(resp.items[0].calories, 67);
    }

    #[test]
    fn test_large_quantity_scales() {
        let resp = estimate("99999999999 pieces cake", DietPreference::Unset);
        assert_eq!(resp.items[0].quantity, "99999999999 servings");
        assert_eq!(resp.items[0].calories, 25_699_999_999_743);
    }

    #[test]
    fn test_overflowing_quantity_saturates() {
        let resp = estimate("99999999999999999999999 pieces cake", DietPreference::Unset);
        assert_eq!(resp.items[0].calories, i64::MAX);

        let resp = estimate("99999999999999999999999 pieces chocolate cake", DietPreference::Unset);
        assert_eq!(names(&resp), vec!["Chocolate", "Cake"]);
        assert_eq!(resp.total_calories, i64::MAX);
    }

    #[test]
    fn test_substring_double_count_preserved() {
        let resp = estimate("large veggie burger", DietPreference::Unset);
        // "burger" sits inside "veggie burger" and "egg" inside "veggie"
        assert_eq!(names(&resp), vec!["Veggie burger", "Egg", "Burger"]);
        assert_eq!(resp.items[0].calories, 507);
        assert_eq!(resp.items[1].calories, 68);
        assert_eq!(resp.items[2].calories, 540);
        assert_eq!(resp.total_calories, 1115);
    }

    #[test]
    fn test_vegetarian_filters_non_veg() {
        let resp = estimate("chicken curry", DietPreference::Vegetarian);
        assert!(resp.is_fallback());
        assert_eq!(resp.items[0].confidence, Confidence::Low);
        assert_eq!(resp.total_calories, resp.items[0].calories);
        assert!(resp.dietary_note.contains("Chicken"));
    }

    #[test]
    fn test_vegetarian_keeps_mixed_and_notes_exclusion() {
        let resp = estimate("chicken biryani", DietPreference::Vegetarian);
        assert_eq!(names(&resp), vec!["Biryani"]);
        assert_eq!(resp.items[0].calories, 348);
        assert!(!resp.dietary_note.is_empty());
    }

    #[test]
    fn test_note_only_for_vegetarian_with_exclusions() {
        assert!(estimate("chicken curry", DietPreference::Unset).dietary_note.is_empty());
        assert!(estimate("chicken curry", DietPreference::NonVegetarian).dietary_note.is_empty());
        assert!(estimate("paneer tikka", DietPreference::Vegetarian).dietary_note.is_empty());
    }

    #[test]
    fn test_no_match_uses_fallback() {
        let resp = estimate("Bowl of Tomato Soup", DietPreference::Unset);
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].name, "bowl of tomato");
        assert_eq!(resp.items[0].calories, 120);
        assert_eq!(resp.total_calories, 120);
        assert!(resp.dietary_note.is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let lower = estimate("paneer butter masala", DietPreference::Unset);
        let upper = estimate("PANEER Butter Masala", DietPreference::Unset);
        assert_eq!(lower, upper);
        // butter masala 1.3, makhani absent
        assert_eq!(lower.items[0].calories, 417);
    }

    #[test]
    fn test_idempotent() {
        let a = estimate("2 slices of chocolate cake", DietPreference::Vegetarian);
        let b = estimate("2 slices of chocolate cake", DietPreference::Vegetarian);
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_table() {
        static FOODS: &[FoodEntry] = &[FoodEntry::new(
            "soup",
            100.0,
            DietClass::Vegetarian,
            &[Variation { keyword: "creamy", factor: 2.0 }],
        )];
        let estimator = Estimator::new(FOODS, &[]);
        let resp = estimator.estimate("two creamy soup", DietPreference::Unset);
        // no quantity rules configured
        assert_eq!(resp.items[0].calories, 200);
        assert_eq!(resp.items[0].quantity, "1 serving");
    }

    #[tokio::test]
    async fn test_analyze_matches_estimate() {
        let estimator = Estimator::builtin().with_latency(Duration::from_millis(5));
        let text = "masala dosa and filter coffee";
        let expected = estimator.estimate(text, DietPreference::Unset);
        assert_eq!(estimator.analyze(text, DietPreference::Unset).await, expected);
    }
}
