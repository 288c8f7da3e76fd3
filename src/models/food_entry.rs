//! Food entry model
//!
//! A recognizable food with its base calories and keyword variations.
//! Entries are `const`-constructible so the built-in table can live in a static.

use serde::Serialize;

use super::DietClass;

/// A keyword whose presence scales an entry's calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Variation {
    pub keyword: &'static str,
    pub factor: f64,
}

/// A food recognized by substring match on its name
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodEntry {
    pub name: &'static str,
    /// Calories for one plain serving
    pub base_calories: f64,
    pub diet_class: DietClass,
    /// Declaration order is the order factors are applied in
    pub variations: &'static [Variation],
}

impl FoodEntry {
    pub const fn new(
        name: &'static str,
        base_calories: f64,
        diet_class: DietClass,
        variations: &'static [Variation],
    ) -> Self {
        Self {
            name,
            base_calories,
            diet_class,
            variations,
        }
    }

    /// Display name with the first character upper-cased ("ice cream" -> "Ice cream")
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Variations whose keyword appears in the (lowercased) text, in declaration order
    pub fn variations_in<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Variation> + 'a {
        self.variations
            .iter()
            .filter(move |v| text.contains(v.keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: FoodEntry = FoodEntry::new(
        "ice cream",
        137.0,
        DietClass::Vegetarian,
        &[
            Variation { keyword: "scoop", factor: 1.0 },
            Variation { keyword: "cup", factor: 1.5 },
        ],
    );

    #[test]
    fn test_display_name() {
        assert_eq!(SAMPLE.display_name(), "Ice cream");
    }

    #[test]
    fn test_variations_in_keeps_declaration_order() {
        let found: Vec<&str> = SAMPLE
            .variations_in("a cup and a scoop of ice cream")
            .map(|v| v.keyword)
            .collect();
        assert_eq!(found, vec!["scoop", "cup"]);
    }

    #[test]
    fn test_variations_in_none() {
        assert_eq!(SAMPLE.variations_in("ice cream").count(), 0);
    }
}
