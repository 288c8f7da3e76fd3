//! Built-in food table
//!
//! Per-serving calorie figures for common dishes. Declaration order matters:
//! matched items are reported in this order.

use crate::models::DietClass::{Mixed, NonVegetarian, Vegetarian};
use crate::models::{FoodEntry, Variation as V};

pub static FOOD_TABLE: &[FoodEntry] = &[
    // Vegetarian and mixed dishes
    FoodEntry::new("pizza", 266.0, Mixed, &[
        V { keyword: "slice", factor: 0.5 }, V { keyword: "large", factor: 1.5 }, V { keyword: "small", factor: 0.7 },
        V { keyword: "margherita", factor: 0.9 }, V { keyword: "veggie", factor: 0.8 },
    ]),
    FoodEntry::new("veggie burger", 390.0, Vegetarian, &[
        V { keyword: "small", factor: 0.8 }, V { keyword: "large", factor: 1.3 },
    ]),
    FoodEntry::new("biryani", 290.0, Mixed, &[
        V { keyword: "veg", factor: 0.8 }, V { keyword: "chicken", factor: 1.2 }, V { keyword: "mutton", factor: 1.4 }, V { keyword: "plate", factor: 1.5 },
    ]),
    FoodEntry::new("rice", 130.0, Vegetarian, &[
        V { keyword: "cup", factor: 1.0 }, V { keyword: "bowl", factor: 1.2 }, V { keyword: "plate", factor: 1.5 }, V { keyword: "fried", factor: 1.3 },
    ]),
    FoodEntry::new("dal", 115.0, Vegetarian, &[
        V { keyword: "cup", factor: 1.0 }, V { keyword: "bowl", factor: 1.2 }, V { keyword: "tadka", factor: 1.3 },
    ]),
    FoodEntry::new("roti", 71.0, Vegetarian, &[
        V { keyword: "chapati", factor: 1.0 }, V { keyword: "butter", factor: 1.4 },
    ]),
    FoodEntry::new("naan", 262.0, Vegetarian, &[
        V { keyword: "butter", factor: 1.2 }, V { keyword: "garlic", factor: 1.1 },
    ]),
    FoodEntry::new("paneer", 321.0, Vegetarian, &[
        V { keyword: "curry", factor: 1.0 }, V { keyword: "tikka", factor: 0.9 }, V { keyword: "butter masala", factor: 1.3 }, V { keyword: "makhani", factor: 1.4 },
    ]),
    FoodEntry::new("pasta", 131.0, Vegetarian, &[
        V { keyword: "plate", factor: 2.0 }, V { keyword: "bowl", factor: 1.5 }, V { keyword: "alfredo", factor: 2.5 }, V { keyword: "marinara", factor: 1.8 },
    ]),
    FoodEntry::new("salad", 33.0, Vegetarian, &[
        V { keyword: "caesar", factor: 4.0 }, V { keyword: "garden", factor: 1.0 }, V { keyword: "greek", factor: 3.0 },
    ]),
    FoodEntry::new("sandwich", 200.0, Mixed, &[
        V { keyword: "club", factor: 1.5 }, V { keyword: "grilled cheese", factor: 1.2 }, V { keyword: "veg", factor: 0.9 },
    ]),
    FoodEntry::new("samosa", 91.0, Vegetarian, &[
        V { keyword: "aloo", factor: 1.0 }, V { keyword: "large", factor: 1.3 },
    ]),
    FoodEntry::new("dosa", 133.0, Vegetarian, &[
        V { keyword: "masala", factor: 1.2 }, V { keyword: "plain", factor: 1.0 }, V { keyword: "rava", factor: 1.1 },
    ]),
    FoodEntry::new("idli", 39.0, Vegetarian, &[
        V { keyword: "piece", factor: 1.0 }, V { keyword: "rava", factor: 1.2 },
    ]),
    FoodEntry::new("poha", 180.0, Vegetarian, &[
        V { keyword: "bowl", factor: 1.0 }, V { keyword: "plate", factor: 1.3 },
    ]),
    FoodEntry::new("upma", 200.0, Vegetarian, &[
        V { keyword: "bowl", factor: 1.0 }, V { keyword: "rava", factor: 1.0 },
    ]),
    // Non-vegetarian
    FoodEntry::new("chicken", 165.0, NonVegetarian, &[
        V { keyword: "curry", factor: 1.8 }, V { keyword: "tikka", factor: 1.2 }, V { keyword: "fried", factor: 2.2 }, V { keyword: "grilled", factor: 1.0 }, V { keyword: "butter", factor: 2.5 },
    ]),
    FoodEntry::new("mutton", 294.0, NonVegetarian, &[
        V { keyword: "curry", factor: 1.5 }, V { keyword: "biryani", factor: 1.3 }, V { keyword: "kebab", factor: 1.2 },
    ]),
    FoodEntry::new("fish", 206.0, NonVegetarian, &[
        V { keyword: "curry", factor: 1.3 }, V { keyword: "fried", factor: 1.8 }, V { keyword: "grilled", factor: 1.0 }, V { keyword: "fry", factor: 1.6 },
    ]),
    FoodEntry::new("egg", 68.0, NonVegetarian, &[
        V { keyword: "boiled", factor: 1.0 }, V { keyword: "fried", factor: 1.5 }, V { keyword: "scrambled", factor: 1.3 }, V { keyword: "omelette", factor: 1.8 },
    ]),
    FoodEntry::new("prawn", 99.0, NonVegetarian, &[
        V { keyword: "curry", factor: 1.5 }, V { keyword: "fried", factor: 1.8 },
    ]),
    FoodEntry::new("beef", 250.0, NonVegetarian, &[
        V { keyword: "curry", factor: 1.4 }, V { keyword: "steak", factor: 1.2 },
    ]),
    FoodEntry::new("burger", 540.0, NonVegetarian, &[
        V { keyword: "chicken", factor: 1.0 }, V { keyword: "beef", factor: 1.2 }, V { keyword: "fish", factor: 0.9 },
    ]),
    // Beverages
    FoodEntry::new("coffee", 2.0, Vegetarian, &[
        V { keyword: "black", factor: 1.0 }, V { keyword: "latte", factor: 25.0 }, V { keyword: "cappuccino", factor: 15.0 }, V { keyword: "mocha", factor: 35.0 },
    ]),
    FoodEntry::new("tea", 2.0, Vegetarian, &[
        V { keyword: "plain", factor: 1.0 }, V { keyword: "chai", factor: 8.0 }, V { keyword: "milk", factor: 10.0 }, V { keyword: "green", factor: 1.0 },
    ]),
    FoodEntry::new("juice", 45.0, Vegetarian, &[
        V { keyword: "orange", factor: 1.2 }, V { keyword: "apple", factor: 1.1 }, V { keyword: "mango", factor: 1.4 },
    ]),
    // Snacks and sweets
    FoodEntry::new("chips", 152.0, Vegetarian, &[
        V { keyword: "packet", factor: 3.0 }, V { keyword: "small", factor: 1.0 },
    ]),
    FoodEntry::new("chocolate", 50.0, Vegetarian, &[
        V { keyword: "bar", factor: 5.0 }, V { keyword: "piece", factor: 1.0 }, V { keyword: "dark", factor: 0.9 },
    ]),
    FoodEntry::new("ice cream", 137.0, Vegetarian, &[
        V { keyword: "scoop", factor: 1.0 }, V { keyword: "cup", factor: 1.5 },
    ]),
    FoodEntry::new("cake", 257.0, Vegetarian, &[
        V { keyword: "slice", factor: 1.0 }, V { keyword: "piece", factor: 1.0 }, V { keyword: "chocolate", factor: 1.2 },
    ]),
];

/// Look up an entry by exact (lowercase) name
pub fn find(name: &str) -> Option<&'static FoodEntry> {
    FOOD_TABLE.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietClass;
    use std::collections::HashSet;

    #[test]
    fn test_table_names_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for entry in FOOD_TABLE {
            assert!(seen.insert(entry.name), "duplicate entry {}", entry.name);
            assert_eq!(entry.name, entry.name.to_lowercase());
            for v in entry.variations {
                assert_eq!(v.keyword, v.keyword.to_lowercase());
                assert!(v.factor > 0.0);
            }
        }
        assert_eq!(FOOD_TABLE.len(), 30);
    }

    #[test]
    fn test_find() {
        let biryani = find("biryani").unwrap();
        assert_eq!(biryani.base_calories, 290.0);
        assert_eq!(biryani.diet_class, DietClass::Mixed);
        assert!(find("sushi").is_none());
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(FOOD_TABLE[0].name, "pizza");
        assert_eq!(FOOD_TABLE[2].name, "biryani");
        assert_eq!(FOOD_TABLE[FOOD_TABLE.len() - 1].name, "cake");
    }
}
