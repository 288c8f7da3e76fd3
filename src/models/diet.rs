//! Dietary classification of foods and the user's dietary preference

use serde::{Deserialize, Serialize};

/// Dietary class of a food entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietClass {
    Vegetarian,
    NonVegetarian,
    /// Dishes that come in both forms (biryani, pizza, sandwich)
    Mixed,
}

impl DietClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietClass::Vegetarian => "vegetarian",
            DietClass::NonVegetarian => "non-vegetarian",
            DietClass::Mixed => "mixed",
        }
    }
}

/// Dietary preference chosen by the user for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietPreference {
    Vegetarian,
    NonVegetarian,
    #[default]
    Unset,
}

impl DietPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "vegetarian",
            DietPreference::NonVegetarian => "non-vegetarian",
            DietPreference::Unset => "unset",
        }
    }

    /// Parse from string, accepting the usual spellings
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "vegetarian" | "veg" => Some(DietPreference::Vegetarian),
            "non-vegetarian" | "nonvegetarian" | "non-veg" | "nonveg" => {
                Some(DietPreference::NonVegetarian)
            }
            "unset" | "none" | "" => Some(DietPreference::Unset),
            _ => None,
        }
    }

    /// Whether a food of the given class may be reported under this preference
    pub fn allows(&self, class: DietClass) -> bool {
        !(*self == DietPreference::Vegetarian && class == DietClass::NonVegetarian)
    }
}
