//! Quantity extraction
//!
//! An ordered list of patterns; the first one that matches anywhere in the
//! text decides the quantity for every matched food. Numeric-unit rules are
//! checked before the word rules. Only ASCII digits count as a number.

use std::sync::LazyLock;

use regex::Regex;

/// One quantity pattern
#[derive(Debug, Clone)]
pub struct QuantityRule {
    pub pattern: Regex,
    /// Fixed quantity for word rules; `None` reads the number from capture group 1
    pub fixed_quantity: Option<u64>,
    pub multiplier: f64,
}

impl QuantityRule {
    fn numeric(pattern: &str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("quantity pattern is a valid regex"),
            fixed_quantity: None,
            multiplier: 1.0,
        }
    }

    fn word(pattern: &str, quantity: u64, multiplier: f64) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("quantity pattern is a valid regex"),
            fixed_quantity: Some(quantity),
            multiplier,
        }
    }

    /// Apply this rule to the text, or `None` if the pattern does not match
    pub fn apply(&self, text: &str) -> Option<QuantityMatch> {
        let caps = self.pattern.captures(text)?;
        let quantity = match self.fixed_quantity {
            Some(q) => q,
            // "0 slices" counts as one; numbers past u64 saturate
            None => match caps.get(1).map(|m| m.as_str().parse::<u64>()) {
                Some(Ok(0)) | None => 1,
                Some(Ok(n)) => n,
                Some(Err(_)) => u64::MAX,
            },
        };
        Some(QuantityMatch {
            quantity,
            multiplier: self.multiplier,
        })
    }
}

/// Result of quantity resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityMatch {
    pub quantity: u64,
    pub multiplier: f64,
}

impl Default for QuantityMatch {
    fn default() -> Self {
        Self {
            quantity: 1,
            multiplier: 1.0,
        }
    }
}

impl QuantityMatch {
    /// "1 serving" / "3 servings"
    pub fn label(&self) -> String {
        if self.quantity > 1 {
            format!("{} servings", self.quantity)
        } else {
            format!("{} serving", self.quantity)
        }
    }
}

/// Built-in rules, in evaluation order
pub static QUANTITY_RULES: LazyLock<Vec<QuantityRule>> = LazyLock::new(|| {
    vec![
        QuantityRule::numeric(r"([0-9]+)\s*(piece|pieces|slice|slices|serving|servings)"),
        QuantityRule::numeric(r"([0-9]+)\s*(cup|cups|bowl|bowls|glass|glasses)"),
        QuantityRule::numeric(r"([0-9]+)\s*(plate|plates|portion|portions)"),
        QuantityRule::word(r"(one|a|an)\s", 1, 1.0),
        QuantityRule::word(r"(two|couple)\s", 2, 1.0),
        QuantityRule::word(r"(three)\s", 3, 1.0),
        QuantityRule::word(r"(half|1/2)\s", 1, 0.5),
        QuantityRule::word(r"(quarter|1/4)\s", 1, 0.25),
    ]
});

/// First matching rule wins; no match means one plain serving
pub fn resolve_quantity(text: &str, rules: &[QuantityRule]) -> QuantityMatch {
    rules
        .iter()
        .find_map(|rule| rule.apply(text))
        .unwrap_or_default()
}
