//! What this binary was built from
//!
//! `build.rs` stamps a build number and a UTC timestamp into the environment
//! at compile time. The table counts describe what the estimator ships with.

use serde::Serialize;

use crate::estimator::{FOOD_TABLE, QUANTITY_RULES};
use crate::models::DietPreference;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const STAMPED_BUILD_NUMBER: Option<&str> = option_env!("CALTRACK_BUILD_NUMBER");
const STAMPED_TIMESTAMP: Option<&str> = option_env!("CALTRACK_BUILD_TIMESTAMP");

/// 0 for builds that bypassed `build.rs`
fn parse_build_number(stamp: Option<&str>) -> u64 {
    stamp.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub foods_known: usize,
    pub vegetarian_foods: usize,
    pub quantity_rules: usize,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            build_number: parse_build_number(STAMPED_BUILD_NUMBER),
            build_timestamp: STAMPED_TIMESTAMP.unwrap_or("unknown"),
            foods_known: FOOD_TABLE.len(),
            vegetarian_foods: FOOD_TABLE
                .iter()
                .filter(|e| DietPreference::Vegetarian.allows(e.diet_class))
                .count(),
            quantity_rules: QUANTITY_RULES.len(),
        }
    }

    /// One line for stderr at startup
    pub fn banner(&self) -> String {
        format!(
            "caltrack v{} (build #{}, {}): {} foods ({} vegetarian), {} quantity rules",
            self.version,
            self.build_number,
            self.build_timestamp,
            self.foods_known,
            self.vegetarian_foods,
            self.quantity_rules
        )
    }
}

pub fn print_startup_banner() {
    eprintln!("{}", BuildInfo::current().banner());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_number() {
        assert_eq!(parse_build_number(Some("42")), 42);
        assert_eq!(parse_build_number(Some("7\n")), 7);
        assert_eq!(parse_build_number(Some("4x2")), 0);
        assert_eq!(parse_build_number(None), 0);
    }

    #[test]
    fn test_current_counts_builtin_tables() {
        let info = BuildInfo::current();
        assert_eq!(info.foods_known, 30);
        assert_eq!(info.vegetarian_foods, 23);
        assert_eq!(info.quantity_rules, 8);
    }

    #[test]
    fn test_banner() {
        let info = BuildInfo {
            version: "0.1.0",
            build_number: 12,
            build_timestamp: "2026-03-01T08:00:00Z",
            foods_known: 30,
            vegetarian_foods: 23,
            quantity_rules: 8,
        };
        assert_eq!(
            info.banner(),
            "caltrack v0.1.0 (build #12, 2026-03-01T08:00:00Z): 30 foods (23 vegetarian), 8 quantity rules"
        );
    }
}
