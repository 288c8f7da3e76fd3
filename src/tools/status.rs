//! Caltrack Status Tool
//!
//! Runtime status of the service, plus the usage guide handed to assistants.

use std::time::Instant;

use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::models::DietPreference;
use crate::session::DailySummary;

/// Usage instructions for AI assistants
pub const USAGE_INSTRUCTIONS: &str = r#"
# Caltrack Usage Instructions

Caltrack estimates calories from a short, plain-language food description and
keeps a running log for the current day.

## Typical session

1. `set_diet_preference` with `vegetarian` or `non-vegetarian` (once per session)
2. `log_food` for each meal the user describes, e.g. "two rice and dal tadka"
3. `get_daily_summary` / `get_recommendations` when the user asks how they are doing

Use `estimate_calories` when the user only wants a number and nothing should be logged.

## Writing descriptions

Pass the user's words through mostly unchanged. The estimator looks for:

- **Food names**: pizza, biryani, rice, dal, roti, naan, paneer, dosa, chicken, coffee, ...
  (`list_known_foods` returns the full table)
- **Quantities**: "3 slices", "2 bowls", "1 plate", "one", "a", "two", "couple",
  "three", "half", "quarter". Only the first quantity found applies.
- **Variations**: "large", "fried", "butter", "plate", "latte", ...
  Every variation present scales the calories, and they multiply together.

## Confidence

- `high`: matched a known food
- `low`: nothing matched; the number is a rough guess by category.
  Ask the user for a more specific description if accuracy matters.

## Vegetarian preference

Non-vegetarian foods are left out of the estimate and `dietary_note` says which
ones were skipped. Mention the note to the user.

## Notes

- The log covers one day and starts fresh at local midnight
- `reset_day` clears today's log; the dietary preference is kept
- `log_food` handles one description at a time. If it reports that an analysis
  is in progress, wait and retry.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct CaltrackStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub foods_known: usize,

    /// Session information
    pub diet_preference: DietPreference,
    pub meals_logged_today: usize,
    pub calories_today: i64,
    pub daily_target: u32,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, summary: &DailySummary) -> CaltrackStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        CaltrackStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            foods_known: build_info.foods_known,
            diet_preference: summary.diet_preference,
            meals_logged_today: summary.meal_count,
            calories_today: summary.total_calories,
            daily_target: summary.daily_target,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
