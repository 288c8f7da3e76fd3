//! Session state
//!
//! The running daily total, the meal log and the dietary preference. The log
//! is append-only; one resolve-and-log sequence runs at a time, tracked by an
//! [`AnalysisGuard`] separate from the state lock (see
//! [`crate::tools::estimates::log_food`]).

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{DietPreference, EstimateResponse, MealRecord, MealType};

/// Session shared between MCP tool calls
pub type SharedSession = Arc<Mutex<Session>>;

/// Held for the whole of a resolve-and-log sequence. Reads never touch it.
pub type AnalysisGuard = Arc<Mutex<()>>;

pub fn analysis_guard() -> AnalysisGuard {
    Arc::new(Mutex::new(()))
}

/// Session error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please wait for the current analysis to complete")]
    Busy,

    #[error("Food description must not be empty")]
    EmptyDescription,

    #[error("Dietary preference is already set to {current}")]
    PreferenceLocked { current: &'static str },

    #[error("Dietary preference must be vegetarian or non-vegetarian")]
    InvalidPreference,
}

/// Daily statistics
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_calories: i64,
    pub daily_target: u32,
    /// Negative once the target is exceeded
    pub remaining: i64,
    pub percent_of_target: f64,
    pub meal_count: usize,
    pub diet_preference: DietPreference,
}

#[derive(Debug)]
pub struct Session {
    daily_target: u32,
    preference: DietPreference,
    current_day: NaiveDate,
    total_calories: i64,
    meals: Vec<MealRecord>,
    next_id: u64,
    last_input: Option<String>,
}

impl Session {
    pub fn new(daily_target: u32, preference: DietPreference, today: NaiveDate) -> Self {
        Self {
            daily_target,
            preference,
            current_day: today,
            total_calories: 0,
            meals: Vec::new(),
            next_id: 1,
            last_input: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.daily_target,
            config.diet_preference,
            Local::now().date_naive(),
        )
    }

    pub fn shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn preference(&self) -> DietPreference {
        self.preference
    }

    pub fn daily_target(&self) -> u32 {
        self.daily_target
    }

    pub fn last_input(&self) -> Option<&str> {
        self.last_input.as_deref()
    }

    pub fn meal_count(&self) -> usize {
        self.meals.len()
    }

    /// Set the dietary preference. Once set it stays for the session;
    /// repeating the same value is accepted.
    pub fn set_preference(&mut self, preference: DietPreference) -> Result<DietPreference, SessionError> {
        if preference == DietPreference::Unset {
            return Err(SessionError::InvalidPreference);
        }
        if self.preference != DietPreference::Unset && self.preference != preference {
            return Err(SessionError::PreferenceLocked {
                current: self.preference.as_str(),
            });
        }
        if self.preference != preference {
            info!(preference = preference.as_str(), "dietary preference set");
        }
        self.preference = preference;
        Ok(preference)
    }

    /// Trim and validate a raw description, remembering it as the last input
    pub fn accept_input(&mut self, raw: &str) -> Result<String, SessionError> {
        let description = raw.trim();
        if description.is_empty() {
            warn!("rejected empty food description");
            return Err(SessionError::EmptyDescription);
        }
        self.last_input = Some(description.to_string());
        Ok(description.to_string())
    }

    /// Start a new day if `today` is past the current one. Returns true on rollover.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        if today == self.current_day {
            return false;
        }
        info!(
            from = %self.current_day,
            to = %today,
            meals = self.meals.len(),
            "new day, clearing meal log"
        );
        self.current_day = today;
        self.total_calories = 0;
        self.meals.clear();
        true
    }

    /// Append an estimate to the log and add it to the daily total
    pub fn log_estimate(
        &mut self,
        description: &str,
        meal_type: MealType,
        response: &EstimateResponse,
        now: DateTime<Local>,
    ) -> &MealRecord {
        self.roll_over(now.date_naive());

        let record = MealRecord {
            id: self.next_id,
            logged_at: now,
            date: self.current_day,
            meal_type,
            description: description.to_string(),
            items: response.items.clone(),
            calories: response.total_calories,
            dietary_note: response.dietary_note.clone(),
        };
        self.next_id += 1;
        self.total_calories = self.total_calories.saturating_add(record.calories);

        info!(
            id = record.id,
            calories = record.calories,
            daily_total = self.total_calories,
            "meal logged"
        );

        self.meals.push(record);
        &self.meals[self.meals.len() - 1]
    }

    pub fn summary(&self) -> DailySummary {
        let target = i64::from(self.daily_target);
        let percent = self.total_calories as f64 / f64::from(self.daily_target) * 100.0;
        DailySummary {
            date: self.current_day,
            total_calories: self.total_calories,
            daily_target: self.daily_target,
            remaining: target - self.total_calories,
            percent_of_target: (percent * 10.0).round() / 10.0,
            meal_count: self.meals.len(),
            diet_preference: self.preference,
        }
    }

    /// Most recent meals first
    pub fn history(&self, limit: usize) -> Vec<&MealRecord> {
        self.meals.iter().rev().take(limit).collect()
    }

    /// Clear today's log and total; preference and target are kept
    pub fn reset_day(&mut self, today: NaiveDate) {
        info!(meals = self.meals.len(), "daily log reset");
        self.current_day = today;
        self.total_calories = 0;
        self.meals.clear();
    }
}
