//! Daily Log MCP Tools
//!
//! Stats, history and reset for the session's meal log.

use chrono::Local;
use serde::Serialize;

use crate::models::MealRecord;
use crate::session::{DailySummary, SharedSession};

/// Response for get_meal_history
#[derive(Debug, Serialize)]
pub struct MealHistoryResponse {
    pub meals: Vec<MealRecord>,
    pub total: usize,
    pub last_input: Option<String>,
}

/// Response for reset_day
#[derive(Debug, Serialize)]
pub struct ResetDayResponse {
    pub success: bool,
    pub cleared_meals: usize,
    pub cleared_calories: i64,
    pub message: String,
}

/// Today's totals; starts a new day first if the date has changed
pub async fn get_daily_summary(session: &SharedSession) -> DailySummary {
    let mut session = session.lock().await;
    session.roll_over(Local::now().date_naive());
    session.summary()
}

pub async fn get_meal_history(session: &SharedSession, limit: usize) -> MealHistoryResponse {
    let mut session = session.lock().await;
    session.roll_over(Local::now().date_naive());
    let meals: Vec<MealRecord> = session.history(limit).into_iter().cloned().collect();
    MealHistoryResponse {
        total: meals.len(),
        meals,
        last_input: session.last_input().map(str::to_string),
    }
}

pub async fn reset_day(session: &SharedSession) -> ResetDayResponse {
    let mut session = session.lock().await;
    let before = session.summary();
    session.reset_day(Local::now().date_naive());
    ResetDayResponse {
        success: true,
        cleared_meals: before.meal_count,
        cleared_calories: before.total_calories,
        message: format!(
            "Cleared {} meals ({} kcal) from today's log",
            before.meal_count, before.total_calories
        ),
    }
}
