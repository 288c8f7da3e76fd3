//! Estimate MCP Tools
//!
//! Estimating, logging and listing the foods the estimator knows.

use chrono::Local;
use serde::Serialize;
use tracing::warn;

use crate::estimator::Estimator;
use crate::models::{DietClass, DietPreference, EstimateResponse, FoodEntry, MealRecord, MealType};
use crate::session::{AnalysisGuard, SessionError, SharedSession};

/// Response for estimate_calories
#[derive(Debug, Serialize)]
pub struct EstimateCaloriesResponse {
    pub description: String,
    pub diet_preference: DietPreference,
    #[serde(flatten)]
    pub estimate: EstimateResponse,
}

/// Response for log_food
#[derive(Debug, Serialize)]
pub struct LogFoodResponse {
    pub meal: MealRecord,
    pub daily_total: i64,
    pub remaining: i64,
    pub message: String,
}

/// Summary of a food table entry
#[derive(Debug, Serialize)]
pub struct KnownFood {
    pub name: String,
    pub base_calories: f64,
    pub diet_class: DietClass,
    pub variations: Vec<&'static str>,
}

impl From<&FoodEntry> for KnownFood {
    fn from(entry: &FoodEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            base_calories: entry.base_calories,
            diet_class: entry.diet_class,
            variations: entry.variations.iter().map(|v| v.keyword).collect(),
        }
    }
}

/// Response for list_known_foods
#[derive(Debug, Serialize)]
pub struct ListKnownFoodsResponse {
    pub foods: Vec<KnownFood>,
    pub total: usize,
}

/// Estimate calories for a description without logging it
pub async fn estimate_calories(
    estimator: &Estimator<'_>,
    session: &SharedSession,
    description: &str,
) -> Result<EstimateCaloriesResponse, String> {
    let (description, preference) = {
        let mut session = session.lock().await;
        let description = session.accept_input(description).map_err(|e| e.to_string())?;
        (description, session.preference())
    };

    let estimate = estimator.analyze(&description, preference).await;

    Ok(EstimateCaloriesResponse {
        description,
        diet_preference: preference,
        estimate,
    })
}

/// Estimate a description and append it to today's log.
///
/// Only one of these runs at a time; a concurrent call fails with
/// [`SessionError::Busy`] instead of waiting. Readers holding the session
/// lock only delay the call.
pub async fn log_food(
    estimator: &Estimator<'_>,
    session: &SharedSession,
    in_progress: &AnalysisGuard,
    description: &str,
    meal_type: &str,
) -> Result<LogFoodResponse, String> {
    let _analysis = in_progress.try_lock().map_err(|_| {
        warn!("log_food called while another analysis is in progress");
        SessionError::Busy.to_string()
    })?;

    let (description, preference) = {
        let mut session = session.lock().await;
        let description = session.accept_input(description).map_err(|e| e.to_string())?;
        (description, session.preference())
    };

    let estimate = estimator.analyze(&description, preference).await;

    let mut session = session.lock().await;
    let meal = session
        .log_estimate(&description, MealType::from_str(meal_type), &estimate, Local::now())
        .clone();
    let summary = session.summary();

    let message = format!(
        "Logged {} kcal. Today: {} of {} kcal.",
        meal.calories, summary.total_calories, summary.daily_target
    );

    Ok(LogFoodResponse {
        meal,
        daily_total: summary.total_calories,
        remaining: summary.remaining,
        message,
    })
}

/// List the food table, optionally restricted to what a preference allows
pub fn list_known_foods(foods: &[FoodEntry], preference: Option<&str>) -> Result<ListKnownFoodsResponse, String> {
    let preference = match preference {
        Some(p) => DietPreference::from_str(p).ok_or_else(|| format!("Unknown dietary preference: {}", p))?,
        None => DietPreference::Unset,
    };

    let foods: Vec<KnownFood> = foods
        .iter()
        .filter(|e| preference.allows(e.diet_class))
        .map(KnownFood::from)
        .collect();
    let total = foods.len();

    Ok(ListKnownFoodsResponse { foods, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::FOOD_TABLE;
    use crate::session::{analysis_guard, Session};

    fn session(preference: DietPreference) -> SharedSession {
        Session::new(2000, preference, Local::now().date_naive()).shared()
    }

    #[tokio::test]
    async fn test_estimate_does_not_log() {
        let shared = session(DietPreference::Unset);
        let resp = estimate_calories(&Estimator::builtin(), &shared, "  two rice ").await.unwrap();
        assert_eq!(resp.description, "two rice");
        assert_eq!(resp.estimate.total_calories, 260);

        let session = shared.lock().await;
        assert_eq!(session.meal_count(), 0);
        assert_eq!(session.last_input(), Some("two rice"));
    }

    #[tokio::test]
    async fn test_estimate_uses_session_preference() {
        let shared = session(DietPreference::Vegetarian);
        let resp = estimate_calories(&Estimator::builtin(), &shared, "fish curry").await.unwrap();
        assert!(resp.estimate.is_fallback());
        assert!(!resp.estimate.dietary_note.is_empty());
    }

    #[tokio::test]
    async fn test_empty_description_rejected() {
        let shared = session(DietPreference::Unset);
        let err = estimate_calories(&Estimator::builtin(), &shared, "   ").await.unwrap_err();
        assert_eq!(err, "Food description must not be empty");
        let err = log_food(&Estimator::builtin(), &shared, &analysis_guard(), "", "lunch")
            .await
            .unwrap_err();
        assert_eq!(err, "Food description must not be empty");
    }

    #[tokio::test]
    async fn test_log_food_appends() {
        let shared = session(DietPreference::Unset);
        let estimator = Estimator::builtin();
        let guard = analysis_guard();

        let first = log_food(&estimator, &shared, &guard, "masala dosa", "breakfast").await.unwrap();
        assert_eq!(first.meal.id, 1);
        assert_eq!(first.meal.meal_type, MealType::Breakfast);
        // 133 x masala 1.2
        assert_eq!(first.meal.calories, 160);

        let second = log_food(&estimator, &shared, &guard, "two rice", "lunch").await.unwrap();
        assert_eq!(second.daily_total, 420);
        assert_eq!(second.remaining, 1580);
    }

    #[tokio::test]
    async fn test_log_food_busy_during_analysis() {
        let shared = session(DietPreference::Unset);
        let guard = analysis_guard();
        let _running = guard.lock().await;
        let err = log_food(&Estimator::builtin(), &shared, &guard, "dal", "lunch")
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::Busy.to_string());
        assert_eq!(shared.lock().await.meal_count(), 0);
    }

    #[tokio::test]
    async fn test_log_food_waits_for_reader() {
        let shared = session(DietPreference::Unset);
        let guard = analysis_guard();
        let reader = shared.lock().await;

        let task = tokio::spawn({
            let shared = shared.clone();
            let guard = guard.clone();
            async move { log_food(&Estimator::builtin(), &shared, &guard, "dal", "lunch").await }
        });
        tokio::task::yield_now().await;
        assert!(!task.is_finished());

        drop(reader);
        let logged = task.await.unwrap().unwrap();
        assert_eq!(logged.meal.calories, 115);
        assert_eq!(logged.daily_total, 115);
    }

    #[test]
    fn test_list_known_foods() {
        let all = list_known_foods(FOOD_TABLE, None).unwrap();
        assert_eq!(all.total, FOOD_TABLE.len());

        let veg = list_known_foods(FOOD_TABLE, Some("vegetarian")).unwrap();
        assert!(veg.foods.iter().all(|f| f.diet_class != DietClass::NonVegetarian));
        assert!(veg.foods.iter().any(|f| f.name == "biryani"));
        assert_eq!(veg.total, 23);

        assert!(list_known_foods(FOOD_TABLE, Some("keto")).is_err());
    }

    #[test]
    fn test_known_food_variations() {
        let entry = FOOD_TABLE.iter().find(|e| e.name == "tea").unwrap();
        let known = KnownFood::from(entry);
        assert_eq!(known.variations, vec!["plain", "chai", "milk", "green"]);
    }
}
