//! Recommendation MCP Tools
//!
//! Suggestions rendered from the dietary preference and what is left of the
//! daily budget.

use chrono::Local;
use serde::Serialize;

use crate::models::{DietPreference, FoodEntry};
use crate::session::{DailySummary, SharedSession};

const MAX_SUGGESTIONS: usize = 5;

/// Remaining budget below which the headline warns about the target
const CLOSE_TO_TARGET: i64 = 300;

const VEGETARIAN_TIPS: &[&str] = &[
    "Paneer, dal and dosa are good vegetarian protein sources",
    "Choose roti over naan to save about 190 kcal",
    "A garden salad adds fibre for very few calories",
];

const NON_VEGETARIAN_TIPS: &[&str] = &[
    "Grilled chicken or fish keeps protein high and calories low",
    "Curries and fried preparations can double the calories of a dish",
    "Balance meat dishes with dal or salad",
];

const UNSET_TIPS: &[&str] = &["Set a dietary preference to get tailored suggestions"];

#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub headline: String,
    pub suggestions: Vec<String>,
    pub tips: Vec<&'static str>,
}

/// Response for set_diet_preference
#[derive(Debug, Serialize)]
pub struct SetPreferenceResponse {
    pub diet_preference: DietPreference,
    pub message: String,
    pub recommendations: Recommendations,
}

/// Build recommendations for a preference and the day's totals
pub fn recommendations(preference: DietPreference, summary: &DailySummary, foods: &[FoodEntry]) -> Recommendations {
    let remaining = summary.remaining;

    let headline = if remaining < 0 {
        format!(
            "You are {} kcal over your {} kcal target",
            -remaining, summary.daily_target
        )
    } else if remaining <= CLOSE_TO_TARGET {
        format!("Close to your target: {} kcal left", remaining)
    } else {
        format!(
            "{} kcal left of your {} kcal target",
            remaining, summary.daily_target
        )
    };

    let mut candidates: Vec<&FoodEntry> = foods
        .iter()
        .filter(|e| preference.allows(e.diet_class))
        .filter(|e| e.base_calories <= remaining as f64)
        .collect();
    // stable sort keeps table order among equal calories
    candidates.sort_by(|a, b| a.base_calories.total_cmp(&b.base_calories));

    let suggestions = candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|e| format!("{} ({:.0} kcal per serving)", e.display_name(), e.base_calories))
        .collect();

    let tips = match preference {
        DietPreference::Vegetarian => VEGETARIAN_TIPS,
        DietPreference::NonVegetarian => NON_VEGETARIAN_TIPS,
        DietPreference::Unset => UNSET_TIPS,
    }
    .to_vec();

    Recommendations {
        headline,
        suggestions,
        tips,
    }
}

pub async fn get_recommendations(session: &SharedSession, foods: &[FoodEntry]) -> Recommendations {
    let mut session = session.lock().await;
    session.roll_over(Local::now().date_naive());
    recommendations(session.preference(), &session.summary(), foods)
}

/// Set the session's dietary preference and return refreshed recommendations
pub async fn set_diet_preference(
    session: &SharedSession,
    foods: &[FoodEntry],
    preference: &str,
) -> Result<SetPreferenceResponse, String> {
    let parsed = DietPreference::from_str(preference)
        .ok_or_else(|| format!("Unknown dietary preference: {}", preference))?;

    let mut session = session.lock().await;
    let preference = session.set_preference(parsed).map_err(|e| e.to_string())?;

    Ok(SetPreferenceResponse {
        diet_preference: preference,
        message: format!(
            "Dietary preference set to {}. Recommendations updated!",
            preference.as_str()
        ),
        recommendations: recommendations(preference, &session.summary(), foods),
    })
}
