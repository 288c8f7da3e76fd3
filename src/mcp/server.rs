//! Caltrack MCP Server Implementation
//!
//! Exposes the estimator and the daily log as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::estimator::Estimator;
use crate::session::{analysis_guard, AnalysisGuard, SharedSession};
use crate::tools::status::StatusTracker;
use crate::tools::{estimates, log, recommendations};

/// Caltrack MCP Service
#[derive(Clone)]
pub struct CaltrackService {
    status_tracker: Arc<StatusTracker>,
    session: SharedSession,
    analysis: AnalysisGuard,
    estimator: Estimator<'static>,
    tool_router: ToolRouter<CaltrackService>,
}

impl CaltrackService {
    pub fn new(session: SharedSession, estimator: Estimator<'static>) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            session,
            analysis: analysis_guard(),
            estimator,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateCaloriesParams {
    /// Free-text food description, e.g. "two rice and a bowl of dal"
    pub description: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogFoodParams {
    /// Free-text food description, e.g. "one plate chicken biryani"
    pub description: String,
    /// breakfast, lunch, dinner, snack (default unspecified)
    #[serde(default = "default_meal_type")]
    pub meal_type: String,
}

fn default_meal_type() -> String { "unspecified".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetDietPreferenceParams {
    /// vegetarian or non-vegetarian
    pub preference: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetMealHistoryParams {
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

fn default_history_limit() -> usize { 20 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListKnownFoodsParams {
    /// Only foods allowed under this preference (vegetarian, non-vegetarian)
    pub preference: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl CaltrackService {
    // --- Status ---

    #[tool(description = "Get the current status of the caltrack service including build info, today's totals and process information")]
    async fn caltrack_status(&self) -> Result<CallToolResult, McpError> {
        let summary = log::get_daily_summary(&self.session).await;
        to_json(&self.status_tracker.get_status(&summary))
    }

    #[tool(description = "Get instructions for estimating and logging food. Call this when starting a session or when unsure how to phrase food descriptions.")]
    fn usage_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::USAGE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Estimates ---

    #[tool(description = "Estimate calories for a food description without logging it. Returns matched items, total calories and any dietary note.")]
    async fn estimate_calories(&self, Parameters(p): Parameters<EstimateCaloriesParams>) -> Result<CallToolResult, McpError> {
        let result = estimates::estimate_calories(&self.estimator, &self.session, &p.description)
            .await
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Estimate calories for a food description and add it to today's log. Only one log_food call is processed at a time.")]
    async fn log_food(&self, Parameters(p): Parameters<LogFoodParams>) -> Result<CallToolResult, McpError> {
        let result = estimates::log_food(&self.estimator, &self.session, &self.analysis, &p.description, &p.meal_type)
            .await
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "List the foods the estimator recognizes with base calories and variation keywords, optionally filtered by dietary preference")]
    fn list_known_foods(&self, Parameters(p): Parameters<ListKnownFoodsParams>) -> Result<CallToolResult, McpError> {
        let result = estimates::list_known_foods(self.estimator.foods(), p.preference.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    // --- Preference & Recommendations ---

    #[tool(description = "Set the dietary preference (vegetarian or non-vegetarian). Can be set once per session. Returns updated recommendations.")]
    async fn set_diet_preference(&self, Parameters(p): Parameters<SetDietPreferenceParams>) -> Result<CallToolResult, McpError> {
        let result = recommendations::set_diet_preference(&self.session, self.estimator.foods(), &p.preference)
            .await
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get food suggestions and tips based on the dietary preference and the calories left today")]
    async fn get_recommendations(&self) -> Result<CallToolResult, McpError> {
        let result = recommendations::get_recommendations(&self.session, self.estimator.foods()).await;
        to_json(&result)
    }

    // --- Daily Log ---

    #[tool(description = "Get today's calorie total, target, remaining calories and meal count")]
    async fn get_daily_summary(&self) -> Result<CallToolResult, McpError> {
        to_json(&log::get_daily_summary(&self.session).await)
    }

    #[tool(description = "Get today's logged meals, most recent first")]
    async fn get_meal_history(&self, Parameters(p): Parameters<GetMealHistoryParams>) -> Result<CallToolResult, McpError> {
        to_json(&log::get_meal_history(&self.session, p.limit).await)
    }

    #[tool(description = "Clear today's meal log and calorie total. The dietary preference is kept.")]
    async fn reset_day(&self) -> Result<CallToolResult, McpError> {
        to_json(&log::reset_day(&self.session).await)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for CaltrackService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "caltrack".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Calorie Tracker".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Calorie Tracker (caltrack) - calorie estimates from plain-language food descriptions. \
                 Call usage_instructions first. \
                 Preference: set_diet_preference (once per session). \
                 Estimates: estimate_calories (no logging), log_food (estimate + log), list_known_foods. \
                 Daily log: get_daily_summary, get_meal_history, reset_day. \
                 Suggestions: get_recommendations."
                    .into(),
            ),
        }
    }
}
