use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::meals::dto::{LogMealRequest, LogMealResponse, MealWithIngredients};
use crate::meals::services;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:user_id/meals", post(log_meal))
        .route("/:user_id/meals/today", get(today_meals))
}

#[instrument(skip(state, payload))]
pub async fn log_meal(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(payload): Json<LogMealRequest>,
) -> Result<Json<LogMealResponse>, ApiError> {
    let (meal_id, total_calories) = services::log_meal(&state.db, user_id, payload).await?;

    Ok(Json(LogMealResponse {
        message: "Meal logged successfully".into(),
        meal_id,
        total_calories,
    }))
}

/// Raw list of today's meals. Unknown users get an empty list rather than a
/// 404; this endpoint's contract differs deliberately from the write path.
#[instrument(skip(state))]
pub async fn today_meals(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<MealWithIngredients>>, ApiError> {
    let meals = services::meals_for_day(&state.db, user_id, services::today_utc()).await?;
    Ok(Json(meals))
}
