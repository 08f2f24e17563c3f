use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::bootstrap::PRIMARY_USER_ID;
use crate::error::ApiError;
use crate::meals::services::today_utc;
use crate::state::AppState;
use crate::users::dto::{DailyView, DayQuery, MessageResponse, UpdateSettingsRequest};
use crate::users::repo::User;
use crate::users::services;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/partner", get(get_partner))
        .route("/:user_id/settings", put(update_settings))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    Query(q): Query<DayQuery>,
) -> Result<Json<DailyView>, ApiError> {
    let day = q.day.unwrap_or_else(today_utc);
    let view = services::daily_view(&state.db, PRIMARY_USER_ID, day).await?;
    Ok(Json(view))
}

/// The partner is resolved by following the primary user's link; the link is
/// stored on one side only.
#[instrument(skip(state))]
pub async fn get_partner(
    State(state): State<AppState>,
    Query(q): Query<DayQuery>,
) -> Result<Json<DailyView>, ApiError> {
    let primary = User::get(&state.db, PRIMARY_USER_ID)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    let partner_id = primary.partner_id.ok_or_else(|| {
        warn!(user_id = primary.id, "no partner linked");
        ApiError::NotFound("Partner not found".into())
    })?;

    let day = q.day.unwrap_or_else(today_utc);
    let view = services::daily_view(&state.db, partner_id, day).await?;
    Ok(Json(view))
}

#[instrument(skip(state, payload))]
pub async fn update_settings(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    services::update_settings(
        &state.db,
        user_id,
        payload.target_calories,
        payload.maintenance_calories,
    )
    .await?;

    info!(user_id, "settings updated");
    Ok(Json(MessageResponse {
        message: "Settings updated successfully".into(),
    }))
}
