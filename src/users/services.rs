use sqlx::SqlitePool;
use time::Date;

use tracing::warn;

use crate::error::ApiError;
use crate::meals::services as meal_services;
use crate::users::dto::DailyView;
use crate::users::repo::User;

/// Composes the profile, the day's meals with ingredients, and the derived
/// consumed-calorie total into one response.
pub async fn daily_view(db: &SqlitePool, user_id: i64, day: Date) -> Result<DailyView, ApiError> {
    let user = User::get(db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    let meals = meal_services::meals_for_day(db, user_id, day).await?;
    let consumed_calories = meal_services::consumed_calories(db, user_id, day).await?;

    Ok(DailyView {
        id: user.id,
        name: user.name,
        target_calories: user.target_calories,
        maintenance_calories: user.maintenance_calories,
        consumed_calories,
        meals,
    })
}

pub async fn update_settings(
    db: &SqlitePool,
    user_id: i64,
    target_calories: Option<i64>,
    maintenance_calories: Option<i64>,
) -> Result<(), ApiError> {
    if User::get(db, user_id).await?.is_none() {
        warn!(user_id, "settings update for unknown user");
        return Err(ApiError::NotFound("User not found".into()));
    }
    User::update_settings(db, user_id, target_calories, maintenance_calories).await?;
    Ok(())
}
