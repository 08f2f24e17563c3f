use sqlx::SqlitePool;
use time::{Date, Duration, OffsetDateTime};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::meals::dto::{LogMealRequest, MealWithIngredients};
use crate::meals::repo::{Ingredient, Meal};
use crate::users::repo::User;

/// UTC half-open window for one calendar day: `[00:00, next day 00:00)`.
/// The last representable day has no end bound and is rejected.
pub fn day_bounds(day: Date) -> Result<(OffsetDateTime, OffsetDateTime), ApiError> {
    let start = day.midnight().assume_utc();
    let end = start
        .checked_add(Duration::days(1))
        .ok_or_else(|| ApiError::BadRequest("day is out of range".into()))?;
    Ok((start, end))
}

pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Creates the meal and all its ingredients in one transaction. The stored
/// total is the ingredient sum at creation time; an empty list logs a
/// zero-calorie meal.
pub async fn log_meal(
    db: &SqlitePool,
    user_id: i64,
    req: LogMealRequest,
) -> Result<(i64, i64), ApiError> {
    if User::get(db, user_id).await?.is_none() {
        warn!(user_id, "log_meal for unknown user");
        return Err(ApiError::NotFound("User not found".into()));
    }

    if req.ingredients.iter().any(|i| i.calories < 0) {
        return Err(ApiError::BadRequest(
            "ingredient calories must not be negative".into(),
        ));
    }

    let total_calories: i64 = req.ingredients.iter().map(|i| i.calories).sum();

    let mut tx = db.begin().await?;
    let meal = Meal::insert(
        &mut *tx,
        user_id,
        &req.name,
        total_calories,
        OffsetDateTime::now_utc(),
    )
    .await?;
    for ingredient in &req.ingredients {
        Ingredient::insert(
            &mut *tx,
            meal.id,
            &ingredient.name,
            &ingredient.amount,
            ingredient.calories,
        )
        .await?;
    }
    tx.commit().await?;

    info!(user_id, meal_id = meal.id, total_calories, "meal logged");
    Ok((meal.id, total_calories))
}

/// One day's meals for a user, each with its ingredients. Unknown users
/// simply have no meals, so this never signals `NotFound`.
pub async fn meals_for_day(
    db: &SqlitePool,
    user_id: i64,
    day: Date,
) -> Result<Vec<MealWithIngredients>, ApiError> {
    let (start, end) = day_bounds(day)?;
    let meals = Meal::for_user_between(db, user_id, start, end).await?;

    let mut out = Vec::with_capacity(meals.len());
    for meal in meals {
        let ingredients = Ingredient::for_meal(db, meal.id).await?;
        out.push(MealWithIngredients {
            id: meal.id,
            name: meal.name,
            total_calories: meal.total_calories,
            logged_at: meal.logged_at,
            ingredients,
        });
    }
    Ok(out)
}

pub async fn consumed_calories(db: &SqlitePool, user_id: i64, day: Date) -> Result<i64, ApiError> {
    let (start, end) = day_bounds(day)?;
    Ok(Meal::consumed_between(db, user_id, start, end).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn day_bounds_are_half_open_utc() {
        let (start, end) = day_bounds(date!(2025 - 08 - 25)).unwrap();
        assert_eq!(start.unix_timestamp() % 86_400, 0);
        assert_eq!(end - start, Duration::days(1));
        assert_eq!(end.date(), date!(2025 - 08 - 26));
    }

    #[test]
    fn day_bounds_rejects_last_representable_day() {
        assert!(matches!(
            day_bounds(Date::MAX),
            Err(ApiError::BadRequest(_))
        ));
    }
}
