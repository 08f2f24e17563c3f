use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use time::OffsetDateTime;

/// A logged meal. `total_calories` is derived from the ingredients at
/// creation time and stored redundantly; meals are never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub total_calories: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ingredient {
    pub id: i64,
    pub meal_id: i64,
    pub name: String,
    pub amount: String,
    pub calories: i64,
}

impl Meal {
    pub async fn insert(
        conn: &mut SqliteConnection,
        user_id: i64,
        name: &str,
        total_calories: i64,
        logged_at: OffsetDateTime,
    ) -> anyhow::Result<Meal> {
        let meal = sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (user_id, name, total_calories, logged_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, name, total_calories, logged_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(total_calories)
        .bind(logged_at.unix_timestamp())
        .fetch_one(conn)
        .await?;
        Ok(meal)
    }

    /// Meals logged in `[start, end)`, oldest first.
    pub async fn for_user_between(
        db: &SqlitePool,
        user_id: i64,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> anyhow::Result<Vec<Meal>> {
        let rows = sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, user_id, name, total_calories, logged_at
            FROM meals
            WHERE user_id = ? AND logged_at >= ? AND logged_at < ?
            ORDER BY logged_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .bind(start.unix_timestamp())
        .bind(end.unix_timestamp())
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Sum of stored `total_calories` over `[start, end)`; 0 when no meals.
    pub async fn consumed_between(
        db: &SqlitePool,
        user_id: i64,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> anyhow::Result<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(total_calories), 0)
            FROM meals
            WHERE user_id = ? AND logged_at >= ? AND logged_at < ?
            "#,
        )
        .bind(user_id)
        .bind(start.unix_timestamp())
        .bind(end.unix_timestamp())
        .fetch_one(db)
        .await?;
        Ok(total)
    }
}

impl Ingredient {
    pub async fn insert(
        conn: &mut SqliteConnection,
        meal_id: i64,
        name: &str,
        amount: &str,
        calories: i64,
    ) -> anyhow::Result<Ingredient> {
        let ingredient = sqlx::query_as::<_, Ingredient>(
            r#"
            INSERT INTO ingredients (meal_id, name, amount, calories)
            VALUES (?, ?, ?, ?)
            RETURNING id, meal_id, name, amount, calories
            "#,
        )
        .bind(meal_id)
        .bind(name)
        .bind(amount)
        .bind(calories)
        .fetch_one(conn)
        .await?;
        Ok(ingredient)
    }

    pub async fn for_meal(db: &SqlitePool, meal_id: i64) -> anyhow::Result<Vec<Ingredient>> {
        let rows = sqlx::query_as::<_, Ingredient>(
            r#"
            SELECT id, meal_id, name, amount, calories
            FROM ingredients
            WHERE meal_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(meal_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
