use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

/// A profile row. `partner_id` is a one-directional link; only the primary
/// user's side is ever written.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub target_calories: i64,
    pub maintenance_calories: i64,
    pub partner_id: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn get(db: &SqlitePool, id: i64) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, target_calories, maintenance_calories, partner_id, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Idempotent insert for the two well-known bootstrap identities.
    pub async fn create_with_id(
        db: &SqlitePool,
        id: i64,
        name: &str,
        target_calories: i64,
        maintenance_calories: i64,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO users (id, name, target_calories, maintenance_calories, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(target_calories)
        .bind(maintenance_calories)
        .bind(OffsetDateTime::now_utc().unix_timestamp())
        .execute(db)
        .await?;
        Ok(())
    }

    /// Partial update: omitted fields keep their current value.
    pub async fn update_settings(
        db: &SqlitePool,
        id: i64,
        target_calories: Option<i64>,
        maintenance_calories: Option<i64>,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET target_calories = COALESCE(?, target_calories),
                maintenance_calories = COALESCE(?, maintenance_calories)
            WHERE id = ?
            "#,
        )
        .bind(target_calories)
        .bind(maintenance_calories)
        .bind(id)
        .execute(db)
        .await?;
        Ok(())
    }

    pub async fn link_partner(db: &SqlitePool, id: i64, partner_id: i64) -> anyhow::Result<()> {
        sqlx::query("UPDATE users SET partner_id = ? WHERE id = ?")
            .bind(partner_id)
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
