use anyhow::Context;
use sqlx::SqlitePool;
use tracing::info;

use crate::users::repo::User;

pub const PRIMARY_USER_ID: i64 = 1;
pub const PARTNER_USER_ID: i64 = 2;

/// Makes sure the two well-known users exist and the primary user's partner
/// link points at the partner. Runs once at startup; re-running performs no
/// writes beyond filling a missing partner link.
pub async fn ensure_default_pair(db: &SqlitePool) -> anyhow::Result<()> {
    User::create_with_id(db, PRIMARY_USER_ID, "You", 2200, 2200).await?;
    User::create_with_id(db, PARTNER_USER_ID, "Ruchi", 1400, 2200).await?;

    let primary = User::get(db, PRIMARY_USER_ID)
        .await?
        .context("primary user missing after bootstrap")?;
    if primary.partner_id.is_none() {
        User::link_partner(db, PRIMARY_USER_ID, PARTNER_USER_ID).await?;
        info!(
            user_id = PRIMARY_USER_ID,
            partner_id = PARTNER_USER_ID,
            "default pair linked"
        );
    }

    Ok(())
}
