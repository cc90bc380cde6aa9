//! Saved status rows (`user_favorites`)

use chrono::NaiveDateTime;
use shared::models::{RestaurantRecord, SaveStatus};
use sqlx::PgPool;

use super::restaurants::{RestaurantRow, SELECT_RESTAURANTS};

/// Set the status of `(user_id, business_id)`, replacing any previous one.
pub async fn upsert(
    pool: &PgPool,
    user_id: &str,
    business_id: &str,
    status: SaveStatus,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO user_favorites (user_id, business_id, status, updated_at)
         VALUES ($1, $2, $3, NOW())
         ON CONFLICT (user_id, business_id)
         DO UPDATE SET status = EXCLUDED.status, updated_at = EXCLUDED.updated_at",
    )
    .bind(user_id)
    .bind(business_id)
    .bind(status.as_token())
    .execute(pool)
    .await?;
    Ok(())
}

/// Remove the row; returns how many rows went away (0 or 1).
pub async fn delete(pool: &PgPool, user_id: &str, business_id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM user_favorites WHERE user_id = $1 AND business_id = $2")
        .bind(user_id)
        .bind(business_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Restaurants saved by `user_id` with `status`, ordered by name
pub async fn list_by_status(
    pool: &PgPool,
    user_id: &str,
    status: SaveStatus,
    now: NaiveDateTime,
) -> Result<Vec<RestaurantRecord>, sqlx::Error> {
    let sql = format!(
        "{SELECT_RESTAURANTS}
         JOIN user_favorites uf ON uf.business_id = nb.business_id
         WHERE uf.user_id = $1 AND uf.status = $2
         GROUP BY nb.business_id, bl.city
         ORDER BY nb.name, nb.business_id"
    );
    let rows: Vec<RestaurantRow> = sqlx::query_as(&sql)
        .bind(user_id)
        .bind(status.as_token())
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(|row| row.into_record(now)).collect())
}
