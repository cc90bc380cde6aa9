//! Review queries

use chrono::{DateTime, Utc};
use shared::models::{NewReview, Review};
use sqlx::PgPool;

/// Reviews of one restaurant, newest first
pub async fn list_for_business(pool: &PgPool, business_id: &str) -> Result<Vec<Review>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT
            ur.review_id,
            u.username AS user_name,
            ur.stars AS review_star,
            ur.review_date,
            ur.review_text,
            ur.useful,
            ur.funny,
            ur.cool
        FROM normalized_user_reviews ur
        JOIN users u ON ur.user_id = u.user_id
        WHERE ur.business_id = $1
        ORDER BY ur.review_date DESC, ur.review_id
        "#,
    )
    .bind(business_id)
    .fetch_all(pool)
    .await
}

/// Insert a review stamped with the current time; returns `(review_id, review_date)`.
pub async fn insert(
    pool: &PgPool,
    review_id: &str,
    review: &NewReview,
) -> Result<(String, DateTime<Utc>), sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO normalized_user_reviews (
            review_id, user_id, business_id, stars, review_text,
            review_date, useful, funny, cool, cleaned_text
        )
        VALUES ($1, $2, $3, $4, $5, CURRENT_TIMESTAMP, $6, $7, $8, '')
        RETURNING review_id, review_date
        "#,
    )
    .bind(review_id)
    .bind(&review.user_id)
    .bind(&review.business_id)
    .bind(review.stars)
    .bind(&review.review_text)
    .bind(review.useful)
    .bind(review.funny)
    .bind(review.cool)
    .fetch_one(pool)
    .await
}
