//! Review handlers

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use http::StatusCode;
use shared::error::{AppError, ErrorCode};
use shared::models::{NewReview, PostedReview, Review};
use uuid::Uuid;

use super::{ApiResult, BusinessQuery, json_rejection, query_rejection};
use crate::db::{restaurants, reviews};
use crate::error::{ServiceResult, map_missing_reference};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getReviewsByBusinessId", get(get_reviews_by_business_id))
        .route("/postReview", post(post_review))
}

/// `GET /getReviewsByBusinessId`: newest first; unknown restaurant is 404
pub async fn get_reviews_by_business_id(
    State(state): State<AppState>,
    query: Result<Query<BusinessQuery>, QueryRejection>,
) -> ApiResult<Vec<Review>> {
    let Query(params) = query.map_err(query_rejection)?;
    let business_id = params.business_id()?;

    if !restaurants::exists(&state.pool, &business_id).await? {
        return Err(AppError::new(ErrorCode::RestaurantNotFound)
            .with_detail("business_id", business_id)
            .into());
    }
    Ok(Json(reviews::list_for_business(&state.pool, &business_id).await?))
}

/// `POST /postReview`
pub async fn post_review(
    State(state): State<AppState>,
    body: Result<Json<NewReview>, JsonRejection>,
) -> ServiceResult<(StatusCode, Json<PostedReview>)> {
    let Json(review) = body.map_err(json_rejection)?;
    review.validate()?;

    let review_id = Uuid::new_v4().to_string();
    let (review_id, review_date) = reviews::insert(&state.pool, &review_id, &review)
        .await
        .map_err(|e| map_missing_reference(e, "User or restaurant"))?;

    tracing::info!(
        review_id = %review_id,
        business_id = %review.business_id,
        stars = review.stars,
        "Review posted"
    );
    Ok((
        StatusCode::CREATED,
        Json(PostedReview {
            message: "Review posted successfully.".into(),
            review_id,
            review_date,
        }),
    ))
}
