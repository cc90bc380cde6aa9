//! Favorite / bookmark handlers
//!
//! One `status` per `(user_id, business_id)`: a non-null status upserts the
//! row, `null` deletes it.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{RestaurantRecord, SaveStatus};
use shared::response::MessageResponse;

use super::{ApiResult, UserQuery, json_rejection, non_empty, query_rejection};
use crate::db::saved;
use crate::error::map_missing_reference;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(get_favorites))
        .route("/bookmarks", get(get_bookmarks))
        .route("/add-userfav-bookmarks", post(set_saved_status))
}

/// Body of `POST /add-userfav-bookmarks`, validated field by field
#[derive(Debug, Deserialize)]
pub struct SaveBody {
    pub user_id: Option<String>,
    pub business_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl SaveBody {
    /// `(user_id, business_id, status)`; `status: None` means remove.
    fn validate(self) -> Result<(String, String, Option<SaveStatus>), AppError> {
        let user_id = non_empty(self.user_id, "user_id")?;
        let business_id = non_empty(self.business_id, "business_id")?;
        let status = self
            .status
            .map(|raw| {
                raw.parse::<SaveStatus>().map_err(|e| {
                    AppError::with_message(ErrorCode::InvalidSaveStatus, e.to_string())
                        .with_detail("status", raw.as_str())
                })
            })
            .transpose()?;
        Ok((user_id, business_id, status))
    }
}

async fn list_saved(
    state: &AppState,
    query: Result<Query<UserQuery>, QueryRejection>,
    status: SaveStatus,
) -> ApiResult<Vec<RestaurantRecord>> {
    let Query(params) = query.map_err(query_rejection)?;
    let user_id = params.user_id()?;
    let records = saved::list_by_status(&state.pool, &user_id, status, state.local_now()).await?;
    Ok(Json(records))
}

/// `GET /favorites?user_id=`
pub async fn get_favorites(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<Vec<RestaurantRecord>> {
    list_saved(&state, query, SaveStatus::Favorite).await
}

/// `GET /bookmarks?user_id=`
pub async fn get_bookmarks(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<Vec<RestaurantRecord>> {
    list_saved(&state, query, SaveStatus::WantToVisit).await
}

/// `POST /add-userfav-bookmarks`
///
/// Idempotent: repeating an upsert keeps one row, deleting a missing row succeeds.
pub async fn set_saved_status(
    State(state): State<AppState>,
    body: Result<Json<SaveBody>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Json(body) = body.map_err(json_rejection)?;
    let (user_id, business_id, status) = body.validate()?;

    match status {
        Some(status) => {
            saved::upsert(&state.pool, &user_id, &business_id, status)
                .await
                .map_err(|e| map_missing_reference(e, "User or restaurant"))?;
            tracing::info!(%user_id, %business_id, %status, "Saved status set");
            Ok(Json(MessageResponse::new(format!("Restaurant saved as {status}."))))
        }
        None => {
            let removed = saved::delete(&state.pool, &user_id, &business_id).await?;
            tracing::info!(%user_id, %business_id, removed, "Saved status cleared");
            Ok(Json(MessageResponse::new("Saved status removed.")))
        }
    }
}
