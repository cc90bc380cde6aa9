//! API routes for resto-server

pub mod health;
pub mod restaurants;
pub mod reviews;
pub mod saved;

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::Json;
use http::{HeaderName, HeaderValue, StatusCode};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ServiceError>;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// uuid v4 request IDs
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build the application router with middleware and state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(restaurants::router())
        .merge(saved::router())
        .merge(reviews::router())
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .with_state(state)
}

/// `?business_id=` query
#[derive(Debug, Deserialize)]
pub struct BusinessQuery {
    pub business_id: Option<String>,
}

impl BusinessQuery {
    fn business_id(self) -> Result<String, AppError> {
        non_empty(self.business_id, "business_id")
    }
}

/// `?user_id=` query
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: Option<String>,
}

impl UserQuery {
    fn user_id(self) -> Result<String, AppError> {
        non_empty(self.user_id, "user_id")
    }
}

fn non_empty(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::required(field))
}

fn query_rejection(e: QueryRejection) -> AppError {
    AppError::with_message(ErrorCode::InvalidRequest, e.body_text())
}

fn json_rejection(e: JsonRejection) -> AppError {
    AppError::with_message(ErrorCode::InvalidFormat, e.body_text())
}
