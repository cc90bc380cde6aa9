//! Restaurant listing and detail handlers

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use shared::browse::{PageWindow, RestaurantQuery};
use shared::error::{AppError, ErrorCode};
use shared::models::{BusinessName, RestaurantDetails};
use shared::response::{CityList, CuisineList, RestaurantPage};

use super::{ApiResult, BusinessQuery, query_rejection};
use crate::db::restaurants::{self, RestaurantFilter};
use crate::db::reviews;
use crate::error::ServiceResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getRestaurants", get(get_restaurants))
        .route("/getUniqueCities", get(get_unique_cities))
        .route("/getUniqueCuisine", get(get_unique_cuisine))
        .route("/getBusinessNames", get(get_business_names))
        .route("/getRestaurantDetails", get(get_restaurant_details))
        .route("/getRestaurantSummary", get(get_restaurant_summary))
}

/// `GET /getRestaurants`
///
/// Pages only when `page` or `limit` is given; otherwise the whole filtered
/// set comes back as a single page.
pub async fn get_restaurants(
    State(state): State<AppState>,
    query: Result<Query<RestaurantQuery>, QueryRejection>,
) -> ApiResult<RestaurantPage> {
    let Query(params) = query.map_err(query_rejection)?;
    let filter = RestaurantFilter::from(&params.criteria()?);
    let now = state.local_now();

    if params.page.is_none() && params.limit.is_none() {
        let rows = restaurants::list_restaurants(&state.pool, &filter, None, 0, now).await?;
        return Ok(Json(RestaurantPage::unpaged(rows)));
    }

    let limit = params.limit.unwrap_or(state.default_page_limit);
    if limit == 0 || limit > state.max_page_limit {
        return Err(AppError::with_message(
            ErrorCode::InvalidFilter,
            format!("limit must be between 1 and {}", state.max_page_limit),
        )
        .with_detail("limit", limit)
        .into());
    }

    let total = restaurants::count_restaurants(&state.pool, &filter).await?;
    let window = PageWindow::at(
        params.page.unwrap_or(1),
        limit,
        usize::try_from(total).unwrap_or(0),
    );
    let offset = i64::try_from(window.offset()).unwrap_or(i64::MAX);
    let rows =
        restaurants::list_restaurants(&state.pool, &filter, Some(i64::from(limit)), offset, now)
            .await?;

    tracing::debug!(
        total,
        page = window.current_page(),
        returned = rows.len(),
        "Restaurant page served"
    );
    Ok(Json(RestaurantPage::new(rows, &window)))
}

pub async fn get_unique_cities(State(state): State<AppState>) -> ApiResult<CityList> {
    let cities = restaurants::unique_cities(&state.pool).await?;
    Ok(Json(CityList { cities }))
}

pub async fn get_unique_cuisine(State(state): State<AppState>) -> ApiResult<CuisineList> {
    let cuisines = restaurants::unique_cuisines(&state.pool).await?;
    Ok(Json(CuisineList { cuisines }))
}

pub async fn get_business_names(State(state): State<AppState>) -> ApiResult<Vec<BusinessName>> {
    let names = restaurants::business_names(&state.pool).await?;
    Ok(Json(names))
}

async fn load_details(
    state: &AppState,
    business_id: &str,
) -> ServiceResult<RestaurantDetails> {
    restaurants::find_details(&state.pool, business_id, state.local_now())
        .await?
        .ok_or_else(|| {
            AppError::new(ErrorCode::RestaurantNotFound)
                .with_detail("business_id", business_id)
                .into()
        })
}

/// `GET /getRestaurantDetails`: details plus reviews, newest first
pub async fn get_restaurant_details(
    State(state): State<AppState>,
    query: Result<Query<BusinessQuery>, QueryRejection>,
) -> ApiResult<RestaurantDetails> {
    let Query(params) = query.map_err(query_rejection)?;
    let business_id = params.business_id()?;

    let mut details = load_details(&state, &business_id).await?;
    details.reviews = Some(reviews::list_for_business(&state.pool, &business_id).await?);
    Ok(Json(details))
}

/// `GET /getRestaurantSummary`: details without reviews
pub async fn get_restaurant_summary(
    State(state): State<AppState>,
    query: Result<Query<BusinessQuery>, QueryRejection>,
) -> ApiResult<RestaurantDetails> {
    let Query(params) = query.map_err(query_rejection)?;
    let business_id = params.business_id()?;
    Ok(Json(load_details(&state, &business_id).await?))
}
