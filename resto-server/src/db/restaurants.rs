//! Restaurant listing and detail queries

use chrono::NaiveDateTime;
use shared::browse::FilterCriteria;
use shared::models::hours::is_open_at;
use shared::models::restaurant::split_categories;
use shared::models::{Amenities, BusinessHours, BusinessName, RestaurantDetails, RestaurantRecord};
use sqlx::PgPool;
use sqlx::types::Json;

/// Listing columns with the weekly hours aggregated as JSON.
///
/// Businesses without hours get an empty array.
pub(crate) const SELECT_RESTAURANTS: &str = r#"
    SELECT
        nb.business_id,
        nb.name,
        nb.stars,
        nb.review_count,
        nb.categories,
        nb.cuisine,
        bl.city,
        COALESCE(
            json_agg(
                json_build_object(
                    'day_of_week', nbh.day_of_week,
                    'open_time', nbh.open_time,
                    'close_time', nbh.close_time
                ) ORDER BY nbh.day_of_week
            ) FILTER (WHERE nbh.business_id IS NOT NULL),
            '[]'::json
        ) AS hours
    FROM normalized_businesses nb
    JOIN business_locations bl ON nb.location_id = bl.location_id
    LEFT JOIN normalized_business_hours nbh ON nb.business_id = nbh.business_id
"#;

const FILTER_CLAUSE: &str = r#"
    WHERE nb.categories ILIKE '%Restaurants%'
      AND (cardinality($1::text[]) = 0 OR bl.city = ANY($1))
      AND (cardinality($2::text[]) = 0 OR nb.cuisine = ANY($2))
      AND nb.stars >= $3
      AND nb.review_count >= $4
      AND ($5::int IS NULL OR nb.review_count <= $5)
"#;

#[derive(sqlx::FromRow)]
pub(crate) struct RestaurantRow {
    pub business_id: String,
    pub name: String,
    pub stars: f64,
    pub review_count: i32,
    pub categories: Option<String>,
    pub cuisine: String,
    pub city: String,
    pub hours: Json<Vec<BusinessHours>>,
}

impl RestaurantRow {
    /// Listing record with `is_open` evaluated at `now` (business-local time).
    pub fn into_record(self, now: NaiveDateTime) -> RestaurantRecord {
        RestaurantRecord {
            is_open: is_open_at(&self.hours.0, now),
            business_id: self.business_id,
            name: self.name,
            city: self.city,
            cuisine: self.cuisine,
            stars: self.stars,
            review_count: u32::try_from(self.review_count).unwrap_or(0),
            categories: split_categories(self.categories.as_deref().unwrap_or_default()),
        }
    }
}

/// SQL bind values for a [`FilterCriteria`]
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantFilter {
    pub cities: Vec<String>,
    pub cuisines: Vec<String>,
    pub min_stars: f64,
    pub min_reviews: i32,
    /// `None` when the range is open-ended
    pub max_reviews: Option<i32>,
}

impl From<&FilterCriteria> for RestaurantFilter {
    fn from(criteria: &FilterCriteria) -> Self {
        let range = criteria.review_count_range;
        let to_i32 = |n: u32| i32::try_from(n).unwrap_or(i32::MAX);
        Self {
            cities: criteria.cities.iter().cloned().collect(),
            cuisines: criteria.cuisines.iter().cloned().collect(),
            min_stars: criteria.min_stars,
            min_reviews: to_i32(range.min()),
            max_reviews: (!range.is_open_ended()).then(|| to_i32(range.max())),
        }
    }
}

/// Number of restaurants matching `filter`
pub async fn count_restaurants(pool: &PgPool, filter: &RestaurantFilter) -> Result<i64, sqlx::Error> {
    let sql = format!(
        "SELECT COUNT(*) FROM normalized_businesses nb
         JOIN business_locations bl ON nb.location_id = bl.location_id
         {FILTER_CLAUSE}"
    );
    sqlx::query_scalar(&sql)
        .bind(&filter.cities)
        .bind(&filter.cuisines)
        .bind(filter.min_stars)
        .bind(filter.min_reviews)
        .bind(filter.max_reviews)
        .fetch_one(pool)
        .await
}

/// Matching restaurants ordered by name. `limit: None` returns every row.
pub async fn list_restaurants(
    pool: &PgPool,
    filter: &RestaurantFilter,
    limit: Option<i64>,
    offset: i64,
    now: NaiveDateTime,
) -> Result<Vec<RestaurantRecord>, sqlx::Error> {
    let sql = format!(
        "{SELECT_RESTAURANTS} {FILTER_CLAUSE}
         GROUP BY nb.business_id, bl.city
         ORDER BY nb.name, nb.business_id
         LIMIT $6 OFFSET $7"
    );
    let rows: Vec<RestaurantRow> = sqlx::query_as(&sql)
        .bind(&filter.cities)
        .bind(&filter.cuisines)
        .bind(filter.min_stars)
        .bind(filter.min_reviews)
        .bind(filter.max_reviews)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(|row| row.into_record(now)).collect())
}

pub async fn unique_cities(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT DISTINCT city FROM business_locations ORDER BY city")
        .fetch_all(pool)
        .await
}

pub async fn unique_cuisines(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT DISTINCT cuisine FROM normalized_businesses WHERE cuisine <> '' ORDER BY cuisine",
    )
    .fetch_all(pool)
    .await
}

pub async fn business_names(pool: &PgPool) -> Result<Vec<BusinessName>, sqlx::Error> {
    sqlx::query_as("SELECT business_id, name FROM normalized_businesses ORDER BY name")
        .fetch_all(pool)
        .await
}

#[derive(sqlx::FromRow)]
struct DetailsRow {
    business_id: String,
    restaurant_name: String,
    address: String,
    cuisine: String,
    stars: f64,
    categories: Option<String>,
    amenities: Json<Amenities>,
    business_hours: Json<Vec<BusinessHours>>,
}

/// Restaurant header, amenities and hours; `reviews` is left unset.
pub async fn find_details(
    pool: &PgPool,
    business_id: &str,
    now: NaiveDateTime,
) -> Result<Option<RestaurantDetails>, sqlx::Error> {
    let row: Option<DetailsRow> = sqlx::query_as(
        r#"
        SELECT
            nb.business_id,
            nb.name AS restaurant_name,
            CONCAT_WS(', ',
                NULLIF(bl.address, ''), bl.city,
                NULLIF(bl.state, ''), NULLIF(bl.postal_code, '')) AS address,
            nb.cuisine,
            nb.stars,
            nb.categories,
            json_build_object(
                'wifi', nba.wifi,
                'outdoor_seating', nba.outdoor_seating,
                'parking_garage', nba.parking_garage,
                'parking_street', nba.parking_street,
                'parking_validated', nba.parking_validated,
                'parking_lot', nba.parking_lot,
                'parking_valet', nba.parking_valet,
                'good_for_groups', nba.good_for_groups,
                'alcohol', nba.alcohol,
                'price_range', nba.price_range,
                'noise_level', nba.noise_level,
                'wheelchair_accessible', nba.wheelchair_accessible,
                'has_tv', nba.has_tv
            ) AS amenities,
            COALESCE(
                json_agg(
                    json_build_object(
                        'day_of_week', nbh.day_of_week,
                        'open_time', nbh.open_time,
                        'close_time', nbh.close_time
                    ) ORDER BY nbh.day_of_week
                ) FILTER (WHERE nbh.business_id IS NOT NULL),
                '[]'::json
            ) AS business_hours
        FROM normalized_businesses nb
        JOIN business_locations bl ON nb.location_id = bl.location_id
        LEFT JOIN normalized_business_attributes nba ON nb.business_id = nba.business_id
        LEFT JOIN normalized_business_hours nbh ON nb.business_id = nbh.business_id
        WHERE nb.business_id = $1
        GROUP BY nb.business_id, bl.location_id, nba.business_id
        "#,
    )
    .bind(business_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| RestaurantDetails {
        is_open: is_open_at(&row.business_hours.0, now),
        business_id: row.business_id,
        restaurant_name: row.restaurant_name,
        address: row.address,
        cuisine: row.cuisine,
        stars: row.stars,
        categories: split_categories(row.categories.as_deref().unwrap_or_default()),
        amenities: row.amenities.0,
        business_hours: row.business_hours.0,
        reviews: None,
    }))
}

pub async fn exists(pool: &PgPool, business_id: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM normalized_businesses WHERE business_id = $1)")
        .bind(business_id)
        .fetch_one(pool)
        .await
}
