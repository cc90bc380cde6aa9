//! In-memory `RestoApi` used by the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use resto_client::{ClientError, ClientResult, RestoApi};
use shared::browse::RestaurantQuery;
use shared::models::{
    BusinessName, NewReview, PostedReview, RestaurantDetails, RestaurantRecord, Review,
    SaveRequest, SaveStatus,
};
use shared::response::{HealthResponse, MessageResponse, RestaurantPage};
use tokio::sync::Notify;

pub fn record(id: &str, city: &str) -> RestaurantRecord {
    RestaurantRecord {
        business_id: id.into(),
        name: format!("Restaurant {id}"),
        city: city.into(),
        cuisine: "American".into(),
        stars: 4.0,
        review_count: 150,
        categories: vec!["Restaurants".into()],
        is_open: true,
    }
}

#[derive(Default)]
pub struct FakeApi {
    pub restaurants: Mutex<Vec<RestaurantRecord>>,
    /// Server-side `user_favorites`: `(user_id, business_id) -> status`
    pub saved: Mutex<HashMap<(String, String), SaveStatus>>,
    /// Every save request received, in order
    pub requests: Mutex<Vec<SaveRequest>>,
    pub fail_saves: AtomicBool,
    pub fail_reviews: AtomicBool,
    pub fail_cuisines: AtomicBool,
    /// Makes `/bookmarks` fail
    pub fail_bookmarks: AtomicBool,
    /// When set, save requests wait for `release` before answering
    pub hold_saves: AtomicBool,
    pub release: Notify,
}

impl FakeApi {
    pub fn with_restaurants(records: Vec<RestaurantRecord>) -> Self {
        let api = Self::default();
        *api.restaurants.lock().unwrap() = records;
        api
    }

    pub fn server_status(&self, user_id: &str, business_id: &str) -> Option<SaveStatus> {
        self.saved
            .lock()
            .unwrap()
            .get(&(user_id.to_string(), business_id.to_string()))
            .copied()
    }

    pub fn set_server_status(&self, user_id: &str, business_id: &str, status: SaveStatus) {
        self.saved
            .lock()
            .unwrap()
            .insert((user_id.to_string(), business_id.to_string()), status);
    }

    pub fn sent(&self) -> Vec<SaveRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn saved_with(&self, user_id: &str, status: SaveStatus) -> Vec<RestaurantRecord> {
        let saved = self.saved.lock().unwrap();
        self.restaurants
            .lock()
            .unwrap()
            .iter()
            .filter(|r| saved.get(&(user_id.to_string(), r.business_id.clone())) == Some(&status))
            .cloned()
            .collect()
    }

    fn details(&self, business_id: &str) -> ClientResult<RestaurantDetails> {
        let restaurants = self.restaurants.lock().unwrap();
        let record = restaurants
            .iter()
            .find(|r| r.business_id == business_id)
            .ok_or_else(|| ClientError::NotFound("Restaurant not found".into()))?;
        Ok(RestaurantDetails {
            business_id: record.business_id.clone(),
            restaurant_name: record.name.clone(),
            address: "1 Main St".into(),
            cuisine: record.cuisine.clone(),
            stars: record.stars,
            categories: record.categories.clone(),
            amenities: Default::default(),
            business_hours: vec![],
            is_open: record.is_open,
            reviews: None,
        })
    }
}

#[async_trait]
impl RestoApi for FakeApi {
    async fn health(&self) -> ClientResult<HealthResponse> {
        Ok(HealthResponse {
            status: "ok".into(),
            service: "fake".into(),
            version: "0".into(),
        })
    }

    async fn restaurants(&self, _query: &RestaurantQuery) -> ClientResult<RestaurantPage> {
        Ok(RestaurantPage::unpaged(self.restaurants.lock().unwrap().clone()))
    }

    async fn unique_cities(&self) -> ClientResult<Vec<String>> {
        let mut cities: Vec<String> = self
            .restaurants
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.city.clone())
            .collect();
        cities.sort();
        cities.dedup();
        Ok(cities)
    }

    async fn unique_cuisines(&self) -> ClientResult<Vec<String>> {
        if self.fail_cuisines.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("cuisine query failed".into()));
        }
        Ok(vec!["American".into()])
    }

    async fn business_names(&self) -> ClientResult<Vec<BusinessName>> {
        Ok(self
            .restaurants
            .lock()
            .unwrap()
            .iter()
            .map(|r| BusinessName {
                business_id: r.business_id.clone(),
                name: r.name.clone(),
            })
            .collect())
    }

    async fn favorites(&self, user_id: &str) -> ClientResult<Vec<RestaurantRecord>> {
        Ok(self.saved_with(user_id, SaveStatus::Favorite))
    }

    async fn bookmarks(&self, user_id: &str) -> ClientResult<Vec<RestaurantRecord>> {
        if self.fail_bookmarks.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("bookmark query failed".into()));
        }
        Ok(self.saved_with(user_id, SaveStatus::WantToVisit))
    }

    async fn set_saved_status(&self, request: &SaveRequest) -> ClientResult<MessageResponse> {
        self.requests.lock().unwrap().push(request.clone());
        if self.hold_saves.load(Ordering::SeqCst) {
            self.release.notified().await;
        }
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("Internal server error".into()));
        }

        let key = (request.user_id.clone(), request.business_id.clone());
        let mut saved = self.saved.lock().unwrap();
        match request.status {
            Some(status) => {
                saved.insert(key, status);
            }
            None => {
                saved.remove(&key);
            }
        }
        Ok(MessageResponse::new("ok"))
    }

    async fn restaurant_details(&self, business_id: &str) -> ClientResult<RestaurantDetails> {
        let mut details = self.details(business_id)?;
        details.reviews = Some(self.reviews(business_id).await?);
        Ok(details)
    }

    async fn restaurant_summary(&self, business_id: &str) -> ClientResult<RestaurantDetails> {
        self.details(business_id)
    }

    async fn reviews(&self, _business_id: &str) -> ClientResult<Vec<Review>> {
        if self.fail_reviews.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("review query failed".into()));
        }
        Ok(vec![])
    }

    async fn post_review(&self, review: &NewReview) -> ClientResult<PostedReview> {
        review
            .validate()
            .map_err(|e| ClientError::Validation(e.message))?;
        Ok(PostedReview {
            message: "Review posted successfully.".into(),
            review_id: "r1".into(),
            review_date: Utc::now(),
        })
    }
}
