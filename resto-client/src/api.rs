//! Typed restaurant API
//!
//! [`RestoApi`] is the seam between client state and the network; the
//! saved-status and browse logic only ever talk to this trait.

use async_trait::async_trait;
use shared::browse::RestaurantQuery;
use shared::models::{
    BusinessName, NewReview, PostedReview, RestaurantDetails, RestaurantRecord, Review,
    SaveRequest,
};
use shared::response::{CityList, CuisineList, HealthResponse, MessageResponse, RestaurantPage};

use crate::{ClientResult, HttpClient};

#[async_trait]
pub trait RestoApi: Send + Sync {
    async fn health(&self) -> ClientResult<HealthResponse>;

    async fn restaurants(&self, query: &RestaurantQuery) -> ClientResult<RestaurantPage>;

    async fn unique_cities(&self) -> ClientResult<Vec<String>>;

    async fn unique_cuisines(&self) -> ClientResult<Vec<String>>;

    async fn business_names(&self) -> ClientResult<Vec<BusinessName>>;

    async fn favorites(&self, user_id: &str) -> ClientResult<Vec<RestaurantRecord>>;

    async fn bookmarks(&self, user_id: &str) -> ClientResult<Vec<RestaurantRecord>>;

    /// Upsert (`status: Some`) or delete (`status: None`) a saved row.
    async fn set_saved_status(&self, request: &SaveRequest) -> ClientResult<MessageResponse>;

    async fn restaurant_details(&self, business_id: &str) -> ClientResult<RestaurantDetails>;

    async fn restaurant_summary(&self, business_id: &str) -> ClientResult<RestaurantDetails>;

    async fn reviews(&self, business_id: &str) -> ClientResult<Vec<Review>>;

    async fn post_review(&self, review: &NewReview) -> ClientResult<PostedReview>;
}

#[async_trait]
impl RestoApi for HttpClient {
    async fn health(&self) -> ClientResult<HealthResponse> {
        self.get("/health").await
    }

    async fn restaurants(&self, query: &RestaurantQuery) -> ClientResult<RestaurantPage> {
        self.get_with_query("/getRestaurants", query).await
    }

    async fn unique_cities(&self) -> ClientResult<Vec<String>> {
        let list: CityList = self.get("/getUniqueCities").await?;
        Ok(list.cities)
    }

    async fn unique_cuisines(&self) -> ClientResult<Vec<String>> {
        let list: CuisineList = self.get("/getUniqueCuisine").await?;
        Ok(list.cuisines)
    }

    async fn business_names(&self) -> ClientResult<Vec<BusinessName>> {
        self.get("/getBusinessNames").await
    }

    async fn favorites(&self, user_id: &str) -> ClientResult<Vec<RestaurantRecord>> {
        self.get_with_query("/favorites", &[("user_id", user_id)]).await
    }

    async fn bookmarks(&self, user_id: &str) -> ClientResult<Vec<RestaurantRecord>> {
        self.get_with_query("/bookmarks", &[("user_id", user_id)]).await
    }

    async fn set_saved_status(&self, request: &SaveRequest) -> ClientResult<MessageResponse> {
        self.post("/add-userfav-bookmarks", request).await
    }

    async fn restaurant_details(&self, business_id: &str) -> ClientResult<RestaurantDetails> {
        self.get_with_query("/getRestaurantDetails", &[("business_id", business_id)])
            .await
    }

    async fn restaurant_summary(&self, business_id: &str) -> ClientResult<RestaurantDetails> {
        self.get_with_query("/getRestaurantSummary", &[("business_id", business_id)])
            .await
    }

    async fn reviews(&self, business_id: &str) -> ClientResult<Vec<Review>> {
        self.get_with_query("/getReviewsByBusinessId", &[("business_id", business_id)])
            .await
    }

    async fn post_review(&self, review: &NewReview) -> ClientResult<PostedReview> {
        self.post("/postReview", review).await
    }
}
