//! HTTP client for network-based API calls

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{ApiResponse, AppError, ErrorCode};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for the restaurant API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Decode a success body, or turn an error body into a [`ClientError`].
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let error = decode_error_body(&text);
            tracing::debug!(%status, code = %error.code, "Request failed");
            return Err(ClientError::from_status(status, error));
        }

        serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

/// `ApiResponse` error body, falling back to the raw text.
fn decode_error_body(text: &str) -> AppError {
    match serde_json::from_str::<ApiResponse>(text) {
        Ok(body) => body.into_app_error(),
        Err(_) if text.trim().is_empty() => AppError::new(ErrorCode::Unknown),
        Err(_) => AppError::with_message(ErrorCode::Unknown, text.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.url("/favorites"), "http://localhost:8080/favorites");
        assert_eq!(client.url("health"), "http://localhost:8080/health");
    }

    #[test]
    fn test_decode_error_body() {
        let err = decode_error_body(r#"{"code":5001,"message":"unknown save status: maybe"}"#);
        assert_eq!(err.code, ErrorCode::InvalidSaveStatus);
        assert_eq!(err.message, "unknown save status: maybe");

        let err = decode_error_body("Bad Gateway");
        assert_eq!(err.code, ErrorCode::Unknown);
        assert_eq!(err.message, "Bad Gateway");
    }
}
