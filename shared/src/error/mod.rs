//! Unified error system
//!
//! This module provides the error handling shared by server and client:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: JSON body of a failed request
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Restaurant errors
//! - 5xxx: Saved (favorite / bookmark) errors
//! - 6xxx: Review errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::RestaurantNotFound);
//!
//! let err = AppError::validation("min_stars must be between 0 and 5")
//!     .with_detail("field", "min_stars");
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, Some(2));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
