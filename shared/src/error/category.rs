//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 4xxx: Restaurant errors
/// - 5xxx: Saved errors
/// - 6xxx: Review errors
/// - 9xxx: System errors (and any unassigned range)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Restaurant errors (4xxx)
    Restaurant,
    /// Saved errors (5xxx)
    Saved,
    /// Review errors (6xxx)
    Review,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            4000..5000 => Self::Restaurant,
            5000..6000 => Self::Saved,
            6000..7000 => Self::Review,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Restaurant => "restaurant",
            Self::Saved => "saved",
            Self::Review => "review",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Restaurant);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Saved);
        assert_eq!(ErrorCategory::from_code(6002), ErrorCategory::Review);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(2500), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::RequiredField.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::RestaurantNotFound.category(),
            ErrorCategory::Restaurant
        );
        assert_eq!(ErrorCode::InvalidSaveStatus.category(), ErrorCategory::Saved);
        assert_eq!(ErrorCode::ReviewTextEmpty.category(), ErrorCategory::Review);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Restaurant).unwrap();
        assert_eq!(json, "\"restaurant\"");

        let category: ErrorCategory = serde_json::from_str("\"saved\"").unwrap();
        assert_eq!(category, ErrorCategory::Saved);
    }
}
