//! Load state of one independently fetched page section

use crate::ClientResult;

/// Each section of a page loads, succeeds or fails on its own; no retries.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<T> {
    Loading,
    Ready(T),
    /// The request succeeded with zero rows
    Empty,
    /// The request failed; holds the message to render
    Failed(String),
}

impl<T> SectionState<T> {
    /// `Ok` becomes `Ready`, `Err` becomes `Failed`.
    pub fn from_result(result: ClientResult<T>) -> Self {
        match result {
            Ok(value) => SectionState::Ready(value),
            Err(e) => SectionState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SectionState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SectionState::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            SectionState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> SectionState<Vec<T>> {
    /// Like [`from_result`](Self::from_result), with an empty list as `Empty`.
    pub fn from_list(result: ClientResult<Vec<T>>) -> Self {
        match result {
            Ok(items) if items.is_empty() => SectionState::Empty,
            other => Self::from_result(other),
        }
    }
}

impl<T> Default for SectionState<T> {
    fn default() -> Self {
        SectionState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    #[test]
    fn test_from_list() {
        assert_eq!(SectionState::<Vec<u8>>::from_list(Ok(vec![])), SectionState::Empty);
        assert_eq!(SectionState::from_list(Ok(vec![1])), SectionState::Ready(vec![1]));
        let failed = SectionState::<Vec<u8>>::from_list(Err(ClientError::NotFound("x".into())));
        assert_eq!(failed, SectionState::Failed("Not found: x".into()));
        assert!(SectionState::<u8>::default().is_loading());
    }
}
