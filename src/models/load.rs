//! Asynchronous load status of a fetched document.

/// Progress of one fetched document.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    /// Fetch or parse failed; carries the message shown next to the retry button.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for LoadState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[test]
    fn test_from_result() {
        let ok: LoadState<u8> = Ok::<u8, FetchError>(3).into();
        assert_eq!(ok.ready(), Some(&3));

        let failed: LoadState<u8> = Err::<u8, _>(FetchError::Timeout).into();
        assert_eq!(failed, LoadState::Failed("Request timed out".to_string()));
        assert!(failed.ready().is_none());
    }

    #[test]
    fn test_default_is_loading() {
        assert_eq!(LoadState::<u8>::default(), LoadState::Loading);
    }
}
