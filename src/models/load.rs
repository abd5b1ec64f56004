use crate::core::error::LoadError;

/// Fetch state of one view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loaded(T),
    Failed(LoadError),
}

impl<T> From<Result<T, LoadError>> for Loadable<T> {
    fn from(result: Result<T, LoadError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err),
        }
    }
}

impl<T> Loadable<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
