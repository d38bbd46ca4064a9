use shared::FetchError;

/// Lifecycle of a widget's single fetch-on-mount.
///
/// `NotLoaded` and `Failed` both render as nothing; the distinction exists
/// so tests (and a future error UI) can tell them apart.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    NotLoaded,
    Loaded(T),
    Failed(FetchError),
}

impl<T> FetchState<T> {
    /// The payload, if the fetch has resolved successfully.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }
}
