use crate::{Article, FetchTicket, SortBy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a category; switches to browsing it.
    CategorySelected(String),
    /// User changed the sort order; keeps the current listing.
    SortSelected(SortBy),
    /// User submitted the search box. Blank terms are ignored.
    SearchSubmitted(String),
    /// User left search and went back to the last category.
    HomeClicked,
    /// User asked for the next page of the current listing.
    LoadMoreClicked,
    /// Reload the current listing from page 1 (initial load).
    Refresh,
    /// Engine completion for an issued fetch.
    FetchCompleted {
        ticket: FetchTicket,
        result: Result<Vec<Article>, FetchFailure>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Why a fetch produced no articles. The reducer treats every variant the
/// same way; the distinction exists for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    #[error("http status {0}")]
    Http(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("transport error: {0}")]
    Transport(String),
}
