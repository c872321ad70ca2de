use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "technology";

/// Categories offered by the presentation layer. The reducer treats any
/// category string as an opaque token; this list only drives the picker.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "technology",
    "sports",
    "business",
    "general",
    "world",
    "science",
];

/// Result ordering requested from the API. Passed through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    PublishedAt,
    Relevance,
    Popularity,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::PublishedAt, SortBy::Relevance, SortBy::Popularity];

    /// Wire name used in the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::PublishedAt => "publishedAt",
            SortBy::Relevance => "relevance",
            SortBy::Popularity => "popularity",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order {0:?} (expected publishedAt, relevance or popularity)")]
pub struct ParseSortByError(pub String);

impl FromStr for SortBy {
    type Err = ParseSortByError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s.trim())
            .ok_or_else(|| ParseSortByError(s.to_string()))
    }
}

/// Which listing is active. Only search mode carries a term, so a search
/// term can never leak into a category listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse,
    Search {
        term: String,
    },
}

impl Mode {
    pub fn is_search(&self) -> bool {
        matches!(self, Mode::Search { .. })
    }
}

/// One logical request to the news API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsQuery {
    Browse {
        category: String,
        sort_by: SortBy,
        page: u32,
    },
    Search {
        term: String,
        sort_by: SortBy,
        page: u32,
    },
}

impl NewsQuery {
    pub fn page(&self) -> u32 {
        match self {
            NewsQuery::Browse { page, .. } | NewsQuery::Search { page, .. } => *page,
        }
    }

    pub fn sort_by(&self) -> SortBy {
        match self {
            NewsQuery::Browse { sort_by, .. } | NewsQuery::Search { sort_by, .. } => *sort_by,
        }
    }
}

impl fmt::Display for NewsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsQuery::Browse {
                category,
                sort_by,
                page,
            } => write!(f, "browse category={category} sort={sort_by} page={page}"),
            NewsQuery::Search {
                term,
                sort_by,
                page,
            } => write!(f, "search q={term:?} sort={sort_by} page={page}"),
        }
    }
}
