use chrono::{DateTime, Utc};

use crate::SortBy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsViewModel {
    pub searching: bool,
    pub category: String,
    pub categories: Vec<CategoryView>,
    pub search_term: String,
    pub sort_by: SortBy,
    pub page: u32,
    pub articles: Vec<ArticleRowView>,
    pub loading: bool,
    pub can_load_more: bool,
    pub show_categories: bool,
    pub show_home: bool,
    /// Search term to report when a finished search came back empty.
    pub no_results: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    /// 1-based position in the list.
    pub index: usize,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub source: String,
    pub published_raw: String,
    pub published_at: Option<DateTime<Utc>>,
}
