//! News core: pure view-state reducer, data model and view-model helpers.
mod article;
mod effect;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use article::{parse_timestamp, Article, ArticleSource};
pub use effect::{Effect, FetchTicket, RequestId, SessionId};
pub use msg::{FetchFailure, Msg};
pub use query::{
    Mode, NewsQuery, ParseSortByError, SortBy, DEFAULT_CATEGORIES, DEFAULT_CATEGORY,
};
pub use state::{MergeMode, PendingFetch, ViewState};
pub use update::update;
pub use view_model::{ArticleRowView, CategoryView, NewsViewModel};
