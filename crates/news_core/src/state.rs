use crate::view_model::{ArticleRowView, CategoryView, NewsViewModel};
use crate::{
    Article, Effect, FetchFailure, FetchTicket, Mode, NewsQuery, RequestId, SessionId, SortBy,
    DEFAULT_CATEGORIES, DEFAULT_CATEGORY,
};

/// How a completed fetch is folded into the article list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// First page of a session: the list is replaced.
    Replace,
    /// Load-more within a session: the list is extended.
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFetch {
    pub ticket: FetchTicket,
    pub merge: MergeMode,
}

/// Outcome of folding a completion into state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Completion {
    Applied { merge: MergeMode, received: usize },
    Failed(FetchFailure),
    Stale { current: Option<FetchTicket> },
}

/// The whole view state. Only [`crate::update`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    mode: Mode,
    /// Last browsed category; kept while searching so home can return to it.
    category: String,
    sort_by: SortBy,
    page: u32,
    articles: Vec<Article>,
    loading: bool,
    session: SessionId,
    next_request: RequestId,
    pending: Option<PendingFetch>,
    dirty: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_filters(DEFAULT_CATEGORY, SortBy::default())
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Browse state for `category` ordered by `sort_by`, with nothing loaded.
    pub fn with_filters(category: impl Into<String>, sort_by: SortBy) -> Self {
        Self {
            mode: Mode::Browse,
            category: category.into(),
            sort_by,
            page: 1,
            articles: Vec::new(),
            loading: false,
            session: 0,
            next_request: 1,
            pending: None,
            dirty: false,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The active search term, or `""` while browsing.
    pub fn search_term(&self) -> &str {
        match &self.mode {
            Mode::Search { term } => term,
            Mode::Browse => "",
        }
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn pending(&self) -> Option<PendingFetch> {
        self.pending
    }

    pub fn can_load_more(&self) -> bool {
        !self.articles.is_empty() && !self.loading
    }

    pub fn view(&self) -> NewsViewModel {
        let searching = self.mode.is_search();
        let mut categories: Vec<CategoryView> = DEFAULT_CATEGORIES
            .iter()
            .map(|name| CategoryView {
                name: (*name).to_string(),
                active: *name == self.category,
            })
            .collect();
        if !DEFAULT_CATEGORIES.contains(&self.category.as_str()) {
            categories.push(CategoryView {
                name: self.category.clone(),
                active: true,
            });
        }

        let no_results = match &self.mode {
            Mode::Search { term } if !self.loading && self.articles.is_empty() => {
                Some(term.clone())
            }
            _ => None,
        };

        NewsViewModel {
            searching,
            category: self.category.clone(),
            categories,
            search_term: self.search_term().to_string(),
            sort_by: self.sort_by,
            page: self.page,
            articles: self
                .articles
                .iter()
                .enumerate()
                .map(|(index, article)| ArticleRowView {
                    index: index + 1,
                    title: article.title.clone(),
                    url: article.url.clone(),
                    description: article.description.clone(),
                    image: article.image.clone(),
                    source: article.source.name.clone(),
                    published_raw: article.published_at.clone(),
                    published_at: article.published_at_utc(),
                })
                .collect(),
            loading: self.loading,
            can_load_more: self.can_load_more(),
            show_categories: !searching,
            show_home: searching,
            no_results,
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_category(&mut self, category: String) {
        self.category = category;
    }

    pub(crate) fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
    }

    /// Start a new session in `mode`: page 1, loading, and a replacing fetch.
    /// Any fetch still in flight belongs to an older session from here on.
    pub(crate) fn start_session(&mut self, mode: Mode) -> Effect {
        self.mode = mode;
        self.page = 1;
        self.session += 1;
        self.issue(MergeMode::Replace)
    }

    /// Advance to the next page of the current session, if allowed.
    pub(crate) fn start_next_page(&mut self) -> Option<Effect> {
        if !self.can_load_more() {
            return None;
        }
        self.page += 1;
        Some(self.issue(MergeMode::Append))
    }

    pub(crate) fn apply_completion(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Article>, FetchFailure>,
    ) -> Completion {
        let pending = match self.pending {
            Some(pending) if pending.ticket == ticket => pending,
            _ => {
                return Completion::Stale {
                    current: self.pending.map(|p| p.ticket),
                }
            }
        };

        self.pending = None;
        self.loading = false;
        self.dirty = true;

        match result {
            Ok(articles) => {
                let received = articles.len();
                match pending.merge {
                    MergeMode::Replace => self.articles = articles,
                    MergeMode::Append => self.articles.extend(articles),
                }
                Completion::Applied {
                    merge: pending.merge,
                    received,
                }
            }
            Err(failure) => Completion::Failed(failure),
        }
    }

    fn issue(&mut self, merge: MergeMode) -> Effect {
        let ticket = FetchTicket {
            session: self.session,
            request: self.next_request,
        };
        self.next_request += 1;
        self.loading = true;
        self.pending = Some(PendingFetch { ticket, merge });
        self.dirty = true;
        Effect::Fetch {
            ticket,
            query: self.current_query(),
        }
    }

    fn current_query(&self) -> NewsQuery {
        match &self.mode {
            Mode::Browse => NewsQuery::Browse {
                category: self.category.clone(),
                sort_by: self.sort_by,
                page: self.page,
            },
            Mode::Search { term } => NewsQuery::Search {
                term: term.clone(),
                sort_by: self.sort_by,
                page: self.page,
            },
        }
    }
}
