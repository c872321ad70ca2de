#![allow(dead_code)]

use std::sync::Once;

use news_core::{update, Article, ArticleSource, Effect, FetchTicket, Msg, NewsQuery, ViewState};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(news_logging::initialize_for_tests);
}

pub fn article(title: &str) -> Article {
    Article {
        title: title.to_string(),
        description: Some(format!("about {title}")),
        url: format!("https://news.example.com/{title}"),
        image: None,
        source: ArticleSource {
            name: "Example Wire".to_string(),
            url: None,
        },
        published_at: "2025-03-01T12:00:00Z".to_string(),
    }
}

pub fn articles(titles: &[&str]) -> Vec<Article> {
    titles.iter().map(|title| article(title)).collect()
}

/// Applies `msg` and returns the single fetch it must have issued.
pub fn dispatch_fetch(state: ViewState, msg: Msg) -> (ViewState, FetchTicket, NewsQuery) {
    let (state, effects) = update(state, msg);
    assert_eq!(effects.len(), 1, "expected exactly one fetch, got {effects:?}");
    let Effect::Fetch { ticket, query } = effects.into_iter().next().unwrap();
    (state, ticket, query)
}

pub fn complete(state: ViewState, ticket: FetchTicket, titles: &[&str]) -> ViewState {
    let (state, effects) = update(
        state,
        Msg::FetchCompleted {
            ticket,
            result: Ok(articles(titles)),
        },
    );
    assert!(effects.is_empty());
    state
}

pub fn titles(state: &ViewState) -> Vec<String> {
    state.articles().iter().map(|a| a.title.clone()).collect()
}
