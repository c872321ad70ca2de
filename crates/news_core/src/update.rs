use news_logging::{news_debug, news_info};

use crate::state::Completion;
use crate::{Effect, Mode, Msg, ViewState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every filter change (category, sort, search, home, refresh) opens a new
/// session before its fetch is issued, so completions from older sessions are
/// recognised as stale and dropped without touching state.
pub fn update(mut state: ViewState, msg: Msg) -> (ViewState, Vec<Effect>) {
    let effects = match msg {
        Msg::CategorySelected(category) => {
            state.set_category(category);
            vec![state.start_session(Mode::Browse)]
        }
        Msg::SortSelected(sort_by) => {
            state.set_sort_by(sort_by);
            let mode = state.mode().clone();
            vec![state.start_session(mode)]
        }
        Msg::SearchSubmitted(term) => {
            if term.trim().is_empty() {
                return (state, Vec::new());
            }
            vec![state.start_session(Mode::Search { term })]
        }
        Msg::HomeClicked => vec![state.start_session(Mode::Browse)],
        Msg::Refresh => {
            let mode = state.mode().clone();
            vec![state.start_session(mode)]
        }
        Msg::LoadMoreClicked => match state.start_next_page() {
            Some(effect) => vec![effect],
            None => {
                news_debug!(
                    "load more ignored (articles={}, loading={})",
                    state.articles().len(),
                    state.is_loading()
                );
                Vec::new()
            }
        },
        Msg::FetchCompleted { ticket, result } => {
            match state.apply_completion(ticket, result) {
                Completion::Applied { merge, received } => {
                    news_debug!(
                        "fetch {}/{} applied ({:?}, {} articles, {} total)",
                        ticket.session,
                        ticket.request,
                        merge,
                        received,
                        state.articles().len()
                    );
                }
                Completion::Failed(failure) => {
                    news_debug!(
                        "fetch {}/{} failed, keeping {} articles: {}",
                        ticket.session,
                        ticket.request,
                        state.articles().len(),
                        failure
                    );
                }
                Completion::Stale { current } => {
                    news_debug!(
                        "discarding stale response {}/{} (outstanding: {:?})",
                        ticket.session,
                        ticket.request,
                        current
                    );
                }
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    for effect in &effects {
        let Effect::Fetch { ticket, query } = effect;
        news_info!("issue fetch {}/{}: {}", ticket.session, ticket.request, query);
    }

    (state, effects)
}
