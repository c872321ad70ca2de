use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use news_core::{FetchTicket, NewsQuery};
use news_logging::news_debug;

use crate::fetch::{FetchSettings, NewsFetcher, ReqwestNewsFetcher};
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    Fetch { ticket: FetchTicket, query: NewsQuery },
}

/// Runs fetches on a background tokio runtime and reports completions over a
/// channel. Completions arrive in network order, not in issue order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestNewsFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn NewsFetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("news-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
                news_debug!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, ticket: FetchTicket, query: NewsQuery) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch { ticket, query });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn NewsFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { ticket, query } => {
            let result = fetcher.fetch(&query).await;
            news_debug!(
                "fetch {}/{} finished ({})",
                ticket.session,
                ticket.request,
                if result.is_ok() { "ok" } else { "error" }
            );
            let _ =event_tx.send(EngineEvent::FetchCompleted { ticket, result });
        }
    }
}
