use std::time::Duration;

use news_core::{Effect, FetchFailure, Msg};
use news_engine::{EngineError, EngineEvent, EngineHandle, FetchSettings};
use news_logging::news_warn;

/// Hands reducer effects to the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        Ok(Self::from_engine(EngineHandle::new(settings)?))
    }

    pub fn from_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { ticket, query } => self.engine.enqueue(ticket, query),
            }
        }
    }

    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(event_to_msg)
    }

    pub fn poll_timeout(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(event_to_msg)
    }
}

/// Failures are logged here and otherwise stay silent; the reducer only
/// clears its loading flag for them.
pub(crate) fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted { ticket, result } => {
            if let Err(err) = &result {
                news_warn!(
                    "Fetch {}/{} failed: {}",
                    ticket.session,
                    ticket.request,
                    err
                );
            }
            Msg::FetchCompleted {
                ticket,
                result: result.map_err(FetchFailure::from),
            }
        }
    }
}
