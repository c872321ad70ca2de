use crate::NewsQuery;

pub type SessionId = u64;
pub type RequestId = u64;

/// Tag attached to every issued fetch. A completion is only applied when its
/// ticket equals the state's outstanding ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub session: SessionId,
    pub request: RequestId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch { ticket: FetchTicket, query: NewsQuery },
}
