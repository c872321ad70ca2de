//! News engine: HTTP fetching, response decoding and effect execution.
mod decode;
mod endpoint;
mod engine;
mod fetch;
mod types;

pub use decode::decode_articles;
pub use endpoint::{build_url, parse_base_url};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, NewsFetcher, ReqwestNewsFetcher};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError};
