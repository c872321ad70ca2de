use news_core::Article;
use serde_json::Value;

use crate::{FailureKind, FetchError};

/// Decode a news API body into its article list.
///
/// The body must be a JSON object. A missing or `null` `articles` field is an
/// empty list; anything else that is not an array of articles is an error.
pub fn decode_articles(bytes: &[u8]) -> Result<Vec<Article>, FetchError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

    let Value::Object(mut body) = value else {
        return Err(FetchError::new(
            FailureKind::Decode,
            "expected a JSON object at the top level",
        ));
    };

    match body.remove("articles") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(articles) => serde_json::from_value(articles).map_err(|err| {
            FetchError::new(FailureKind::Decode, format!("articles: {err}"))
        }),
    }
}
