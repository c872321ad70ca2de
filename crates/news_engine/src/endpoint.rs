use news_core::NewsQuery;
use url::Url;

use crate::{FailureKind, FetchError};

/// Parse and validate the API base, e.g. `http://localhost:8080`.
pub fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim())
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, format!("{raw}: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(FetchError::new(
            FailureKind::InvalidUrl,
            format!("{raw}: expected an http(s) base url"),
        ));
    }
    Ok(url)
}

/// Build the request URL for `query` below `base`.
///
/// Browse: `{base}/api/news/{category}?sort=..&page=..`
/// Search: `{base}/api/news/search?q=..&sort=..&page=..`
pub fn build_url(base: &Url, query: &NewsQuery) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.set_fragment(None);
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| FetchError::new(FailureKind::InvalidUrl, "base url cannot be a base"))?;
        segments.pop_if_empty().extend(["api", "news"]);
        match query {
            NewsQuery::Browse { category, .. } => segments.push(category),
            NewsQuery::Search { .. } => segments.push("search"),
        };
    }
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        if let NewsQuery::Search { term, .. } = query {
            pairs.append_pair("q", term);
        }
        pairs
            .append_pair("sort", query.sort_by().as_str())
            .append_pair("page", &query.page().to_string());
    }
    Ok(url)
}
