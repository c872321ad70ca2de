use std::time::Duration;

use futures_util::StreamExt;
use news_core::{Article, NewsQuery};
use news_logging::news_debug;
use reqwest::header::ACCEPT;
use url::Url;

use crate::{build_url, decode_articles, parse_base_url, FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// One GET per query, decoded into articles. No caching, no retries.
#[async_trait::async_trait]
pub trait NewsFetcher: Send + Sync {
    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestNewsFetcher {
    settings: FetchSettings,
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestNewsFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let base_url = parse_base_url(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            base_url,
            client,
        })
    }

    pub fn url_for(&self, query: &NewsQuery) -> Result<Url, FetchError> {
        build_url(&self.base_url, query)
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl NewsFetcher for ReqwestNewsFetcher {
    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>, FetchError> {
        let url = self.url_for(query)?;
        news_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        decode_articles(&bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
