use std::time::Duration;

use news_core::{NewsQuery, SortBy};
use news_engine::{FailureKind, FetchSettings, NewsFetcher, ReqwestNewsFetcher};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TWO_ARTICLES: &str = r#"{
  "totalArticles": 2,
  "articles": [
    {
      "title": "Match report",
      "description": "A close game",
      "url": "https://news.example.com/match",
      "image": "https://news.example.com/match.jpg",
      "publishedAt": "2025-05-01T18:30:00Z",
      "source": { "name": "Sports Daily", "url": "https://news.example.com" }
    },
    {
      "title": "Transfer rumours",
      "description": null,
      "url": "https://news.example.com/transfer",
      "publishedAt": "2025-05-01T17:00:00Z",
      "source": { "name": "Sports Daily" }
    }
  ]
}"#;

fn fetcher_for(server: &MockServer) -> ReqwestNewsFetcher {
    let settings = FetchSettings {
        base_url: server.uri(),
        ..FetchSettings::default()
    };
    ReqwestNewsFetcher::new(settings).expect("fetcher")
}

fn browse(category: &str, sort_by: SortBy, page: u32) -> NewsQuery {
    NewsQuery::Browse {
        category: category.to_string(),
        sort_by,
        page,
    }
}

#[tokio::test]
async fn browse_hits_category_endpoint_and_decodes_articles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news/sports"))
        .and(query_param("sort", "popularity"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(TWO_ARTICLES, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let articles = fetcher_for(&server)
        .fetch(&browse("sports", SortBy::Popularity, 2))
        .await
        .expect("fetch ok");

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "Match report");
    assert_eq!(articles[0].source.name, "Sports Daily");
    assert_eq!(articles[1].description, None);
    assert_eq!(articles[1].image, None);
}

#[tokio::test]
async fn search_sends_decoded_term() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news/search"))
        .and(query_param("q", "climate change"))
        .and(query_param("sort", "relevance"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"articles": []}"#, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let query = NewsQuery::Search {
        term: "climate change".to_string(),
        sort_by: SortBy::Relevance,
        page: 1,
    };
    let articles = fetcher_for(&server).fetch(&query).await.expect("fetch ok");
    assert!(articles.is_empty());
}

#[tokio::test]
async fn missing_articles_field_is_an_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news/world"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"totalArticles": 0}"#, "application/json"))
        .mount(&server)
        .await;

    let articles = fetcher_for(&server)
        .fetch(&browse("world", SortBy::PublishedAt, 1))
        .await
        .expect("fetch ok");
    assert!(articles.is_empty());
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news/business"))
        .respond_with(ResponseTemplate::new(429).set_body_raw(TWO_ARTICLES, "application/json"))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch(&browse("business", SortBy::PublishedAt, 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(429));
}

#[tokio::test]
async fn html_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news/science"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>maintenance</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch(&browse("science", SortBy::PublishedAt, 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news/general"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(TWO_ARTICLES, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let err = ReqwestNewsFetcher::new(settings)
        .unwrap()
        .fetch(&browse("general", SortBy::PublishedAt, 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news/technology"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(TWO_ARTICLES, "application/json"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        base_url: server.uri(),
        max_bytes: 64,
        ..FetchSettings::default()
    };
    let err = ReqwestNewsFetcher::new(settings)
        .unwrap()
        .fetch(&browse("technology", SortBy::PublishedAt, 1))
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 64, .. }
    ));
}

#[test]
fn invalid_base_url_is_rejected_up_front() {
    let settings = FetchSettings {
        base_url: "localhost:8080".to_string(),
        ..FetchSettings::default()
    };
    let err = ReqwestNewsFetcher::new(settings).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
