use httpmock::Method::GET;
use httpmock::MockServer;
use serde_json::json;
use url::Url;

use newsdesk::core::models::{FALLBACK_IMAGE, FALLBACK_TITLE, FALLBACK_URL};
use newsdesk::{FmpConfig, GNewsConfig, NewsApiConfig, Source};

use crate::common::{client, ts};

#[tokio::test]
async fn newsapi_items_normalize_with_field_fallbacks() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("apiKey", "test-key");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "status": "ok",
                "totalResults": 2,
                "articles": [
                    {
                        "source": { "id": "reuters", "name": "Reuters" },
                        "title": "Complete item",
                        "description": "all fields present",
                        "url": "https://example.com/full",
                        "urlToImage": "https://example.com/full.png",
                        "publishedAt": "2024-03-01T12:00:00Z"
                    },
                    {
                        // Everything missing except the timestamp.
                        "publishedAt": "2024-03-01T08:00:00Z"
                    }
                ]
            }));
    });

    let source = Source::NewsApi(
        NewsApiConfig::new("test-key").base(Url::parse(&server.url("/v2/everything")).unwrap()),
    );
    let result = source.fetch(&client()).await;

    mock.assert();
    let articles = result.articles();
    assert_eq!(articles.len(), 2, "a sparse item must not drop the batch");

    let full = &articles[0];
    assert_eq!(full.title, "Complete item");
    assert_eq!(full.description, "all fields present");
    assert_eq!(full.url, "https://example.com/full");
    assert_eq!(full.image_url, "https://example.com/full.png");
    assert_eq!(full.published_at, Some(ts("2024-03-01T12:00:00Z")));
    assert_eq!(full.source, "Reuters");

    let sparse = &articles[1];
    assert_eq!(sparse.title, FALLBACK_TITLE);
    assert_eq!(sparse.description, "");
    assert_eq!(sparse.url, FALLBACK_URL);
    assert_eq!(sparse.image_url, FALLBACK_IMAGE);
    assert_eq!(sparse.source, "NewsAPI");
}

#[tokio::test]
async fn newsapi_missing_image_maps_to_the_fixed_fallback_url() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "status": "ok",
                "totalResults": 1,
                "articles": [{
                    "source": { "name": "Reuters" },
                    "title": "No picture",
                    "description": "",
                    "url": "https://example.com/1",
                    "urlToImage": null,
                    "publishedAt": "2024-03-01T09:00:00Z"
                }]
            }));
    });

    let source = Source::NewsApi(
        NewsApiConfig::new("test-key").base(Url::parse(&server.url("/v2/everything")).unwrap()),
    );
    let result = source.fetch(&client()).await;

    assert_eq!(result.articles()[0].image_url, FALLBACK_IMAGE);
}

#[tokio::test]
async fn newsapi_unparseable_timestamp_becomes_undated() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "status": "ok",
                "totalResults": 1,
                "articles": [{
                    "source": { "name": "Reuters" },
                    "title": "When?",
                    "description": "",
                    "url": "https://example.com/1",
                    "urlToImage": "https://example.com/1.png",
                    "publishedAt": "yesterday-ish"
                }]
            }));
    });

    let source = Source::NewsApi(
        NewsApiConfig::new("test-key").base(Url::parse(&server.url("/v2/everything")).unwrap()),
    );
    let result = source.fetch(&client()).await;

    assert_eq!(result.articles()[0].published_at, None);
}

#[tokio::test]
async fn gnews_items_normalize_including_the_image_field_rename() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v4/search")
            .query_param("q", "earnings OR stocks")
            .query_param("lang", "en")
            .query_param("country", "us")
            .query_param("max", "10")
            .query_param("token", "test-token");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "totalArticles": 2,
                "articles": [
                    {
                        "title": "GNews story",
                        "description": "summary",
                        "url": "https://example.com/g1",
                        "image": "https://example.com/g1.png",
                        "publishedAt": "2024-03-01T11:00:00Z",
                        "source": { "name": "AP", "url": "https://apnews.com" }
                    },
                    {
                        "title": "Nameless source",
                        "url": "https://example.com/g2",
                        "publishedAt": "2024-03-01T10:00:00Z",
                        "source": {}
                    }
                ]
            }));
    });

    let source = Source::GNews(
        GNewsConfig::new("test-token").base(Url::parse(&server.url("/api/v4/search")).unwrap()),
    );
    let result = source.fetch(&client()).await;

    mock.assert();
    let articles = result.articles();

    assert_eq!(articles[0].image_url, "https://example.com/g1.png");
    assert_eq!(articles[0].source, "AP");
    assert_eq!(articles[1].image_url, FALLBACK_IMAGE);
    assert_eq!(articles[1].source, "GNews");
}

#[tokio::test]
async fn fmp_items_normalize_site_text_and_naive_timestamps() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/stock_news")
            .query_param("tickers", "AAPL,MSFT")
            .query_param("limit", "10")
            .query_param("apikey", "test-key");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                {
                    "symbol": "AAPL",
                    "publishedDate": "2024-03-01 12:30:00",
                    "title": "Apple pops",
                    "image": "https://example.com/f1.png",
                    "site": "Benzinga",
                    "text": "body text",
                    "url": "https://example.com/f1"
                },
                {
                    "symbol": "MSFT",
                    "publishedDate": "not a date",
                    "title": "Microsoft drifts"
                }
            ]));
    });

    let source = Source::Fmp(
        FmpConfig::new("test-key")
            .base(Url::parse(&server.url("/api/v3/")).unwrap())
            .tickers("AAPL,MSFT"),
    );
    let result = source.fetch(&client()).await;

    mock.assert();
    let articles = result.articles();

    let first = &articles[0];
    assert_eq!(first.title, "Apple pops");
    assert_eq!(first.description, "body text");
    assert_eq!(first.source, "Benzinga");
    assert_eq!(first.published_at, Some(ts("2024-03-01T12:30:00Z")));

    let second = &articles[1];
    assert_eq!(second.published_at, None);
    assert_eq!(second.source, "Financial Modeling Prep");
    assert_eq!(second.url, FALLBACK_URL);
    assert_eq!(second.image_url, FALLBACK_IMAGE);
}

#[tokio::test]
async fn fmp_without_tickers_omits_the_parameter() {
    let server = MockServer::start();

    // Matching on the absence of `tickers` while requiring the other params.
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/stock_news")
            .query_param("limit", "10")
            .query_param("apikey", "test-key")
            .query_param_missing("tickers");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    let source = Source::Fmp(
        FmpConfig::new("test-key").base(Url::parse(&server.url("/api/v3/")).unwrap()),
    );
    let result = source.fetch(&client()).await;

    mock.assert();
    assert!(!result.is_failed());
    assert!(result.articles().is_empty());
}

#[tokio::test]
async fn a_bad_status_becomes_a_labeled_failure_marker() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/v4/search");
        then.status(403).body("forbidden");
    });

    let source = Source::GNews(
        GNewsConfig::new("bad-token").base(Url::parse(&server.url("/api/v4/search")).unwrap()),
    );
    let result = source.fetch(&client()).await;

    match result {
        newsdesk::ProviderResult::Failed(reason) => {
            assert!(reason.starts_with("GNews failed"), "got: {reason}");
            assert!(reason.contains("403"), "got: {reason}");
        }
        other => panic!("expected a failure marker, got {other:?}"),
    }
}

#[tokio::test]
async fn an_undecodable_body_becomes_a_failure_marker() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html>maintenance page</html>");
    });

    let source = Source::NewsApi(
        NewsApiConfig::new("test-key").base(Url::parse(&server.url("/v2/everything")).unwrap()),
    );
    let result = source.fetch(&client()).await;

    assert!(result.is_failed());
}
