// src/page/http.rs
// =============================================================================
// This module downloads pages over HTTP.
//
// Key functionality:
// - One shared reqwest Client (connection pooling, timeout, redirects)
// - Non-2xx responses count as failures, like a network error does
// - The Fetcher trait lets the crawler run against a stub in tests
//
// Rust concepts:
// - Traits: A shared interface that several types can implement
// - async-trait: Lets a trait have async methods usable through generics
// - thiserror: Derives Display/Error for our error enum
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Sent with every request so server logs can tell who is crawling.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const MAX_REDIRECTS: usize = 10;

/// Why a page could not be downloaded.
///
/// The crawler never stops on these: it prints the message and carries on
/// with an empty body.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client itself could not be set up.
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// DNS failure, refused connection, timeout, too many redirects, ...
    #[error("{0}")]
    Network(#[source] reqwest::Error),

    /// The server answered, but not with a 2xx status.
    #[error("HTTP error fetching URL. Status={status}")]
    HttpStatus { status: u16 },

    /// The response started but the body could not be read as text.
    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Anything that can turn a URL into page text.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// The real fetcher, backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Create an HTTP client with the crawl's settings
    // We'll reuse this client for all requests (connection pooling)
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(FetchError::Body)?;
        debug!(url, bytes = html.len(), "page fetched");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hi</html>"))
            .mount(&server)
            .await;

        let html = fetcher()
            .fetch(&format!("{}/page", server.uri()))
            .await
            .unwrap();
        assert_eq!(html, "<html>hi</html>");
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(fetcher().fetch(&server.uri()).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_fetch_follows_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("location", "/new"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved here"))
            .mount(&server)
            .await;

        let html = fetcher()
            .fetch(&format!("{}/old", server.uri()))
            .await
            .unwrap();
        assert_eq!(html, "moved here");
    }

    #[tokio::test]
    async fn test_fetch_error_status_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let err = fetcher().fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::HttpStatus { status: 404 }));
        assert_eq!(err.to_string(), "HTTP error fetching URL. Status=404");
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host() {
        // Port 1 on localhost is not listening
        let err = fetcher().fetch("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
