use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when pulling a catalog source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client for a single catalog source
///
/// Performs a GET, reads the whole body and decodes it. Status codes are
/// not inspected; whatever body comes back goes to the decoder.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    client: Client,
    timeout: Duration,
}

impl SourceFetcher {
    /// Create a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client ({}), using defaults", e);
                Client::new()
            });

        Self { client, timeout }
    }

    /// Fetch `url` and decode its body into `T`
    pub async fn fetch<T>(&self, url: &str) -> Result<T, SourceError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("Fetching catalog source: {}", url);

        let fetch_err = |source| SourceError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(fetch_err)?;

        let body = response.bytes().await.map_err(fetch_err)?;

        serde_json::from_slice(&body).map_err(|source| {
            tracing::warn!("Malformed payload from {}: {}", url, source);
            SourceError::Decode {
                url: url.to_string(),
                source,
            }
        })
    }
}

impl Default for SourceFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[tokio::test]
    async fn test_fetch_decodes_array() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/categories")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 1, "name": "SUV"}, {"id": 2, "name": "Sedan"}]"#)
            .create_async()
            .await;

        let fetcher = SourceFetcher::default();
        let url = format!("{}/api/categories", server.url());
        let categories: Vec<Category> = fetcher.fetch(&url).await.unwrap();

        mock.assert_async().await;
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].name, "Sedan");
    }

    #[tokio::test]
    async fn test_malformed_payload_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/categories")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let fetcher = SourceFetcher::default();
        let url = format!("{}/api/categories", server.url());
        let result = fetcher.fetch::<Vec<Category>>(&url).await;

        assert!(matches!(result, Err(SourceError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_error_status_body_goes_to_decoder() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/categories")
            .with_status(500)
            .with_body("[]")
            .create_async()
            .await;

        let fetcher = SourceFetcher::default();
        let url = format!("{}/api/categories", server.url());
        let categories: Vec<Category> = fetcher.fetch(&url).await.unwrap();

        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn test_connection_failure_is_fetch_error() {
        let fetcher = SourceFetcher::new(Duration::from_millis(500));
        // Port 9 (discard) is not expected to accept HTTP connections
        let result = fetcher
            .fetch::<Vec<Category>>("http://127.0.0.1:9/api/categories")
            .await;

        assert!(matches!(result, Err(SourceError::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_stalled_source_times_out() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/categories")
            .with_status(200)
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_millis(1500));
                w.write_all(b"[]")
            })
            .create_async()
            .await;

        let fetcher = SourceFetcher::new(Duration::from_millis(100));
        let url = format!("{}/api/categories", server.url());

        let started = std::time::Instant::now();
        let result = fetcher.fetch::<Vec<Category>>(&url).await;

        match result {
            Err(SourceError::Fetch { source, .. }) => assert!(source.is_timeout()),
            other => panic!("expected a timeout, got {:?}", other),
        }
        assert!(started.elapsed() < Duration::from_millis(1500));
    }
}
