use super::errors::{FetchError, WatchError};
use super::ports::FingerprintSource;
use crate::fingerprint::Fingerprint;
use reqwest::Url;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Upper bound for one fetch; a hung request fails on its own instead of
/// keeping the watcher in flight.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads the fingerprint artifact over plain HTTP.
#[derive(Debug, Clone)]
pub struct HttpFingerprintSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpFingerprintSource {
    pub fn new(url: &str) -> Result<Self, WatchError> {
        let url = Url::parse(url).map_err(|e| WatchError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(WatchError::InvalidUrl {
                url: url.to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl FingerprintSource for HttpFingerprintSource {
    fn fetch(&self) -> impl Future<Output = Result<Fingerprint, FetchError>> + Send {
        let client = self.client.clone();
        let url = self.url.clone();

        async move {
            debug!(event = "core.watcher.fetch_started", url = %url);

            let response = client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| FetchError::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            let body = response.text().await.map_err(|e| FetchError::Body {
                url: url.to_string(),
                message: e.to_string(),
            })?;

            let value = body.trim();
            if value.is_empty() {
                return Err(FetchError::Body {
                    url: url.to_string(),
                    message: "empty fingerprint".to_string(),
                });
            }

            debug!(event = "core.watcher.fetch_completed", url = %url, fingerprint = value);
            Ok(Fingerprint::new(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_http_urls() {
        let source = HttpFingerprintSource::new("https://example.com/app/assets/index.hash").unwrap();
        assert_eq!(source.url().path(), "/app/assets/index.hash");
    }

    #[test]
    fn test_new_rejects_relative_and_non_http_urls() {
        for url in ["/assets/index.hash", "ftp://example.com/index.hash", "not a url"] {
            assert!(
                matches!(
                    HttpFingerprintSource::new(url),
                    Err(WatchError::InvalidUrl { .. })
                ),
                "'{}' should be rejected",
                url
            );
        }
    }

    #[tokio::test]
    async fn test_fetch_reports_transport_failure() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let source = HttpFingerprintSource::new("http://127.0.0.1:9/assets/index.hash").unwrap();
        let result = source.fetch().await;
        assert!(matches!(result, Err(FetchError::Transport { .. })));
    }
}
