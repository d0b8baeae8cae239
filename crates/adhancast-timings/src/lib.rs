//! Timings provider client — one GET against the provider, decoded as a
//! flat prayer-name → `"H:MM"` map.
//!
//! Any transport error or non-2xx status fails the whole run; there is no
//! retry and no partial result. Time strings come back unvalidated —
//! malformed values surface later in the schedule compiler.

use std::time::Duration;

use adhancast_core::{AdhanError, PrayerTimes, Result};

/// Default provider endpoint. The date is implicit server-side.
pub const DEFAULT_API_URL: &str = "https://alwaqt.app/api/timings";

/// Thin client for the timings provider.
pub struct TimingsClient {
    url: String,
    timeout: Duration,
}

impl TimingsClient {
    /// Create a client for the given endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch today's timings.
    pub async fn fetch(&self) -> Result<PrayerTimes> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("adhancast/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(|e| AdhanError::Fetch(format!("Client error: {e}")))?;

        let resp = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AdhanError::Fetch(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AdhanError::Fetch(format!("Provider error {status}: {body}")));
        }

        let times: PrayerTimes = resp
            .json()
            .await
            .map_err(|e| AdhanError::Fetch(format!("Bad response body: {e}")))?;
        tracing::debug!("Provider returned {} timing(s)", times.len());
        Ok(times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_flat_timing_map() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/timings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "fajr": "5:23",
                "dhuhr": "11:45",
                "maghrib": "7:02"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let times = TimingsClient::new(format!("{}/api/timings", server.uri()))
            .fetch()
            .await
            .unwrap();
        assert_eq!(times.len(), 3);
        assert_eq!(times.get("fajr").map(String::as_str), Some("5:23"));
        assert_eq!(times.get("maghrib").map(String::as_str), Some("7:02"));
    }

    #[tokio::test]
    async fn server_error_is_fatal_and_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let err = TimingsClient::new(server.uri()).fetch().await.unwrap_err();
        match err {
            AdhanError::Fetch(msg) => assert!(msg.contains("500")),
            other => panic!("expected Fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_object_body_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = TimingsClient::new(server.uri()).fetch().await.unwrap_err();
        assert!(matches!(err, AdhanError::Fetch(_)));
    }
}
