//! HTTP client for the Chess.com events broadcast API.

use std::time::Duration;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, DNT, ORIGIN, REFERER,
};
use reqwest::Client;

use crate::config::Config;
use crate::error::ExportError;
use crate::models::{GameInfo, RoomInfo};

/// Headers the broadcast endpoints expect from a browser tab. Sent with
/// every request; Content-Length and Accept-Encoding are handled by
/// reqwest itself.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.chess.com"));
    headers.insert(DNT, HeaderValue::from_static("1"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.chess.com/"));
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("empty"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("cross-site"),
    );
    headers
}

pub struct ChessComClient {
    client: Client,
    base_url: String,
}

impl ChessComClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(browser_headers())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .gzip(true)
            .build()
            .unwrap();
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch event metadata: rounds and the full games list.
    pub async fn fetch_room(&self, event_id: &str) -> Result<RoomInfo, ExportError> {
        let url = format!("{}/events/api/room/{}", self.base_url, event_id);
        self.post_json(url).await
    }

    /// Fetch the move list for one game of a round.
    pub async fn fetch_game(
        &self,
        event_id: &str,
        round_slug: &str,
        game_slug: &str,
    ) -> Result<GameInfo, ExportError> {
        let url = format!(
            "{}/events/api/game/{}/{}/{}",
            self.base_url, event_id, round_slug, game_slug
        );
        self.post_json(url).await
    }

    /// POST with an empty body and decode the JSON response. The body is
    /// read as text first so malformed JSON is reported as a decode
    /// failure rather than a transport failure.
    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, ExportError> {
        // Rate limit
        tokio::time::sleep(Duration::from_millis(100)).await;

        let resp = self.client.post(&url).send().await?;

        if !resp.status().is_success() {
            return Err(ExportError::UpstreamStatus {
                status: resp.status(),
                url,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
