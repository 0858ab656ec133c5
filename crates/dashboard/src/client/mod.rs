use std::future::Future;

use api_types::stats::StatsSnapshot;
use reqwest::Url;

use crate::error::{AppError, Result};

/// Backend used when the dashboard is served from a development host and no
/// API URL is configured.
pub const LOCAL_API_URL: &str = "http://localhost:3000";

const STATS_FAILED: &str = "Server xatosi";
const DELETE_FAILED: &str = "O'chirishda xatolik";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend answered with a non-2xx status.
    #[error("{0}")]
    RequestFailed(String),
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Operations the view state needs from the backend.
pub trait StatsApi {
    fn fetch_stats(
        &self,
        user_id: i64,
    ) -> impl Future<Output = std::result::Result<StatsSnapshot, ClientError>> + Send;

    fn delete_all_transactions(
        &self,
        user_id: i64,
    ) -> impl Future<Output = std::result::Result<(), ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct StatsClient {
    base_url: Url,
    http: reqwest::Client,
}

impl StatsClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn with_http(mut base_url: Url, http: reqwest::Client) -> Self {
        // `Url::join` drops the last path segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::RequestFailed(format!("invalid base_url: {err}")))
    }
}

impl StatsApi for StatsClient {
    async fn fetch_stats(&self, user_id: i64) -> std::result::Result<StatsSnapshot, ClientError> {
        let endpoint = self.endpoint("api/stats")?;
        tracing::debug!("GET {endpoint} chatId={user_id}");

        let res = self
            .http
            .get(endpoint)
            .query(&[("chatId", user_id)])
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!("stats request failed with status {status}");
            return Err(ClientError::RequestFailed(STATS_FAILED.to_string()));
        }

        let body = res.bytes().await.map_err(ClientError::Transport)?;
        let snapshot = serde_json::from_slice::<StatsSnapshot>(&body).map_err(|err| {
            tracing::warn!("stats response could not be decoded: {err}");
            ClientError::MalformedResponse(err.to_string())
        })?;

        Ok(chronological(snapshot))
    }

    async fn delete_all_transactions(&self, user_id: i64) -> std::result::Result<(), ClientError> {
        let endpoint = self.endpoint("api/transactions")?;
        tracing::debug!("DELETE {endpoint} chatId={user_id}");

        let res = self
            .http
            .delete(endpoint)
            .query(&[("chatId", user_id)])
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!("delete request failed with status {status}");
            return Err(ClientError::RequestFailed(DELETE_FAILED.to_string()));
        }

        tracing::info!("all transactions deleted for chatId={user_id}");
        Ok(())
    }
}

/// Reorders the weekly series oldest-first.
///
/// The backend delivers it newest-first. Called exactly once per fetched
/// snapshot, before anything derives views from it.
pub fn chronological(mut snapshot: StatsSnapshot) -> StatsSnapshot {
    snapshot.weekly_data.reverse();
    snapshot
}

/// Picks the API base URL.
///
/// An explicit `api_url` wins. Otherwise a development origin
/// (`localhost`/`127.0.0.1`) talks to [`LOCAL_API_URL`] and anything else
/// talks to the origin the dashboard was served from.
pub fn resolve_base_url(api_url: Option<&str>, origin: &str) -> Result<Url> {
    if let Some(api_url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
        return parse_url(api_url);
    }

    let origin = parse_url(origin)?;
    if is_local_host(&origin) {
        return parse_url(LOCAL_API_URL);
    }

    let mut same_origin = origin;
    same_origin.set_path("/");
    same_origin.set_query(None);
    same_origin.set_fragment(None);
    Ok(same_origin)
}

pub fn is_local_host(url: &Url) -> bool {
    matches!(url.host_str(), Some("localhost" | "127.0.0.1"))
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|err| {
        AppError::Config(config::ConfigError::Message(format!(
            "invalid url {raw:?}: {err}"
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_url_wins() {
        let url = resolve_base_url(Some("https://api.example.uz"), "http://localhost:5173").unwrap();
        assert_eq!(url.as_str(), "https://api.example.uz/");
    }

    #[test]
    fn blank_configured_url_is_ignored() {
        let url = resolve_base_url(Some("  "), "http://127.0.0.1:5173").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn local_origin_uses_local_backend() {
        let url = resolve_base_url(None, "http://localhost:5173/index.html").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn remote_origin_is_same_origin() {
        let url = resolve_base_url(None, "https://moliya.example.uz/app/?tgWebAppVersion=7").unwrap();
        assert_eq!(url.as_str(), "https://moliya.example.uz/");
    }

    #[test]
    fn invalid_origin_is_config_error() {
        let err = resolve_base_url(None, "not a url").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn client_keeps_base_path_prefix() {
        let base = Url::parse("https://example.uz/moliya").unwrap();
        let client = StatsClient::new(base);
        let endpoint = client.endpoint("api/stats").unwrap();
        assert_eq!(endpoint.as_str(), "https://example.uz/moliya/api/stats");
    }

    #[test]
    fn chronological_reverses_weekly_series() {
        let snapshot = StatsSnapshot {
            weekly_data: ["Sun", "Sat", "Mon"]
                .into_iter()
                .map(|name| api_types::stats::WeeklyPoint {
                    name: name.to_string(),
                    income: 0,
                    expense: 0,
                })
                .collect(),
            ..StatsSnapshot::default()
        };
        let names: Vec<_> = chronological(snapshot)
            .weekly_data
            .into_iter()
            .map(|point| point.name)
            .collect();
        assert_eq!(names, ["Mon", "Sat", "Sun"]);
    }
}
