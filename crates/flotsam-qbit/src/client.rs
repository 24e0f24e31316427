//! Authenticated qBittorrent Web API session.
//!
//! The Web API is cookie-authenticated: a successful form login sets an
//! `SID` cookie that every follow-up request must carry, so each session
//! owns its own cookie-store-enabled HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use flotsam_config::EndpointConfig;
use flotsam_inventory::{ClientError, Connect, DownloadClient, TorrentContent, TorrentSummary};
use reqwest::{Client, Response, Url};
use tracing::debug;

use crate::model::{TorrentFileEntry, TorrentInfo};

/// Body returned by `auth/login` when the credentials are accepted.
const LOGIN_ACCEPTED: &str = "Ok.";

/// Per-request timeout applied when the caller does not supply one.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connector that opens qBittorrent Web API sessions.
#[derive(Debug, Clone, Copy)]
pub struct QbitConnector {
    timeout: Duration,
}

impl QbitConnector {
    /// Build a connector applying `timeout` to every Web API request.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for QbitConnector {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl Connect for QbitConnector {
    async fn connect(
        &self,
        endpoint: &EndpointConfig,
    ) -> Result<Box<dyn DownloadClient>, ClientError> {
        let client = QbitClient::login(endpoint, self.timeout).await?;
        Ok(Box::new(client))
    }
}

/// One authenticated session against a qBittorrent endpoint.
#[derive(Debug)]
pub struct QbitClient {
    http: Client,
    base_url: Url,
}

impl QbitClient {
    /// Open a session by performing the Web API form login.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthRejected`] when the endpoint answers the
    /// login with anything other than a success status and an `Ok.` body,
    /// and a transport error when the endpoint is unreachable.
    pub async fn login(
        endpoint: &EndpointConfig,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let base_url = endpoint_url(endpoint)?;
        let http = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::transport("build http client", err))?;

        let login_url = api_url(&base_url, "auth/login")?;
        let response = http
            .post(login_url)
            .form(&[
                ("username", endpoint.username.as_str()),
                ("password", endpoint.password.as_str()),
            ])
            .send()
            .await
            .map_err(|err| ClientError::transport("auth/login", err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::transport("auth/login", err))?;
        if !status.is_success() || body.trim() != LOGIN_ACCEPTED {
            return Err(ClientError::AuthRejected {
                endpoint: endpoint.name.clone(),
            });
        }

        debug!(endpoint = %endpoint.name, "web api login accepted");
        Ok(Self { http, base_url })
    }

    async fn get(
        &self,
        path: &'static str,
        query: &[(&str, &str)],
    ) -> Result<Response, ClientError> {
        let url = api_url(&self.base_url, path)?;
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|err| ClientError::transport(path, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedResponse {
                operation: path,
                detail: format!("status {status}"),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl DownloadClient for QbitClient {
    async fn torrents(&self) -> Result<Vec<TorrentSummary>, ClientError> {
        let infos: Vec<TorrentInfo> = self
            .get("torrents/info", &[("filter", "all")])
            .await?
            .json()
            .await
            .map_err(|err| ClientError::transport("torrents/info", err))?;

        Ok(infos
            .into_iter()
            .map(|info| TorrentSummary {
                id: info.hash,
                save_path: info.save_path,
            })
            .collect())
    }

    async fn torrent_files(&self, torrent_id: &str) -> Result<Vec<TorrentContent>, ClientError> {
        let entries: Vec<TorrentFileEntry> = self
            .get("torrents/files", &[("hash", torrent_id)])
            .await?
            .json()
            .await
            .map_err(|err| ClientError::transport("torrents/files", err))?;

        Ok(entries
            .into_iter()
            .map(|entry| TorrentContent { path: entry.name })
            .collect())
    }
}

fn endpoint_url(endpoint: &EndpointConfig) -> Result<Url, ClientError> {
    let scheme = if endpoint.use_tls { "https" } else { "http" };
    let rendered = format!("{scheme}://{}:{}/", endpoint.host, endpoint.port);
    Url::parse(&rendered).map_err(|err| ClientError::transport("parse endpoint url", err))
}

fn api_url(base_url: &Url, path: &str) -> Result<Url, ClientError> {
    base_url
        .join(&format!("api/v2/{path}"))
        .map_err(|err| ClientError::transport("build api url", err))
}
