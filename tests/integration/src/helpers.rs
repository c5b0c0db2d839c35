//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers on a temporary
//! `channels.conf` and making HTTP requests against them.

use std::io::Write;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use vdr_api::{create_app, create_app_state};
use vdr_common::AppConfig;

use crate::fixtures::SAMPLE_CHANNELS_CONF;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _channels_conf: NamedTempFile,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on the sample channel list
    pub async fn start() -> Result<Self> {
        Self::start_with_channels(SAMPLE_CHANNELS_CONF.as_bytes(), "UTF-8").await
    }

    /// Start a test server on the given `channels.conf` contents
    pub async fn start_with_channels(channels_conf: &[u8], charset: &str) -> Result<Self> {
        Self::start_with_env(channels_conf, charset, &[]).await
    }

    /// Start a test server with extra environment variables
    pub async fn start_with_env(
        channels_conf: &[u8],
        charset: &str,
        vars: &[(&str, &str)],
    ) -> Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(channels_conf)?;
        file.flush()?;

        let config = test_config(&file, charset, vars)?;

        // Create app state
        let state = create_app_state(config)?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _channels_conf: file,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.request(Method::GET, path).await
    }

    /// Make a request with an arbitrary method and no body
    pub async fn request(&self, method: Method, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.request(method, &url).send().await?)
    }
}

/// Create a test configuration pointing at `channels_conf`
///
/// `vars` take precedence over the defaults below.
pub fn test_config(
    channels_conf: &NamedTempFile,
    charset: &str,
    vars: &[(&str, &str)],
) -> Result<AppConfig> {
    let path = channels_conf.path().display().to_string();
    let charset = charset.to_string();
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let config = AppConfig::from_lookup(move |key| {
        if let Some((_, value)) = vars.iter().find(|(k, _)| k == key) {
            return Some(value.clone());
        }
        match key {
            "VDR_CHANNELS_CONF" => Some(path.clone()),
            "VDR_CHANNELS_CHARSET" => Some(charset.clone()),
            "API_HOST" => Some("127.0.0.1".to_string()),
            _ => None,
        }
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status only
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Assert response status and return the body as text
pub async fn assert_text(response: Response, expected_status: StatusCode) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(body)
}

/// Get the `Content-Type` header of a response
pub fn content_type(response: &Response) -> Option<String> {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}
