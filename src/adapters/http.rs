use crate::domain::model::UpstreamResponse;
use crate::domain::ports::{ConfigProvider, HttpClient};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// `HttpClient` backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.request_timeout())
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url) -> Result<UpstreamResponse> {
        tracing::debug!("Making upstream request to: {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!("Upstream response status: {}", status);

        let body = response.bytes().await?.to_vec();
        Ok(UpstreamResponse { status, body })
    }
}
