use crate::domain::model::UpstreamResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Outbound HTTP used by the lookup proxy.
///
/// An `Err` means the call never produced a status line (DNS, connect, timeout,
/// body read). Any status the upstream sends, including 4xx and 5xx, is an `Ok`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url) -> Result<UpstreamResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn upstream_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn bind_address(&self) -> String;
    fn max_body_size(&self) -> usize;
}
