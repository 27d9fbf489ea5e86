//! External IP lookup
//!
//! Signature records carry the signer's public IP as capture metadata. The
//! lookup is best-effort: callers substitute [`UNKNOWN_IP`] when it fails
//! and never abort the surrounding operation over it.

use crate::{ClientConfig, ClientResult};
use async_trait::async_trait;

/// Sentinel recorded when the lookup fails
pub const UNKNOWN_IP: &str = "未知IP";

#[derive(serde::Deserialize)]
struct IpResponse {
    ip: String,
}

/// Resolves the caller's public IP address
#[async_trait]
pub trait IpLookup: Send + Sync {
    async fn client_ip(&self) -> ClientResult<String>;
}

/// Lookup against an ipify-style endpoint returning `{"ip": "..."}`
#[derive(Debug, Clone)]
pub struct IpifyLookup {
    client: reqwest::Client,
    url: String,
}

impl IpifyLookup {
    /// Create a lookup from configuration. Uses its own short timeout so a
    /// slow lookup service cannot stall a signing flow.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.ip_lookup_timeout))
            .build()?;
        Ok(Self {
            client,
            url: config.ip_lookup_url.clone(),
        })
    }
}

#[async_trait]
impl IpLookup for IpifyLookup {
    async fn client_ip(&self) -> ClientResult<String> {
        let resp = self.client.get(&self.url).send().await?;
        let resp = resp.error_for_status()?;
        let body: IpResponse = resp.json().await?;
        Ok(body.ip)
    }
}
