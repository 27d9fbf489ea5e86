//! Client configuration

/// Default external IP lookup endpoint
pub const DEFAULT_IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";

/// Configuration for connecting to the payroll admin API.
///
/// The bearer token lives here (and on the gateway built from this config)
/// instead of in any ambient storage: it is set at login, read on every
/// request and cleared at logout. A config without a token produces
/// unauthenticated requests; authorization is the server's job.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g. "http://localhost:8080")
    pub base_url: String,

    /// Admin bearer token
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// External IP lookup endpoint, expected to return `{"ip": "..."}`
    pub ip_lookup_url: String,

    /// IP lookup timeout in seconds. Kept short: lookup failure is
    /// tolerated, a hang is not.
    pub ip_lookup_timeout: u64,

    /// User-Agent sent with requests and recorded in signature metadata
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            ip_lookup_url: DEFAULT_IP_LOOKUP_URL.to_string(),
            ip_lookup_timeout: 5,
            user_agent: concat!("payslip-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the external IP lookup endpoint
    pub fn with_ip_lookup_url(mut self, url: impl Into<String>) -> Self {
        self.ip_lookup_url = url.into();
        self
    }

    /// Set the IP lookup timeout
    pub fn with_ip_lookup_timeout(mut self, seconds: u64) -> Self {
        self.ip_lookup_timeout = seconds;
        self
    }

    /// Set the User-Agent string
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create a gateway from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
