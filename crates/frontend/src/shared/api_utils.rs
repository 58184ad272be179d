//! API configuration for frontend-backend communication
//!
//! Resolves the base URL that every backend path is appended to.

/// Port the backend listens on when the base URL is derived from the page location
pub const DEFAULT_API_PORT: u16 = 8080;
/// Path prefix of the backend REST API
pub const API_PREFIX: &str = "/api";

/// Resolved backend location, provided through context next to the `ApiClient`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Resolve the base URL for the running page.
    ///
    /// A compile-time `API_BASE_URL` wins; otherwise the URL is built from
    /// the window location, e.g. "http://localhost:8080/api".
    pub fn from_env() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let protocol = location.as_ref().and_then(|l| l.protocol().ok());
        let hostname = location.as_ref().and_then(|l| l.hostname().ok());
        Self {
            base_url: resolve_api_base(
                option_env!("API_BASE_URL"),
                protocol.as_deref(),
                hostname.as_deref(),
            ),
        }
    }

    /// Build a full API URL from a path such as "/teams/1"
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pick the API base URL from an explicit override or the page location.
///
/// Trailing slashes are trimmed so paths can always start with "/".
pub fn resolve_api_base(
    override_url: Option<&str>,
    protocol: Option<&str>,
    hostname: Option<&str>,
) -> String {
    if let Some(url) = override_url.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }
    let protocol = protocol.filter(|p| !p.is_empty()).unwrap_or("http:");
    let hostname = hostname.filter(|h| !h.is_empty()).unwrap_or("127.0.0.1");
    format!("{}//{}:{}{}", protocol, hostname, DEFAULT_API_PORT, API_PREFIX)
}
