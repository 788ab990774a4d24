use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;

pub const ENTITLEMENTS_HEADER: &str = "x-riot-entitlements-jwt";
pub const CLIENT_VERSION_HEADER: &str = "x-riot-clientversion";
pub const CLIENT_PLATFORM_HEADER: &str = "x-riot-clientplatform";

/// One call to the regional web API, as taken by
/// [`ValorantClient::handle_pvp_request`](crate::ValorantClient::handle_pvp_request).
///
/// Extra headers are an overlay: they are merged over the session's base
/// header set at dispatch time and never leak into later calls.
#[derive(Debug, Clone)]
pub struct PvpRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) prefix: Option<String>,
    pub(crate) headers: Vec<(HeaderName, HeaderValue)>,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) retries: Option<u32>,
}

impl PvpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            prefix: None,
            headers: Vec::new(),
            body: None,
            retries: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Base URL for this call; `https://` is assumed when no scheme is given.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.push((name, value));
        self
    }

    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attempt budget for transport failures; overrides the session default.
    #[must_use]
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries.max(1));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn url(&self, default_base: &str) -> String {
        let base = match &self.prefix {
            Some(prefix) => normalize_prefix(prefix),
            None => normalize_prefix(default_base),
        };
        join_url(&base, &self.path)
    }

    /// Base headers with this request's overlay applied.
    pub(crate) fn merged_headers(&self, base: &HeaderMap) -> HeaderMap {
        let mut merged = base.clone();
        for (name, value) in &self.headers {
            merged.insert(name.clone(), value.clone());
        }
        merged
    }
}

pub(crate) fn normalize_prefix(prefix: &str) -> String {
    if prefix.contains("://") {
        prefix.to_string()
    } else {
        format!("https://{prefix}")
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.trim_end_matches('/').to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Whether a failed send may be repeated.
///
/// A connection that was never established is always safe to retry. Once a
/// connection existed the server may already have acted on the request, so
/// only idempotent methods are retried.
pub(crate) fn should_retry(method: &Method, error: &reqwest::Error) -> bool {
    if error.is_connect() {
        return true;
    }
    let transport = error.is_request() || error.is_timeout();
    transport && *method != Method::POST && *method != Method::PATCH
}
