use std::time::Duration;

pub const DEFAULT_VERSION_URL: &str = "https://valorant-api.com/v1/version";
pub const DEFAULT_USERINFO_URL: &str = "https://auth.riotgames.com/userinfo";
pub const DEFAULT_REGION: &str = "eu";
pub const DEFAULT_USER_AGENT: &str = "ShooterGame/13 Windows/10.0.19043.1.256.64bit";

/// Knobs for establishing a session.
///
/// ```rust,ignore
/// use std::time::Duration;
/// use valclient::SessionConfig;
///
/// let config = SessionConfig::new()
///     .with_default_region("na")
///     .with_retry_delay(Duration::from_millis(500));
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub(crate) version_url: String,
    pub(crate) userinfo_url: String,
    pub(crate) default_region: String,
    pub(crate) retries: u32,
    pub(crate) retry_delay: Duration,
    pub(crate) remote_base: Option<String>,
    pub(crate) user_agent: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version_url: DEFAULT_VERSION_URL.to_string(),
            userinfo_url: DEFAULT_USERINFO_URL.to_string(),
            default_region: DEFAULT_REGION.to_string(),
            retries: 3,
            retry_delay: Duration::from_secs(2),
            remote_base: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Override the public client-version metadata endpoint.
    #[must_use]
    pub fn with_version_url(mut self, url: impl Into<String>) -> Self {
        self.version_url = url.into();
        self
    }

    /// Override the identity (userinfo) endpoint.
    #[must_use]
    pub fn with_userinfo_url(mut self, url: impl Into<String>) -> Self {
        self.userinfo_url = url.into();
        self
    }

    /// Region used when discovery finds nothing (default: `eu`).
    #[must_use]
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }

    /// Attempts per remote request; clamped to at least one.
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries.max(1);
        self
    }

    /// Sleep between attempts after a transport failure.
    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Send all pd/glz/shared traffic to one base URL instead of the
    /// region-derived hosts, e.g. a local debugging proxy.
    #[must_use]
    pub fn with_remote_base(mut self, base: impl Into<String>) -> Self {
        self.remote_base = Some(base.into());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn version_url(&self) -> &str {
        &self.version_url
    }

    pub fn userinfo_url(&self) -> &str {
        &self.userinfo_url
    }

    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    pub fn remote_base(&self) -> Option<&str> {
        self.remote_base.as_deref()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
