use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Method, Response, StatusCode};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::auth::{AuthTokens, ClientPlatform, Credential, Lockfile};
use crate::config::SessionConfig;
use crate::error::ValorantError;
use crate::models::player::UserInfo;
use crate::region::{region_from_sessions, RegionalUrls};
use crate::request::{
    join_url, should_retry, PvpRequest, CLIENT_PLATFORM_HEADER, CLIENT_VERSION_HEADER,
    ENTITLEMENTS_HEADER,
};
use crate::tls;

/// One authenticated identity against the local client and the regional
/// web API. Every endpoint adapter borrows this session.
pub struct ValorantClient {
    pub(crate) local: reqwest::Client,
    pub(crate) remote: reqwest::Client,
    pub(crate) credential: Credential,
    pub(crate) config: SessionConfig,
    pub(crate) tokens: AuthTokens,
    pub(crate) client_version: String,
    pub(crate) client_platform: String,
    pub(crate) base_headers: HeaderMap,
    pub(crate) region: String,
    pub(crate) urls: RegionalUrls,
}

impl ValorantClient {
    /// Connect to the running Riot Client found through its lockfile.
    pub async fn connect() -> Result<Self, ValorantError> {
        let lockfile = Lockfile::read()?;
        Self::connect_with(lockfile.into(), SessionConfig::default()).await
    }

    pub async fn connect_with(
        credential: Credential,
        config: SessionConfig,
    ) -> Result<Self, ValorantError> {
        let local = tls::local_client()?;
        let remote = tls::remote_client()?;

        let client_version = fetch_client_version(&remote, &config.version_url).await?;
        let client_platform = ClientPlatform::default().encode()?;
        let tokens = AuthTokens::fetch(&local, &credential).await?;
        let base_headers =
            base_headers(&tokens, &client_version, &client_platform, &config.user_agent)?;

        let region = match fetch_region(&local, &credential).await {
            Ok(region) => region,
            Err(e) => {
                warn!(error = %e, fallback = %config.default_region, "region discovery failed");
                config.default_region.clone()
            }
        };
        let urls = match &config.remote_base {
            Some(base) => RegionalUrls::uniform(base),
            None => RegionalUrls::for_region(&region),
        };

        info!(%region, %client_version, "session established");

        Ok(Self {
            local,
            remote,
            credential,
            config,
            tokens,
            client_version,
            client_platform,
            base_headers,
            region,
            urls,
        })
    }

    /// Re-exchange the lockfile secret and rebuild the base header set.
    ///
    /// Sessions never refresh on their own; call this after requests start
    /// coming back 401.
    pub async fn refresh_tokens(&mut self) -> Result<(), ValorantError> {
        let tokens = AuthTokens::fetch(&self.local, &self.credential).await?;
        self.base_headers = base_headers(
            &tokens,
            &self.client_version,
            &self.client_platform,
            &self.config.user_agent,
        )?;
        self.tokens = tokens;
        Ok(())
    }

    /// Run the region scan without the default-region fallback.
    pub async fn discover_region(&self) -> Result<String, ValorantError> {
        fetch_region(&self.local, &self.credential).await
    }

    /// Basic-auth request against the local client API. Not retried.
    pub async fn handle_local_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response, ValorantError> {
        local_request(&self.local, &self.credential, method, path, body).await
    }

    /// Authenticated request against the regional web API.
    ///
    /// Any completed exchange is returned as-is, whatever its status. Only
    /// transport failures are retried, sleeping `retry_delay` between
    /// attempts; the last failure is returned once the budget is spent.
    pub async fn handle_pvp_request(&self, request: PvpRequest) -> Result<Response, ValorantError> {
        let url = request.url(&self.urls.pd);
        let headers = request.merged_headers(&self.base_headers);
        let attempts = request.retries.unwrap_or(self.config.retries).max(1);

        let mut attempt = 1;
        loop {
            debug!(method = %request.method, %url, attempt, "pvp request");
            let mut builder = self
                .remote
                .request(request.method.clone(), &url)
                .headers(headers.clone());
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            match builder.send().await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < attempts && should_retry(&request.method, &e) => {
                    warn!(error = %e, %url, attempt, "transport failure, retrying");
                    tokio::time::sleep(self.config.retry_delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// The signed-in account, or `None` if the identity service refused.
    pub async fn current_player(&self) -> Result<Option<UserInfo>, ValorantError> {
        let resp = self
            .handle_pvp_request(PvpRequest::get("").prefix(self.config.userinfo_url.clone()))
            .await?;
        crate::endpoints::json_or_none(resp, "current player").await
    }

    pub async fn current_player_puuid(&self) -> Result<Option<String>, ValorantError> {
        Ok(self.current_player().await?.map(|info| info.sub))
    }

    pub fn local_url(&self) -> String {
        self.credential.base_url()
    }

    pub fn pd_url(&self) -> &str {
        &self.urls.pd
    }

    pub fn glz_url(&self) -> &str {
        &self.urls.glz
    }

    pub fn shared_url(&self) -> &str {
        &self.urls.shared
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn client_version(&self) -> &str {
        &self.client_version
    }

    pub fn client_platform(&self) -> &str {
        &self.client_platform
    }

    pub fn tokens(&self) -> &AuthTokens {
        &self.tokens
    }

    pub fn base_headers(&self) -> &HeaderMap {
        &self.base_headers
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

fn base_headers(
    tokens: &AuthTokens,
    client_version: &str,
    client_platform: &str,
    user_agent: &str,
) -> Result<HeaderMap, ValorantError> {
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", tokens.access_token))?;
    bearer.set_sensitive(true);
    let mut entitlements = HeaderValue::from_str(&tokens.entitlements_token)?;
    entitlements.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(HeaderName::from_static(ENTITLEMENTS_HEADER), entitlements);
    headers.insert(
        HeaderName::from_static(CLIENT_VERSION_HEADER),
        HeaderValue::from_str(client_version)?,
    );
    headers.insert(
        HeaderName::from_static(CLIENT_PLATFORM_HEADER),
        HeaderValue::from_str(client_platform)?,
    );
    headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    Ok(headers)
}

#[derive(Deserialize)]
struct VersionResponse {
    data: VersionData,
}

#[derive(Deserialize)]
struct VersionData {
    #[serde(rename = "riotClientVersion")]
    riot_client_version: String,
}

async fn fetch_client_version(http: &reqwest::Client, url: &str) -> Result<String, ValorantError> {
    let resp = http.get(url).send().await?;
    let status = resp.status();
    if status != StatusCode::OK {
        return Err(ValorantError::VersionUnavailable(format!(
            "{url} returned {}",
            status.as_u16()
        )));
    }

    let body: VersionResponse = serde_json::from_str(&resp.text().await?)
        .map_err(|e| ValorantError::VersionUnavailable(e.to_string()))?;
    Ok(body.data.riot_client_version)
}

async fn local_request(
    http: &reqwest::Client,
    credential: &Credential,
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<Response, ValorantError> {
    let url = join_url(&credential.base_url(), path);
    debug!(%method, %url, "local request");
    let mut builder = http
        .request(method, &url)
        .basic_auth(&credential.username, Some(&credential.password));
    if let Some(body) = body {
        builder = builder.json(body);
    }
    Ok(builder.send().await?)
}

async fn fetch_region(
    http: &reqwest::Client,
    credential: &Credential,
) -> Result<String, ValorantError> {
    let resp = local_request(
        http,
        credential,
        Method::GET,
        "product-session/v1/external-sessions",
        None,
    )
    .await?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(ValorantError::RegionNotFound(format!(
            "external sessions returned {}",
            status.as_u16()
        )));
    }

    let sessions: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(&resp.text().await?)?;
    region_from_sessions(&sessions).ok_or_else(|| {
        ValorantError::RegionNotFound("no -ares-deployment argument in any session".into())
    })
}
