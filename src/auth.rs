use crate::error::ValorantError;
use crate::models::local::EntitlementsToken;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of the Riot Client lockfile: `name:pid:port:password:protocol`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockfile {
    pub name: String,
    pub pid: u32,
    pub port: u16,
    pub password: String,
    pub protocol: String,
}

impl Lockfile {
    /// Read the lockfile from the first well-known location that exists.
    pub fn read() -> Result<Self, ValorantError> {
        let path = lockfile_path()?;
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Result<Self, ValorantError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ValorantError::LockfileNotFound,
            _ => ValorantError::LockfileMalformed(format!("{}: {e}", path.display())),
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ValorantError> {
        let parts: Vec<&str> = content.trim().split(':').collect();
        if parts.len() < 5 {
            return Err(ValorantError::LockfileMalformed(format!(
                "expected 5 fields, found {}",
                parts.len()
            )));
        }

        let pid = parts[1]
            .parse()
            .map_err(|_| ValorantError::LockfileMalformed(format!("bad pid {:?}", parts[1])))?;
        let port = parts[2]
            .parse()
            .map_err(|_| ValorantError::LockfileMalformed(format!("bad port {:?}", parts[2])))?;
        if parts[3].is_empty() {
            return Err(ValorantError::LockfileMalformed("empty password".into()));
        }

        Ok(Lockfile {
            name: parts[0].to_string(),
            pid,
            port,
            password: parts[3].to_string(),
            protocol: parts[4].to_string(),
        })
    }
}

fn lockfile_path() -> Result<PathBuf, ValorantError> {
    let local = dirs::data_local_dir().ok_or(ValorantError::LockfileNotFound)?;
    lockfile_candidates(&local)
        .into_iter()
        .find(|p| p.exists())
        .ok_or(ValorantError::LockfileNotFound)
}

fn lockfile_candidates(local: &Path) -> [PathBuf; 2] {
    [
        local.join("VALORANT").join("Saved").join("Lockfile"),
        local
            .join("Riot Games")
            .join("Riot Client")
            .join("Config")
            .join("lockfile"),
    ]
}

/// Where and how to reach the local client API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub protocol: String,
}

impl Credential {
    pub fn new(host: impl Into<String>, port: u16, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            username: "riot".to_string(),
            password: password.into(),
            protocol: "https".to_string(),
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

impl From<Lockfile> for Credential {
    fn from(lockfile: Lockfile) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: lockfile.port,
            username: "riot".to_string(),
            password: lockfile.password,
            protocol: lockfile.protocol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: String,
    pub entitlements_token: String,
    pub subject: Option<String>,
}

impl AuthTokens {
    /// Exchange the lockfile secret for bearer + entitlements tokens.
    pub async fn fetch(
        client: &reqwest::Client,
        credential: &Credential,
    ) -> Result<Self, ValorantError> {
        let resp = client
            .get(format!("{}/entitlements/v1/token", credential.base_url()))
            .basic_auth(&credential.username, Some(&credential.password))
            .send()
            .await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(ValorantError::AuthFailed(format!("{} {}", status.as_u16(), body)));
        }

        let body: EntitlementsToken = serde_json::from_str(&resp.text().await?)
            .map_err(|e| ValorantError::AuthFailed(format!("unexpected token payload: {e}")))?;

        Ok(AuthTokens {
            access_token: body.access_token,
            entitlements_token: body.token,
            subject: body.subject,
        })
    }
}

/// Static platform descriptor sent as `X-Riot-ClientPlatform`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientPlatform {
    pub platform_type: String,
    #[serde(rename = "platformOS")]
    pub platform_os: String,
    #[serde(rename = "platformOSVersion")]
    pub platform_os_version: String,
    pub platform_chipset: String,
}

impl Default for ClientPlatform {
    fn default() -> Self {
        Self {
            platform_type: "PC".to_string(),
            platform_os: "Windows".to_string(),
            platform_os_version: "10.0.19042.1.256.64bit".to_string(),
            platform_chipset: "Unknown".to_string(),
        }
    }
}

impl ClientPlatform {
    pub fn encode(&self) -> Result<String, ValorantError> {
        let json = serde_json::to_vec(self)?;
        Ok(base64::engine::general_purpose::STANDARD.encode(json))
    }
}
