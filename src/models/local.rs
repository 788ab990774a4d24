use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of `product-session/v1/external-sessions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalSession {
    #[serde(rename = "launchConfiguration", default)]
    pub launch_configuration: LaunchConfiguration,
    #[serde(rename = "productId", default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchConfiguration {
    #[serde(default)]
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friends {
    #[serde(default)]
    pub friends: Vec<Friend>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friend {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub game_tag: String,
    #[serde(default)]
    pub pid: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub region: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendRequests {
    #[serde(default)]
    pub requests: Vec<FriendRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendRequest {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub game_tag: String,
    /// `"inbound"` or `"outbound"`.
    #[serde(default)]
    pub subscription: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presences {
    #[serde(default)]
    pub presences: Vec<Presence>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presence {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub game_tag: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub state: String,
    /// Base64-encoded game-specific presence blob.
    #[serde(default)]
    pub private: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub id: String,
    pub cid: String,
    pub body: String,
    #[serde(default)]
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub game_tag: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub time: String,
}

/// `entitlements/v1/token` as seen through the local endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntitlementsToken {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub token: String,
    #[serde(default)]
    pub subject: Option<String>,
}

/// Shapes that vary by client build are kept as raw JSON.
pub type LocalBlob = serde_json::Value;

pub type ClientSessions = HashMap<String, serde_json::Value>;
