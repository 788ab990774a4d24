use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::client::ValorantClient;
use crate::endpoints::{accepted, json_or_none};
use crate::error::ValorantError;
use crate::models::local::{
    ClientSessions, EntitlementsToken, ExternalSession, FriendRequests, Friends, LocalBlob,
    Messages, Presence, Presences,
};
use crate::region::region_from_sessions;
use std::collections::BTreeMap;

/// Endpoints served by the Riot Client itself: chat, presence, voice,
/// settings and session info.
pub struct LocalEndpoints<'a> {
    pub(crate) client: &'a ValorantClient,
}

impl LocalEndpoints<'_> {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ValorantError> {
        let resp = self
            .client
            .handle_local_request(Method::GET, path, None)
            .await?;
        json_or_none(resp, path).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<bool, ValorantError> {
        let resp = self
            .client
            .handle_local_request(method, path, Some(body))
            .await?;
        Ok(accepted(resp, path).await)
    }

    pub async fn friends(&self) -> Result<Option<Friends>, ValorantError> {
        self.get("chat/v4/friends").await
    }

    pub async fn friend_requests(&self) -> Result<Option<FriendRequests>, ValorantError> {
        self.get("chat/v4/friend_requests").await
    }

    pub async fn add_friend(&self, game_name: &str, tag_line: &str) -> Result<bool, ValorantError> {
        let body = json!({ "game_name": game_name, "game_tag": tag_line });
        self.send(Method::POST, "chat/v4/friends", &body).await
    }

    pub async fn remove_friend(&self, puuid: &str) -> Result<bool, ValorantError> {
        self.send(Method::DELETE, "chat/v4/friends", &json!({ "puuid": puuid }))
            .await
    }

    pub async fn messages(&self) -> Result<Option<Messages>, ValorantError> {
        self.get("chat/v5/messages").await
    }

    pub async fn send_message(&self, message: &str, cid: &str) -> Result<bool, ValorantError> {
        let body = json!({ "message": message, "cid": cid });
        self.send(Method::POST, "chat/v5/messages", &body).await
    }

    /// Fresh tokens straight from the client, without touching the session.
    pub async fn auth_info(&self) -> Result<Option<EntitlementsToken>, ValorantError> {
        self.get("entitlements/v1/token").await
    }

    pub async fn player_settings(&self) -> Result<Option<LocalBlob>, ValorantError> {
        self.get("player-preferences/v1/data-json/Ares.PlayerSettings")
            .await
    }

    pub async fn presences(&self) -> Result<Option<Vec<Presence>>, ValorantError> {
        let presences: Option<Presences> = self.get("chat/v4/presences").await?;
        Ok(presences.map(|p| p.presences))
    }

    pub async fn session(&self) -> Result<Option<ClientSessions>, ValorantError> {
        self.get("session/v1/sessions").await
    }

    async fn raw_external_sessions(
        &self,
    ) -> Result<Option<BTreeMap<String, serde_json::Value>>, ValorantError> {
        self.get("product-session/v1/external-sessions").await
    }

    /// Running products keyed by session name. Blocks that do not decode as
    /// a session are left out.
    pub async fn external_sessions(
        &self,
    ) -> Result<Option<BTreeMap<String, ExternalSession>>, ValorantError> {
        Ok(self.raw_external_sessions().await?.map(|sessions| {
            sessions
                .into_iter()
                .filter_map(|(key, block)| {
                    serde_json::from_value::<ExternalSession>(block)
                        .ok()
                        .map(|session| (key, session))
                })
                .collect()
        }))
    }

    /// Deployment region advertised in the game's launch arguments.
    pub async fn region(&self) -> Result<Option<String>, ValorantError> {
        Ok(self
            .raw_external_sessions()
            .await?
            .and_then(|sessions| region_from_sessions(&sessions)))
    }

    pub async fn voice_settings(&self) -> Result<Option<LocalBlob>, ValorantError> {
        self.get("voice-chat/v1/settings").await
    }

    pub async fn update_voice_settings(
        &self,
        settings: &serde_json::Value,
    ) -> Result<bool, ValorantError> {
        self.send(Method::PUT, "voice-chat/v1/settings", settings).await
    }

    pub async fn voice_token(&self) -> Result<Option<LocalBlob>, ValorantError> {
        self.get("voice-chat/v1/token").await
    }

    pub async fn voice_state(&self) -> Result<Option<LocalBlob>, ValorantError> {
        self.get("voice-chat/v1/state").await
    }

    pub async fn voice_participants(&self) -> Result<Option<LocalBlob>, ValorantError> {
        self.get("voice-chat/v1/participants").await
    }

    pub async fn voice_devices(&self) -> Result<Option<LocalBlob>, ValorantError> {
        self.get("voice-chat/v1/devices").await
    }

    pub async fn voice_connections(&self) -> Result<Option<LocalBlob>, ValorantError> {
        self.get("voice-chat/v1/connections").await
    }
}
