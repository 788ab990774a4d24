use crate::client::ValorantClient;
use crate::endpoints::{json_or_none, present};
use crate::error::ValorantError;
use crate::request::PvpRequest;

/// Game session state (glz `session/v1`).
pub struct SessionsEndpoints<'a> {
    pub(crate) client: &'a ValorantClient,
}

impl SessionsEndpoints<'_> {
    /// Loop state (`MENUS`, `PREGAME`, `INGAME`) and connection info.
    ///
    /// The service wants the client version and platform headers, which the
    /// session's base header set already carries.
    pub async fn session(&self, puuid: &str) -> Result<Option<serde_json::Value>, ValorantError> {
        let Some(puuid) = present(puuid, "puuid") else {
            return Ok(None);
        };
        let req = PvpRequest::get(format!("session/v1/sessions/{puuid}"))
            .prefix(self.client.glz_url());
        let resp = self.client.handle_pvp_request(req).await?;
        json_or_none(resp, "session").await
    }
}
