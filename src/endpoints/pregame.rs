use crate::client::ValorantClient;
use crate::endpoints::{accepted, json_or_none, present};
use crate::error::ValorantError;
use crate::models::pregame::{PreGameMatch, PreGamePlayer};
use crate::request::PvpRequest;

/// Agent select endpoints (glz `pregame/v1`).
pub struct PreGameEndpoints<'a> {
    pub(crate) client: &'a ValorantClient,
}

impl PreGameEndpoints<'_> {
    fn request(&self, req: PvpRequest) -> PvpRequest {
        req.prefix(self.client.glz_url())
    }

    pub async fn current_pregame(
        &self,
        puuid: &str,
    ) -> Result<Option<PreGamePlayer>, ValorantError> {
        let req = self.request(PvpRequest::get(format!("pregame/v1/players/{puuid}")));
        let resp = self.client.handle_pvp_request(req).await?;
        json_or_none(resp, "pregame player").await
    }

    pub async fn current_pregame_id(&self) -> Result<Option<String>, ValorantError> {
        let Some(puuid) = self.client.current_player_puuid().await? else {
            return Ok(None);
        };
        Ok(self
            .current_pregame(&puuid)
            .await?
            .map(|p| p.match_id)
            .filter(|id| !id.is_empty()))
    }

    pub async fn pregame_match(
        &self,
        match_id: &str,
    ) -> Result<Option<PreGameMatch>, ValorantError> {
        let Some(match_id) = present(match_id, "pregame match id") else {
            return Ok(None);
        };
        let req = self.request(PvpRequest::get(format!("pregame/v1/matches/{match_id}")));
        let resp = self.client.handle_pvp_request(req).await?;
        json_or_none(resp, "pregame match").await
    }

    /// Hover an agent. Returns the updated lobby.
    pub async fn select_agent(
        &self,
        agent_id: &str,
    ) -> Result<Option<PreGameMatch>, ValorantError> {
        self.agent_action("select", agent_id).await
    }

    /// Lock in an agent. Returns the updated lobby.
    pub async fn lock_agent(&self, agent_id: &str) -> Result<Option<PreGameMatch>, ValorantError> {
        self.agent_action("lock", agent_id).await
    }

    async fn agent_action(
        &self,
        action: &str,
        agent_id: &str,
    ) -> Result<Option<PreGameMatch>, ValorantError> {
        let Some(agent_id) = present(agent_id, "agent id") else {
            return Ok(None);
        };
        let Some(match_id) = self.current_pregame_id().await? else {
            tracing::warn!("no active pregame match");
            return Ok(None);
        };
        let resp = self
            .client
            .handle_pvp_request(self.request(PvpRequest::post(format!(
                "pregame/v1/matches/{match_id}/{action}/{agent_id}"
            ))))
            .await?;
        json_or_none(resp, "pregame agent").await
    }

    /// Quit agent select.
    pub async fn dodge(&self) -> Result<bool, ValorantError> {
        let Some(match_id) = self.current_pregame_id().await? else {
            tracing::warn!("no active pregame match");
            return Ok(false);
        };
        let resp = self
            .client
            .handle_pvp_request(self.request(PvpRequest::post(format!(
                "pregame/v1/matches/{match_id}/quit"
            ))))
            .await?;
        Ok(accepted(resp, "dodge").await)
    }
}
