use crate::client::ValorantClient;
use crate::endpoints::{accepted, json_or_none, present};
use crate::error::ValorantError;
use crate::models::coregame::{CoreGameLoadouts, CoreGameMatch, CoreGamePlayer};
use crate::request::PvpRequest;

/// Live match endpoints (glz `core-game/v1`).
pub struct CoreGameEndpoints<'a> {
    pub(crate) client: &'a ValorantClient,
}

impl CoreGameEndpoints<'_> {
    fn request(&self, req: PvpRequest) -> PvpRequest {
        req.prefix(self.client.glz_url())
    }

    pub async fn player(&self, puuid: &str) -> Result<Option<CoreGamePlayer>, ValorantError> {
        let req = self.request(PvpRequest::get(format!("core-game/v1/players/{puuid}")));
        let resp = self.client.handle_pvp_request(req).await?;
        json_or_none(resp, "core-game player").await
    }

    /// Match ID of the signed-in player's live match.
    pub async fn current_match_id(&self) -> Result<Option<String>, ValorantError> {
        let Some(puuid) = self.client.current_player_puuid().await? else {
            return Ok(None);
        };
        Ok(self
            .player(&puuid)
            .await?
            .map(|p| p.match_id)
            .filter(|id| !id.is_empty()))
    }

    pub async fn match_info(&self, match_id: &str) -> Result<Option<CoreGameMatch>, ValorantError> {
        let Some(match_id) = present(match_id, "match id") else {
            return Ok(None);
        };
        let req = self.request(PvpRequest::get(format!("core-game/v1/matches/{match_id}")));
        let resp = self.client.handle_pvp_request(req).await?;
        json_or_none(resp, "core-game match").await
    }

    pub async fn match_loadouts(
        &self,
        match_id: &str,
    ) -> Result<Option<CoreGameLoadouts>, ValorantError> {
        let Some(match_id) = present(match_id, "match id") else {
            return Ok(None);
        };
        let resp = self
            .client
            .handle_pvp_request(self.request(PvpRequest::get(format!(
                "core-game/v1/matches/{match_id}/loadouts"
            ))))
            .await?;
        json_or_none(resp, "core-game loadouts").await
    }

    pub async fn current_match_info(&self) -> Result<Option<CoreGameMatch>, ValorantError> {
        match self.current_match_id().await? {
            Some(match_id) => self.match_info(&match_id).await,
            None => Ok(None),
        }
    }

    pub async fn current_match_loadouts(&self) -> Result<Option<CoreGameLoadouts>, ValorantError> {
        match self.current_match_id().await? {
            Some(match_id) => self.match_loadouts(&match_id).await,
            None => Ok(None),
        }
    }

    /// Disassociate from the live match. `false` when not in one.
    pub async fn leave_current_match(&self) -> Result<bool, ValorantError> {
        let Some(puuid) = self.client.current_player_puuid().await? else {
            return Ok(false);
        };
        let Some(match_id) = self
            .player(&puuid)
            .await?
            .map(|p| p.match_id)
            .filter(|id| !id.is_empty())
        else {
            tracing::warn!("no active match to leave");
            return Ok(false);
        };

        let resp = self
            .client
            .handle_pvp_request(self.request(PvpRequest::post(format!(
                "core-game/v1/players/{puuid}/disassociate/{match_id}"
            ))))
            .await?;
        Ok(accepted(resp, "leave match").await)
    }
}
