use serde_json::json;

use crate::client::ValorantClient;
use crate::endpoints::{accepted, json_or_none, present};
use crate::error::ValorantError;
use crate::models::party::{Accessibility, Party, PartyPlayer};
use crate::request::PvpRequest;

/// Party and matchmaking endpoints (glz `parties/v1`).
///
/// Every action on "the current party" first resolves the party ID and
/// returns `false` without a request when the player is not in one.
pub struct PartyEndpoints<'a> {
    pub(crate) client: &'a ValorantClient,
}

impl PartyEndpoints<'_> {
    fn request(&self, req: PvpRequest) -> PvpRequest {
        req.prefix(self.client.glz_url())
    }

    pub async fn player(&self, puuid: &str) -> Result<Option<PartyPlayer>, ValorantError> {
        let req = self.request(PvpRequest::get(format!("parties/v1/players/{puuid}")));
        let resp = self.client.handle_pvp_request(req).await?;
        json_or_none(resp, "party player").await
    }

    pub async fn current_party_id(&self) -> Result<Option<String>, ValorantError> {
        let Some(puuid) = self.client.current_player_puuid().await? else {
            return Ok(None);
        };
        Ok(self
            .player(&puuid)
            .await?
            .map(|p| p.current_party_id)
            .filter(|id| !id.is_empty()))
    }

    pub async fn party(&self, party_id: &str) -> Result<Option<Party>, ValorantError> {
        let Some(party_id) = present(party_id, "party id") else {
            return Ok(None);
        };
        let req = self.request(PvpRequest::get(format!("parties/v1/parties/{party_id}")));
        let resp = self.client.handle_pvp_request(req).await?;
        json_or_none(resp, "party").await
    }

    pub async fn current_party(&self) -> Result<Option<Party>, ValorantError> {
        match self.current_party_id().await? {
            Some(party_id) => self.party(&party_id).await,
            None => Ok(None),
        }
    }

    /// POST `parties/v1/parties/{party}/{suffix}` against the current party.
    async fn party_action(
        &self,
        suffix: &str,
        body: Option<serde_json::Value>,
        what: &str,
    ) -> Result<bool, ValorantError> {
        let Some(party_id) = self.current_party_id().await? else {
            tracing::warn!("not in a party, skipping {what}");
            return Ok(false);
        };
        let mut req = self.request(PvpRequest::post(format!(
            "parties/v1/parties/{party_id}/{suffix}"
        )));
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = self.client.handle_pvp_request(req).await?;
        Ok(accepted(resp, what).await)
    }

    /// POST `.../members/{me}/{suffix}` against the current party.
    async fn member_action(
        &self,
        suffix: &str,
        body: Option<serde_json::Value>,
        what: &str,
    ) -> Result<bool, ValorantError> {
        let Some(puuid) = self.client.current_player_puuid().await? else {
            return Ok(false);
        };
        self.party_action(&format!("members/{puuid}/{suffix}"), body, what)
            .await
    }

    pub async fn kick_player(&self, puuid: &str) -> Result<bool, ValorantError> {
        let Some(puuid) = present(puuid, "player to kick") else {
            return Ok(false);
        };
        let Some(party_id) = self.current_party_id().await? else {
            return Ok(false);
        };
        let resp = self
            .client
            .handle_pvp_request(self.request(PvpRequest::delete(format!(
                "parties/v1/parties/{party_id}/members/{puuid}"
            ))))
            .await?;
        Ok(accepted(resp, "kick").await)
    }

    pub async fn set_ready(&self, ready: bool) -> Result<bool, ValorantError> {
        self.member_action("setReady", Some(json!({ "ready": ready })), "set ready")
            .await
    }

    pub async fn refresh_competitive_tier(&self) -> Result<bool, ValorantError> {
        self.member_action("refreshCompetitiveTier", None, "refresh competitive tier")
            .await
    }

    pub async fn refresh_player_identity(&self) -> Result<bool, ValorantError> {
        self.member_action("refreshPlayerIdentity", None, "refresh player identity")
            .await
    }

    pub async fn refresh_pings(&self) -> Result<bool, ValorantError> {
        self.member_action("refreshPings", None, "refresh pings").await
    }

    pub async fn join_queue(&self) -> Result<bool, ValorantError> {
        self.party_action("matchmaking/join", None, "join queue").await
    }

    pub async fn leave_queue(&self) -> Result<bool, ValorantError> {
        self.party_action("matchmaking/leave", None, "leave queue").await
    }

    pub async fn set_accessibility(
        &self,
        accessibility: Accessibility,
    ) -> Result<bool, ValorantError> {
        self.party_action(
            "accessibility",
            Some(json!({ "accessibility": accessibility.as_str() })),
            "set accessibility",
        )
        .await
    }

    pub async fn invite_player(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<bool, ValorantError> {
        self.party_action(
            &format!(
                "invites/name/{}/tag/{}",
                urlencoding::encode(game_name),
                urlencoding::encode(tag_line)
            ),
            None,
            "invite",
        )
        .await
    }

    /// Ask to join someone else's party. Needs no current party.
    pub async fn request_to_join(&self, party_id: &str) -> Result<bool, ValorantError> {
        let Some(party_id) = present(party_id, "party id") else {
            return Ok(false);
        };
        let resp = self
            .client
            .handle_pvp_request(self.request(PvpRequest::post(format!(
                "parties/v1/parties/{party_id}/request"
            ))))
            .await?;
        Ok(accepted(resp, "join request").await)
    }

    pub async fn decline_request(&self, request_id: &str) -> Result<bool, ValorantError> {
        let Some(request_id) = present(request_id, "request id") else {
            return Ok(false);
        };
        self.party_action(
            &format!("request/{request_id}/decline"),
            None,
            "decline request",
        )
        .await
    }
}
