use crate::client::ValorantClient;
use crate::endpoints::{accepted, json_or_none, present};
use crate::error::ValorantError;
use crate::models::match_data::{MatchDetails, MatchHistory};
use crate::models::player::{AccountXp, MmrData, NameEntry, Penalties};
use crate::request::PvpRequest;

/// Player-data endpoints (pd) plus the shared content service.
///
/// Services that reject requests without `X-Riot-ClientVersion` (content,
/// MMR) need no overlay: the session's base headers always carry it.
pub struct PvpEndpoints<'a> {
    pub(crate) client: &'a ValorantClient,
}

impl PvpEndpoints<'_> {
    fn pd(&self, req: PvpRequest) -> PvpRequest {
        req.prefix(self.client.pd_url())
    }

    /// Season, act and event catalogue.
    pub async fn content(&self) -> Result<Option<serde_json::Value>, ValorantError> {
        let req = PvpRequest::get("content-service/v3/content").prefix(self.client.shared_url());
        let resp = self.client.handle_pvp_request(req).await?;
        json_or_none(resp, "content").await
    }

    pub async fn account_xp(&self, puuid: &str) -> Result<Option<AccountXp>, ValorantError> {
        let req = self.pd(PvpRequest::get(format!("account-xp/v1/players/{puuid}")));
        let resp = self.client.handle_pvp_request(req).await?;
        json_or_none(resp, "account xp").await
    }

    pub async fn player_loadout(
        &self,
        puuid: &str,
    ) -> Result<Option<serde_json::Value>, ValorantError> {
        let resp = self
            .client
            .handle_pvp_request(self.pd(PvpRequest::get(format!(
                "personalization/v2/players/{puuid}/playerloadout"
            ))))
            .await?;
        json_or_none(resp, "player loadout").await
    }

    pub async fn update_player_loadout(
        &self,
        puuid: &str,
        loadout: serde_json::Value,
    ) -> Result<bool, ValorantError> {
        let resp = self
            .client
            .handle_pvp_request(
                self.pd(PvpRequest::put(format!(
                    "personalization/v2/players/{puuid}/playerloadout"
                )))
                .json(loadout),
            )
            .await?;
        Ok(accepted(resp, "update player loadout").await)
    }

    pub async fn mmr(&self, puuid: &str) -> Result<Option<MmrData>, ValorantError> {
        let req = self.pd(PvpRequest::get(format!("mmr/v1/players/{puuid}")));
        let resp = self.client.handle_pvp_request(req).await?;
        json_or_none(resp, "mmr").await
    }

    /// Match history slice `[start, end)`, optionally for one queue.
    pub async fn match_history(
        &self,
        puuid: &str,
        start: u32,
        end: u32,
        queue: Option<&str>,
    ) -> Result<Option<MatchHistory>, ValorantError> {
        let mut path =
            format!("match-history/v1/history/{puuid}?startIndex={start}&endIndex={end}");
        if let Some(queue) = queue {
            path.push_str(&format!("&queue={}", urlencoding::encode(queue)));
        }
        let resp = self
            .client
            .handle_pvp_request(self.pd(PvpRequest::get(path)))
            .await?;
        json_or_none(resp, "match history").await
    }

    pub async fn match_details(
        &self,
        match_id: &str,
    ) -> Result<Option<MatchDetails>, ValorantError> {
        let Some(match_id) = present(match_id, "match id") else {
            return Ok(None);
        };
        let req = self.pd(PvpRequest::get(format!("match-details/v1/matches/{match_id}")));
        let resp = self.client.handle_pvp_request(req).await?;
        json_or_none(resp, "match details").await
    }

    pub async fn restrictions(&self) -> Result<Option<Penalties>, ValorantError> {
        let resp = self
            .client
            .handle_pvp_request(self.pd(PvpRequest::get("restrictions/v3/penalties")))
            .await?;
        json_or_none(resp, "restrictions").await
    }

    /// Resolve PUUIDs to display names.
    pub async fn player_names(
        &self,
        puuids: &[String],
    ) -> Result<Option<Vec<NameEntry>>, ValorantError> {
        let resp = self
            .client
            .handle_pvp_request(
                self.pd(PvpRequest::put("name-service/v2/players"))
                    .json(serde_json::json!(puuids)),
            )
            .await?;
        json_or_none(resp, "name service").await
    }

    pub async fn player_name(&self, puuid: &str) -> Result<Option<NameEntry>, ValorantError> {
        let names = self.player_names(&[puuid.to_string()]).await?;
        Ok(names.and_then(|names| names.into_iter().next()))
    }
}
