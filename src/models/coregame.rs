use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreGamePlayer {
    #[serde(rename = "Subject")]
    pub puuid: String,
    #[serde(rename = "MatchID", default)]
    pub match_id: String,
    #[serde(rename = "Version", default)]
    pub version: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreGameMatch {
    #[serde(rename = "MatchID")]
    pub match_id: String,
    #[serde(rename = "MapID", default)]
    pub map_id: String,
    #[serde(rename = "ModeID", default)]
    pub mode_id: String,
    #[serde(rename = "State", default)]
    pub state: Option<String>,
    #[serde(rename = "ProvisioningFlow", default)]
    pub provisioning_flow: Option<String>,
    #[serde(rename = "Players", default)]
    pub players: Vec<CoreGameMatchPlayer>,
    #[serde(rename = "MatchmakingData", default)]
    pub matchmaking_data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreGameMatchPlayer {
    #[serde(rename = "Subject")]
    pub puuid: String,
    #[serde(rename = "TeamID", default)]
    pub team_id: String,
    #[serde(rename = "CharacterID", default)]
    pub character_id: String,
    #[serde(rename = "PlayerIdentity", default)]
    pub identity: serde_json::Value,
    #[serde(rename = "SeasonalBadgeInfo", default)]
    pub seasonal_badge: Option<serde_json::Value>,
    #[serde(rename = "IsCoach", default)]
    pub is_coach: bool,
    #[serde(rename = "IsAssociated", default)]
    pub is_associated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreGameLoadouts {
    #[serde(rename = "Loadouts", default)]
    pub loadouts: Vec<serde_json::Value>,
}
