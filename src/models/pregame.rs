use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreGamePlayer {
    #[serde(rename = "Subject")]
    pub puuid: String,
    #[serde(rename = "MatchID", default)]
    pub match_id: String,
    #[serde(rename = "Version", default)]
    pub version: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreGameMatch {
    #[serde(rename = "ID")]
    pub match_id: String,
    #[serde(rename = "MapID", default)]
    pub map_id: String,
    #[serde(rename = "Mode", default)]
    pub mode: String,
    #[serde(rename = "PregameState", default)]
    pub pregame_state: Option<String>,
    #[serde(rename = "PhaseTimeRemainingNS", default)]
    pub phase_time_remaining_ns: Option<i64>,
    #[serde(rename = "AllyTeam", default)]
    pub ally_team: Option<PreGameTeam>,
    #[serde(rename = "Teams", default)]
    pub teams: Vec<PreGameTeam>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreGameTeam {
    #[serde(rename = "TeamID")]
    pub team_id: String,
    #[serde(rename = "Players", default)]
    pub players: Vec<PreGameSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreGameSlot {
    #[serde(rename = "Subject")]
    pub puuid: String,
    #[serde(rename = "CharacterID", default)]
    pub character_id: String,
    /// `""`, `"selected"` or `"locked"`.
    #[serde(rename = "CharacterSelectionState", default)]
    pub selection_state: String,
    #[serde(rename = "PlayerIdentity", default)]
    pub identity: serde_json::Value,
}
