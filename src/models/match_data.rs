use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetails {
    #[serde(rename = "matchInfo")]
    pub match_info: serde_json::Value,
    #[serde(default)]
    pub players: Vec<MatchPlayer>,
    #[serde(default)]
    pub teams: Option<Vec<serde_json::Value>>,
    #[serde(rename = "roundResults", default)]
    pub round_results: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub kills: Option<Vec<serde_json::Value>>,
}

impl MatchDetails {
    pub fn player(&self, puuid: &str) -> Option<&MatchPlayer> {
        self.players.iter().find(|p| p.subject == puuid)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub subject: String,
    #[serde(rename = "gameName", default)]
    pub game_name: String,
    #[serde(rename = "tagLine", default)]
    pub tag_line: String,
    #[serde(rename = "teamId", default)]
    pub team_id: String,
    #[serde(rename = "characterId", default)]
    pub character_id: String,
    #[serde(default)]
    pub stats: Option<PlayerStats>,
    #[serde(rename = "competitiveTier", default)]
    pub competitive_tier: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStats {
    pub score: u32,
    #[serde(rename = "roundsPlayed")]
    pub rounds_played: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    #[serde(rename = "playtimeMillis")]
    pub playtime_millis: u64,
}

impl PlayerStats {
    /// Kills per death, with zero deaths counted as one.
    pub fn kd(&self) -> f64 {
        f64::from(self.kills) / f64::from(self.deaths.max(1))
    }
}

/// One page of a player's match history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchHistory {
    #[serde(rename = "Subject")]
    pub puuid: String,
    #[serde(rename = "BeginIndex", default)]
    pub begin_index: u32,
    #[serde(rename = "EndIndex", default)]
    pub end_index: u32,
    #[serde(rename = "Total", default)]
    pub total: u32,
    #[serde(rename = "History", default)]
    pub history: Vec<MatchHistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchHistoryEntry {
    #[serde(rename = "MatchID")]
    pub match_id: String,
    #[serde(rename = "GameStartTime", default)]
    pub game_start_time: i64,
    #[serde(rename = "QueueID", default)]
    pub queue_id: String,
}
