use serde::{Deserialize, Serialize};

/// `auth.riotgames.com/userinfo` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub sub: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub acct: Option<Account>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameEntry {
    #[serde(rename = "Subject")]
    pub puuid: String,
    #[serde(rename = "DisplayName", default)]
    pub display_name: String,
    #[serde(rename = "GameName", default)]
    pub game_name: String,
    #[serde(rename = "TagLine", default)]
    pub tag_line: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MmrData {
    #[serde(rename = "Subject")]
    pub puuid: String,
    #[serde(rename = "LatestCompetitiveUpdate", default)]
    pub latest_update: Option<CompetitiveUpdate>,
    #[serde(rename = "QueueSkills", default)]
    pub queue_skills: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitiveUpdate {
    #[serde(rename = "MatchID", default)]
    pub match_id: String,
    #[serde(rename = "TierAfterUpdate", default)]
    pub tier_after_update: u32,
    #[serde(rename = "RankedRatingBeforeUpdate", default)]
    pub rating_before: i32,
    #[serde(rename = "RankedRatingAfterUpdate", default)]
    pub rating_after: i32,
    #[serde(rename = "RankedRatingEarned", default)]
    pub rating_earned: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountXp {
    #[serde(rename = "Subject")]
    pub puuid: String,
    #[serde(rename = "Progress", default)]
    pub progress: XpProgress,
    #[serde(rename = "History", default)]
    pub history: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XpProgress {
    #[serde(rename = "Level", default)]
    pub level: u32,
    #[serde(rename = "XP", default)]
    pub xp: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Penalties {
    #[serde(rename = "Subject", default)]
    pub puuid: String,
    #[serde(rename = "Penalties", default)]
    pub penalties: Vec<serde_json::Value>,
}
