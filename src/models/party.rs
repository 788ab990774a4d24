use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyPlayer {
    #[serde(rename = "Subject")]
    pub puuid: String,
    #[serde(rename = "CurrentPartyID", default)]
    pub current_party_id: String,
    #[serde(rename = "Invites", default)]
    pub invites: Option<serde_json::Value>,
    #[serde(rename = "Requests", default)]
    pub requests: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Accessibility", default)]
    pub accessibility: String,
    #[serde(rename = "Members", default)]
    pub members: Vec<PartyMember>,
    #[serde(rename = "MatchmakingData", default)]
    pub matchmaking_data: Option<serde_json::Value>,
    #[serde(rename = "Requests", default)]
    pub requests: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyMember {
    #[serde(rename = "Subject")]
    pub puuid: String,
    #[serde(rename = "CompetitiveTier", default)]
    pub competitive_tier: u32,
    #[serde(rename = "PlayerIdentity", default)]
    pub identity: PlayerIdentity,
    #[serde(rename = "IsOwner", default)]
    pub is_owner: bool,
    #[serde(rename = "IsReady", default)]
    pub is_ready: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerIdentity {
    #[serde(rename = "Subject", default)]
    pub puuid: String,
    #[serde(rename = "PlayerCardID", default)]
    pub player_card_id: String,
    #[serde(rename = "PlayerTitleID", default)]
    pub player_title_id: String,
    #[serde(rename = "AccountLevel", default)]
    pub account_level: u32,
    #[serde(rename = "GameName", default)]
    pub game_name: Option<String>,
    #[serde(rename = "TagLine", default)]
    pub tag_line: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    Open,
    Closed,
}

impl Accessibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Accessibility::Open => "OPEN",
            Accessibility::Closed => "CLOSED",
        }
    }
}

impl From<bool> for Accessibility {
    fn from(open: bool) -> Self {
        if open {
            Accessibility::Open
        } else {
            Accessibility::Closed
        }
    }
}
