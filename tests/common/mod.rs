//! In-process stand-in for the Riot Client local API and the regional web API.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use base64::Engine;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use valclient::{Credential, SessionConfig, ValorantClient};

pub const PUUID: &str = "0b3e5ec8-97cb-5b5a-9a66-3bb8f1d3a0d1";
pub const SECRET: &str = "lockfile-secret";
pub const CLIENT_VERSION: &str = "release-09.10-shipping-9-2555555";

#[derive(Debug, Clone)]
pub struct Scenario {
    pub version_ok: bool,
    pub token_ok: bool,
    pub sessions: Option<Value>,
    pub match_id: Option<String>,
    pub pregame_id: Option<String>,
    pub party_id: Option<String>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            version_ok: true,
            token_ok: true,
            sessions: Some(sessions_with_region("na")),
            match_id: None,
            pregame_id: None,
            party_id: None,
        }
    }
}

pub fn sessions_with_region(region: &str) -> Value {
    json!({
        "host_app": {
            "launchConfiguration": { "arguments": ["-ares-deployment=host"] },
            "productId": "riot_client"
        },
        "valorant": {
            "launchConfiguration": {
                "arguments": [
                    "-launch-product=valorant",
                    format!("-ares-deployment={region}"),
                    "-remoting-auth-token=abc"
                ]
            },
            "productId": "valorant",
            "version": "9.10.0"
        }
    })
}

#[derive(Debug, Clone)]
pub struct Hit {
    pub method: String,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

pub struct MockState {
    scenario: Scenario,
    tokens_issued: AtomicUsize,
    hits: Mutex<Vec<Hit>>,
}

pub struct Mock {
    pub addr: SocketAddr,
    state: Arc<MockState>,
}

impl Mock {
    pub async fn spawn(scenario: Scenario) -> Self {
        let state = Arc::new(MockState {
            scenario,
            tokens_issued: AtomicUsize::new(0),
            hits: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, state }
    }

    pub fn base(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn credential(&self) -> Credential {
        let mut credential = Credential::new("127.0.0.1", self.addr.port(), SECRET);
        credential.protocol = "http".to_string();
        credential
    }

    /// Config pointing every external service at this mock, except the
    /// regional hosts.
    pub fn config(&self) -> SessionConfig {
        SessionConfig::new()
            .with_version_url(format!("{}/v1/version", self.base()))
            .with_userinfo_url(format!("{}/userinfo", self.base()))
            .with_retry_delay(Duration::from_millis(10))
    }

    /// Session whose regional traffic also lands on this mock.
    pub async fn connect(&self) -> ValorantClient {
        ValorantClient::connect_with(self.credential(), self.config().with_remote_base(self.base()))
            .await
            .unwrap()
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.state.hits.lock().unwrap().clone()
    }

    pub fn hits_to(&self, prefix: &str) -> Vec<Hit> {
        self.hits()
            .into_iter()
            .filter(|h| h.path.starts_with(prefix))
            .collect()
    }

    pub fn last_hit_to(&self, prefix: &str) -> Hit {
        self.hits_to(prefix).pop().expect("no request reached the mock")
    }
}

/// Listener that accepts connections and hangs up without answering.
pub async fn spawn_dropper() -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = accepted.clone();
    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            counter.fetch_add(1, Ordering::SeqCst);
            drop(stream);
        }
    });
    (addr, accepted)
}

/// Address with nothing listening on it.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn ok(value: Value) -> Response {
    (StatusCode::OK, Json(value)).into_response()
}

fn status(code: u16, body: &str) -> Response {
    let code = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (code, body.to_string()).into_response()
}

fn header(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    state.hits.lock().unwrap().push(Hit {
        method: method.to_string(),
        path: uri
            .path_and_query()
            .map(|pq| pq.to_string())
            .unwrap_or_else(|| path.clone()),
        headers: headers.clone(),
        body: body.clone(),
    });
    let s = &state.scenario;
    let basic = format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(format!("riot:{SECRET}"))
    );

    match (method.as_str(), path.as_str()) {
        ("GET", "/v1/version") if s.version_ok => ok(json!({
            "status": 200,
            "data": { "riotClientVersion": CLIENT_VERSION, "branch": "release-09.10" }
        })),
        ("GET", "/v1/version") => status(503, "maintenance"),

        ("GET", "/entitlements/v1/token") => {
            if !s.token_ok || header(&headers, "authorization") != basic {
                return status(403, "forbidden");
            }
            let n = state.tokens_issued.fetch_add(1, Ordering::SeqCst) + 1;
            ok(json!({
                "accessToken": format!("access-{n}"),
                "token": format!("entitlement-{n}"),
                "subject": PUUID
            }))
        }

        ("GET", "/product-session/v1/external-sessions") => match &s.sessions {
            Some(sessions) => ok(sessions.clone()),
            None => status(500, "no sessions"),
        },

        ("GET", "/userinfo") => {
            if !header(&headers, "authorization").starts_with("Bearer access-") {
                return status(401, "unauthorized");
            }
            ok(json!({
                "sub": PUUID,
                "country": "deu",
                "acct": { "game_name": "Tester", "tag_line": "EUW" }
            }))
        }

        ("GET", p) if p.starts_with("/status/") => {
            let code = p.trim_start_matches("/status/").parse().unwrap_or(500);
            status(code, "nope")
        }

        ("GET", p) if p.starts_with("/core-game/v1/players/") => match &s.match_id {
            Some(id) => ok(json!({ "Subject": PUUID, "MatchID": id, "Version": 1 })),
            None => status(404, r#"{"errorCode":"RESOURCE_NOT_FOUND"}"#),
        },
        ("GET", p) if p.starts_with("/core-game/v1/matches/") && p.ends_with("/loadouts") => {
            ok(json!({ "Loadouts": [{ "CharacterID": "agent-1" }] }))
        }
        ("GET", p) if p.starts_with("/core-game/v1/matches/") => ok(json!({
            "MatchID": p.trim_start_matches("/core-game/v1/matches/"),
            "MapID": "/Game/Maps/Ascent/Ascent",
            "ModeID": "/Game/GameModes/Bomb/BombGameMode.BombGameMode_C",
            "State": "IN_PROGRESS",
            "Players": [
                { "Subject": PUUID, "TeamID": "Blue", "CharacterID": "agent-1" },
                { "Subject": "other", "TeamID": "Red", "CharacterID": "agent-2" }
            ]
        })),
        ("POST", p) if p.starts_with("/core-game/v1/players/") => ok(json!({})),

        ("GET", p) if p.starts_with("/pregame/v1/players/") => match &s.pregame_id {
            Some(id) => ok(json!({ "Subject": PUUID, "MatchID": id })),
            None => status(404, "not in pregame"),
        },
        ("POST", p) if p.starts_with("/pregame/v1/matches/") => ok(json!({
            "ID": s.pregame_id.clone().unwrap_or_default(),
            "MapID": "/Game/Maps/Bonsai/Bonsai",
            "Mode": "/Game/GameModes/Bomb/BombGameMode.BombGameMode_C",
            "PregameState": "character_select_active",
            "Teams": [{
                "TeamID": "Red",
                "Players": [{
                    "Subject": PUUID,
                    "CharacterID": "agent-1",
                    "CharacterSelectionState": "locked"
                }]
            }]
        })),

        ("GET", p) if p.starts_with("/parties/v1/players/") => match &s.party_id {
            Some(id) => ok(json!({ "Subject": PUUID, "CurrentPartyID": id, "Requests": [] })),
            None => status(404, "no party"),
        },
        ("GET", p) if p.starts_with("/parties/v1/parties/") => ok(json!({
            "ID": s.party_id.clone().unwrap_or_default(),
            "State": "DEFAULT",
            "Accessibility": "OPEN",
            "Members": [{
                "Subject": PUUID,
                "CompetitiveTier": 12,
                "PlayerIdentity": { "Subject": PUUID, "AccountLevel": 42 },
                "IsOwner": true
            }]
        })),
        (_, p) if p.starts_with("/parties/v1/parties/") => ok(json!({})),

        ("GET", "/chat/v4/presences") => ok(json!({
            "presences": [{
                "puuid": PUUID,
                "game_name": "Tester",
                "game_tag": "EUW",
                "product": "valorant",
                "state": "chat"
            }]
        })),
        ("POST", "/chat/v4/friends") => ok(json!({})),
        ("GET", "/voice-chat/v1/state") => status(404, "voice disabled"),

        ("GET", p) if p.starts_with("/store/v1/wallet/") => ok(json!({
            "Balances": { "85ad13f7-3d1b-5128-9eb2-7cd8ee0b5741": 1250 }
        })),
        ("GET", p) if p.starts_with("/store/v1/entitlements/") => ok(json!({
            "ItemTypeID": p.rsplit('/').next().unwrap_or_default(),
            "Entitlements": [{ "TypeID": "t", "ItemID": "item-1" }]
        })),

        ("PUT", "/name-service/v2/players") => {
            let puuids: Vec<String> = serde_json::from_str(&body).unwrap_or_default();
            let names: Vec<Value> = puuids
                .iter()
                .map(|p| {
                    json!({
                        "Subject": p,
                        "DisplayName": "",
                        "GameName": "Tester",
                        "TagLine": "EUW"
                    })
                })
                .collect();
            ok(Value::Array(names))
        }
        ("GET", p) if p.starts_with("/mmr/v1/players/") => status(403, "forbidden"),
        ("GET", p) if p.starts_with("/session/v1/sessions/") => ok(json!({
            "subject": PUUID,
            "loopState": "MENUS"
        })),

        _ => status(404, "unknown route"),
    }
}
