mod common;

use common::{Mock, Scenario, CLIENT_VERSION, PUUID};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use valclient::models::party::Accessibility;
use valclient::ItemType;

fn in_match() -> Scenario {
    Scenario {
        match_id: Some("match-1".to_string()),
        ..Scenario::default()
    }
}

fn in_party() -> Scenario {
    Scenario {
        party_id: Some("party-1".to_string()),
        ..Scenario::default()
    }
}

fn body_of(hit: &common::Hit) -> Value {
    serde_json::from_str(&hit.body).unwrap()
}

#[tokio::test]
async fn no_live_match_skips_match_lookup() {
    let mock = Mock::spawn(Scenario::default()).await;
    let client = mock.connect().await;

    assert!(client.coregame().current_match_info().await.unwrap().is_none());
    assert!(client.coregame().current_match_loadouts().await.unwrap().is_none());
    assert!(!client.coregame().leave_current_match().await.unwrap());

    assert_eq!(mock.hits_to("/core-game/v1/players/").len(), 3);
    assert!(mock.hits_to("/core-game/v1/matches/").is_empty());
}

#[tokio::test]
async fn live_match_is_resolved_through_player() {
    let mock = Mock::spawn(in_match()).await;
    let client = mock.connect().await;

    let info = client.coregame().current_match_info().await.unwrap().unwrap();
    assert_eq!(info.match_id, "match-1");
    assert_eq!(info.players.len(), 2);
    assert_eq!(info.players[0].puuid, PUUID);
    assert_eq!(info.state.as_deref(), Some("IN_PROGRESS"));

    let loadouts = client.coregame().current_match_loadouts().await.unwrap().unwrap();
    assert_eq!(loadouts.loadouts.len(), 1);
    assert_eq!(
        mock.last_hit_to("/core-game/v1/matches/").path,
        "/core-game/v1/matches/match-1/loadouts"
    );
}

#[tokio::test]
async fn empty_match_id_makes_no_request() {
    let mock = Mock::spawn(in_match()).await;
    let client = mock.connect().await;
    let before = mock.hits().len();

    assert!(client.coregame().match_info("").await.unwrap().is_none());
    assert!(client.coregame().match_loadouts("").await.unwrap().is_none());
    assert!(client.party().party("").await.unwrap().is_none());
    assert!(!client.party().request_to_join("").await.unwrap());
    assert!(client.pregame().pregame_match("").await.unwrap().is_none());
    assert!(client.pvp().match_details("").await.unwrap().is_none());
    assert!(client.store().order("").await.unwrap().is_none());
    assert!(client.sessions().session("").await.unwrap().is_none());
    assert_eq!(mock.hits().len(), before);
}

#[tokio::test]
async fn empty_ids_skip_party_actions() {
    let mock = Mock::spawn(in_party()).await;
    let client = mock.connect().await;

    assert!(!client.party().kick_player("").await.unwrap());
    assert!(!client.party().decline_request("").await.unwrap());
    assert!(mock.hits_to("/parties/v1/parties/").is_empty());
}

#[tokio::test]
async fn invite_escapes_riot_id() {
    let mock = Mock::spawn(in_party()).await;
    let client = mock.connect().await;

    assert!(client.party().invite_player("Foo Bar", "#1/2").await.unwrap());
    let hit = mock.last_hit_to("/parties/v1/parties/");
    assert_eq!(hit.method, "POST");
    assert_eq!(
        hit.path,
        "/parties/v1/parties/party-1/invites/name/Foo%20Bar/tag/%231%2F2"
    );
}

#[tokio::test]
async fn leaving_a_match_disassociates() {
    let mock = Mock::spawn(in_match()).await;
    let client = mock.connect().await;

    assert!(client.coregame().leave_current_match().await.unwrap());
    let hit = mock.last_hit_to("/core-game/v1/players/");
    assert_eq!(hit.method, "POST");
    assert_eq!(
        hit.path,
        format!("/core-game/v1/players/{PUUID}/disassociate/match-1")
    );
}

#[tokio::test]
async fn party_actions_without_party_do_nothing() {
    let mock = Mock::spawn(Scenario::default()).await;
    let client = mock.connect().await;
    let party = client.party();

    assert!(!party.join_queue().await.unwrap());
    assert!(!party.leave_queue().await.unwrap());
    assert!(!party.set_ready(true).await.unwrap());
    assert!(!party.set_accessibility(Accessibility::Open).await.unwrap());
    assert!(!party.kick_player("someone").await.unwrap());
    assert!(party.current_party().await.unwrap().is_none());

    assert!(mock.hits_to("/parties/v1/parties/").is_empty());
}

#[tokio::test]
async fn queue_actions_target_current_party() {
    let mock = Mock::spawn(in_party()).await;
    let client = mock.connect().await;

    assert!(client.party().join_queue().await.unwrap());
    let hit = mock.last_hit_to("/parties/v1/parties/");
    assert_eq!(hit.method, "POST");
    assert_eq!(hit.path, "/parties/v1/parties/party-1/matchmaking/join");

    assert!(client.party().leave_queue().await.unwrap());
    assert_eq!(
        mock.last_hit_to("/parties/v1/parties/").path,
        "/parties/v1/parties/party-1/matchmaking/leave"
    );
}

#[tokio::test]
async fn member_actions_carry_body() {
    let mock = Mock::spawn(in_party()).await;
    let client = mock.connect().await;

    assert!(client.party().set_ready(false).await.unwrap());
    let hit = mock.last_hit_to("/parties/v1/parties/");
    assert_eq!(
        hit.path,
        format!("/parties/v1/parties/party-1/members/{PUUID}/setReady")
    );
    assert_eq!(body_of(&hit), json!({ "ready": false }));

    assert!(client
        .party()
        .set_accessibility(Accessibility::Closed)
        .await
        .unwrap());
    let hit = mock.last_hit_to("/parties/v1/parties/");
    assert_eq!(hit.path, "/parties/v1/parties/party-1/accessibility");
    assert_eq!(body_of(&hit), json!({ "accessibility": "CLOSED" }));
}

#[tokio::test]
async fn current_party_lists_members() {
    let mock = Mock::spawn(in_party()).await;
    let client = mock.connect().await;

    let party = client.party().current_party().await.unwrap().unwrap();
    assert_eq!(party.id, "party-1");
    assert_eq!(party.members.len(), 1);
    assert_eq!(party.members[0].competitive_tier, 12);
    assert_eq!(party.members[0].identity.account_level, 42);
    assert!(party.members[0].is_owner);
}

#[tokio::test]
async fn kick_uses_delete() {
    let mock = Mock::spawn(in_party()).await;
    let client = mock.connect().await;

    assert!(client.party().kick_player("other").await.unwrap());
    let hit = mock.last_hit_to("/parties/v1/parties/");
    assert_eq!(hit.method, "DELETE");
    assert_eq!(hit.path, "/parties/v1/parties/party-1/members/other");
}

#[tokio::test]
async fn lock_agent_posts_to_pregame_match() {
    let mock = Mock::spawn(Scenario {
        pregame_id: Some("pre-1".to_string()),
        ..Scenario::default()
    })
    .await;
    let client = mock.connect().await;

    let lobby = client.pregame().lock_agent("agent-1").await.unwrap().unwrap();
    assert_eq!(lobby.match_id, "pre-1");
    assert_eq!(lobby.teams[0].players[0].selection_state, "locked");

    let hit = mock.last_hit_to("/pregame/v1/matches/");
    assert_eq!(hit.method, "POST");
    assert_eq!(hit.path, "/pregame/v1/matches/pre-1/lock/agent-1");
}

#[tokio::test]
async fn agent_select_outside_pregame_is_none() {
    let mock = Mock::spawn(Scenario::default()).await;
    let client = mock.connect().await;

    assert!(client.pregame().select_agent("agent-1").await.unwrap().is_none());
    assert!(!client.pregame().dodge().await.unwrap());
    assert!(mock.hits_to("/pregame/v1/matches/").is_empty());
}

#[tokio::test]
async fn presences_and_friend_requests_go_local() {
    let mock = Mock::spawn(Scenario::default()).await;
    let client = mock.connect().await;

    let presences = client.local().presences().await.unwrap().unwrap();
    assert_eq!(presences.len(), 1);
    assert_eq!(presences[0].puuid, PUUID);
    assert_eq!(presences[0].game_name, "Tester");

    assert!(client.local().add_friend("Friend", "0001").await.unwrap());
    let hit = mock.last_hit_to("/chat/v4/friends");
    assert_eq!(hit.method, "POST");
    assert!(hit.headers["authorization"]
        .to_str()
        .unwrap()
        .starts_with("Basic "));
    assert_eq!(
        body_of(&hit),
        json!({ "game_name": "Friend", "game_tag": "0001" })
    );
}

#[tokio::test]
async fn rejected_reads_are_none() {
    let mock = Mock::spawn(Scenario::default()).await;
    let client = mock.connect().await;

    assert!(client.pvp().mmr(PUUID).await.unwrap().is_none());
    assert!(client.local().voice_state().await.unwrap().is_none());
}

#[tokio::test]
async fn mmr_carries_client_version() {
    let mock = Mock::spawn(Scenario::default()).await;
    let client = mock.connect().await;

    client.pvp().mmr(PUUID).await.unwrap();
    let hit = mock.last_hit_to("/mmr/v1/players/");
    assert_eq!(hit.headers["x-riot-clientversion"], CLIENT_VERSION);
    assert_eq!(hit.headers.get_all("x-riot-clientversion").iter().count(), 1);
}

#[tokio::test]
async fn wallet_and_entitlements() {
    let mock = Mock::spawn(Scenario::default()).await;
    let client = mock.connect().await;

    let wallet = client.store().wallet(PUUID).await.unwrap().unwrap();
    assert_eq!(
        wallet.balances.get("85ad13f7-3d1b-5128-9eb2-7cd8ee0b5741"),
        Some(&1250)
    );

    let owned = client
        .store()
        .entitlements(PUUID, ItemType::Skins)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owned.item_type_id, ItemType::Skins.id());
    assert_eq!(owned.entitlements[0].item_id, "item-1");
    assert_eq!(
        mock.last_hit_to("/store/v1/entitlements/").path,
        format!("/store/v1/entitlements/{PUUID}/{}", ItemType::Skins.id())
    );
}

#[tokio::test]
async fn player_name_resolves_single_puuid() {
    let mock = Mock::spawn(Scenario::default()).await;
    let client = mock.connect().await;

    let name = client.pvp().player_name(PUUID).await.unwrap().unwrap();
    assert_eq!(name.game_name, "Tester");
    assert_eq!(name.tag_line, "EUW");

    let hit = mock.last_hit_to("/name-service/v2/players");
    assert_eq!(hit.method, "PUT");
    assert_eq!(body_of(&hit), json!([PUUID]));
}

#[tokio::test]
async fn match_history_builds_query() {
    let mock = Mock::spawn(Scenario::default()).await;
    let client = mock.connect().await;

    let history = client
        .pvp()
        .match_history(PUUID, 0, 5, Some("competitive"))
        .await
        .unwrap();
    assert!(history.is_none());
    assert_eq!(
        mock.last_hit_to("/match-history/").path,
        format!("/match-history/v1/history/{PUUID}?startIndex=0&endIndex=5&queue=competitive")
    );
}

#[tokio::test]
async fn match_history_escapes_queue() {
    let mock = Mock::spawn(Scenario::default()).await;
    let client = mock.connect().await;

    client
        .pvp()
        .match_history(PUUID, 0, 20, Some("swift&endIndex=999"))
        .await
        .unwrap();
    assert_eq!(
        mock.last_hit_to("/match-history/").path,
        format!("/match-history/v1/history/{PUUID}?startIndex=0&endIndex=20")
            + "&queue=swift%26endIndex%3D999"
    );
}

#[tokio::test]
async fn session_sends_version_and_platform() {
    let mock = Mock::spawn(Scenario::default()).await;
    let client = mock.connect().await;

    let session = client.sessions().session(PUUID).await.unwrap().unwrap();
    assert_eq!(session["loopState"], "MENUS");

    let hit = mock.last_hit_to("/session/v1/sessions/");
    assert_eq!(hit.headers["x-riot-clientversion"], CLIENT_VERSION);
    assert_eq!(hit.headers["x-riot-clientplatform"], client.client_platform());
    assert_eq!(hit.headers["authorization"], "Bearer access-1");
}
