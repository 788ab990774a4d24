use tracing_subscriber::EnvFilter;
use valclient::ValorantClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("valclient=info")),
        )
        .init();

    let client = ValorantClient::connect().await?;
    println!("Region: {}", client.region());
    println!("Client version: {}", client.client_version());

    let Some(player) = client.current_player().await? else {
        anyhow::bail!("identity service rejected the session token");
    };
    match &player.acct {
        Some(acct) => println!("Player: {}#{} ({})", acct.game_name, acct.tag_line, player.sub),
        None => println!("Player: {}", player.sub),
    }

    match client.party().current_party().await? {
        Some(party) => {
            println!("Party {} ({} members)", party.id, party.members.len());
            for member in &party.members {
                let name = member.identity.game_name.as_deref().unwrap_or(&member.puuid);
                println!("  - {name}");
            }
        }
        None => println!("Not in a party"),
    }

    if let Some(match_id) = client.pregame().current_pregame_id().await? {
        println!("In agent select: {match_id}");
    } else if let Some(game) = client.coregame().current_match_info().await? {
        println!(
            "In match {} on {} ({} players)",
            game.match_id,
            game.map_id,
            game.players.len()
        );
    } else {
        println!("In menus");
    }

    if let Some(mmr) = client.pvp().mmr(&player.sub).await? {
        if let Some(update) = mmr.latest_update {
            println!(
                "Last ranked update: {} -> {} ({:+})",
                update.rating_before, update.rating_after, update.rating_earned
            );
        }
    }

    Ok(())
}
