#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = valclient::ValorantClient::connect().await?;

    match client.coregame().current_match_id().await? {
        Some(match_id) => {
            let Some(match_data) = client.coregame().match_info(&match_id).await? else {
                anyhow::bail!("match {match_id} disappeared");
            };
            println!("Map: {}", match_data.map_id);
            println!("Players: {}", match_data.players.len());
        }
        None => println!("Not currently in a match"),
    }
    Ok(())
}
