pub mod coregame;
pub mod local;
pub mod party;
pub mod pregame;
pub mod pvp;
pub mod sessions;
pub mod store;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::client::ValorantClient;
use crate::error::ValorantError;

pub use coregame::CoreGameEndpoints;
pub use local::LocalEndpoints;
pub use party::PartyEndpoints;
pub use pregame::PreGameEndpoints;
pub use pvp::PvpEndpoints;
pub use sessions::SessionsEndpoints;
pub use store::StoreEndpoints;

impl ValorantClient {
    pub fn coregame(&self) -> CoreGameEndpoints<'_> {
        CoreGameEndpoints { client: self }
    }

    pub fn local(&self) -> LocalEndpoints<'_> {
        LocalEndpoints { client: self }
    }

    pub fn party(&self) -> PartyEndpoints<'_> {
        PartyEndpoints { client: self }
    }

    pub fn pregame(&self) -> PreGameEndpoints<'_> {
        PreGameEndpoints { client: self }
    }

    pub fn pvp(&self) -> PvpEndpoints<'_> {
        PvpEndpoints { client: self }
    }

    pub fn sessions(&self) -> SessionsEndpoints<'_> {
        SessionsEndpoints { client: self }
    }

    pub fn store(&self) -> StoreEndpoints<'_> {
        StoreEndpoints { client: self }
    }
}

/// Decode a 200 body; anything else is logged and reported as absent.
pub(crate) async fn json_or_none<T: DeserializeOwned>(
    resp: Response,
    what: &str,
) -> Result<Option<T>, ValorantError> {
    let status = resp.status();
    let url = resp.url().to_string();
    if status != StatusCode::OK {
        let body = resp.text().await.unwrap_or_default();
        warn!(%status, %url, %body, "{what} request rejected");
        return Ok(None);
    }

    let text = resp.text().await?;
    if text.trim().is_empty() {
        warn!(%url, "{what} returned an empty body");
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&text)?))
}

/// True when an action came back 200.
pub(crate) async fn accepted(resp: Response, what: &str) -> bool {
    let status = resp.status();
    if status == StatusCode::OK {
        return true;
    }
    let url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();
    warn!(%status, %url, %body, "{what} rejected");
    false
}

/// Non-empty id or `None`, logging the short-circuit.
pub(crate) fn present<'s>(id: &'s str, what: &str) -> Option<&'s str> {
    if id.is_empty() {
        warn!("no {what}, skipping request");
        None
    } else {
        Some(id)
    }
}
