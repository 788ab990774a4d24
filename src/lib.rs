//! Typed client for the VALORANT local client API and the regional
//! `pvp.net` web API.
//!
//! ```rust,ignore
//! let client = valclient::ValorantClient::connect().await?;
//! if let Some(game) = client.coregame().current_match_info().await? {
//!     println!("{} on {}", game.match_id, game.map_id);
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod region;
pub mod request;
pub mod tls;

pub use auth::{AuthTokens, ClientPlatform, Credential, Lockfile};
pub use client::ValorantClient;
pub use config::SessionConfig;
pub use error::ValorantError;
pub use models::player::{NameEntry, UserInfo};
pub use models::store::ItemType;
pub use region::RegionalUrls;
pub use request::PvpRequest;
