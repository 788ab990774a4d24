pub mod coregame;
pub mod local;
pub mod match_data;
pub mod party;
pub mod player;
pub mod pregame;
pub mod store;
