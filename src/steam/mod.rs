//! Steam Web API access

pub mod client;
pub mod wire;

pub use client::{PlayerSnapshot, SteamClient};
pub use wire::PlayerStatsData;
