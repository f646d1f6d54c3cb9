pub mod config;
pub mod error;
pub mod types;

pub use config::{Credentials, ViewerConfig};
pub use error::{Result, StatsError};
pub use types::{AppId, Game, StatId, SteamId};
