use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Steam API error from {endpoint} ({status}): {body}")]
    Api {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error(
        "No stats returned for this player. Check that:\n\
         - the Steam ID and API key are correct\n\
         - the profile's game details are set to public\n\
         - the game has been played on this account"
    )]
    StatsUnavailable,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;
