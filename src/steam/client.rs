//! Async Steam Web API client
//!
//! Thin wrapper over the three endpoints the dashboards need: per-game user
//! stats, the owned-games list (for playtime), and the game schema (display
//! names and the achievement total). The key is passed through as a query
//! parameter and never logged.

use crate::core::config::{Credentials, ViewerConfig};
use crate::core::error::{Result, StatsError};
use crate::core::types::{AppId, SteamId};
use crate::stats::{AchievementRecord, GameSchema, RawStats};
use crate::steam::wire::{
    OwnedGamesResponse, PlayerStatsData, SchemaResponse, UserStatsResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_STATS_PATH: &str = "ISteamUserStats/GetUserStatsForGame/v0002/";
const OWNED_GAMES_PATH: &str = "IPlayerService/GetOwnedGames/v0001/";
const SCHEMA_PATH: &str = "ISteamUserStats/GetSchemaForGame/v2/";

/// Everything fetched for one player and game
#[derive(Debug, Clone)]
pub struct PlayerSnapshot {
    pub game_name: Option<String>,
    pub stats: RawStats,
    pub achievements: Vec<AchievementRecord>,
    pub playtime_minutes: u64,
    pub total_achievements: usize,
    pub schema: GameSchema,
}

/// Async client for the Steam Web API
pub struct SteamClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SteamClient {
    /// Create a new client with explicit configuration
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ViewerConfig, credentials: &Credentials) -> Result<Self> {
        Self::new(
            credentials.api_key.clone(),
            config.api_base_url.clone(),
            config.timeout(),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        tracing::debug!(endpoint, "Requesting Steam API");

        // reqwest errors carry the request URL, which holds the key
        let response = self
            .client
            .get(self.url(path))
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| StatsError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StatsError::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| StatsError::Http(e.without_url()))
    }

    /// Stats and unlocked achievements for a player
    ///
    /// `None` when Steam answers without a stat list (private profile or
    /// a game never played).
    pub async fn player_stats(
        &self,
        steam_id: SteamId,
        app_id: AppId,
    ) -> Result<Option<PlayerStatsData>> {
        let response: UserStatsResponse = self
            .get_json(
                "GetUserStatsForGame",
                USER_STATS_PATH,
                &[("appid", app_id.to_string()), ("steamid", steam_id.to_string())],
            )
            .await?;

        Ok(response.playerstats.and_then(|p| p.into_data()))
    }

    /// Lifetime minutes played, 0 if the game is not in the player's library
    pub async fn playtime_minutes(&self, steam_id: SteamId, app_id: AppId) -> Result<u64> {
        let response: OwnedGamesResponse = self
            .get_json(
                "GetOwnedGames",
                OWNED_GAMES_PATH,
                &[("steamid", steam_id.to_string()), ("format", "json".to_string())],
            )
            .await?;

        Ok(response.playtime_for(app_id))
    }

    /// Stat display names and achievement metadata for a game
    pub async fn game_schema(&self, app_id: AppId) -> Result<GameSchema> {
        let response: SchemaResponse = self
            .get_json("GetSchemaForGame", SCHEMA_PATH, &[("appid", app_id.to_string())])
            .await?;

        Ok(response.into_schema())
    }

    /// Fetch stats, playtime and schema concurrently
    ///
    /// Missing stats fail the fetch. Playtime and schema are optional
    /// extras: their errors are logged and replaced by empty values.
    pub async fn fetch_snapshot(&self, steam_id: SteamId, app_id: AppId) -> Result<PlayerSnapshot> {
        tracing::info!(%steam_id, %app_id, "Fetching player snapshot");

        let (stats, playtime, schema) = tokio::join!(
            self.player_stats(steam_id, app_id),
            self.playtime_minutes(steam_id, app_id),
            self.game_schema(app_id),
        );

        let data = stats?.ok_or(StatsError::StatsUnavailable)?;

        let playtime_minutes = playtime.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not fetch playtime, showing 0");
            0
        });
        let schema = schema.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not fetch game schema, display names unavailable");
            GameSchema::default()
        });

        tracing::info!(
            stats = data.stats.len(),
            achievements = data.achievements.len(),
            playtime_minutes,
            "Snapshot fetched"
        );

        Ok(PlayerSnapshot {
            game_name: data.game_name,
            stats: data.stats,
            achievements: data.achievements,
            playtime_minutes,
            total_achievements: schema.total_achievements(),
            schema,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SteamClient::new(
            "test-key".into(),
            "https://api.example.com/".into(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, "https://api.example.com");
        assert_eq!(
            client.url(SCHEMA_PATH),
            "https://api.example.com/ISteamUserStats/GetSchemaForGame/v2/"
        );
    }

    #[test]
    fn test_from_config() {
        let config = ViewerConfig {
            api_key: Some("abc".into()),
            steam_id: Some("42".into()),
            ..Default::default()
        };
        let creds = config.credentials().unwrap();
        let client = SteamClient::from_config(&config, &creds).unwrap();
        assert_eq!(client.api_key, "abc");
        assert_eq!(client.base_url, "https://api.steampowered.com");
    }

    /// Base URL of a loopback port that was just released, so connections are refused
    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    fn unreachable_client(api_key: &str) -> SteamClient {
        SteamClient::new(api_key.into(), closed_port_url(), Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let result = unreachable_client("key").game_schema(AppId(232090)).await;
        assert!(matches!(result, Err(StatsError::Http(_))));
    }

    #[tokio::test]
    async fn test_snapshot_fails_without_stats_endpoint() {
        assert!(unreachable_client("key")
            .fetch_snapshot(SteamId(1), AppId(232090))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_transport_errors_hide_api_key() {
        let client = unreachable_client("SECRET-KEY-123");

        let schema_err = client.game_schema(AppId(232090)).await.unwrap_err();
        let snapshot_err = client
            .fetch_snapshot(SteamId(76561197960287930), AppId(232090))
            .await
            .unwrap_err();

        for err in [schema_err, snapshot_err] {
            assert!(!format!("{}", err).contains("SECRET-KEY-123"));
            assert!(!format!("{:?}", err).contains("SECRET-KEY-123"));
        }
    }
}
