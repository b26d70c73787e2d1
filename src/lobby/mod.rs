use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::LobbyConfig;
use crate::error::LobbyError;
use crate::games::{CategoryTable, Preset};
use crate::selector::select_by_category;
use crate::types::{GameRecord, Selection};


pub struct LobbyClient {
    http_client: Client,
    config: LobbyConfig,
}

impl LobbyClient {
    pub fn new(config: LobbyConfig) -> Result<Self, LobbyError> {
        let mut builder = Client::builder();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http_client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &LobbyConfig {
        &self.config
    }

    /// Every open game across all categories, each tagged with its category.
    #[tracing::instrument(skip(self), fields(url = %self.config.url))]
    pub async fn fetch_open_games(&self) -> Result<Vec<GameRecord>, LobbyError> {
        debug!("requesting open games");

        let response = self
            .http_client
            .post(&self.config.url)
            .form(&[("type", self.config.request_type.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "lobby service refused open games request");
            return Err(LobbyError::RemoteService { status });
        }

        let body = response.text().await?;
        let games = parse_open_games(&body)?;

        debug!(count = games.len(), "decoded open games");

        Ok(games)
    }

    /// Fetches the lobby and picks the game of `preset`.
    pub async fn fetch_preset(
        &self,
        preset: Preset,
        table: &CategoryTable,
    ) -> Result<Selection, LobbyError> {
        let games = self.fetch_open_games().await?;
        Ok(select_by_category(
            &games,
            preset.category_key(),
            table.preset_title(preset),
        ))
    }
}

/// Flattens `[_, {category: [game, ...], ...}, ...]` into tagged records.
///
/// Only the envelope is checked. Entries that are not JSON objects, and
/// categories that are not lists, are skipped so one odd listing cannot
/// hide the others.
pub fn parse_open_games(body: &str) -> Result<Vec<GameRecord>, LobbyError> {
    let payload: Value = serde_json::from_str(body)?;

    let categories = payload
        .get(1)
        .ok_or_else(|| LobbyError::MalformedPayload("expected an array of at least two elements".into()))?
        .as_object()
        .ok_or_else(|| LobbyError::MalformedPayload("second element is not a category map".into()))?;

    let mut games = Vec::new();
    for (category, raw_games) in categories {
        let Some(raw_games) = raw_games.as_array() else {
            warn!(category = %category, "category is not a list, skipping");
            continue;
        };

        for raw_game in raw_games {
            if !raw_game.is_object() {
                warn!(category = %category, "listing entry is not an object, skipping");
                continue;
            }

            let mut game = GameRecord::deserialize(raw_game)?;
            game.game_type = Some(category.clone());
            games.push(game);
        }
    }

    Ok(games)
}
