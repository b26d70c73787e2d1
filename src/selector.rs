use tracing::{error, warn};

use crate::error::LobbyError;
use crate::types::{GameRecord, Selection};

/// Picks the one game listed under `category`.
///
/// Zero or several matches are not errors here: they are logged using `title`
/// and handed back as `Empty` / `Ambiguous` for the caller to decide.
pub fn select_by_category(games: &[GameRecord], category: &str, title: &str) -> Selection {
    let mut matching: Vec<GameRecord> = games
        .iter()
        .filter(|g| g.is_category(category))
        .cloned()
        .collect();

    match matching.len() {
        0 => {
            error!("No {} available.", title);
            Selection::Empty
        }
        1 => Selection::Found(matching.remove(0)),
        _ => {
            warn!("Multiple {}!", title);
            Selection::Ambiguous(matching)
        }
    }
}

pub fn extract_id(selection: &Selection) -> Result<&str, LobbyError> {
    single(selection)?
        .number
        .as_deref()
        .ok_or(LobbyError::MissingField { field: "number" })
}

pub fn extract_name(selection: &Selection) -> Result<&str, LobbyError> {
    single(selection)?
        .name
        .as_deref()
        .ok_or(LobbyError::MissingField { field: "name" })
}

fn single(selection: &Selection) -> Result<&GameRecord, LobbyError> {
    match selection {
        Selection::Found(game) => Ok(game),
        Selection::Ambiguous(games) => Err(LobbyError::AmbiguousSelection { count: games.len() }),
        Selection::Empty => Err(LobbyError::EmptySelection),
    }
}
