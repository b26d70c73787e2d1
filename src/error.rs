use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum LobbyError {
    #[error("failed to retrieve open games: lobby service returned {status}")]
    RemoteService { status: StatusCode },

    #[error("there is more than one game ({count} matches)")]
    AmbiguousSelection { count: usize },

    #[error("there is no game to pick from")]
    EmptySelection,

    #[error("selected game has no {field}")]
    MissingField { field: &'static str },

    #[error("malformed open games payload: {0}")]
    MalformedPayload(String),

    #[error("failed to decode open games payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request to lobby service failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl LobbyError {
    /// Errors raised by the service boundary rather than by selection.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteService { .. } | Self::Http(_))
    }
}
