use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One open game as reported by the lobby service.
///
/// Every known field is optional and read leniently: a value of the wrong
/// shape decodes as `None` rather than failing the whole listing. Missing
/// `number`/`name` only matter once a record is selected.
///
/// `game_type` is not part of the service payload; the fetcher sets it to the
/// category the record was listed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, deserialize_with = "lenient::int", skip_serializing_if = "Option::is_none")]
    pub turn_based: Option<i64>,
    #[serde(
        rename = "maxPlayers",
        default,
        deserialize_with = "lenient::int",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_players: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int", skip_serializing_if = "Option::is_none")]
    pub players: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub game_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Strings as-is, numbers and booleans in their JSON spelling.
    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    /// Integers, numeric strings, and booleans as 0/1.
    pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            Value::Bool(b) => Some(i64::from(b)),
            _ => None,
        })
    }
}

impl GameRecord {
    pub fn is_category(&self, category: &str) -> bool {
        self.game_type.as_deref() == Some(category)
    }
}

/// Outcome of picking the single game of a category.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Found(GameRecord),
    Empty,
    Ambiguous(Vec<GameRecord>),
}

impl Selection {
    pub fn len(&self) -> usize {
        match self {
            Self::Found(_) => 1,
            Self::Empty => 0,
            Self::Ambiguous(games) => games.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// JSON view of the selection: the record, `[]`, or the list of matches.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        match self {
            Self::Found(game) => serde_json::to_value(game),
            Self::Empty => Ok(Value::Array(Vec::new())),
            Self::Ambiguous(games) => serde_json::to_value(games),
        }
    }
}
