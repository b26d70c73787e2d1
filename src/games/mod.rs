use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    BigGame,
    Proteus,
    Noob,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::BigGame, Self::Proteus, Self::Noob];

    /// Category key used by the lobby service.
    pub fn category_key(&self) -> &'static str {
        match self {
            Self::BigGame => "experimental_games",
            Self::Proteus => "proteus_test_games",
            Self::Noob => "new_player_games",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::BigGame => "big_game",
            Self::Proteus => "proteus",
            Self::Noob => "noob",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            Self::BigGame => "64 Player Games",
            Self::Proteus => "Official Proteus Games",
            Self::Noob => "New Player Games",
        }
    }
}

/// Display titles keyed by category key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    titles: HashMap<String, String>,
}

impl CategoryTable {
    pub fn new(titles: HashMap<String, String>) -> Self {
        Self { titles }
    }

    /// The preset titles with `overrides` applied on top.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut table = Self::default();
        for (key, title) in overrides {
            table.titles.insert(key.clone(), title.clone());
        }
        table
    }

    /// Falls back to the category key for categories without a title.
    pub fn title<'a>(&'a self, category: &'a str) -> &'a str {
        self.titles.get(category).map(String::as_str).unwrap_or(category)
    }

    pub fn preset_title(&self, preset: Preset) -> &str {
        self.title(preset.category_key())
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(
            Preset::ALL
                .iter()
                .map(|p| (p.category_key().to_string(), p.default_title().to_string()))
                .collect(),
        )
    }
}
