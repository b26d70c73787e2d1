use std::io::Write;

use tracing::warn;

use crate::error::LobbyError;
use crate::games::{CategoryTable, Preset};
use crate::lobby::LobbyClient;
use crate::selector::{extract_id, extract_name, select_by_category};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
}

impl Field {
    pub const ALL: [Field; 2] = [Self::Id, Self::Name];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed(String),
    /// The lobby answered but did not yield a single game.
    Failed(String),
    /// The lobby could not be queried at all.
    Errored(String),
}

#[derive(Debug, Clone)]
pub struct Check {
    pub preset: Preset,
    pub field: Field,
    pub outcome: Outcome,
}

impl Check {
    pub fn label(&self) -> String {
        format!("{} {}", self.preset.slug(), self.field.as_str())
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub checks: Vec<Check>,
}

impl Report {
    pub fn failures(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn errors(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Errored(_)))
    }

    pub fn is_ok(&self) -> bool {
        self.failures() == 0 && self.errors() == 0
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.checks.iter().filter(|c| pred(&c.outcome)).count()
    }

    pub fn write_summary<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for check in &self.checks {
            match &check.outcome {
                Outcome::Passed(_) => writeln!(out, "check {} ... ok", check.label())?,
                Outcome::Failed(reason) => writeln!(out, "check {} ... FAILED: {}", check.label(), reason)?,
                Outcome::Errored(reason) => writeln!(out, "check {} ... ERROR: {}", check.label(), reason)?,
            }
        }

        writeln!(out, "{}", "-".repeat(70))?;
        writeln!(out, "Ran {} checks", self.checks.len())?;

        if self.is_ok() {
            writeln!(out, "OK")
        } else {
            writeln!(out, "FAILED (failures={}, errors={})", self.failures(), self.errors())
        }
    }
}

/// Every preset must yield both an id and a name from the live lobby.
#[tracing::instrument(name = "SelfCheck", skip_all)]
pub async fn run(client: &LobbyClient, table: &CategoryTable) -> Report {
    let games = client.fetch_open_games().await;
    let mut report = Report::default();

    for preset in Preset::ALL {
        let selection = games
            .as_ref()
            .map(|g| select_by_category(g, preset.category_key(), table.preset_title(preset)));

        for field in Field::ALL {
            let outcome = match &selection {
                Ok(selection) => {
                    let value = match field {
                        Field::Id => extract_id(selection),
                        Field::Name => extract_name(selection),
                    };
                    classify(value.as_deref())
                }
                Err(e) => classify(Err(*e)),
            };

            if !matches!(outcome, Outcome::Passed(_)) {
                warn!(preset = preset.slug(), field = field.as_str(), ?outcome, "self-check did not pass");
            }

            report.checks.push(Check { preset, field, outcome });
        }
    }

    report
}

fn classify(result: Result<&str, &LobbyError>) -> Outcome {
    match result {
        Ok(value) => Outcome::Passed(value.to_string()),
        Err(e) if e.is_remote() => Outcome::Errored(e.to_string()),
        Err(e) => Outcome::Failed(e.to_string()),
    }
}
