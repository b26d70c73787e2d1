use std::io::Write;

use clap::{Parser, ValueEnum};

use crate::games::{CategoryTable, Preset};
use crate::lobby::LobbyClient;
use crate::selector::{extract_id, extract_name};
use crate::selfcheck;

#[derive(Debug, Parser)]
#[command(name = "np-lobby", about = "Process game information.", long_about = None)]
pub struct Cli {
    /// Type of game to get information for.
    #[arg(value_enum)]
    pub game_type: GameType,

    /// Type of information to get. Prints name and id when omitted.
    #[arg(value_enum)]
    pub info_type: Option<InfoType>,

    /// Run the bundled self-checks against the lobby service.
    #[arg(long)]
    pub test: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum GameType {
    BigGame,
    Proteus,
    Noob,
}

impl From<GameType> for Preset {
    fn from(game_type: GameType) -> Self {
        match game_type {
            GameType::BigGame => Preset::BigGame,
            GameType::Proteus => Preset::Proteus,
            GameType::Noob => Preset::Noob,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InfoType {
    Id,
    Name,
    Raw,
}

#[tracing::instrument(skip_all, fields(game_type = ?cli.game_type, info_type = ?cli.info_type))]
pub async fn execute<W: Write>(
    cli: &Cli,
    client: &LobbyClient,
    table: &CategoryTable,
    out: &mut W,
) -> anyhow::Result<()> {
    let selection = client.fetch_preset(cli.game_type.into(), table).await?;

    match cli.info_type {
        None => writeln!(out, "{} {}", extract_name(&selection)?, extract_id(&selection)?)?,
        Some(InfoType::Id) => writeln!(out, "{}", extract_id(&selection)?)?,
        Some(InfoType::Name) => writeln!(out, "{}", extract_name(&selection)?)?,
        Some(InfoType::Raw) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&selection.to_json()?)?)?
        }
    }

    if cli.test {
        let report = selfcheck::run(client, table).await;
        report.write_summary(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LobbyConfig;
    use crate::error::LobbyError;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_lobby(response: ResponseTemplate) -> (MockServer, LobbyClient) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(response)
            .mount(&server)
            .await;

        let client = LobbyClient::new(LobbyConfig::with_url(server.uri())).unwrap();
        (server, client)
    }

    async fn run(args: &[&str], response: ResponseTemplate) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("np-lobby").chain(args.iter().copied()))?;
        let (_server, client) = mock_lobby(response).await;

        let mut out = Vec::new();
        execute(&cli, &client, &CategoryTable::default(), &mut out).await?;
        Ok(String::from_utf8(out)?)
    }

    fn one_big_game() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!([
            "open_games",
            {"experimental_games": [{"number": "123", "name": "Big Game"}]}
        ]))
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["np-lobby", "big_game", "id", "--test"]).unwrap();
        assert_eq!(cli.game_type, GameType::BigGame);
        assert_eq!(cli.info_type, Some(InfoType::Id));
        assert!(cli.test);

        let cli = Cli::try_parse_from(["np-lobby", "noob"]).unwrap();
        assert_eq!(Preset::from(cli.game_type), Preset::Noob);
        assert_eq!(cli.info_type, None);
        assert!(!cli.test);

        assert!(Cli::try_parse_from(["np-lobby", "dark_galaxy"]).is_err());
        assert!(Cli::try_parse_from(["np-lobby", "proteus", "creator"]).is_err());
        assert!(Cli::try_parse_from(["np-lobby"]).is_err());
    }

    #[tokio::test]
    async fn test_id_and_name() {
        assert_eq!(run(&["big_game", "id"], one_big_game()).await.unwrap(), "123\n");
        assert_eq!(run(&["big_game", "name"], one_big_game()).await.unwrap(), "Big Game\n");
        assert_eq!(run(&["big_game"], one_big_game()).await.unwrap(), "Big Game 123\n");
    }

    #[tokio::test]
    async fn test_odd_record_elsewhere_does_not_block() {
        let response = ResponseTemplate::new(200).set_body_json(json!([
            "open_games",
            {
                "experimental_games": [{"number": "123", "name": "Big Game"}],
                "new_player_games": [{"number": "7", "name": "Welcome", "creator": null}],
                "proteus_test_games": [{"number": 456, "name": "Proteus"}]
            }
        ]));

        assert_eq!(run(&["big_game", "id"], response).await.unwrap(), "123\n");
    }

    #[tokio::test]
    async fn test_raw() {
        let out = run(&["big_game", "raw"], one_big_game()).await.unwrap();
        let raw: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(raw["number"], "123");
        assert_eq!(raw["game_type"], "experimental_games");

        let out = run(&["proteus", "raw"], one_big_game()).await.unwrap();
        assert_eq!(out.trim(), "[]");
    }

    #[tokio::test]
    async fn test_ambiguous_aborts() {
        let response = ResponseTemplate::new(200).set_body_json(json!([
            "open_games",
            {"proteus_test_games": [
                {"number": "1", "name": "Proteus A"},
                {"number": "2", "name": "Proteus B"}
            ]}
        ]));

        let err = run(&["proteus", "name"], response).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LobbyError>(),
            Some(LobbyError::AmbiguousSelection { count: 2 })
        ));
    }

    #[tokio::test]
    async fn test_remote_error_propagates() {
        let err = run(&["noob", "id"], ResponseTemplate::new(500)).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LobbyError>(),
            Some(LobbyError::RemoteService { .. })
        ));
    }

    #[tokio::test]
    async fn test_with_self_checks() {
        let response = ResponseTemplate::new(200).set_body_json(json!([
            "open_games",
            {
                "experimental_games": [{"number": "1", "name": "Big"}],
                "proteus_test_games": [{"number": "2", "name": "Proteus"}],
                "new_player_games": [{"number": "3", "name": "Noob"}]
            }
        ]));

        let out = run(&["noob", "id", "--test"], response).await.unwrap();

        assert!(out.starts_with("3\n"));
        assert!(out.contains("Ran 6 checks"));
        assert!(out.trim_end().ends_with("OK"));
    }
}
