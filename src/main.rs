use clap::Parser;
use np_lobby::cli::{self, Cli};
use np_lobby::config::Settings;
use np_lobby::games::CategoryTable;
use np_lobby::lobby::LobbyClient;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = Settings::new()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .parse_lossy(&config.logging.level),
        )
        .init();

    let table = CategoryTable::with_overrides(&config.categories);
    let client = LobbyClient::new(config.lobby)?;

    tracing::debug!(url = %client.config().url, "querying lobby");

    let mut stdout = std::io::stdout().lock();
    cli::execute(&args, &client, &table, &mut stdout).await
}
