use anyhow::Result;
use clap::Parser;
use fireflies_cli::{
    api::FirefliesClient,
    cli::{self, Cli},
    config::{self, ConfigError},
    text_io::SystemClipboard,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match config::load_settings() {
        Ok(settings) => settings,
        Err(ConfigError::MissingApiKey) => {
            println!("{}", ConfigError::MissingApiKey);
            std::process::exit(1);
        }
        Err(ConfigError::Other(err)) => return Err(err),
    };

    let client = FirefliesClient::from_settings(&settings);
    let mut clipboard = SystemClipboard::new();
    let mut stdout = std::io::stdout();

    cli::run(cli.mode, &client, &mut clipboard, &mut stdout).await?;

    Ok(())
}
