use anyhow::{Context, Result};
use classy_core::{Config, SessionStore};
use classy_ui::WeatherApp;
use classy_weather::OpenMeteoClient;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    classy_core::init()?;

    let (config, _validation) = Config::load_validated().map_err(|e| {
        tracing::error!("{}", e.user_message());
        e
    })?;
    tracing::info!("Config directory: {}", config.config_dir.display());

    let client =
        OpenMeteoClient::new(&config.weather).context("Failed to create weather client")?;
    let session = SessionStore::new(config.session_path());

    let app = WeatherApp::new(client, session);
    app.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .map_err(|e| {
            tracing::error!("{}", e.user_message());
            e
        })?;

    Ok(())
}
