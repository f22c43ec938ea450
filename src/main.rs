//! Main entry point for the Hairstyle Studio console

use hairstyle_studio::{
    backend::GeminiBackend, catalog::Catalog, config::Settings, console::Console,
    payload::file::FileHandler, studio::Session,
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let registry = tracing_subscriber::registry().with(filter);
    if settings.logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    info!(
        model = %settings.api.model,
        language = %settings.ui.language,
        "Starting Hairstyle Studio"
    );

    let catalog = Catalog::builtin()?;
    info!(styles = catalog.len(), "Loaded style catalog");

    let backend = Arc::new(GeminiBackend::new(&settings.api)?);
    let session = Session::new(catalog, settings.ui.language, settings.ui.gender);
    let files = FileHandler::new(settings.ui.download_dir.clone());

    let mut console = Console::new(session, backend, files);
    console
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    Ok(())
}
