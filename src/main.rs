//! Demo binary: replays one thank-you screen visit against a JSON catalog.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pledge_thanks::adapters::{
    CatalogFixture, FilePreferenceStore, InMemoryPreferenceStore, TracingAnalytics,
    WatchCurrentUserSession,
};
use pledge_thanks::application::{ScreenPorts, ThanksScreen};
use pledge_thanks::config::{AppConfig, LogFormat, LoggingConfig};
use pledge_thanks::ports::PreferenceStore;

const DEFAULT_FIXTURE: &str = "fixtures/catalog.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::load_validated()?;

    // Initialize logging
    init_logging(&config.logging);

    let fixture_path = config
        .catalog
        .fixture_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE));
    tracing::info!(fixture = %fixture_path.display(), "Loading catalog fixture");

    let fixture = CatalogFixture::load(&fixture_path).await?;
    let pledged = fixture.pledged_project()?;

    let preferences: Arc<dyn PreferenceStore> = match &config.preferences.path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using file preference store");
            Arc::new(FilePreferenceStore::new(path))
        }
        None => Arc::new(InMemoryPreferenceStore::new()),
    };

    let session = WatchCurrentUserSession::new();
    if let Some(user) = fixture.current_user.clone() {
        session.login(user);
    }

    let screen = ThanksScreen::new(
        ScreenPorts {
            catalog: Arc::new(fixture.to_catalog()),
            preferences,
            current_user: Arc::new(session),
            analytics: Arc::new(TracingAnalytics),
        },
        config.recommendations.clone(),
        config.dialogs.clone(),
    );

    let mut project_name = screen.project_name();
    let mut recommendations = screen.recommendations();
    let mut rating = screen.show_rating_dialog();
    let mut newsletter = screen.show_newsletter_dialog();
    let mut confirm = screen.show_confirm_newsletter_dialog();

    screen.enter(pledged).await;

    if let Some(name) = project_name.borrow_and_update().as_ref() {
        tracing::info!(%name, "Thanks for backing");
    }
    match recommendations.borrow_and_update().as_ref() {
        Some(shelf) => {
            let names: Vec<&str> = shelf.projects.iter().map(|p| p.name.as_str()).collect();
            tracing::info!(
                category = shelf.root_category.name(),
                projects = ?names,
                "Recommendations ready"
            );
        }
        None => tracing::info!("No recommendations for this project"),
    }

    if received(&mut rating) {
        tracing::info!("Showing app rating dialog");
    }
    if received(&mut newsletter) {
        tracing::info!("Showing games newsletter dialog; signing up");
        screen.signup_to_newsletter_click().await;
        if received(&mut confirm) {
            tracing::info!("Showing newsletter confirmation dialog");
        }
    }

    screen.teardown();
    tracing::info!(visit_id = %screen.visit_id(), "Visit finished");

    Ok(())
}

fn received(rx: &mut broadcast::Receiver<()>) -> bool {
    rx.try_recv().is_ok()
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.level.clone().into());

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
