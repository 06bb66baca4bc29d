use std::sync::{Arc, Mutex};

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use carebook::config::AppConfig;
use carebook::db;
use carebook::handlers;
use carebook::services::booking_store::BookingStore;
use carebook::services::mailer::log::LogMailer;
use carebook::services::mailer::relay::HttpMailRelay;
use carebook::services::mailer::Mailer;
use carebook::services::storage::SqliteStorage;
use carebook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    anyhow::ensure!(
        !config.auth_secret.is_empty(),
        "AUTH_SECRET must be set to verify session tokens"
    );

    let bookings = if config.local_storage {
        let conn = db::init_db(&config.database_url)?;
        tracing::info!("booking storage at {}", config.database_url);
        BookingStore::new(Arc::new(SqliteStorage::new(Arc::new(Mutex::new(conn)))))
    } else {
        tracing::warn!("local storage disabled, bookings will not be persisted");
        BookingStore::detached()
    };

    let mailer: Box<dyn Mailer> = if config.mail_relay_url.is_empty() {
        tracing::info!("no mail relay configured, invoices will be logged");
        Box::new(LogMailer)
    } else {
        tracing::info!("using mail relay at {}", config.mail_relay_url);
        Box::new(HttpMailRelay::new(
            config.mail_relay_url.clone(),
            config.mail_relay_api_key.clone(),
        ))
    };

    let state = Arc::new(AppState {
        bookings,
        config: config.clone(),
        mailer,
    });

    let app = handlers::router(state).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
