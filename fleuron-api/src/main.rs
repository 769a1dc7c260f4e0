use fleuron_ai::{AnnouncementWriter, AnthropicClient, AnthropicConfig, NotesParser};
use fleuron_api::{app, AppState};
use fleuron_notify::{Notifier, NotifyConfig, ResendMailer};
use fleuron_order::TransitionEngine;
use fleuron_store::database::DbClient;
use fleuron_store::{Config, PgOrderStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleuron_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Fleuron API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let store = Arc::new(PgOrderStore::new(db.pool.clone()));

    let completion_client = Arc::new(AnthropicClient::new(AnthropicConfig {
        api_key: config.anthropic.api_key.clone(),
        model: config.anthropic.model.clone(),
        max_tokens: config.anthropic.max_tokens,
        timeout_seconds: config.anthropic.timeout_seconds,
    }));

    let mailer = Arc::new(ResendMailer::new(config.email.api_key.clone()));
    let notifier = Notifier::new(
        mailer,
        NotifyConfig {
            from: config.email.from.clone(),
            designer_emails: config.email.designer_emails.clone(),
            receptionist_email: config.email.receptionist_email.clone(),
        },
    );

    let engine = Arc::new(TransitionEngine::new(
        store.clone(),
        AnnouncementWriter::new(completion_client.clone()),
        notifier,
    ));

    let state = AppState {
        engine,
        store,
        parser: NotesParser::new(completion_client),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
