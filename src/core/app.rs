use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use crate::board::service::BoardService;
use crate::card::service::CardService;
use crate::core::config::Config;
use crate::storage::database::Database;
use crate::storage::query_log::QueryLogger;
use crate::web::routes;

pub struct App {
    config: Config,
    state: AppState,
}

impl App {
    /// Connect to the database and wire services. Nothing listens until this succeeds.
    pub async fn new(config: Config) -> Result<Self> {
        info!("Attempting to connect to db");
        let db = Database::connect(&config.database)
            .await
            .context("failed to connect to database")?;
        info!("Connected to db!");

        if config.database.run_migrations {
            db.migrate().await.context("failed to run database migrations")?;
        }

        Ok(Self {
            config,
            state: AppState::new(Arc::new(db)),
        })
    }

    pub async fn run(self) -> Result<()> {
        let db = Arc::clone(&self.state.db);
        let app = routes::create_router(Arc::new(self.state));

        let addr: SocketAddr = format!("{}:{}", self.config.server.host, self.config.server.port)
            .parse()
            .with_context(|| format!("invalid bind address {}", self.config.server.host))?;

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!(
            "Server started listening for HTTP requests on port {}.  Let's go!",
            self.config.server.port
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        db.close().await;
        info!("Server shutdown complete");
        Ok(())
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub query_log: Arc<QueryLogger>,
    pub board_service: Arc<BoardService>,
    pub card_service: Arc<CardService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        let query_log = Arc::new(QueryLogger::new());

        let board_service = Arc::new(BoardService::new(Arc::clone(&db), Arc::clone(&query_log)));
        let card_service = Arc::new(CardService::new(Arc::clone(&db), Arc::clone(&query_log)));

        Self {
            db,
            query_log,
            board_service,
            card_service,
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
