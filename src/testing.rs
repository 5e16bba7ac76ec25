//! Shared fixtures for unit and router tests.

use std::future::Future;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::instrument::WithSubscriber;
use tracing::Dispatch;

use crate::core::app::AppState;
use crate::core::config::DatabaseConfig;
use crate::storage::database::Database;

/// Fresh migrated in-memory database on a single connection.
pub async fn memory_database() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        run_migrations: true,
    };
    let db = Database::connect(&config).await.expect("connect in-memory database");
    db.migrate().await.expect("apply migrations");
    db
}

pub async fn test_state() -> AppState {
    AppState::new(Arc::new(memory_database().await))
}

#[derive(Clone)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Formatted log output collected from any number of tasks.
#[derive(Clone)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
    dispatch: Dispatch,
}

impl LogCapture {
    pub fn new() -> Self {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = CaptureWriter(Arc::clone(&buffer));
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::INFO)
            .finish();

        Self {
            buffer,
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Subscriber to attach to each future whose logs should be recorded.
    pub fn dispatch(&self) -> Dispatch {
        self.dispatch.clone()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

/// Run `fut` with a subscriber that records formatted log output.
pub async fn capture_logs<F: Future>(fut: F) -> (String, F::Output) {
    let capture = LogCapture::new();
    let output = fut.with_subscriber(capture.dispatch()).await;
    (capture.contents(), output)
}
