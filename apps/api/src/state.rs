use std::sync::Arc;

use crate::config::Config;
use crate::storage::Storage;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable record store. Default: MemoryStorage; swappable behind the
    /// trait for a database-backed adapter.
    pub storage: Arc<dyn Storage>,
    pub config: Config,
}
