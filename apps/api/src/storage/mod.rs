//! The persistence port every handler talks through.
//!
//! Handlers only ever see `Arc<dyn Storage>`, so the in-memory adapter used
//! in production today and in tests is swappable for a database-backed one
//! without touching route code.

mod memory;

pub use memory::MemoryStorage;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::portfolio::{Portfolio, PortfolioUpdate};
use crate::models::user::User;
use crate::wizard::WizardState;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no portfolio exists for user {0}")]
    PortfolioNotFound(Uuid),

    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, StorageError>;

    async fn get_user_by_username(&self, username: &str)
        -> Result<Option<User>, StorageError>;

    /// Creates a user together with their default portfolio. The two writes
    /// land atomically: a user is never observable without a portfolio.
    async fn create_user_with_portfolio(
        &self,
        user: User,
    ) -> Result<(User, Portfolio), StorageError>;

    async fn get_portfolio(&self, user_id: Uuid) -> Result<Option<Portfolio>, StorageError>;

    /// Merges a partial update into a user's portfolio and stamps the merge
    /// time. Concurrent merges serialize; an update is applied in full or,
    /// on `PortfolioNotFound`, not at all.
    async fn update_portfolio(
        &self,
        user_id: Uuid,
        update: PortfolioUpdate,
    ) -> Result<Portfolio, StorageError>;

    /// Fetches a user's saved wizard cursor, if any.
    async fn get_wizard_state(&self, user_id: Uuid)
        -> Result<Option<WizardState>, StorageError>;

    async fn save_wizard_state(
        &self,
        user_id: Uuid,
        state: WizardState,
    ) -> Result<(), StorageError>;
}
