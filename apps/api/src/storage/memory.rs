//! In-memory storage adapter. All maps sit behind a single `RwLock` so
//! multi-record operations stay atomic without any cross-lock ordering.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::portfolio::{Portfolio, PortfolioUpdate};
use crate::models::user::User;
use crate::storage::{Storage, StorageError};
use crate::wizard::WizardState;

#[derive(Default)]
struct MemoryInner {
    users: HashMap<Uuid, User>,
    /// Keyed by owning user id; every user has exactly one portfolio.
    portfolios: HashMap<Uuid, Portfolio>,
    wizard_states: HashMap<Uuid, WizardState>,
}

#[derive(Default)]
pub struct MemoryStorage {
    inner: RwLock<MemoryInner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&user_id).cloned())
    }

    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user_with_portfolio(
        &self,
        user: User,
    ) -> Result<(User, Portfolio), StorageError> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|u| u.username == user.username) {
            return Err(StorageError::UsernameTaken(user.username));
        }

        let portfolio = Portfolio::new_default(user.id);
        inner.users.insert(user.id, user.clone());
        inner.portfolios.insert(user.id, portfolio.clone());
        Ok((user, portfolio))
    }

    async fn get_portfolio(&self, user_id: Uuid) -> Result<Option<Portfolio>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner.portfolios.get(&user_id).cloned())
    }

    async fn update_portfolio(
        &self,
        user_id: Uuid,
        update: PortfolioUpdate,
    ) -> Result<Portfolio, StorageError> {
        let mut inner = self.inner.write().await;
        let portfolio = inner
            .portfolios
            .get_mut(&user_id)
            .ok_or(StorageError::PortfolioNotFound(user_id))?;

        update.apply_to(portfolio);
        portfolio.updated_at = Utc::now();
        Ok(portfolio.clone())
    }

    async fn get_wizard_state(
        &self,
        user_id: Uuid,
    ) -> Result<Option<WizardState>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner.wizard_states.get(&user_id).copied())
    }

    async fn save_wizard_state(
        &self,
        user_id: Uuid,
        state: WizardState,
    ) -> Result<(), StorageError> {
        let mut inner = self.inner.write().await;
        inner.wizard_states.insert(user_id, state);
        Ok(())
    }
}
