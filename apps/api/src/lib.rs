pub mod auth;
pub mod config;
pub mod errors;
pub mod models;
pub mod portfolio;
pub mod render;
pub mod routes;
pub mod state;
pub mod storage;
pub mod themes;
pub mod users;
pub mod wizard;

pub use crate::config::Config;
pub use crate::routes::build_router;
pub use crate::state::AppState;
pub use crate::storage::{MemoryStorage, Storage};
