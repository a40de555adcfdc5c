use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Registered account. Immutable after creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Argon2 PHC string derived at registration. Never serialized.
    #[serde(skip_serializing)]
    pub credential_digest: String,
    pub created_at: DateTime<Utc>,
}
