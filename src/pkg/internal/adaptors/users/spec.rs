use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(FromRow, Debug, Clone)]
pub struct UserEntry {
    pub user_id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Hash-free projection for the admin listing.
#[derive(FromRow, Serialize, Debug)]
pub struct UserSummary {
    pub user_id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
