use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(FromRow, Debug)]
pub struct SessionEntry {
    pub token: String,
    pub user_id: String,
    pub expiry: DateTime<Utc>,
}
