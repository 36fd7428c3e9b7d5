use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(FromRow, Serialize, Debug)]
pub struct JobEntry {
    pub job_id: String,
    pub title: String,
    pub description: String,
    pub posted_by: String,
    pub created_at: DateTime<Utc>,
}

/// Listing row, `posted_by` already resolved to the poster's username.
#[derive(FromRow, Debug)]
pub struct JobListing {
    pub title: String,
    pub description: String,
    pub posted_by: String,
}
