use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobListing};
use crate::prelude::Result;

pub struct JobSelector<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        JobSelector { conn }
    }

    pub async fn list_with_posters(&mut self) -> Result<Vec<JobListing>> {
        let rows = sqlx::query_as::<_, JobListing>(
            "SELECT j.title, j.description, u.username AS posted_by
             FROM jobs j JOIN users u ON u.user_id = j.posted_by
             ORDER BY j.created_at",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows)
    }

    pub async fn get_all(&mut self) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT job_id, title, description, posted_by, created_at
             FROM jobs ORDER BY created_at DESC",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows)
    }
}
