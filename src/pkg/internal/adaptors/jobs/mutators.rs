use sqlx::PgConnection;
use uuid::Uuid;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::prelude::Result;

pub struct JobMutator<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        JobMutator { conn }
    }

    pub async fn create(
        &mut self,
        title: &str,
        description: &str,
        posted_by: &str,
    ) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (job_id, title, description, posted_by)
            VALUES ($1, $2, $3, $4)
            RETURNING job_id, title, description, posted_by, created_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(title)
        .bind(description)
        .bind(posted_by)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(row)
    }

    pub async fn delete(&mut self, job_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE job_id = $1")
            .bind(job_id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
