use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use crate::prelude::Result;

pub struct SessionMutator<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> SessionMutator<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        SessionMutator { conn }
    }

    pub async fn create(
        &mut self,
        token: &str,
        user_id: &str,
        expiry: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query("INSERT INTO sessions (token, user_id, expiry) VALUES ($1, $2, $3)")
            .bind(token)
            .bind(user_id)
            .bind(expiry)
            .execute(&mut *self.conn)
            .await?;

        Ok(())
    }

    pub async fn delete(&mut self, token: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
