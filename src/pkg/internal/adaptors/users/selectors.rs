use sqlx::PgConnection;

use crate::pkg::internal::adaptors::users::spec::{UserEntry, UserSummary};
use crate::prelude::Result;

pub struct UserSelector<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> UserSelector<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        UserSelector { conn }
    }

    pub async fn get_by_id(&mut self, user_id: &str) -> Result<Option<UserEntry>> {
        let row = sqlx::query_as::<_, UserEntry>(
            "SELECT user_id, username, password_hash, created_at
             FROM users WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(row)
    }

    pub async fn get_by_username(&mut self, username: &str) -> Result<Option<UserEntry>> {
        let row = sqlx::query_as::<_, UserEntry>(
            "SELECT user_id, username, password_hash, created_at
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<UserSummary>> {
        let rows = sqlx::query_as::<_, UserSummary>(
            "SELECT user_id, username, created_at
             FROM users ORDER BY created_at",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows)
    }
}
