use sqlx::PgConnection;
use uuid::Uuid;

use crate::pkg::internal::adaptors::users::spec::UserEntry;
use crate::prelude::Result;

pub struct UserMutator<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> UserMutator<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        UserMutator { conn }
    }

    pub async fn create(&mut self, username: &str, password_hash: &str) -> Result<UserEntry> {
        let row = sqlx::query_as::<_, UserEntry>(
            r#"
            INSERT INTO users (user_id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING user_id, username, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(username)
        .bind(password_hash)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(row)
    }

    pub async fn delete(&mut self, user_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
