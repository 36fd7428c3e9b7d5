use sqlx::PgConnection;

use crate::pkg::internal::adaptors::sessions::spec::SessionEntry;
use crate::prelude::Result;

pub struct SessionSelector<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> SessionSelector<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        SessionSelector { conn }
    }

    /// Expired rows are left in place and simply never match.
    pub async fn get_valid(&mut self, token: &str) -> Result<Option<SessionEntry>> {
        let row = sqlx::query_as::<_, SessionEntry>(
            "SELECT token, user_id, expiry
             FROM sessions WHERE token = $1 AND expiry > now()",
        )
        .bind(token)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(row)
    }
}
