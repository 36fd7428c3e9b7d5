use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    conf::settings,
    pkg::{
        internal::adaptors::{
            sessions::{mutators::SessionMutator, selectors::SessionSelector},
            users::{mutators::UserMutator, selectors::UserSelector, spec::UserEntry},
        },
        server::state::AppState,
    },
    prelude::{AppError, Result},
};

pub const SESSION_COOKIE: &str = "jobwishers_session";

/// Identity attached to a request once its session checks out.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub user_id: String,
    pub username: String,
}

impl From<UserEntry> for AuthedUser {
    fn from(user: UserEntry) -> Self {
        AuthedUser {
            user_id: user.user_id,
            username: user.username,
        }
    }
}

// bcrypt is CPU-bound, keep it off the async workers
pub async fn hash_password(password: &str) -> Result<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST))
        .await
        .map_err(|e| AppError::Hash(e.to_string()))?
        .map_err(|e| AppError::Hash(e.to_string()))
}

pub async fn verify_password(password: &str, hashed: &str) -> Result<bool> {
    let password = password.to_string();
    let hashed = hashed.to_string();
    tokio::task::spawn_blocking(move || verify(password, &hashed))
        .await
        .map_err(|e| AppError::Hash(e.to_string()))?
        .map_err(|e| AppError::Hash(e.to_string()))
}

pub enum RegisterOutcome {
    Created(AuthedUser),
    UsernameTaken,
}

/// A losing concurrent insert lands in `UsernameTaken` like any other duplicate.
pub async fn register_user(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<RegisterOutcome> {
    let password_hash = hash_password(password).await?;
    let mut conn = state.db_pool.acquire().await?;
    match UserMutator::new(&mut conn)
        .create(username, &password_hash)
        .await
    {
        Ok(user) => Ok(RegisterOutcome::Created(user.into())),
        Err(AppError::Database(sqlx::Error::Database(db))) if db.is_unique_violation() => {
            Ok(RegisterOutcome::UsernameTaken)
        }
        Err(e) => Err(e),
    }
}

/// Unknown username and wrong password both come back as `None`.
pub async fn verify_credentials(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<Option<AuthedUser>> {
    let mut conn = state.db_pool.acquire().await?;
    let Some(user) = UserSelector::new(&mut conn)
        .get_by_username(username)
        .await?
    else {
        return Ok(None);
    };
    if verify_password(password, &user.password_hash).await? {
        Ok(Some(user.into()))
    } else {
        Ok(None)
    }
}

pub struct Session;

impl Session {
    pub async fn issue(state: &AppState, user_id: &str) -> Result<String> {
        let token = Uuid::new_v4().to_string();
        let expiry = Utc::now() + Duration::days(settings.session_ttl_days as i64);
        let mut conn = state.db_pool.acquire().await?;
        SessionMutator::new(&mut conn)
            .create(&token, user_id, expiry)
            .await?;
        Ok(token)
    }

    pub async fn authenticate(state: &AppState, token: &str) -> Result<Option<AuthedUser>> {
        let mut conn = state.db_pool.acquire().await?;
        let Some(session) = SessionSelector::new(&mut conn).get_valid(token).await? else {
            return Ok(None);
        };
        let user = UserSelector::new(&mut conn)
            .get_by_id(&session.user_id)
            .await?;
        Ok(user.map(AuthedUser::from))
    }

    pub async fn revoke(state: &AppState, token: &str) -> Result<()> {
        let mut conn = state.db_pool.acquire().await?;
        SessionMutator::new(&mut conn).delete(token).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[tokio::test]
    async fn test_hash_and_verify_password() -> Result<()> {
        let hashed = hash_password("p@ss1234").await?;
        assert_ne!(hashed, "p@ss1234");
        assert!(hashed.starts_with("$2"));
        assert!(verify_password("p@ss1234", &hashed).await?);
        assert!(!verify_password("wrong", &hashed).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_verify_rejects_garbage_hash() {
        let result = verify_password("p@ss1234", "not-a-bcrypt-hash").await;
        assert!(result.is_err());
    }
}
