use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    pkg::{
        internal::adaptors::{
            jobs::{mutators::JobMutator, selectors::JobSelector, spec::JobEntry},
            users::{mutators::UserMutator, selectors::UserSelector, spec::UserSummary},
        },
        server::state::AppState,
    },
    prelude::{AppError, Result},
};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>> {
    let mut conn = state.db_pool.acquire().await?;
    let users = UserSelector::new(&mut conn).get_all().await?;
    Ok(Json(users))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode> {
    let mut conn = state.db_pool.acquire().await?;
    if UserMutator::new(&mut conn).delete(&user_id).await? {
        tracing::info!("admin deleted user {}", user_id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

pub async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<JobEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let jobs = JobSelector::new(&mut conn).get_all().await?;
    Ok(Json(jobs))
}

pub async fn delete_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<StatusCode> {
    let mut conn = state.db_pool.acquire().await?;
    if JobMutator::new(&mut conn).delete(&job_id).await? {
        tracing::info!("admin deleted job {}", job_id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
