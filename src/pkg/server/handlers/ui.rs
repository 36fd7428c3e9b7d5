use std::sync::Arc;

use askama::Template;
use axum::{extract::State, response::Html, Extension};

use crate::{
    pkg::{
        internal::{adaptors::jobs::selectors::JobSelector, auth::AuthedUser},
        server::{state::AppState, uispec::Index},
    },
    prelude::Result,
};

pub async fn index(
    State(state): State<AppState>,
    Extension(user): Extension<Option<Arc<AuthedUser>>>,
) -> Result<Html<String>> {
    let mut conn = state.db_pool.acquire().await?;
    let jobs = JobSelector::new(&mut conn).list_with_posters().await?;
    tracing::debug!("listing {} jobs", jobs.len());

    let page = Index {
        user: user.as_deref().map(|u| u.username.as_str()),
        jobs,
    };
    Ok(Html(page.render()?))
}
