use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use validator::Validate;

use crate::{
    pkg::{
        internal::{adaptors::jobs::mutators::JobMutator, auth::AuthedUser},
        server::{csrf, handlers::field_errors, state::AppState, uispec::PostJob},
    },
    prelude::Result,
};

#[derive(Deserialize, Validate, Default)]
#[serde(default)]
pub struct PostJobInput {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "is required"))]
    pub description: String,
    pub csrf_token: String,
}

pub async fn compose(jar: CookieJar) -> Result<(CookieJar, Html<String>)> {
    let (jar, token) = csrf::ensure_token(jar);
    let page = PostJob {
        csrf_token: &token,
        errors: Vec::new(),
        title: "",
        description: "",
    };
    Ok((jar, Html(page.render()?)))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<AuthedUser>>,
    jar: CookieJar,
    Form(input): Form<PostJobInput>,
) -> Result<Response> {
    csrf::check(&jar, &input.csrf_token)?;
    if let Err(errors) = input.validate() {
        let page = PostJob {
            csrf_token: &input.csrf_token,
            errors: field_errors(&errors),
            title: &input.title,
            description: &input.description,
        };
        return Ok(Html(page.render()?).into_response());
    }
    let mut conn = state.db_pool.acquire().await?;
    let job = JobMutator::new(&mut conn)
        .create(&input.title, &input.description, &user.user_id)
        .await?;
    tracing::info!("job {} posted by {}", job.job_id, user.username);
    Ok(Redirect::to("/").into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_job_input_limits() {
        let ok = PostJobInput {
            title: "Nanny needed".to_string(),
            description: "Weekdays 9-5".to_string(),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let blank_title = PostJobInput {
            description: "Weekdays 9-5".to_string(),
            ..Default::default()
        };
        assert!(blank_title.validate().is_err());

        let long_title = PostJobInput {
            title: "x".repeat(101),
            description: "Weekdays 9-5".to_string(),
            ..Default::default()
        };
        assert!(long_title.validate().is_err());

        let blank_description = PostJobInput {
            title: "Nanny needed".to_string(),
            ..Default::default()
        };
        assert!(blank_description.validate().is_err());
    }
}
