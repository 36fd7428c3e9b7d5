use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{delete, get};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{admin, auth, jobs, probes, ui};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new()?;
    let admin_routes = Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/:user_id", delete(admin::delete_user))
        .route("/jobs", get(admin::list_jobs))
        .route("/jobs/:job_id", delete(admin::delete_job))
        .route_layer(from_fn(authn::require_admin));
    let app = Router::new()
        .route("/post", get(jobs::compose).post(jobs::create))
        .route_layer(from_fn(authn::require_user))
        .route("/", get(ui::index))
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout).post(auth::logout))
        .layer(from_fn_with_state(state.clone(), authn::identify))
        .nest("/admin", admin_routes)
        .route("/healthz", get(probes::healthz))
        .route("/livez", get(probes::livez))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
