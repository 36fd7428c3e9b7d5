use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use validator::Validate;

use crate::{
    pkg::{
        internal::auth::{
            register_user, verify_credentials, RegisterOutcome, Session, SESSION_COOKIE,
        },
        server::{
            csrf,
            handlers::field_errors,
            state::AppState,
            uispec::{Login, Signup},
        },
    },
    prelude::Result,
};

#[derive(Deserialize, Validate, Default)]
#[serde(default)]
pub struct SignupInput {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 72, message = "must be 1-72 characters"))]
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize, Validate, Default)]
#[serde(default)]
pub struct LoginInput {
    #[validate(length(min = 1, message = "is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
    pub csrf_token: String,
}

pub async fn signup_form(jar: CookieJar) -> Result<(CookieJar, Html<String>)> {
    let (jar, token) = csrf::ensure_token(jar);
    let page = Signup {
        csrf_token: &token,
        errors: Vec::new(),
        username: "",
    };
    Ok((jar, Html(page.render()?)))
}

pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<SignupInput>,
) -> Result<Response> {
    csrf::check(&jar, &input.csrf_token)?;
    if let Err(errors) = input.validate() {
        let page = Signup {
            csrf_token: &input.csrf_token,
            errors: field_errors(&errors),
            username: &input.username,
        };
        return Ok(Html(page.render()?).into_response());
    }
    match register_user(&state, &input.username, &input.password).await? {
        RegisterOutcome::Created(user) => {
            tracing::info!("user {} signed up", user.username);
            Ok(Redirect::to("/login").into_response())
        }
        RegisterOutcome::UsernameTaken => {
            let page = Signup {
                csrf_token: &input.csrf_token,
                errors: vec!["username: already taken".to_string()],
                username: &input.username,
            };
            Ok(Html(page.render()?).into_response())
        }
    }
}

pub async fn login_form(jar: CookieJar) -> Result<(CookieJar, Html<String>)> {
    let (jar, token) = csrf::ensure_token(jar);
    let page = Login {
        csrf_token: &token,
        errors: Vec::new(),
        username: "",
    };
    Ok((jar, Html(page.render()?)))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<LoginInput>,
) -> Result<Response> {
    csrf::check(&jar, &input.csrf_token)?;
    if let Err(errors) = input.validate() {
        let page = Login {
            csrf_token: &input.csrf_token,
            errors: field_errors(&errors),
            username: &input.username,
        };
        return Ok(Html(page.render()?).into_response());
    }
    match verify_credentials(&state, &input.username, &input.password).await? {
        Some(user) => {
            let token = Session::issue(&state, &user.user_id).await?;
            let cookie = Cookie::build((SESSION_COOKIE, token))
                .path("/")
                .http_only(true)
                .build();
            tracing::info!("user {} logged in", user.username);
            Ok((jar.add(cookie), Redirect::to("/")).into_response())
        }
        None => {
            // one message for unknown user and wrong password alike
            let page = Login {
                csrf_token: &input.csrf_token,
                errors: vec!["invalid username or password".to_string()],
                username: &input.username,
            };
            Ok(Html(page.render()?).into_response())
        }
    }
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect)> {
    if let Some(cookie) = jar.get(SESSION_COOKIE).filter(|c| !c.value().is_empty()) {
        Session::revoke(&state, cookie.value()).await?;
        tracing::info!("session revoked");
    }
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    Ok((jar, Redirect::to("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_input_limits() {
        let ok = SignupInput {
            username: "alice".to_string(),
            password: "p@ss1234".to_string(),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let blank = SignupInput {
            password: "p@ss1234".to_string(),
            ..Default::default()
        };
        assert!(blank.validate().is_err());

        let long_name = SignupInput {
            username: "x".repeat(151),
            password: "p@ss1234".to_string(),
            ..Default::default()
        };
        assert!(long_name.validate().is_err());

        let long_password = SignupInput {
            username: "alice".to_string(),
            password: "x".repeat(73),
            ..Default::default()
        };
        assert!(long_password.validate().is_err());
    }

    #[test]
    fn test_login_input_requires_both_fields() {
        let ok = LoginInput {
            username: "alice".to_string(),
            password: "p@ss1234".to_string(),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        assert!(LoginInput::default().validate().is_err());
    }

    #[test]
    fn test_field_errors_name_the_field() {
        let errors = SignupInput::default().validate().unwrap_err();
        let messages = field_errors(&errors);
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().any(|m| m.starts_with("username:")));
        assert!(messages.iter().any(|m| m.starts_with("password:")));
    }
}
