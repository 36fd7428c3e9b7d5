use axum_extra::extract::cookie::{Cookie, CookieJar};
use rand::{distr::Alphanumeric, Rng};

use crate::prelude::{AppError, Result};

pub const CSRF_COOKIE: &str = "jobwishers_csrf";

fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Reuses the caller's token cookie when present, issues a fresh one otherwise.
pub fn ensure_token(jar: CookieJar) -> (CookieJar, String) {
    if let Some(token) = jar
        .get(CSRF_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
    {
        return (jar, token);
    }
    let token = generate_token();
    let cookie = Cookie::build((CSRF_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .build();
    (jar.add(cookie), token)
}

/// Double-submit check: the hidden form field must echo the token cookie.
pub fn check(jar: &CookieJar, submitted: &str) -> Result<()> {
    match jar.get(CSRF_COOKIE).map(|c| c.value()) {
        Some(expected) if !submitted.is_empty() && expected == submitted => Ok(()),
        _ => Err(AppError::Forbidden("csrf token mismatch")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_token_issues_and_reuses() {
        let (jar, token) = ensure_token(CookieJar::new());
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

        let (_, again) = ensure_token(jar);
        assert_eq!(token, again);
    }

    #[test]
    fn test_check_requires_matching_token() {
        let (jar, token) = ensure_token(CookieJar::new());
        assert!(check(&jar, &token).is_ok());
        assert!(check(&jar, "different").is_err());
        assert!(check(&jar, "").is_err());
        assert!(check(&CookieJar::new(), "whatever").is_err());
    }
}
