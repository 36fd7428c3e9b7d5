pub mod admin;
pub mod auth;
pub mod jobs;
pub mod probes;
pub mod ui;

use validator::ValidationErrors;

/// Flattens field validation failures into display strings for re-rendering.
pub fn field_errors(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: invalid value", field),
            })
        })
        .collect()
}
