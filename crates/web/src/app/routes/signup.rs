use std::sync::Arc;

use axum::{extract::Extension, response::Html, Form};

use buildup_core::DomainError;

use crate::app::dto::SignupForm;
use crate::app::services::AppServices;
use crate::app::views;

pub async fn form() -> Html<String> {
    views::signup_form(None, "", "")
}

/// Handle a signup submission.
///
/// Failures re-render the form synchronously with the submitted email and
/// name; no redirect-after-post.
pub async fn submit(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<SignupForm>,
) -> Html<String> {
    let req = form.into_request();
    let email = req.email.clone();
    let name = req.name.clone().unwrap_or_default();

    match services.registration.register(req).await {
        Ok(member) => views::signup_success(&member),
        Err(err) => {
            let message = match err {
                DomainError::InvalidInput(msg) | DomainError::Conflict(msg) => msg,
                DomainError::StorageFailure(msg) => {
                    tracing::error!(error = %msg, "registration failed in storage");
                    msg
                }
            };
            views::signup_form(Some(&message), &email, &name)
        }
    }
}
