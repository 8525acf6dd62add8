use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use garde::Validate;
use kernel::model::role::Role;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::extractor::session_cookie;
use crate::form::FormBody;
use crate::handler::found;
use crate::model::auth::{LoginRequest, SignupRequest};

// Failed logins answer 200 with this page; the client-side alert is the
// contract the login page expects.
const INVALID_CREDENTIALS_PAGE: &str =
    "<script>alert('Invalid email or password'); window.location='/login';</script>";

pub async fn show_signup_page(State(registry): State<AppRegistry>) -> AppResult<Html<String>> {
    serve_page(&registry, "signup.html").await
}

pub async fn show_login_page(State(registry): State<AppRegistry>) -> AppResult<Html<String>> {
    serve_page(&registry, "login.html").await
}

async fn serve_page(registry: &AppRegistry, file_name: &str) -> AppResult<Html<String>> {
    let path = registry.app_config().assets.root.join(file_name);
    tokio::fs::read_to_string(&path)
        .await
        .map(Html)
        .map_err(|_| AppError::EntityNotFound(format!("{file_name} not found")))
}

pub async fn signup(
    State(registry): State<AppRegistry>,
    FormBody(fields): FormBody,
) -> AppResult<Response> {
    let req = SignupRequest::from_fields(&fields)?;
    req.validate(&())?;

    registry.user_repository().create(req.into()).await?;

    Ok(found("/login"))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    FormBody(fields): FormBody,
) -> AppResult<Response> {
    let req = LoginRequest::from_fields(&fields);

    let Some(user) = registry.auth_repository().verify_user(req.into()).await? else {
        return Ok(Html(INVALID_CREDENTIALS_PAGE).into_response());
    };

    let token = registry.auth_repository().create_token(&user.name).await?;
    let target = match user.role {
        Role::Admin => "/admin.html",
        Role::User => "/events.html",
    };

    Ok((
        StatusCode::FOUND,
        [
            (header::SET_COOKIE, session_cookie(&token)),
            (header::LOCATION, target.to_string()),
        ],
    )
        .into_response())
}
