use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use kernel::model::auth::AccessToken;
use registry::AppRegistry;
use shared::error::AppError;

pub(crate) const SESSION_COOKIE: &str = "session";

/// The requester's display name, resolved from the `session` cookie.
/// Never rejects: requests without a usable session resolve to `None`
/// and the caller decides what an anonymous request means.
pub struct SessionUser(Option<String>);

impl SessionUser {
    pub fn into_name(self) -> Option<String> {
        self.0
    }
}

#[axum::async_trait]
impl FromRequestParts<AppRegistry> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(find_session_token);
        let Some(token) = token else {
            return Ok(Self(None));
        };

        let name = registry
            .auth_repository()
            .fetch_user_name(&AccessToken(token))
            .await?;
        Ok(Self(name))
    }
}

fn find_session_token(cookie_header: &str) -> Option<String> {
    cookie_header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

pub(crate) fn session_cookie(token: &AccessToken) -> String {
    format!("{SESSION_COOKIE}={}; Path=/; HttpOnly", token.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_found_among_other_cookies() {
        let token = find_session_token("theme=dark; session=abc123; lang=en");
        assert_eq!(token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_missing_session_cookie_yields_none() {
        assert!(find_session_token("theme=dark").is_none());
    }
}
