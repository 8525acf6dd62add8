use crate::model::auth::event::VerifyCredentials;
use crate::model::auth::AccessToken;
use crate::model::user::AuthenticatedUser;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Exact-match credential lookup. `None` means no user matched.
    async fn verify_user(&self, event: VerifyCredentials) -> AppResult<Option<AuthenticatedUser>>;
    /// Issues a fresh session token bound to the given display name.
    async fn create_token(&self, user_name: &str) -> AppResult<AccessToken>;
    /// Resolves a token back to its display name, if the token is known.
    async fn fetch_user_name(&self, token: &AccessToken) -> AppResult<Option<String>>;
}
