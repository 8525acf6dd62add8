use std::collections::HashMap;

use crate::database::model::user::UserAuthRow;
use crate::database::ConnectionPool;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::auth::event::VerifyCredentials;
use kernel::model::auth::AccessToken;
use kernel::model::user::AuthenticatedUser;
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Credential checks go to the users table; session tokens live in an
/// in-process map and do not survive a restart.
// TODO: expire tokens; the map grows until the process restarts.
#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    #[new(default)]
    sessions: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn verify_user(&self, event: VerifyCredentials) -> AppResult<Option<AuthenticatedUser>> {
        // Password comparison happens in the database, verbatim. Swapping
        // in hashing means changing only this query and the insert.
        let row: Option<UserAuthRow> = sqlx::query_as(
            r#"
                SELECT name, role
                FROM users
                WHERE email = $1 AND password = $2
            "#,
        )
        .bind(&event.email)
        .bind(&event.password)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(AuthenticatedUser::from))
    }

    async fn create_token(&self, user_name: &str) -> AppResult<AccessToken> {
        let token = AccessToken(Uuid::new_v4().simple().to_string());
        self.sessions
            .write()
            .await
            .insert(token.0.clone(), user_name.to_string());
        Ok(token)
    }

    async fn fetch_user_name(&self, token: &AccessToken) -> AppResult<Option<String>> {
        Ok(self.sessions.read().await.get(&token.0).cloned())
    }
}
