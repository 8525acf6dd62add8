use crate::database::ConnectionPool;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::user::event::CreateUser;
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                INSERT INTO users (name, roll_no, email, phone_number, department, year, password)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&event.name)
        .bind(&event.roll_no)
        .bind(&event.email)
        .bind(&event.phone_number)
        .bind(&event.department)
        .bind(&event.year)
        .bind(&event.password)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::auth::event::VerifyCredentials;
    use kernel::model::role::Role;
    use kernel::repository::auth::AuthRepository;

    use crate::repository::auth::AuthRepositoryImpl;

    fn signup(name: &str, email: &str, password: &str) -> CreateUser {
        CreateUser {
            name: name.into(),
            roll_no: "21BCE1042".into(),
            email: email.into(),
            phone_number: "9876543210".into(),
            department: "CSE".into(),
            year: "3".into(),
            password: password.into(),
        }
    }

    #[sqlx::test]
    async fn test_signup_then_login(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let auth = AuthRepositoryImpl::new(ConnectionPool::new(pool));

        users
            .create(signup("Priya Sharma", "priya@campus.edu", "secret"))
            .await?;

        let user = auth
            .verify_user(VerifyCredentials {
                email: "priya@campus.edu".into(),
                password: "secret".into(),
            })
            .await?;
        let user = user.expect("credentials should match");
        assert_eq!(user.name, "Priya Sharma");
        assert_eq!(user.role, Role::User);

        let miss = auth
            .verify_user(VerifyCredentials {
                email: "priya@campus.edu".into(),
                password: "wrong".into(),
            })
            .await?;
        assert!(miss.is_none());

        Ok(())
    }
}
