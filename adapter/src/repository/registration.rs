use crate::database::model::registration::{EventSnapshotRow, RegistrationRow};
use crate::database::ConnectionPool;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::{EventId, RegistrationId};
use kernel::model::registration::event::CreateRegistration;
use kernel::model::registration::Registration;
use kernel::repository::registration::RegistrationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RegistrationRepositoryImpl {
    db: ConnectionPool,
}

impl RegistrationRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

#[async_trait]
impl RegistrationRepository for RegistrationRepositoryImpl {
    async fn create(&self, event: CreateRegistration) -> AppResult<RegistrationId> {
        let mut tx = self.db.begin().await?;

        // The existence check and the insert share one serializable
        // transaction, so two concurrent registrations for the same
        // (event, user) pair cannot both commit.
        self.set_transaction_serializable(&mut tx).await?;

        let snapshot: Option<EventSnapshotRow> = sqlx::query_as(
            r#"
                SELECT event_name, event_date
                FROM events
                WHERE id = $1
            "#,
        )
        .bind(event.event_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(snapshot) = snapshot else {
            return Err(AppError::EntityNotFound("Event not found".into()));
        };

        let existing: Option<(RegistrationId,)> = sqlx::query_as(
            r#"
                SELECT id
                FROM registrations
                WHERE event_id = $1 AND user_name = $2
                LIMIT 1
            "#,
        )
        .bind(event.event_id)
        .bind(&event.user_name)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if existing.is_some() {
            return Err(AppError::DuplicateEntity("Already registered".into()));
        }

        let registration_id: RegistrationId = sqlx::query_scalar(
            r#"
                INSERT INTO registrations (event_id, event_name, event_date, user_name)
                VALUES ($1, $2, $3, $4)
                RETURNING id
            "#,
        )
        .bind(event.event_id)
        .bind(&snapshot.event_name)
        .bind(snapshot.event_date)
        .bind(&event.user_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(registration_id)
    }

    async fn find_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Registration>> {
        let rows: Vec<RegistrationRow> = sqlx::query_as(
            r#"
                SELECT id, event_id, event_name, event_date, user_name
                FROM registrations
                WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Registration::from).collect())
    }
}
