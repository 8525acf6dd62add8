use crate::database::model::event::EventRow;
use crate::database::ConnectionPool;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::event::event::CreateEvent;
use kernel::model::event::Event;
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                INSERT INTO events (event_name, event_date, venue, reg_fee, reg_close_date, max_participants)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&event.event_name)
        .bind(event.event_date)
        .bind(&event.venue)
        .bind(event.reg_fee)
        .bind(event.reg_close_date)
        .bind(event.max_participants)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No event record has been created".into(),
            ));
        }

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
                SELECT
                    id,
                    event_name,
                    event_date,
                    venue,
                    reg_fee,
                    reg_close_date,
                    max_participants
                FROM events
                ORDER BY event_date ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;

    pub(crate) fn sample_event(name: &str, date: &str) -> CreateEvent {
        CreateEvent {
            event_name: name.into(),
            event_date: date.parse::<NaiveDate>().unwrap(),
            venue: "Main Auditorium".into(),
            reg_fee: 49.5,
            reg_close_date: "2025-10-01".parse::<NaiveDate>().unwrap(),
            max_participants: 100,
        }
    }

    #[sqlx::test]
    async fn test_create_and_list_events_ordered_by_date(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(sample_event("Robotics Workshop", "2025-11-02"))
            .await?;
        repo.create(sample_event("Hackathon", "2025-10-12")).await?;

        let events = repo.find_all().await?;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_name, "Hackathon");
        assert_eq!(events[1].event_name, "Robotics Workshop");
        assert_eq!(events[0].reg_fee, 49.5);
        assert_eq!(events[0].max_participants, 100);

        Ok(())
    }
}
