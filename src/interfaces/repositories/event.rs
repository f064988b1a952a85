use async_trait::async_trait;
use mockall::automock;
use sqlx::{self, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::{
        event::{Event, EventOrder, EventStatus, NewEventRequest, UpdateEventRequest},
        pagination::Paginated,
    },
    errors::AppError,
    repositories::sqlx_repo::{page_offset, push_opt, push_patch, SqlxEventRepo},
};

#[automock]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create_event(&self, req: &NewEventRequest) -> Result<Event, AppError>;
    async fn get_event_by_id(&self, id: &Uuid) -> Result<Event, AppError>;
    async fn get_all_events(
        &self,
        status: Option<EventStatus>,
        order: EventOrder,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Event>, AppError>;
    async fn get_upcoming_events(&self, limit: u32) -> Result<Vec<Event>, AppError>;
    async fn update_event(&self, id: &Uuid, req: &UpdateEventRequest) -> Result<Event, AppError>;
    async fn delete_event(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxEventRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxEventRepo { pool }
    }
}

#[async_trait]
impl EventRepository for SqlxEventRepo {
    async fn create_event(&self, req: &NewEventRequest) -> Result<Event, AppError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, date, location, status, image)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.date)
        .bind(&req.location)
        .bind(req.status)
        .bind(&req.image)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    async fn get_event_by_id(&self, id: &Uuid) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".into()))
    }

    async fn get_all_events(
        &self,
        status: Option<EventStatus>,
        order: EventOrder,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Event>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM events");

        if let Some(status) = status {
            builder.push(" WHERE status = ");
            builder.push_bind(status);
        }

        match order {
            EventOrder::DateDesc => builder.push(" ORDER BY date DESC"),
            EventOrder::DateAsc => builder.push(" ORDER BY date ASC"),
        };
        builder.push(" LIMIT ");
        builder.push_bind(per_page as i64);
        builder.push(" OFFSET ");
        builder.push_bind(page_offset(page, per_page));

        let items = builder
            .build_query_as::<Event>()
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM events WHERE ($1::text IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paginated::new(items, total, page, per_page))
    }

    async fn get_upcoming_events(&self, limit: u32) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE status = 'upcoming' ORDER BY date ASC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn update_event(&self, id: &Uuid, req: &UpdateEventRequest) -> Result<Event, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE events SET updated_at = NOW()");

        push_opt(&mut builder, "title", &req.title);
        push_opt(&mut builder, "description", &req.description);
        push_opt(&mut builder, "date", &req.date);
        push_opt(&mut builder, "location", &req.location);
        push_opt(&mut builder, "status", &req.status);
        push_patch(&mut builder, "image", &req.image);

        builder.push(" WHERE id = ");
        builder.push_bind(*id);
        builder.push(" RETURNING *");

        builder
            .build_query_as::<Event>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".into()))
    }

    async fn delete_event(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }

        Ok(())
    }
}
