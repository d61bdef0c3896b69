//! Ticket Repository Implementation
//!
//! PostgreSQL implementation of the TicketRepository trait. The ticket type
//! is fetched in the same query through an explicit join.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Ticket, TicketRepository, TicketStatus, TicketType};
use crate::shared::error::AppError;

/// Joined `tickets` + `ticket_types` row.
#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i32,
    ticket_type_id: i32,
    enrollment_id: i32,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    type_name: String,
    type_price: i32,
    type_is_remote: bool,
    type_includes_hotel: bool,
    type_created_at: DateTime<Utc>,
    type_updated_at: DateTime<Utc>,
}

impl TicketRow {
    fn into_ticket(self) -> Result<Ticket, AppError> {
        let status: TicketStatus = self.status.parse().map_err(AppError::Internal)?;

        Ok(Ticket {
            id: self.id,
            ticket_type_id: self.ticket_type_id,
            enrollment_id: self.enrollment_id,
            status,
            ticket_type: TicketType {
                id: self.ticket_type_id,
                name: self.type_name,
                price: self.type_price,
                is_remote: self.type_is_remote,
                includes_hotel: self.type_includes_hotel,
                created_at: self.type_created_at,
                updated_at: self.type_updated_at,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// PostgreSQL ticket repository
#[derive(Clone)]
pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn find_by_enrollment_id(&self, enrollment_id: i32) -> Result<Option<Ticket>, AppError> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT t.id, t.ticket_type_id, t.enrollment_id, t.status::TEXT AS status,
                   t.created_at, t.updated_at,
                   tt.name AS type_name, tt.price AS type_price,
                   tt.is_remote AS type_is_remote, tt.includes_hotel AS type_includes_hotel,
                   tt.created_at AS type_created_at, tt.updated_at AS type_updated_at
            FROM tickets t
            INNER JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE t.enrollment_id = $1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TicketRow::into_ticket).transpose()
    }
}
