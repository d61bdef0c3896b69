//! Enrollment Repository Implementation
//!
//! PostgreSQL implementation of the EnrollmentRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::domain::{Enrollment, EnrollmentRepository};
use crate::shared::error::AppError;

/// Database row representation matching the enrollments table schema.
#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    name: String,
    cpf: String,
    birthday: NaiveDate,
    phone: String,
    user_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            cpf: row.cpf,
            birthday: row.birthday,
            phone: row.phone,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL enrollment repository
#[derive(Clone)]
pub struct PgEnrollmentRepository {
    pool: PgPool,
}

impl PgEnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PgEnrollmentRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Enrollment>, AppError> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT id, name, cpf, birthday, phone, user_id, created_at, updated_at
            FROM enrollments
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Enrollment::from))
    }
}
