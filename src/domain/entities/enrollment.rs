//! Enrollment entity and repository trait.
//!
//! Maps to the `enrollments` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A user's registration for the event.
///
/// Maps to the `enrollments` table:
/// - id: SERIAL PRIMARY KEY
/// - name: VARCHAR(255) NOT NULL
/// - cpf: VARCHAR(11) NOT NULL
/// - birthday: DATE NOT NULL
/// - phone: VARCHAR(20) NOT NULL
/// - user_id: INTEGER NOT NULL UNIQUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i32,
    pub name: String,
    pub cpf: String,
    pub birthday: NaiveDate,
    pub phone: String,
    /// Owning user; at most one enrollment per user.
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Repository trait for Enrollment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Find the enrollment belonging to a user.
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Enrollment>, AppError>;
}
