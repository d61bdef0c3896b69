//! Hotel and Room entities and repository trait.
//!
//! Maps to the `hotels` and `rooms` tables in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A hotel available to event attendees.
///
/// Maps to the `hotels` table:
/// - id: SERIAL PRIMARY KEY
/// - name: VARCHAR(255) NOT NULL
/// - image: TEXT NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    /// URL of the hotel picture
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A room in a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: i32,
    pub name: String,
    /// Number of guests the room holds
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A hotel together with all of its rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    /// Rooms in insertion order; may be empty.
    pub rooms: Vec<Room>,
}

/// Repository trait for Hotel data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// List every hotel, ordered by ID.
    async fn find_all(&self) -> Result<Vec<Hotel>, AppError>;

    /// Find a hotel by ID, fetching its rooms alongside.
    async fn find_by_id_with_rooms(&self, id: i32) -> Result<Option<HotelWithRooms>, AppError>;
}
