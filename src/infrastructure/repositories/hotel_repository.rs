//! Hotel Repository Implementation
//!
//! PostgreSQL implementation of the HotelRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Hotel, HotelRepository, HotelWithRooms, Room};
use crate::shared::error::AppError;

/// Database row representation matching the hotels table schema.
#[derive(Debug, sqlx::FromRow)]
struct HotelRow {
    id: i32,
    name: String,
    image: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Database row representation matching the rooms table schema.
#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    hotel_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            capacity: row.capacity,
            hotel_id: row.hotel_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL hotel repository
#[derive(Clone)]
pub struct PgHotelRepository {
    pool: PgPool,
}

impl PgHotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelRepository for PgHotelRepository {
    async fn find_all(&self) -> Result<Vec<Hotel>, AppError> {
        let rows = sqlx::query_as::<_, HotelRow>(
            r#"
            SELECT id, name, image, created_at, updated_at
            FROM hotels
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_by_id_with_rooms(&self, id: i32) -> Result<Option<HotelWithRooms>, AppError> {
        let Some(hotel) = sqlx::query_as::<_, HotelRow>(
            r#"
            SELECT id, name, image, created_at, updated_at
            FROM hotels
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE hotel_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(HotelWithRooms {
            hotel: hotel.into(),
            rooms: rooms.into_iter().map(Room::from).collect(),
        }))
    }
}
