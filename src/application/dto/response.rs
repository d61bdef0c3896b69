//! Response DTOs
//!
//! Data structures for API response bodies. Field names are camelCase and
//! timestamps are ISO-8601 with millisecond precision, as existing clients
//! of the hotel API expect.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::{Hotel, HotelWithRooms, Room};

fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Hotel response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at: iso_timestamp(&hotel.created_at),
            updated_at: iso_timestamp(&hotel.updated_at),
        }
    }
}

/// Room response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id,
            created_at: iso_timestamp(&room.created_at),
            updated_at: iso_timestamp(&room.updated_at),
        }
    }
}

/// Hotel detail response with embedded rooms
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelDetailResponse {
    #[serde(flatten)]
    pub hotel: HotelResponse,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelDetailResponse {
    fn from(detail: HotelWithRooms) -> Self {
        Self {
            hotel: HotelResponse::from(detail.hotel),
            rooms: detail.rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}
