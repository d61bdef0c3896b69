//! Ticket and TicketType entities and repository trait.
//!
//! Maps to the `tickets` and `ticket_types` tables in the database schema.
//! The hotel access rule lives here since it depends only on ticket state.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Payment status of a ticket.
///
/// Stored as the `ticket_status` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl TicketStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reserved => "RESERVED",
            Self::Paid => "PAID",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESERVED" => Ok(Self::Reserved),
            "PAID" => Ok(Self::Paid),
            other => Err(format!("unknown ticket status: {}", other)),
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of ticket describing its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    /// Price in cents
    pub price: i32,
    /// Remote tickets never include lodging.
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A ticket purchased for an enrollment, with its type already joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i32,
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reason a ticket does not grant access to hotel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Ineligibility {
    #[error("ticket is for remote attendance")]
    RemoteTicket,

    #[error("ticket does not include a hotel")]
    HotelNotIncluded,

    #[error("ticket is not paid")]
    NotPaid,
}

impl Ineligibility {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RemoteTicket => "remote_ticket",
            Self::HotelNotIncluded => "hotel_not_included",
            Self::NotPaid => "not_paid",
        }
    }
}

impl Ticket {
    /// Check whether this ticket grants access to hotel data.
    ///
    /// Conditions are evaluated in a fixed order (remote, hotel inclusion,
    /// payment) and the first failing one is reported.
    pub fn hotel_access(&self) -> Result<(), Ineligibility> {
        if self.ticket_type.is_remote {
            return Err(Ineligibility::RemoteTicket);
        }
        if !self.ticket_type.includes_hotel {
            return Err(Ineligibility::HotelNotIncluded);
        }
        if self.status != TicketStatus::Paid {
            return Err(Ineligibility::NotPaid);
        }
        Ok(())
    }
}

/// Repository trait for Ticket data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Find the ticket for an enrollment, including its ticket type.
    async fn find_by_enrollment_id(&self, enrollment_id: i32) -> Result<Option<Ticket>, AppError>;
}
