//! Hotel Service
//!
//! Gates hotel listings behind enrollment and ticket eligibility.
//!
//! Every operation first runs [`HotelService::check_eligibility`]; hotel
//! lookups only happen once the user is known to hold a paid, in-person
//! ticket that includes lodging.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    EnrollmentRepository, Hotel, HotelRepository, HotelWithRooms, Ineligibility,
    TicketRepository,
};
use crate::infrastructure::metrics;

/// Hotel service trait
#[async_trait]
pub trait HotelService: Send + Sync {
    /// Verify the user may view hotel data.
    async fn check_eligibility(&self, user_id: i32) -> Result<(), HotelError>;

    /// List all hotels for an eligible user.
    async fn list_hotels(&self, user_id: i32) -> Result<Vec<Hotel>, HotelError>;

    /// Get a single hotel with its rooms for an eligible user.
    async fn get_hotel(&self, user_id: i32, hotel_id: i32) -> Result<HotelWithRooms, HotelError>;
}

/// Hotel service errors
#[derive(Debug, thiserror::Error)]
pub enum HotelError {
    #[error("Not found")]
    NotFound,

    #[error("Payment required: {0}")]
    PaymentRequired(Ineligibility),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// HotelService implementation
pub struct HotelServiceImpl<E, T, H>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    H: HotelRepository,
{
    enrollment_repo: Arc<E>,
    ticket_repo: Arc<T>,
    hotel_repo: Arc<H>,
}

impl<E, T, H> HotelServiceImpl<E, T, H>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    H: HotelRepository,
{
    pub fn new(enrollment_repo: Arc<E>, ticket_repo: Arc<T>, hotel_repo: Arc<H>) -> Self {
        Self {
            enrollment_repo,
            ticket_repo,
            hotel_repo,
        }
    }
}

#[async_trait]
impl<E, T, H> HotelService for HotelServiceImpl<E, T, H>
where
    E: EnrollmentRepository + 'static,
    T: TicketRepository + 'static,
    H: HotelRepository + 'static,
{
    async fn check_eligibility(&self, user_id: i32) -> Result<(), HotelError> {
        let enrollment = self
            .enrollment_repo
            .find_by_user_id(user_id)
            .await
            .map_err(|e| HotelError::Internal(e.to_string()))?
            .ok_or_else(|| {
                tracing::debug!(user_id, "No enrollment for user");
                metrics::record_access_check("no_enrollment");
                HotelError::NotFound
            })?;

        let ticket = self
            .ticket_repo
            .find_by_enrollment_id(enrollment.id)
            .await
            .map_err(|e| HotelError::Internal(e.to_string()))?
            .ok_or_else(|| {
                tracing::debug!(user_id, enrollment_id = enrollment.id, "No ticket for enrollment");
                metrics::record_access_check("no_ticket");
                HotelError::NotFound
            })?;

        if let Err(reason) = ticket.hotel_access() {
            tracing::debug!(user_id, ticket_id = ticket.id, reason = reason.as_str(), "Hotel access denied");
            metrics::record_access_check(reason.as_str());
            return Err(HotelError::PaymentRequired(reason));
        }

        metrics::record_access_check("granted");
        Ok(())
    }

    async fn list_hotels(&self, user_id: i32) -> Result<Vec<Hotel>, HotelError> {
        self.check_eligibility(user_id).await?;

        let hotels = self
            .hotel_repo
            .find_all()
            .await
            .map_err(|e| HotelError::Internal(e.to_string()))?;

        if hotels.is_empty() {
            return Err(HotelError::NotFound);
        }

        Ok(hotels)
    }

    async fn get_hotel(&self, user_id: i32, hotel_id: i32) -> Result<HotelWithRooms, HotelError> {
        self.check_eligibility(user_id).await?;

        self.hotel_repo
            .find_by_id_with_rooms(hotel_id)
            .await
            .map_err(|e| HotelError::Internal(e.to_string()))?
            .ok_or(HotelError::NotFound)
    }
}
