//! # Domain Entities
//!
//! Core domain entities representing the business objects behind the hotel API.
//! All entities map directly to their corresponding database tables.
//!
//! - **Enrollment**: A user's registration for the event
//! - **Ticket / TicketType**: The purchase tied to an enrollment and its category
//! - **Hotel / Room**: Lodging offered to attendees
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod enrollment;
mod hotel;
mod ticket;

pub use enrollment::{Enrollment, EnrollmentRepository};
pub use hotel::{Hotel, HotelRepository, HotelWithRooms, Room};
pub use ticket::{Ineligibility, Ticket, TicketRepository, TicketStatus, TicketType};

#[cfg(test)]
pub use enrollment::MockEnrollmentRepository;
#[cfg(test)]
pub use hotel::MockHotelRepository;
#[cfg(test)]
pub use ticket::MockTicketRepository;
