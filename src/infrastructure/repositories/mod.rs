//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **EnrollmentRepository** - Enrollment lookup by user
//! - **TicketRepository** - Ticket lookup by enrollment, joined with its type
//! - **HotelRepository** - Hotel listing and detail with rooms
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{
//!     PgEnrollmentRepository, PgHotelRepository, PgTicketRepository,
//! };
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let enrollment_repo = PgEnrollmentRepository::new(pool.clone());
//!     let ticket_repo = PgTicketRepository::new(pool.clone());
//!     let hotel_repo = PgHotelRepository::new(pool);
//! }
//! ```

pub mod enrollment_repository;
pub mod hotel_repository;
pub mod ticket_repository;

pub use enrollment_repository::PgEnrollmentRepository;
pub use hotel_repository::PgHotelRepository;
pub use ticket_repository::PgTicketRepository;
