//! # Drivent Hotels
//!
//! REST API listing event hotels and their rooms to attendees whose
//! enrollment and ticket grant lodging.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, the ticket eligibility rule, and repository traits
//! - **Application Layer**: The eligibility-gated hotel service and response DTOs
//! - **Infrastructure Layer**: PostgreSQL repositories and Prometheus metrics
//! - **Presentation Layer**: HTTP routes, handlers, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! drivent_hotels/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common error type
//! ```

pub mod config;

pub mod domain;

pub mod application;

pub mod infrastructure;

pub mod presentation;

pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
