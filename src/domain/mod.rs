//! # Domain Layer
//!
//! The domain layer contains the core business rules of the hotel API.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities encapsulate domain behavior (e.g. [`Ticket::hotel_access`])

pub mod entities;

pub use entities::*;
