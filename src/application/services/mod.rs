//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **HotelService**: Eligibility-gated hotel listing and detail

pub mod hotel_service;

pub use hotel_service::{HotelError, HotelService, HotelServiceImpl};
