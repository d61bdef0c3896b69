//! Application Layer
//!
//! Contains the hotel service and the response DTOs it is rendered through.
//! This layer sits between the HTTP handlers and the domain repositories.

pub mod dto;
pub mod services;
