//! HTTP Layer
//!
//! REST routes and their handlers.

pub mod handlers;
pub mod routes;
