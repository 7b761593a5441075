//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and panic handling middleware
//! - [`routes`] - Route configuration
//! - [`validation`] - Pluggable request body validators

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod validation;
