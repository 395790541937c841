//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service lookups and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Response shapes per resource
//! - [`extract`] - Path parameter extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`response`] - Indented JSON and the handler result type
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
