//! Domain layer containing blog entities and data access contracts.
//!
//! The domain layer has no dependencies on the HTTP or persistence layers.
//! Lookups are expressed as repository traits implemented in
//! [`crate::infrastructure::persistence`].
//!
//! # Architecture
//!
//! - [`entities`] - Posts, tags, users and comments
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - Failures a lookup can produce
//!
//! # Lookup Contract
//!
//! A single-entity lookup either yields a fully populated entity or fails.
//! Repositories report a miss as `Ok(None)`; the services in
//! [`crate::application::services`] turn that into [`error::ModelError::NotFound`].

pub mod entities;
pub mod error;
pub mod repositories;
