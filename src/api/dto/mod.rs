//! Data Transfer Objects for API responses.
//!
//! Each DTO fixes the JSON shape of one resource so the wire format does not
//! depend on the domain structs.

pub mod comment;
pub mod docs;
pub mod ping;
pub mod post;
pub mod tag;
pub mod user;
