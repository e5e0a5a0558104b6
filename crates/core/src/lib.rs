//! Domain logic for the video-sharing catalog.
//!
//! Everything in this crate is pure: no database access, no HTTP. The
//! pagination view model and the field-validation rules live here so they
//! can be tested without a running server or database.

pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
