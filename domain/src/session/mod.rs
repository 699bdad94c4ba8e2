//! Completion session domain.
//!
//! - [`entities::Message`] — a single chat message
//! - [`request::CompletionRequest`] — the logical request sent to the backend

pub mod entities;
pub mod request;
