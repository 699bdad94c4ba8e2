//! Core domain concepts shared across all subdomains.
//!
//! - [`question::NormalizedQuestion`] — a question in raw and canonical form
//! - [`credential::BackendCredential`] — the secret that unlocks the backend
//! - [`model::Model`] — completion models offered by the backend
//! - [`error::DomainError`] — domain-level errors

pub mod credential;
pub mod error;
pub mod model;
pub mod question;
