//! Application-level configuration.
//!
//! - [`CompletionParams`] — sampling parameters for each backend call

pub mod completion_params;

pub use completion_params::CompletionParams;
