//! Shared automation runtime services.

pub mod context;
pub mod error;
