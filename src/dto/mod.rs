//! Request and response types of the HTTP API.
//!
//! Aggregate views live in [`crate::stats`] and serialize as-is.
pub mod report;
pub use report::*;

pub mod request;
pub use request::*;

pub mod response;
pub use response::*;
