//! Request-facing page layer.
//!
//! # Responsibility
//! - Map the five application routes onto service calls.
//! - Produce render payloads (template + named values) or inline error
//!   fragments, leaving HTML templating to the caller.
//!
//! # Invariants
//! - Lookup keys come from POSTed form fields only; other methods use the
//!   `not a POST request` sentinel key.
//! - A missing lookup key is rendered as an error fragment, never as a fault.

mod handlers;
pub mod request;
pub mod route;
pub mod view;

pub use handlers::{PageError, Pages};
