//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into lookup, listing and debt-sync use
//!   cases.
//! - Keep page and CLI layers decoupled from storage details.

pub mod debt_service;
pub mod lookup_service;
pub mod score_service;
