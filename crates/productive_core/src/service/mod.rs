//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, mapping, and repository calls into use-case
//!   level APIs.
//! - Keep callers decoupled from storage details.

pub mod todo_service;
