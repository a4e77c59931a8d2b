//! Domain model for todo items.
//!
//! # Responsibility
//! - Define the canonical entity shape used by core business logic.
//! - Define the request payloads accepted by the use-case layer.
//!
//! # Invariants
//! - Every entity is identified by a stable `TodoId` assigned at creation.
//! - Entities are treated as values: mutations produce new snapshots.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod todo;
