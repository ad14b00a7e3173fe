//! Domain model for the student profile aggregate.
//!
//! # Responsibility
//! - Define the canonical shapes persisted under the three store keys.
//! - Own the closed field-name namespace used by form-driven edits.
//!
//! # Invariants
//! - List records are identified by position, not by a stable ID.
//! - Field updates only accept field names enumerated per record type.

pub mod record;
pub mod student;
