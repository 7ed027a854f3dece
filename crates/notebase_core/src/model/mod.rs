//! Domain model for the notes store.
//!
//! # Responsibility
//! - Define the canonical persisted record shape used by core logic.
//!
//! # Invariants
//! - Every persisted note is identified by a stable `NoteId`.
//! - `created_at` is assigned by storage and never rewritten.

pub mod note;
