//! Tool catalog and CRUD dispatch.
//!
//! # Responsibility
//! - Declare the fixed set of callable note operations with their input
//!   schemas.
//! - Execute named operations against the store and render text responses.
//!
//! # Invariants
//! - The catalog is static; callers receive it verbatim.
//! - No failure escapes [`dispatch::ToolDispatcher::call`] as anything but
//!   a text response.

pub mod catalog;
pub mod dispatch;
mod format;
