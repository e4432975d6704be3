//! Persistence and session services built on top of the data models.
//!
//! The [`store`] module owns directory-level file operations; the
//! [`session`] module owns the in-memory name-to-inventory registry that the
//! presentation layer works against.

pub mod session;
pub mod store;

pub use session::Session;
