// gradebook - lib.rs
//! In-memory student roster with flat-file persistence.
//!
//! This crate is the data layer behind a single-user record form: an ordered
//! [`roster::Roster`] of students, string-boundary operations in [`forms`]
//! that a front-end calls with raw field text, and the
//! `id,name,grade,attendance` text format in [`storage`]. The presentation
//! layer lives outside; `src/main.rs` ships a minimal line-oriented one.

pub mod config;
pub mod forms;
pub mod roster;
pub mod storage;

// Re-export the main types for easier access.
pub use config::Config;
pub use forms::FormError;
pub use roster::{DuplicateId, ListOrder, Roster, Student, StudentPatch};
pub use storage::LoadError;
