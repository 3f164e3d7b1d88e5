//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! lives in a separate struct so that an identifier can only come from storage:
//!
//! - [`Student`] - A stored student record (always has an `id`)
//! - [`NewStudent`] - A validated, trimmed student that has not been saved yet

pub mod student;

pub use student::{NewStudent, Student};
