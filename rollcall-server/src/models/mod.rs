//! Request and response shapes, decoupled from database rows
//!
//! Input is checked for presence and primitive type of each field when
//! it is deserialized. Failures surface as [`ValidationError`]s.

pub mod class;
pub mod student;
pub mod validation;

pub use class::{ClassCreate, ClassResponse};
pub use student::{StudentCreate, StudentResponse};
pub use validation::{ValidationError, ValidationKind};
