//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - One statement per single-row operation, checked via RETURNING or rows affected
//! - Relation reads are JOINs against `class_association`
//! - Uniqueness is enforced by the database (ON CONFLICT), not pre-checked

pub mod classes;
pub mod enrollments;
pub mod students;

pub use classes::{Class, ClassRepo};
pub use enrollments::EnrollmentRepo;
pub use students::{Student, StudentRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },

    #[error("student {student_id} already registered to class {class_id}")]
    AlreadyEnrolled { class_id: i64, student_id: i64 },
}

impl DbError {
    pub(crate) fn student_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Student",
            id,
        }
    }

    pub(crate) fn class_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Class",
            id,
        }
    }
}
