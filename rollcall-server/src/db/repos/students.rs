//! Student repository
//!
//! Create, list, get, full update and delete. Enrollment rows of a deleted
//! student are removed by the `ON DELETE CASCADE` foreign key.

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::StudentCreate;

/// Student record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub age: i64,
    pub city: String,
}

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a student and return it with its assigned id.
    pub async fn create(&self, input: &StudentCreate) -> Result<Student, DbError> {
        let student: Student = sqlx::query_as(
            r#"
            INSERT INTO students (first_name, last_name, middle_name, age, city)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, first_name, last_name, middle_name, age, city
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(input.middle_name.as_deref())
        .bind(input.age)
        .bind(&input.city)
        .fetch_one(self.pool)
        .await?;

        Ok(student)
    }

    /// List all students in insertion order.
    pub async fn list(&self) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, middle_name, age, city
            FROM students
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(students)
    }

    /// Get a single student by id.
    pub async fn get(&self, id: i64) -> Result<Student, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, middle_name, age, city
            FROM students
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::student_not_found(id))
    }

    /// Overwrite every mutable field of a student. The id is preserved.
    pub async fn update(&self, id: i64, input: &StudentCreate) -> Result<Student, DbError> {
        sqlx::query_as(
            r#"
            UPDATE students
            SET first_name = ?, last_name = ?, middle_name = ?, age = ?, city = ?
            WHERE id = ?
            RETURNING id, first_name, last_name, middle_name, age, city
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(input.middle_name.as_deref())
        .bind(input.age)
        .bind(&input.city)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::student_not_found(id))
    }

    /// Delete a student along with its enrollments.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::student_not_found(id));
        }

        Ok(())
    }
}
