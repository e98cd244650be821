//! Enrollment repository - the `class_association` junction table
//!
//! Every read across the student/class relation is an explicit JOIN. List
//! reads check existence and join inside one read transaction, which rolls
//! back if dropped on an error path.

use sqlx::{Executor, Sqlite, SqlitePool};

use super::{Class, DbError, Student};

/// Enrollment repository
pub struct EnrollmentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EnrollmentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a student to a class.
    ///
    /// The insert runs on its own so SQLite takes the write lock up front
    /// and waits out the busy timeout under concurrent writers. Missing ids
    /// are rejected by the foreign keys; only then is the class checked
    /// before the student, so a request naming two missing ids reports the
    /// class. A repeated pair is detected by the composite primary key
    /// (`ON CONFLICT DO NOTHING` affects zero rows).
    pub async fn enroll(&self, class_id: i64, student_id: i64) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO class_association (class_id, student_id)
            VALUES (?, ?)
            ON CONFLICT (class_id, student_id) DO NOTHING
            "#,
        )
        .bind(class_id)
        .bind(student_id)
        .execute(self.pool)
        .await;

        let result = match result {
            Ok(result) => result,
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                ensure_class(self.pool, class_id).await?;
                ensure_student(self.pool, student_id).await?;
                return Err(sqlx::Error::Database(e).into());
            }
            Err(e) => return Err(e.into()),
        };

        if result.rows_affected() == 0 {
            return Err(DbError::AlreadyEnrolled {
                class_id,
                student_id,
            });
        }

        Ok(())
    }

    /// Students enrolled in a class. Empty if the class exists but has none.
    pub async fn students_in_class(&self, class_id: i64) -> Result<Vec<Student>, DbError> {
        let mut tx = self.pool.begin().await?;
        ensure_class(&mut *tx, class_id).await?;

        let students = sqlx::query_as(
            r#"
            SELECT s.id, s.first_name, s.last_name, s.middle_name, s.age, s.city
            FROM students s
            JOIN class_association ca ON ca.student_id = s.id
            WHERE ca.class_id = ?
            ORDER BY s.id
            "#,
        )
        .bind(class_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(students)
    }

    /// Classes a student is enrolled in. Empty if the student exists but has none.
    pub async fn classes_for_student(&self, student_id: i64) -> Result<Vec<Class>, DbError> {
        let mut tx = self.pool.begin().await?;
        ensure_student(&mut *tx, student_id).await?;

        let classes = sqlx::query_as(
            r#"
            SELECT c.id, c.name, c.subject
            FROM classes c
            JOIN class_association ca ON ca.class_id = c.id
            WHERE ca.student_id = ?
            ORDER BY c.id
            "#,
        )
        .bind(student_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(classes)
    }
}

async fn ensure_class<'e, E>(executor: E, id: i64) -> Result<(), DbError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM classes WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    found.map(|_| ()).ok_or_else(|| DbError::class_not_found(id))
}

async fn ensure_student<'e, E>(executor: E, id: i64) -> Result<(), DbError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM students WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    found.map(|_| ()).ok_or_else(|| DbError::student_not_found(id))
}
