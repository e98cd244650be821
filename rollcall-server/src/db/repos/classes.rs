//! Class repository
//!
//! Classes have no update operation; they are created, listed, fetched and
//! deleted. Deleting a class cascades to its enrollment rows.

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::ClassCreate;

/// Class record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub subject: String,
}

/// Class repository
pub struct ClassRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ClassRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a class and return it with its assigned id.
    pub async fn create(&self, input: &ClassCreate) -> Result<Class, DbError> {
        let class: Class = sqlx::query_as(
            r#"
            INSERT INTO classes (name, subject)
            VALUES (?, ?)
            RETURNING id, name, subject
            "#,
        )
        .bind(&input.name)
        .bind(&input.subject)
        .fetch_one(self.pool)
        .await?;

        Ok(class)
    }

    /// List all classes in insertion order.
    pub async fn list(&self) -> Result<Vec<Class>, DbError> {
        let classes = sqlx::query_as("SELECT id, name, subject FROM classes ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(classes)
    }

    pub async fn get(&self, id: i64) -> Result<Class, DbError> {
        sqlx::query_as("SELECT id, name, subject FROM classes WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::class_not_found(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM classes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::class_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::test_pool;

    pub(crate) fn algebra() -> ClassCreate {
        ClassCreate {
            name: "Algebra I".into(),
            subject: "Math".into(),
        }
    }

    #[tokio::test]
    async fn create_get_list() {
        let pool = test_pool().await;
        let repo = ClassRepo::new(&pool);

        let algebra = repo.create(&algebra()).await.unwrap();
        let poetry = repo
            .create(&ClassCreate {
                name: "Romantic Poetry".into(),
                subject: "Literature".into(),
            })
            .await
            .unwrap();

        assert_eq!(repo.get(algebra.id).await.unwrap(), algebra);
        assert_eq!(repo.list().await.unwrap(), vec![algebra, poetry]);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let err = ClassRepo::new(&pool).get(9).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound {
                resource: "Class",
                id: 9
            }
        ));
    }

    #[tokio::test]
    async fn delete_twice() {
        let pool = test_pool().await;
        let repo = ClassRepo::new(&pool);
        let class = repo.create(&algebra()).await.unwrap();

        repo.delete(class.id).await.unwrap();
        assert!(matches!(
            repo.delete(class.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }
}
