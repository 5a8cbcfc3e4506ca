use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Quiz>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>>;
    async fn create(&self, title: &str) -> AppResult<i64>;
    async fn update(&self, id: i64, title: &str) -> AppResult<()>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqliteQuizRepository {
    pool: SqlitePool,
}

impl SqliteQuizRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl QuizRepository for SqliteQuizRepository {
    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = sqlx::query_as::<_, Quiz>("SELECT Id, Title FROM Quiz ORDER BY Id")
            .fetch_all(&self.pool)
            .await?;
        Ok(quizzes)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let quiz = sqlx::query_as::<_, Quiz>("SELECT Id, Title FROM Quiz WHERE Id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(quiz)
    }

    async fn create(&self, title: &str) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO Quiz (Title) VALUES (?)")
            .bind(title)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        log::info!("Created quiz {}", id);
        Ok(id)
    }

    async fn update(&self, id: i64, title: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE Quiz SET Title = ? WHERE Id = ?")
            .bind(title)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Quiz with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM Quiz WHERE Id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Quiz with id '{}' not found", id)));
        }

        log::info!("Deleted quiz {}", id);
        Ok(())
    }
}
