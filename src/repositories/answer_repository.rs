use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Answer,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// All answers of all questions belonging to the quiz.
    async fn find_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<Answer>>;
    async fn create(&self, question_id: i64, text: &str) -> AppResult<i64>;
    async fn update(&self, id: i64, text: &str) -> AppResult<()>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqliteAnswerRepository {
    pool: SqlitePool,
}

impl SqliteAnswerRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl AnswerRepository for SqliteAnswerRepository {
    async fn find_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<Answer>> {
        let answers = sqlx::query_as::<_, Answer>(
            "SELECT a.Id, a.Text, a.QuestionId
             FROM Answer a
             INNER JOIN Question q ON a.QuestionId = q.Id
             WHERE q.QuizId = ?
             ORDER BY a.Id",
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(answers)
    }

    async fn create(&self, question_id: i64, text: &str) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO Answer (Text, QuestionId) VALUES (?, ?)")
            .bind(text)
            .bind(question_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::missing_reference(
                    e,
                    format!("Question with id '{}' not found", question_id),
                )
            })?;

        let id = result.last_insert_rowid();
        log::info!("Created answer {} for question {}", id, question_id);
        Ok(id)
    }

    async fn update(&self, id: i64, text: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE Answer SET Text = ? WHERE Id = ?")
            .bind(text)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Answer with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM Answer WHERE Id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Answer with id '{}' not found", id)));
        }

        log::info!("Deleted answer {}", id);
        Ok(())
    }
}
