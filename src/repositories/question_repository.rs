use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{CorrectAnswer, Question},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<Question>>;
    /// (question, designated answer) pairs for every question of the quiz
    /// that has one.
    async fn find_correct_answers(&self, quiz_id: i64) -> AppResult<Vec<CorrectAnswer>>;
    async fn create(&self, quiz_id: i64, text: &str) -> AppResult<i64>;
    async fn update(&self, id: i64, text: &str, correct_answer_id: Option<i64>) -> AppResult<()>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqliteQuestionRepository {
    pool: SqlitePool,
}

impl SqliteQuestionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl QuestionRepository for SqliteQuestionRepository {
    async fn find_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT Id, Text, QuizId, CorrectAnswerId FROM Question WHERE QuizId = ? ORDER BY Id",
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn find_correct_answers(&self, quiz_id: i64) -> AppResult<Vec<CorrectAnswer>> {
        let correct = sqlx::query_as::<_, CorrectAnswer>(
            "SELECT q.Id AS QuestionId, a.Id AS AnswerId
             FROM Question q
             INNER JOIN Answer a ON a.Id = q.CorrectAnswerId
             WHERE q.QuizId = ?",
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(correct)
    }

    async fn create(&self, quiz_id: i64, text: &str) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO Question (Text, QuizId) VALUES (?, ?)")
            .bind(text)
            .bind(quiz_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::missing_reference(e, format!("Quiz with id '{}' not found", quiz_id))
            })?;

        let id = result.last_insert_rowid();
        log::info!("Created question {} in quiz {}", id, quiz_id);
        Ok(id)
    }

    async fn update(&self, id: i64, text: &str, correct_answer_id: Option<i64>) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE Question SET Text = ?, CorrectAnswerId = ? WHERE Id = ?")
                .bind(text)
                .bind(correct_answer_id)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::missing_reference(
                        e,
                        format!("Answer with id '{}' not found", correct_answer_id.unwrap_or_default()),
                    )
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Question with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM Question WHERE Id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Question with id '{}' not found", id)));
        }

        log::info!("Deleted question {}", id);
        Ok(())
    }
}
