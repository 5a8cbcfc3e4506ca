use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::{domain::QuizResponse, dto::request::QuizResponseEntry},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizResponseRepository: Send + Sync {
    async fn find_by_quiz_and_user(&self, quiz_id: i64, user_id: i64) -> AppResult<Vec<QuizResponse>>;
    /// Inserts every entry or none of them. Returns the new row ids in
    /// entry order.
    async fn create_many(
        &self,
        quiz_id: i64,
        user_id: i64,
        entries: &[QuizResponseEntry],
    ) -> AppResult<Vec<i64>>;
}

pub struct SqliteQuizResponseRepository {
    pool: SqlitePool,
}

impl SqliteQuizResponseRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl QuizResponseRepository for SqliteQuizResponseRepository {
    async fn find_by_quiz_and_user(&self, quiz_id: i64, user_id: i64) -> AppResult<Vec<QuizResponse>> {
        let responses = sqlx::query_as::<_, QuizResponse>(
            "SELECT Id, QuizId, QuestionId, AnswerId, UserId
             FROM QuizResponse
             WHERE QuizId = ? AND UserId = ?
             ORDER BY Id",
        )
        .bind(quiz_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(responses)
    }

    async fn create_many(
        &self,
        quiz_id: i64,
        user_id: i64,
        entries: &[QuizResponseEntry],
    ) -> AppResult<Vec<i64>> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(entries.len());

        for entry in entries {
            // An error drops `tx`, which rolls back the rows inserted so far.
            let result = sqlx::query(
                "INSERT INTO QuizResponse (QuizId, QuestionId, AnswerId, UserId) VALUES (?, ?, ?, ?)",
            )
            .bind(quiz_id)
            .bind(entry.question_id)
            .bind(entry.answer_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::missing_reference(
                    e,
                    format!(
                        "Quiz '{}', question '{}' or answer '{}' not found",
                        quiz_id, entry.question_id, entry.answer_id
                    ),
                )
            })?;

            ids.push(result.last_insert_rowid());
        }

        tx.commit().await?;

        log::info!(
            "Recorded {} responses for user {} on quiz {}",
            ids.len(),
            user_id,
            quiz_id
        );
        Ok(ids)
    }
}
