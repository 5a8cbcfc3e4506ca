use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::AppResult,
    models::dto::request::{CreateQuestionRequest, UpdateQuestionRequest},
    repositories::QuestionRepository,
};

pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    /// Fails with `NotFound` when the quiz does not exist.
    pub async fn create_question(&self, quiz_id: i64, request: CreateQuestionRequest) -> AppResult<i64> {
        request.validate()?;
        self.repository.create(quiz_id, &request.text).await
    }

    // The quiz id in the path is not cross-checked; questions are addressed by their own id.
    pub async fn update_question(&self, question_id: i64, request: UpdateQuestionRequest) -> AppResult<()> {
        request.validate()?;
        self.repository
            .update(question_id, &request.text, request.correct_answer_id)
            .await
    }

    pub async fn delete_question(&self, question_id: i64) -> AppResult<()> {
        self.repository.delete(question_id).await
    }
}
