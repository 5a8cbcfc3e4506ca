use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::AppResult,
    models::dto::request::{CreateAnswerRequest, UpdateAnswerRequest},
    repositories::AnswerRepository,
};

pub struct AnswerService {
    repository: Arc<dyn AnswerRepository>,
}

impl AnswerService {
    pub fn new(repository: Arc<dyn AnswerRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_answer(&self, question_id: i64, request: CreateAnswerRequest) -> AppResult<i64> {
        request.validate()?;
        self.repository.create(question_id, &request.text).await
    }

    pub async fn update_answer(&self, answer_id: i64, request: UpdateAnswerRequest) -> AppResult<()> {
        request.validate()?;
        self.repository.update(answer_id, &request.text).await
    }

    pub async fn delete_answer(&self, answer_id: i64) -> AppResult<()> {
        self.repository.delete(answer_id).await
    }
}
