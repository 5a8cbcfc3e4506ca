use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Quiz,
        dto::{
            request::{CreateQuizRequest, UpdateQuizRequest},
            response::QuizDetailDto,
        },
    },
    repositories::{AnswerRepository, QuestionRepository, QuizRepository},
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
    answers: Arc<dyn AnswerRepository>,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuestionRepository>,
        answers: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            quizzes,
            questions,
            answers,
        }
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.quizzes.find_all().await
    }

    pub async fn get_quiz_detail(&self, id: i64) -> AppResult<QuizDetailDto> {
        let quiz = self
            .quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        let questions = self.questions.find_by_quiz(id).await?;
        let answers = self.answers.find_by_quiz(id).await?;

        Ok(QuizDetailDto::assemble(quiz, questions, answers))
    }

    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<i64> {
        request.validate()?;
        self.quizzes.create(&request.title).await
    }

    pub async fn update_quiz(&self, id: i64, request: UpdateQuizRequest) -> AppResult<()> {
        request.validate()?;
        self.quizzes.update(id, &request.title).await
    }

    pub async fn delete_quiz(&self, id: i64) -> AppResult<()> {
        self.quizzes.delete(id).await
    }
}
