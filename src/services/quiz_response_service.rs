use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::{CorrectAnswer, QuizResponse},
        dto::{request::SubmitQuizResponsesRequest, response::QuizResultDto},
    },
    repositories::{QuestionRepository, QuizResponseRepository},
};

pub struct QuizResponseService {
    responses: Arc<dyn QuizResponseRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl QuizResponseService {
    pub fn new(
        responses: Arc<dyn QuizResponseRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            responses,
            questions,
        }
    }

    /// Records every submitted response atomically. Quiz and user ids come
    /// from the body.
    pub async fn submit_responses(&self, request: SubmitQuizResponsesRequest) -> AppResult<Vec<i64>> {
        request.validate()?;
        self.responses
            .create_many(request.quiz_id, request.user_id, &request.quiz_responses)
            .await
    }

    /// Unknown quizzes or users yield an empty result with score 0.
    pub async fn get_result(&self, quiz_id: i64, user_id: i64) -> AppResult<QuizResultDto> {
        let responses = self.responses.find_by_quiz_and_user(quiz_id, user_id).await?;
        let correct = self.questions.find_correct_answers(quiz_id).await?;

        Ok(QuizResultDto {
            user_id,
            quiz_id,
            score: score(&responses, &correct),
            quiz_responses: responses,
        })
    }
}

/// Number of responses whose answer is the designated answer of their question.
pub fn score(responses: &[QuizResponse], correct: &[CorrectAnswer]) -> i64 {
    let correct_by_question: HashMap<i64, i64> = correct
        .iter()
        .map(|c| (c.question_id, c.answer_id))
        .collect();

    responses
        .iter()
        .filter(|r| correct_by_question.get(&r.question_id) == Some(&r.answer_id))
        .count() as i64
}
