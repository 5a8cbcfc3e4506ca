use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateQuizRequest {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000), custom(function = "not_blank"))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 1, max = 1000), custom(function = "not_blank"))]
    pub text: String,

    #[serde(default)]
    pub correct_answer_id: Option<i64>, // null clears the designated answer
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAnswerRequest {
    #[validate(length(min = 1, max = 1000), custom(function = "not_blank"))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAnswerRequest {
    #[validate(length(min = 1, max = 1000), custom(function = "not_blank"))]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuizResponseEntry {
    pub question_id: i64,
    pub answer_id: i64,
}

/// Body of a response submission. Extra fields such as a client-side
/// `Score` are ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitQuizResponsesRequest {
    pub quiz_id: i64,
    pub user_id: i64,

    #[validate(length(min = 1, message = "At least one response is required"))]
    pub quiz_responses: Vec<QuizResponseEntry>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
