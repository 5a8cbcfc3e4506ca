use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub quiz_id: i64,
    pub correct_answer_id: Option<i64>, // Unset until the question is updated with one
}

/// The designated answer of one question, as used for scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct CorrectAnswer {
    pub question_id: i64,
    pub answer_id: i64,
}
