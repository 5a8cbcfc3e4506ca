use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One answer a user selected for one question of a quiz.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct QuizResponse {
    pub id: i64,
    pub quiz_id: i64,
    pub question_id: i64,
    pub answer_id: i64,
    pub user_id: i64,
}
