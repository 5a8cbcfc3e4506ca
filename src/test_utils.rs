#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    /// Body for quiz create/update requests
    pub fn quiz_body(title: &str) -> Value {
        json!({ "Title": title })
    }

    /// Body for question create and answer create/update requests
    pub fn text_body(text: &str) -> Value {
        json!({ "Text": text })
    }

    pub fn question_update_body(text: &str, correct_answer_id: Option<i64>) -> Value {
        json!({ "Text": text, "CorrectAnswerId": correct_answer_id })
    }

    /// Submission body with (question id, answer id) pairs
    pub fn submission_body(quiz_id: i64, user_id: i64, responses: &[(i64, i64)]) -> Value {
        let responses: Vec<Value> = responses
            .iter()
            .map(|(question_id, answer_id)| json!({ "QuestionId": question_id, "AnswerId": answer_id }))
            .collect();

        json!({
            "QuizId": quiz_id,
            "UserId": user_id,
            "QuizResponses": responses
        })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::{http::StatusCode, web};

    use crate::{app_state::AppState, config::Config};

    /// Fresh in-memory store holding only the seed data
    pub async fn seeded_state() -> web::Data<AppState> {
        let state = AppState::new(Config::test_config())
            .await
            .expect("in-memory store should initialize");
        web::Data::new(state)
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_submission_body() {
        let body = submission_body(1, 2, &[(1, 1), (2, 5)]);
        assert_eq!(body["UserId"], 2);
        assert_eq!(body["QuizResponses"][1]["AnswerId"], 5);
    }

    #[test]
    fn test_fixtures_question_update_body_with_null() {
        let body = question_update_body("Text", None);
        assert!(body["CorrectAnswerId"].is_null());
    }
}
