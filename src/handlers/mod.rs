pub mod answer_handler;
pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;
pub mod quiz_response_handler;

use actix_web::{error, web, HttpRequest};

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_live, health_check_ready};

/// Registers every route together with the body and path extractor settings.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(health_check)
        .service(health_check_live)
        .service(health_check_ready)
        .service(quiz_handler::list_quizzes)
        .service(quiz_handler::get_quiz)
        .service(quiz_handler::create_quiz)
        .service(quiz_handler::update_quiz)
        .service(quiz_handler::delete_quiz)
        .service(question_handler::create_question)
        .service(question_handler::update_question)
        .service(question_handler::delete_question)
        .service(answer_handler::create_answer)
        .service(answer_handler::update_answer)
        .service(answer_handler::delete_answer)
        .service(quiz_response_handler::get_result)
        .service(quiz_response_handler::submit_responses);
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}
