use actix_web::{delete, http::header, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{CreateAnswerRequest, UpdateAnswerRequest},
        response::answer_location,
    },
};

#[post("/quizzes/{id}/questions/{qid}/answers")]
pub async fn create_answer(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
    request: web::Json<CreateAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, question_id) = path.into_inner();
    let answer_id = state
        .answer_service
        .create_answer(question_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, answer_location(quiz_id, question_id, answer_id)))
        .finish())
}

#[put("/quizzes/{id}/questions/{qid}/answers/{aid}")]
pub async fn update_answer(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64, i64)>,
    request: web::Json<UpdateAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let (_quiz_id, _question_id, answer_id) = path.into_inner();
    state
        .answer_service
        .update_answer(answer_id, request.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[delete("/quizzes/{id}/questions/{qid}/answers/{aid}")]
pub async fn delete_answer(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (_quiz_id, _question_id, answer_id) = path.into_inner();
    state.answer_service.delete_answer(answer_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
