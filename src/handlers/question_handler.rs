use actix_web::{delete, http::header, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{CreateQuestionRequest, UpdateQuestionRequest},
        response::question_location,
    },
};

#[post("/quizzes/{id}/questions")]
pub async fn create_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz_id = id.into_inner();
    let question_id = state
        .question_service
        .create_question(quiz_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, question_location(quiz_id, question_id)))
        .finish())
}

#[put("/quizzes/{id}/questions/{qid}")]
pub async fn update_question(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
    request: web::Json<UpdateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let (_quiz_id, question_id) = path.into_inner();
    state
        .question_service
        .update_question(question_id, request.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[delete("/quizzes/{id}/questions/{qid}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (_quiz_id, question_id) = path.into_inner();
    state.question_service.delete_question(question_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
