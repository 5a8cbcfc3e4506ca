use actix_web::{get, http::header, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::SubmitQuizResponsesRequest, response::submission_location},
};

#[get("/quizzes/{id}/result/{uid}")]
pub async fn get_result(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, user_id) = path.into_inner();
    let result = state
        .quiz_response_service
        .get_result(quiz_id, user_id)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/quizzes/{id}/answers")]
pub async fn submit_responses(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<SubmitQuizResponsesRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .quiz_response_service
        .submit_responses(request.into_inner())
        .await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, submission_location(id.into_inner())))
        .finish())
}
