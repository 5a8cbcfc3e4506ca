use actix_web::{delete, get, http::header, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{CreateQuizRequest, UpdateQuizRequest},
        response::quiz_location,
    },
};

#[get("/quizzes")]
pub async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes().await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/quizzes/{id}")]
pub async fn get_quiz(state: web::Data<AppState>, id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz_detail(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let id = state.quiz_service.create_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, quiz_location(id)))
        .finish())
}

#[put("/quizzes/{id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<UpdateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .quiz_service
        .update_quiz(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[delete("/quizzes/{id}")]
pub async fn delete_quiz(state: web::Data<AppState>, id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};

    use crate::handlers::configure_routes;
    use crate::test_utils::{fixtures, test_helpers};

    #[actix_web::test]
    async fn test_list_quizzes_returns_seeded_quizzes() {
        let state = test_helpers::seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/quizzes").to_request();
        let quizzes: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(quizzes[0]["Id"], 1);
        assert_eq!(quizzes[0]["Title"], "My first quiz");
    }

    #[actix_web::test]
    async fn test_get_missing_quiz_is_not_found() {
        let state = test_helpers::seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/quizzes/999").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_quiz_sets_location() {
        let state = test_helpers::seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::post()
            .uri("/quizzes")
            .set_json(fixtures::quiz_body("Test title"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(resp.headers().get("location").unwrap(), "/quizzes/3");
    }

    #[actix_web::test]
    async fn test_create_quiz_with_blank_title_is_bad_request() {
        let state = test_helpers::seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::post()
            .uri("/quizzes")
            .set_json(fixtures::quiz_body(""))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let state = test_helpers::seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::post()
            .uri("/quizzes")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"Title\":")
            .to_request();
        let resp = test::call_service(&app, req).await;

        test_helpers::assert_error_status(resp.status());
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_bad_request() {
        let state = test_helpers::seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/quizzes/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_not_found() {
        let state = test_helpers::seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::delete().uri("/quizzes/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/quizzes/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/quizzes/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
