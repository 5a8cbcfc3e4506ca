use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        SqliteAnswerRepository, SqliteQuestionRepository, SqliteQuizRepository,
        SqliteQuizResponseRepository,
    },
    services::{AnswerService, QuestionService, QuizResponseService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub question_service: Arc<QuestionService>,
    pub answer_service: Arc<AnswerService>,
    pub quiz_response_service: Arc<QuizResponseService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::initialize(&config).await?;
        Ok(Self::with_database(db, config))
    }

    /// Wires repositories and services on top of an already prepared store.
    pub fn with_database(db: Database, config: Config) -> Self {
        let quiz_repository = Arc::new(SqliteQuizRepository::new(&db));
        let question_repository = Arc::new(SqliteQuestionRepository::new(&db));
        let answer_repository = Arc::new(SqliteAnswerRepository::new(&db));
        let quiz_response_repository = Arc::new(SqliteQuizResponseRepository::new(&db));

        let quiz_service = Arc::new(QuizService::new(
            quiz_repository,
            question_repository.clone(),
            answer_repository.clone(),
        ));
        let question_service = Arc::new(QuestionService::new(question_repository.clone()));
        let answer_service = Arc::new(AnswerService::new(answer_repository));
        let quiz_response_service = Arc::new(QuizResponseService::new(
            quiz_response_repository,
            question_repository,
        ));

        Self {
            quiz_service,
            question_service,
            answer_service,
            quiz_response_service,
            db,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[actix_web::test]
    async fn test_app_state_from_test_config() {
        let state = AppState::new(Config::test_config()).await.unwrap();
        let quizzes = state.quiz_service.list_quizzes().await.unwrap();
        assert_eq!(quizzes[0].title, "My first quiz");
    }
}
