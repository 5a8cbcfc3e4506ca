pub mod answer_service;
pub mod question_service;
pub mod quiz_response_service;
pub mod quiz_service;

pub use answer_service::AnswerService;
pub use question_service::QuestionService;
pub use quiz_response_service::QuizResponseService;
pub use quiz_service::QuizService;
