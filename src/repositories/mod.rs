pub mod answer_repository;
pub mod question_repository;
pub mod quiz_repository;
pub mod quiz_response_repository;

pub use answer_repository::{AnswerRepository, SqliteAnswerRepository};
pub use question_repository::{QuestionRepository, SqliteQuestionRepository};
pub use quiz_repository::{QuizRepository, SqliteQuizRepository};
pub use quiz_response_repository::{QuizResponseRepository, SqliteQuizResponseRepository};
