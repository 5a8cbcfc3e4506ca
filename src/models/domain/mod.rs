pub mod answer;
pub mod question;
pub mod quiz;
pub mod quiz_response;
pub use answer::Answer;
pub use question::{CorrectAnswer, Question};
pub use quiz::Quiz;
pub use quiz_response::QuizResponse;
