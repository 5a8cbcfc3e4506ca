use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::domain::{Answer, Question, Quiz, QuizResponse};

/// A quiz with its questions and their answers nested inside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct QuizDetailDto {
    pub id: i64,
    pub title: String,
    pub questions: Vec<QuestionItemDto>,
    pub links: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct QuestionItemDto {
    pub id: i64,
    pub text: String,
    pub answers: Vec<AnswerItemDto>,
    pub correct_answer_id: Option<i64>,
}

// Correctness is only exposed on the question, never per answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AnswerItemDto {
    pub id: i64,
    pub text: String,
}

impl From<Answer> for AnswerItemDto {
    fn from(answer: Answer) -> Self {
        AnswerItemDto {
            id: answer.id,
            text: answer.text,
        }
    }
}

impl QuizDetailDto {
    /// Groups `answers` under their questions. Answers whose question is not
    /// in `questions` are dropped.
    pub fn assemble(quiz: Quiz, questions: Vec<Question>, answers: Vec<Answer>) -> Self {
        let mut answers_by_question: HashMap<i64, Vec<AnswerItemDto>> = HashMap::new();
        for answer in answers {
            answers_by_question
                .entry(answer.question_id)
                .or_default()
                .push(answer.into());
        }

        let questions = questions
            .into_iter()
            .map(|question| QuestionItemDto {
                id: question.id,
                answers: answers_by_question.remove(&question.id).unwrap_or_default(),
                text: question.text,
                correct_answer_id: question.correct_answer_id,
            })
            .collect();

        QuizDetailDto {
            links: quiz_links(quiz.id),
            id: quiz.id,
            title: quiz.title,
            questions,
        }
    }
}

pub fn quiz_location(quiz_id: i64) -> String {
    format!("/quizzes/{}", quiz_id)
}

pub fn question_location(quiz_id: i64, question_id: i64) -> String {
    format!("/quizzes/{}/questions/{}", quiz_id, question_id)
}

pub fn answer_location(quiz_id: i64, question_id: i64, answer_id: i64) -> String {
    format!("/quizzes/{}/questions/{}/answers/{}", quiz_id, question_id, answer_id)
}

pub fn submission_location(quiz_id: i64) -> String {
    format!("/quizzes/{}/answers", quiz_id)
}

fn quiz_links(quiz_id: i64) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("self".to_string(), quiz_location(quiz_id)),
        ("questions".to_string(), format!("{}/questions", quiz_location(quiz_id))),
    ])
}

/// A user's recorded responses for one quiz and how many were correct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct QuizResultDto {
    pub user_id: i64,
    pub quiz_id: i64,
    pub score: i64,
    pub quiz_responses: Vec<QuizResponse>,
}
