use quiz_service::{
    db::Database,
    errors::AppError,
    models::dto::request::QuizResponseEntry,
    repositories::{
        AnswerRepository, QuestionRepository, QuizRepository, QuizResponseRepository,
        SqliteAnswerRepository, SqliteQuestionRepository, SqliteQuizRepository,
        SqliteQuizResponseRepository,
    },
};

mod common;

async fn empty_database() -> Database {
    Database::initialize(&common::in_memory_config(false))
        .await
        .expect("in-memory store should initialize")
}

#[tokio::test]
async fn quiz_repository_crud_contract() {
    let db = empty_database().await;
    let repo = SqliteQuizRepository::new(&db);

    assert!(repo.find_all().await.unwrap().is_empty());

    let id = repo.create("History").await.unwrap();
    let quiz = repo.find_by_id(id).await.unwrap().expect("quiz should exist");
    assert_eq!(quiz.title, "History");

    repo.update(id, "Modern history").await.unwrap();
    repo.update(id, "Modern history").await.unwrap();
    let quiz = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(quiz.title, "Modern history");

    repo.delete(id).await.unwrap();
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(matches!(repo.delete(id).await, Err(AppError::NotFound(_))));
    assert!(matches!(repo.update(id, "Gone").await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn question_repository_rejects_missing_quiz() {
    let db = empty_database().await;
    let questions = SqliteQuestionRepository::new(&db);

    let result = questions.create(999, "Orphan?").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Question")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn question_repository_tracks_correct_answer() {
    let db = empty_database().await;
    let quizzes = SqliteQuizRepository::new(&db);
    let questions = SqliteQuestionRepository::new(&db);
    let answers = SqliteAnswerRepository::new(&db);

    let quiz_id = quizzes.create("Science").await.unwrap();
    let question_id = questions.create(quiz_id, "Boiling point of water?").await.unwrap();
    let right = answers.create(question_id, "100 C").await.unwrap();
    answers.create(question_id, "50 C").await.unwrap();

    assert!(questions.find_correct_answers(quiz_id).await.unwrap().is_empty());

    questions
        .update(question_id, "Boiling point of water at sea level?", Some(right))
        .await
        .unwrap();

    let correct = questions.find_correct_answers(quiz_id).await.unwrap();
    assert_eq!(correct.len(), 1);
    assert_eq!(correct[0].question_id, question_id);
    assert_eq!(correct[0].answer_id, right);

    let stored = questions.find_by_quiz(quiz_id).await.unwrap();
    assert_eq!(stored[0].text, "Boiling point of water at sea level?");

    let dangling = questions.update(question_id, "Still here", Some(999)).await;
    assert!(matches!(dangling, Err(AppError::NotFound(_))));

    questions.update(question_id, "Cleared", None).await.unwrap();
    assert!(questions.find_correct_answers(quiz_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn answer_repository_scopes_by_quiz() {
    let db = common::seeded_database().await;
    let answers = SqliteAnswerRepository::new(&db);

    let first: Vec<i64> = answers
        .find_by_quiz(1)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(first, vec![1, 2, 3, 4, 5, 6]);

    let second = answers.find_by_quiz(2).await.unwrap();
    assert_eq!(second.len(), 2);
    assert!(second.iter().all(|a| a.question_id == 3));

    assert!(matches!(
        answers.create(999, "No question").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        answers.update(999, "No answer").await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn deleting_question_cascades_to_answers() {
    let db = common::seeded_database().await;
    let questions = SqliteQuestionRepository::new(&db);
    let answers = SqliteAnswerRepository::new(&db);

    questions.delete(2).await.unwrap();

    let remaining: Vec<i64> = answers
        .find_by_quiz(1)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(remaining, vec![1, 2, 3]);
    assert!(matches!(questions.delete(2).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn response_batch_is_all_or_nothing() {
    let db = common::seeded_database().await;
    let responses = SqliteQuizResponseRepository::new(&db);

    let good = [
        QuizResponseEntry { question_id: 1, answer_id: 1 },
        QuizResponseEntry { question_id: 2, answer_id: 4 },
    ];
    let ids = responses.create_many(1, 7, &good).await.unwrap();
    assert_eq!(ids.len(), 2);
    assert!(ids[0] < ids[1]);

    let bad = [
        QuizResponseEntry { question_id: 1, answer_id: 2 },
        QuizResponseEntry { question_id: 2, answer_id: 999 },
    ];
    let result = responses.create_many(1, 8, &bad).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    assert_eq!(responses.find_by_quiz_and_user(1, 7).await.unwrap().len(), 2);
    assert!(responses.find_by_quiz_and_user(1, 8).await.unwrap().is_empty());
}

#[tokio::test]
async fn responses_are_scoped_to_quiz_and_user() {
    let db = common::seeded_database().await;
    let responses = SqliteQuizResponseRepository::new(&db);

    responses
        .create_many(1, 1, &[QuizResponseEntry { question_id: 1, answer_id: 1 }])
        .await
        .unwrap();
    responses
        .create_many(2, 1, &[QuizResponseEntry { question_id: 3, answer_id: 7 }])
        .await
        .unwrap();
    responses
        .create_many(1, 2, &[QuizResponseEntry { question_id: 1, answer_id: 3 }])
        .await
        .unwrap();

    let stored = responses.find_by_quiz_and_user(1, 1).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].question_id, 1);
    assert_eq!(stored[0].answer_id, 1);
    assert_eq!(stored[0].user_id, 1);
}
