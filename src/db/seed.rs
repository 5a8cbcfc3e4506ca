//! Sample data inserted into an empty store. Ids are fixed so that
//! clients and tests can rely on quiz 1 being "My first quiz".

pub(super) const STATEMENTS: &[&str] = &[
    "INSERT INTO Quiz (Id, Title) VALUES (1, 'My first quiz'), (2, 'My second quiz')",
    "INSERT INTO Question (Id, Text, QuizId) VALUES
        (1, 'The answer to the Ultimate Question of Life, the Universe, and Everything is:', 1),
        (2, 'What is the capital of France?', 1),
        (3, 'What colour is the sky on a clear day?', 2)",
    "INSERT INTO Answer (Id, Text, QuestionId) VALUES
        (1, '42', 1),
        (2, '24', 1),
        (3, 'Nobody knows', 1),
        (4, 'Lyon', 2),
        (5, 'Paris', 2),
        (6, 'Marseille', 2),
        (7, 'Blue', 3),
        (8, 'Green', 3)",
    "UPDATE Question SET CorrectAnswerId = 1 WHERE Id = 1",
    "UPDATE Question SET CorrectAnswerId = 5 WHERE Id = 2",
    "UPDATE Question SET CorrectAnswerId = 7 WHERE Id = 3",
];
