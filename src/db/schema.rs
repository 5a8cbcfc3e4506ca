//! Table definitions. Statements are idempotent and run on every startup.

pub(super) const STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS Quiz (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        Title TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS Question (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        Text TEXT NOT NULL,
        QuizId INTEGER NOT NULL REFERENCES Quiz (Id) ON DELETE CASCADE,
        CorrectAnswerId INTEGER NULL REFERENCES Answer (Id) ON DELETE SET NULL
    )",
    "CREATE TABLE IF NOT EXISTS Answer (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        Text TEXT NOT NULL,
        QuestionId INTEGER NOT NULL REFERENCES Question (Id) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS QuizResponse (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        QuizId INTEGER NOT NULL REFERENCES Quiz (Id) ON DELETE CASCADE,
        QuestionId INTEGER NOT NULL REFERENCES Question (Id) ON DELETE CASCADE,
        AnswerId INTEGER NOT NULL REFERENCES Answer (Id) ON DELETE CASCADE,
        UserId INTEGER NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS IX_Question_QuizId ON Question (QuizId)",
    "CREATE INDEX IF NOT EXISTS IX_Answer_QuestionId ON Answer (QuestionId)",
    "CREATE INDEX IF NOT EXISTS IX_QuizResponse_QuizId_UserId ON QuizResponse (QuizId, UserId)",
];
