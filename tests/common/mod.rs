use actix_web::web;

use quiz_service::{app_state::AppState, config::Config, db::Database};

pub fn in_memory_config(seed_database: bool) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        seed_database,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
    }
}

/// Store with tables and seed data, private to the calling test.
#[allow(dead_code)]
pub async fn seeded_database() -> Database {
    Database::initialize(&in_memory_config(true))
        .await
        .expect("in-memory store should initialize")
}

#[allow(dead_code)]
pub async fn seeded_state() -> web::Data<AppState> {
    let config = in_memory_config(true);
    let db = Database::initialize(&config)
        .await
        .expect("in-memory store should initialize");
    web::Data::new(AppState::with_database(db, config))
}
