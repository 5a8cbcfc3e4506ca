mod schema;
mod seed;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::{str::FromStr, time::Duration};

use crate::{config::Config, errors::AppResult};

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let connect_options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to an in-memory store sees its own database, so
        // the pool must keep exactly one connection alive.
        let mut pool_options = SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(5));
        pool_options = if config.is_in_memory() {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(config.database_max_connections.max(1))
        };

        let pool = pool_options.connect_with(connect_options).await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        log::info!("Connected to SQLite store at {}", config.database_url);

        Ok(Self { pool })
    }

    /// Connects, creates the tables and optionally inserts the seed data.
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = Self::connect(config).await?;
        db.ensure_schema().await?;
        if config.seed_database {
            db.seed().await?;
        }
        Ok(db)
    }

    pub async fn ensure_schema(&self) -> AppResult<()> {
        log::info!("Ensuring quiz tables exist");

        for statement in schema::STATEMENTS {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        Ok(())
    }

    /// Inserts the seed quizzes when the store holds no quiz yet.
    pub async fn seed(&self) -> AppResult<bool> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Quiz")
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            log::debug!("Skipping seed, store already holds {} quizzes", existing);
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;
        for statement in seed::STATEMENTS {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        tx.commit().await?;

        log::info!("Seeded store with sample quizzes");
        Ok(true)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
