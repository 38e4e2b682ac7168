//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up the router with a database
//! - Helpers for creating isolated categories and questions
//!
//! # Requirements
//! Tests built with `TestContext::new` need PostgreSQL (set DATABASE_URL).
//! `TestContext::offline` never opens a connection and suits tests that are
//! rejected before the store is touched.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use trivia_backend::db::Database;
use trivia_backend::models::{CategoryId, NewQuestion, QuestionId};
use trivia_backend::{app, AppState};

/// Test context containing database connection and router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context backed by a real database.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self::with_database(db)
    }

    /// Create a context whose pool never connects.
    pub fn offline() -> Self {
        let db = Database::connect_lazy("postgres://offline@127.0.0.1:1/unused")
            .expect("Failed to create lazy pool");

        Self::with_database(db)
    }

    fn with_database(db: Database) -> Self {
        let db = Arc::new(db);
        let state = AppState { db: db.clone() };
        Self {
            db,
            app: app(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a category with a unique label and return its id.
    pub async fn create_category(&self, prefix: &str) -> CategoryId {
        sqlx::query_scalar("INSERT INTO categories (type) VALUES ($1) RETURNING id")
            .bind(fixtures::unique_label(prefix))
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to create test category")
    }

    /// Insert `count` questions into a category, returning their ids in order.
    pub async fn create_questions(&self, category: CategoryId, count: usize) -> Vec<QuestionId> {
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let question = NewQuestion {
                question: fixtures::unique_label(&format!("Question {}", i + 1)),
                answer: format!("Answer {}", i + 1),
                category,
                difficulty: (i % 5) as i32 + 1,
            };
            let id = self
                .db
                .insert_question(&question)
                .await
                .expect("Failed to create test question");
            ids.push(id);
        }
        ids
    }

    /// Remove a test category and, through the foreign key, its questions.
    pub async fn cleanup_category(&self, category: CategoryId) {
        let _ = sqlx::query("DELETE FROM questions WHERE category = $1")
            .bind(category)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category)
            .execute(self.db.pool())
            .await;
    }
}
