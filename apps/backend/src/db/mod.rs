//! PostgreSQL question store

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::Result;
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a pool that only connects on first use
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Category Repository ===

    /// Get all categories ordered by id
    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        let rows = sqlx::query_as::<_, DbCategory>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    /// Category id → label lookup, read fresh on every call
    pub async fn get_category_map(&self) -> Result<CategoryMap> {
        let categories = self.get_categories().await?;
        Ok(trivia_core::category_map(&categories))
    }

    // === Question Repository ===

    /// Get every question ordered by id
    pub async fn get_questions(&self) -> Result<Vec<Question>> {
        let rows = sqlx::query_as::<_, DbQuestion>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    /// Get question by ID
    pub async fn get_question(&self, question_id: QuestionId) -> Result<Option<Question>> {
        let row = sqlx::query_as::<_, DbQuestion>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Question::from))
    }

    /// Insert a question and return its assigned id
    pub async fn insert_question(&self, question: &NewQuestion) -> Result<QuestionId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Delete a question, returning whether a row was removed
    pub async fn delete_question(&self, question_id: QuestionId) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM questions
            WHERE id = $1
            "#,
        )
        .bind(question_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
