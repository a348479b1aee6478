use crate::db::models::DbTodo;
use crate::db::schema::POSTGRES_INIT;
use crate::error::ApiError;
use sqlx::{Pool, Postgres};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct TodoStorage {
    pool: PgPool,
}

impl TodoStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `todos` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        sqlx::query(POSTGRES_INIT).execute(&self.pool).await?;
        Ok(())
    }

    /// One round-trip to the server.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let _: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    /// Newest first.
    pub async fn list(&self) -> Result<Vec<DbTodo>, ApiError> {
        let rows = sqlx::query_as::<_, DbTodo>(
            "SELECT id, title, done FROM todos ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, title: &str) -> Result<DbTodo, ApiError> {
        let row = sqlx::query_as::<_, DbTodo>(
            "INSERT INTO todos (title, done) VALUES ($1, FALSE) RETURNING id, title, done",
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Flip `done`. `None` when no row has this id.
    pub async fn toggle_done(&self, id: i32) -> Result<Option<DbTodo>, ApiError> {
        let row = sqlx::query_as::<_, DbTodo>(
            "UPDATE todos SET done = NOT done WHERE id = $1 RETURNING id, title, done",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Returns whether a row was deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
