//! Kid profile repository implementation.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use kidnest_core::error::{AppError, ErrorKind};
use kidnest_core::result::AppResult;
use kidnest_entity::kid::{CreateKid, Kid, UpdateKid};

const INSERT_KID: &str = "INSERT INTO kids \
     (id, name, age, avatar, interests, parent_id, created_at) \
     VALUES ($1, $2, $3, $4, $5, $6, now()) \
     RETURNING *";

/// Repository for kid profile records.
#[derive(Debug, Clone)]
pub struct KidRepository {
    pool: PgPool,
}

impl KidRepository {
    /// Create a new kid repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a kid profile by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Kid>> {
        sqlx::query_as::<_, Kid>("SELECT * FROM kids WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find kid by id", e))
    }

    /// List all kid profiles owned by the given parent, oldest first.
    pub async fn find_by_parent(&self, parent_id: Uuid) -> AppResult<Vec<Kid>> {
        sqlx::query_as::<_, Kid>(
            "SELECT * FROM kids WHERE parent_id = $1 ORDER BY created_at ASC",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list kids", e))
    }

    /// Insert a new kid profile inside an open transaction.
    pub async fn create_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        data: &CreateKid,
    ) -> AppResult<Kid> {
        sqlx::query_as::<_, Kid>(INSERT_KID)
            .bind(Uuid::new_v4())
            .bind(&data.name)
            .bind(data.age)
            .bind(data.avatar.as_deref().unwrap_or("default"))
            .bind(&data.interests)
            .bind(data.parent_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create kid", e))
    }

    /// Apply a partial update. `None` fields keep their stored values.
    pub async fn update(&self, id: Uuid, changes: &UpdateKid) -> AppResult<Kid> {
        sqlx::query_as::<_, Kid>(
            "UPDATE kids SET \
                 name = COALESCE($2, name), \
                 age = COALESCE($3, age), \
                 avatar = COALESCE($4, avatar), \
                 interests = COALESCE($5, interests) \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(changes.age)
        .bind(&changes.avatar)
        .bind(&changes.interests)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update kid", e))
    }

    /// Delete a kid profile inside an open transaction.
    pub async fn delete_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM kids WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete kid", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Kid not found"));
        }
        Ok(())
    }
}
