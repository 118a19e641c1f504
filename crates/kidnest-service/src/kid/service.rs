//! Kid profile CRUD with ownership enforcement.
//!
//! A kid profile is always owned by exactly one parent. Every operation is
//! scoped by the calling parent's id; a profile owned by another parent is
//! reported as not found rather than forbidden, so ids cannot be probed.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use kidnest_core::error::{AppError, ErrorKind};
use kidnest_core::result::AppResult;
use kidnest_database::repositories::kid::KidRepository;
use kidnest_database::repositories::user::UserRepository;
use kidnest_entity::kid::{CreateKid, Kid, UpdateKid};

/// Profile fields supplied by the caller; ownership is taken from the
/// authenticated parent, never from the request.
#[derive(Debug, Clone, Default)]
pub struct CreateKidInput {
    pub name: String,
    pub age: i32,
    pub avatar: Option<String>,
    pub interests: Vec<String>,
}

/// Manages kid profiles on behalf of their owning parent.
#[derive(Debug, Clone)]
pub struct KidService {
    /// Pool for the create/delete transactions.
    pool: PgPool,
    /// Kid profile repository.
    kids: Arc<KidRepository>,
    /// User repository (parent kid-id set maintenance).
    users: Arc<UserRepository>,
}

impl KidService {
    /// Creates a new kid service.
    pub fn new(pool: PgPool, kids: Arc<KidRepository>, users: Arc<UserRepository>) -> Self {
        Self { pool, kids, users }
    }

    /// Creates a profile and appends its id to the parent's kid-id set,
    /// atomically.
    pub async fn create(&self, parent_id: Uuid, input: CreateKidInput) -> AppResult<Kid> {
        let data = CreateKid {
            name: input.name,
            age: input.age,
            avatar: input.avatar,
            interests: input.interests,
            parent_id,
        };

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let kid = self.kids.create_in_tx(&mut tx, &data).await?;
        self.users.append_kid_in_tx(&mut tx, parent_id, kid.id).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit kid creation", e)
        })?;

        info!(kid_id = %kid.id, parent_id = %parent_id, "Kid profile created");
        Ok(kid)
    }

    /// Lists the calling parent's profiles.
    pub async fn list(&self, parent_id: Uuid) -> AppResult<Vec<Kid>> {
        self.kids.find_by_parent(parent_id).await
    }

    /// Fetches one profile owned by the calling parent.
    pub async fn get(&self, parent_id: Uuid, kid_id: Uuid) -> AppResult<Kid> {
        self.kids
            .find_by_id(kid_id)
            .await?
            .filter(|kid| kid.parent_id == parent_id)
            .ok_or_else(|| AppError::not_found("Kid not found"))
    }

    /// Applies a partial update to an owned profile.
    pub async fn update(
        &self,
        parent_id: Uuid,
        kid_id: Uuid,
        changes: UpdateKid,
    ) -> AppResult<Kid> {
        self.get(parent_id, kid_id).await?;
        self.kids.update(kid_id, &changes).await
    }

    /// Deletes an owned profile and removes its id from the parent's
    /// kid-id set, atomically.
    pub async fn delete(&self, parent_id: Uuid, kid_id: Uuid) -> AppResult<()> {
        self.get(parent_id, kid_id).await?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        self.kids.delete_in_tx(&mut tx, kid_id).await?;
        self.users.remove_kid_in_tx(&mut tx, parent_id, kid_id).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit kid deletion", e)
        })?;

        info!(kid_id = %kid_id, parent_id = %parent_id, "Kid profile deleted");
        Ok(())
    }
}
