//! Family linkage management: code allocation, resolution, and kid linking.

use std::sync::Arc;

use sqlx::{Postgres, Transaction};
use tracing::warn;
use uuid::Uuid;

use kidnest_core::error::AppError;
use kidnest_core::result::AppResult;
use kidnest_database::repositories::user::UserRepository;
use kidnest_entity::user::User;

use super::code::generate_code;

/// Message produced when the given family code matches no parent.
pub const INVALID_FAMILY_CODE: &str = "Invalid family code";

/// Message produced when code allocation runs out of attempts.
pub const CODE_SPACE_EXHAUSTED: &str = "Unable to allocate a unique family code";

/// Manages parent↔kid family relationships keyed by a shared family code.
#[derive(Debug, Clone)]
pub struct FamilyLinkage {
    /// User repository for collision checks and lookups.
    users: Arc<UserRepository>,
    /// Cap on allocation attempts before giving up.
    max_attempts: u32,
}

impl FamilyLinkage {
    /// Creates a new family linkage manager.
    pub fn new(users: Arc<UserRepository>, max_attempts: u32) -> Self {
        Self {
            users,
            max_attempts,
        }
    }

    /// Allocates a family code not yet owned by any parent.
    ///
    /// The read-time collision check keeps the loop effectively O(1); the
    /// partial unique index on parent-owned codes is the authoritative
    /// guarantee, and a write-time violation is handled by the caller as a
    /// further retry signal. The attempt cap turns a pathological collision
    /// streak into an error instead of an unbounded loop.
    pub async fn allocate_code(&self) -> AppResult<String> {
        for _ in 0..self.max_attempts {
            let code = generate_code();
            if !self.users.family_code_exists(&code).await? {
                return Ok(code);
            }
            warn!(code = %code, "Family code collision, regenerating");
        }
        Err(AppError::internal(CODE_SPACE_EXHAUSTED))
    }

    /// Resolves the parent owning the given family code.
    ///
    /// Codes are stored uppercase and compared case-sensitively, so the
    /// input is uppercased before lookup.
    pub async fn resolve_by_code(&self, code: &str) -> AppResult<User> {
        let code = code.trim().to_uppercase();
        self.users
            .find_parent_by_family_code(&code)
            .await?
            .ok_or_else(|| AppError::validation(INVALID_FAMILY_CODE))
    }

    /// Links a kid profile to its parent inside an open transaction.
    pub async fn link_kid_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        parent_id: Uuid,
        kid_id: Uuid,
    ) -> AppResult<()> {
        self.users.append_kid_in_tx(tx, parent_id, kid_id).await
    }
}
