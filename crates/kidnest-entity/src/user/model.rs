//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered identity in KidNest — either a parent or a kid sub-account.
///
/// Exactly one of the two role shapes holds: a parent owns a generated
/// family code and an append-only set of kid-profile ids; a kid carries a
/// `parent_id` plus a copy of that parent's family code and a display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address, stored trimmed and lowercased.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role.
    pub role: UserRole,
    /// 6-character uppercase family code (generated for parents, inherited
    /// for kids).
    pub family_code: String,
    /// Owning parent, set only when `role` is [`UserRole::Kid`].
    pub parent_id: Option<Uuid>,
    /// Display name, set only for kid accounts.
    pub name: Option<String>,
    /// Kid-profile ids, populated only for parents. Append-only.
    pub kid_ids: Vec<Uuid>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if this user is a parent account.
    pub fn is_parent(&self) -> bool {
        self.role == UserRole::Parent
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Normalized email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Family code (freshly allocated for parents, inherited for kids).
    pub family_code: String,
    /// Owning parent for kid accounts.
    pub parent_id: Option<Uuid>,
    /// Display name for kid accounts.
    pub name: Option<String>,
}

/// Normalize an email for storage and comparison: trimmed, lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
