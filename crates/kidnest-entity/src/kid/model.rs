//! Kid profile model.
//!
//! A `Kid` is a profile record owned by a parent user. It is distinct from
//! a kid-*role* [`crate::user::User`]: the profile is created either
//! directly by a parent or implicitly during kid signup, and the two are
//! never merged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Maximum number of interest tags on a profile.
pub const MAX_INTERESTS: usize = 10;

/// A kid profile belonging to exactly one parent user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Kid {
    /// Unique profile identifier.
    pub id: Uuid,
    /// Display name (2-50 characters).
    pub name: String,
    /// Age in years (1-18).
    pub age: i32,
    /// Avatar descriptor.
    pub avatar: String,
    /// Interest tags (at most [`MAX_INTERESTS`]).
    pub interests: Vec<String>,
    /// The owning parent user.
    pub parent_id: Uuid,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new kid profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKid {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Avatar descriptor (defaults to `"default"`).
    pub avatar: Option<String>,
    /// Interest tags.
    pub interests: Vec<String>,
    /// The owning parent user.
    pub parent_id: Uuid,
}

/// Partial update of a kid profile. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateKid {
    /// New display name.
    pub name: Option<String>,
    /// New age.
    pub age: Option<i32>,
    /// New avatar descriptor.
    pub avatar: Option<String>,
    /// Replacement interest tags.
    pub interests: Option<Vec<String>>,
}
