//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kidnest_entity::kid::Kid;
use kidnest_entity::user::{User, UserRole};

/// Standard success response wrapper: `{success, message?, token?, data?}`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Bearer token, present on signup and login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Response data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful data response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            token: None,
            data: Some(data),
        }
    }

    /// Creates a successful data response carrying a bearer token.
    pub fn with_token(token: String, data: T) -> Self {
        Self {
            success: true,
            message: None,
            token: Some(token),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Creates a data-less acknowledgement.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            token: None,
            data: None,
        }
    }
}

/// Role-shaped public profile. Serialized untagged: the variant's own
/// fields are the wire shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Profile {
    /// Parent-shaped profile.
    Parent(ParentProfile),
    /// Kid-shaped profile.
    Kid(KidProfile),
}

/// Public profile of a parent account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentProfile {
    /// User id.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Role (`"parent"`).
    pub role: UserRole,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Owned family code.
    pub family_code: String,
    /// Kid-profile ids; present on `/me` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kids: Option<Vec<Uuid>>,
}

/// Public profile of a kid account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KidProfile {
    /// User id.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Role (`"kid"`).
    pub role: UserRole,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Display name.
    pub name: String,
    /// Owning parent's user id.
    pub parent_id: Option<Uuid>,
    /// Id of the profile record created at signup; signup response only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid_id: Option<Uuid>,
    /// Age; signup response only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl Profile {
    /// Shape returned from signup: parents without the kid-id set, kids
    /// with the freshly created profile's id and age.
    pub fn signup(user: &User, kid_profile: Option<&Kid>) -> Self {
        match user.role {
            UserRole::Parent => Self::Parent(ParentProfile {
                id: user.id,
                email: user.email.clone(),
                role: user.role,
                created_at: user.created_at,
                family_code: user.family_code.clone(),
                kids: None,
            }),
            UserRole::Kid => Self::Kid(KidProfile {
                id: user.id,
                email: user.email.clone(),
                role: user.role,
                created_at: user.created_at,
                name: user.name.clone().unwrap_or_default(),
                parent_id: user.parent_id,
                kid_id: kid_profile.map(|k| k.id),
                age: kid_profile.map(|k| k.age),
            }),
        }
    }

    /// Shape returned from `/me`: parents additionally expose their kid-id
    /// set, kids their name and parent reference.
    pub fn me(user: &User) -> Self {
        match user.role {
            UserRole::Parent => Self::Parent(ParentProfile {
                id: user.id,
                email: user.email.clone(),
                role: user.role,
                created_at: user.created_at,
                family_code: user.family_code.clone(),
                kids: Some(user.kid_ids.clone()),
            }),
            UserRole::Kid => Self::Kid(KidProfile {
                id: user.id,
                email: user.email.clone(),
                role: user.role,
                created_at: user.created_at,
                name: user.name.clone().unwrap_or_default(),
                parent_id: user.parent_id,
                kid_id: None,
                age: None,
            }),
        }
    }
}

/// Minimal profile returned from login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalProfile {
    /// User id.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Role.
    pub role: UserRole,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for MinimalProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Kid profile resource representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KidResponse {
    /// Profile id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Avatar descriptor.
    pub avatar: String,
    /// Interest tags.
    pub interests: Vec<String>,
    /// Owning parent's user id.
    pub parent_id: Uuid,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Kid> for KidResponse {
    fn from(kid: Kid) -> Self {
        Self {
            id: kid.id,
            name: kid.name,
            age: kid.age,
            avatar: kid.avatar,
            interests: kid.interests,
            parent_id: kid.parent_id,
            created_at: kid.created_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
}
