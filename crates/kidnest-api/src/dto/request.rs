//! Request DTOs.

use serde::Deserialize;
use validator::Validate;

use kidnest_entity::kid::UpdateKid;
use kidnest_service::auth::SignupInput;

/// POST /api/auth/signup body. Fields are optional on the wire; presence
/// and shape are validated by the auth flow so the first failure wins.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// `"parent"` (default) or `"kid"`.
    pub role: Option<String>,
    /// Family code, required for kid signups.
    pub family_code: Option<String>,
    /// Display name, required for kid signups.
    pub name: Option<String>,
    /// Age, required for kid signups.
    pub age: Option<i32>,
}

impl From<SignupRequest> for SignupInput {
    fn from(req: SignupRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            role: req.role,
            family_code: req.family_code,
            name: req.name,
            age: req.age,
        }
    }
}

/// POST /api/auth/login body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// POST /api/kids body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateKidRequest {
    /// Display name.
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    pub name: String,
    /// Age in years.
    #[validate(range(min = 1, max = 18, message = "Age must be between 1 and 18"))]
    pub age: i32,
    /// Avatar descriptor.
    pub avatar: Option<String>,
    /// Interest tags.
    #[validate(length(max = 10, message = "At most 10 interests are allowed"))]
    pub interests: Option<Vec<String>>,
}

/// PUT /api/kids/{id} body. `None` fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKidRequest {
    /// New display name.
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    pub name: Option<String>,
    /// New age.
    #[validate(range(min = 1, max = 18, message = "Age must be between 1 and 18"))]
    pub age: Option<i32>,
    /// New avatar descriptor.
    pub avatar: Option<String>,
    /// Replacement interest tags.
    #[validate(length(max = 10, message = "At most 10 interests are allowed"))]
    pub interests: Option<Vec<String>>,
}

impl From<UpdateKidRequest> for UpdateKid {
    fn from(req: UpdateKidRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            avatar: req.avatar,
            interests: req.interests,
        }
    }
}

/// Flatten field validation failures into one comma-joined message.
pub fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .map(|e| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Invalid value".to_string())
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
