//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in KidNest.
///
/// A parent owns a family code and manages kid profiles; a kid is a
/// sub-account created against an existing parent's family code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Family owner. Holds a generated family code and the kid-id set.
    Parent,
    /// Sub-account linked to a parent via a family code.
    Kid,
}

impl UserRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Kid => "kid",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = kidnest_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parent" => Ok(Self::Parent),
            "kid" => Ok(Self::Kid),
            _ => Err(kidnest_core::AppError::validation(
                "Role must be either 'parent' or 'kid'",
            )),
        }
    }
}
