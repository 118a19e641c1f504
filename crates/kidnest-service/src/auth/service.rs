//! Auth flow controller: signup, login, and current-user lookup.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use kidnest_auth::jwt::TokenEncoder;
use kidnest_auth::password::PasswordHasher;
use kidnest_core::error::{AppError, ErrorKind};
use kidnest_core::result::AppResult;
use kidnest_database::repositories::kid::KidRepository;
use kidnest_database::repositories::user::{self, UserRepository};
use kidnest_entity::kid::{CreateKid, Kid};
use kidnest_entity::user::model::{CreateUser, normalize_email};
use kidnest_entity::user::{User, UserRole};

use crate::family::FamilyLinkage;

/// Uniform message for both unknown-email and wrong-password logins, so a
/// caller cannot enumerate accounts.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Retries against a write-time family-code constraint violation before
/// giving up. Such a violation means a concurrent signup won the same code
/// between our read check and insert.
const CODE_WRITE_RETRIES: u32 = 3;

/// Raw signup fields as received from the caller. Presence and shape are
/// validated here, in order, so the first failure wins.
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub family_code: Option<String>,
    pub name: Option<String>,
    pub age: Option<i32>,
}

/// Result of a successful signup.
#[derive(Debug, Clone)]
pub struct SignupOutcome {
    /// Freshly issued bearer token for the new identity.
    pub token: String,
    /// The created user record.
    pub user: User,
    /// The kid profile created alongside a kid-role signup.
    pub kid_profile: Option<Kid>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Freshly issued bearer token.
    pub token: String,
    /// The authenticated user record.
    pub user: User,
}

/// Composes the credential store, token service, and family linkage into
/// the signup/login/introspection flows.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Pool for the kid-signup transaction.
    pool: PgPool,
    /// User repository.
    users: Arc<UserRepository>,
    /// Kid profile repository.
    kids: Arc<KidRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    tokens: Arc<TokenEncoder>,
    /// Family linkage manager.
    family: Arc<FamilyLinkage>,
    /// Minimum accepted password length.
    password_min_length: usize,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        pool: PgPool,
        users: Arc<UserRepository>,
        kids: Arc<KidRepository>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<TokenEncoder>,
        family: Arc<FamilyLinkage>,
        password_min_length: usize,
    ) -> Self {
        Self {
            pool,
            users,
            kids,
            hasher,
            tokens,
            family,
            password_min_length,
        }
    }

    /// Registers a new parent or kid identity and issues a token for it.
    pub async fn signup(&self, input: SignupInput) -> AppResult<SignupOutcome> {
        // 1. Both credentials present.
        let (email, password) = match (
            input.email.as_deref().filter(|e| !e.trim().is_empty()),
            input.password.as_deref().filter(|p| !p.is_empty()),
        ) {
            (Some(email), Some(password)) => (email, password),
            _ => return Err(AppError::validation("Email and password are required")),
        };

        // 2. Password length.
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        // 3. Role, defaulting to parent.
        let role = match input.role.as_deref() {
            None => UserRole::Parent,
            Some(raw) => raw.parse::<UserRole>()?,
        };

        // 4. Kid signups need the family fields; missing ones are reported
        //    together.
        if role == UserRole::Kid {
            let mut missing = Vec::new();
            if input.family_code.as_deref().unwrap_or("").trim().is_empty() {
                missing.push("Family code is required");
            }
            if input.name.as_deref().unwrap_or("").trim().is_empty() {
                missing.push("Name is required");
            }
            if input.age.is_none() {
                missing.push("Age is required");
            }
            if !missing.is_empty() {
                return Err(AppError::validation(missing.join(", ")));
            }
            if let Some(age) = input.age {
                if !(1..=18).contains(&age) {
                    return Err(AppError::validation("Age must be between 1 and 18"));
                }
            }
        }

        // 5. Duplicate email (case-insensitive, trimmed).
        let email = normalize_email(email);
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(user::EMAIL_CONFLICT));
        }

        let password_hash = self.hasher.hash_password(password)?;

        let outcome = match role {
            UserRole::Parent => self.signup_parent(email, password_hash).await?,
            UserRole::Kid => {
                // Checked in step 4.
                let family_code = input.family_code.unwrap_or_default();
                let name = input.name.unwrap_or_default().trim().to_string();
                let age = input.age.unwrap_or_default();
                self.signup_kid(email, password_hash, &family_code, name, age)
                    .await?
            }
        };

        info!(user_id = %outcome.user.id, role = %outcome.user.role, "User signed up");
        Ok(outcome)
    }

    /// Parent branch: allocate a fresh code and persist the identity.
    async fn signup_parent(&self, email: String, password_hash: String) -> AppResult<SignupOutcome> {
        let mut attempts = 0;
        let user = loop {
            let family_code = self.family.allocate_code().await?;
            let create = CreateUser {
                email: email.clone(),
                password_hash: password_hash.clone(),
                role: UserRole::Parent,
                family_code,
                parent_id: None,
                name: None,
            };
            match self.users.create(&create).await {
                Ok(user) => break user,
                Err(e)
                    if e.kind == ErrorKind::Conflict
                        && e.message == user::FAMILY_CODE_CONFLICT
                        && attempts < CODE_WRITE_RETRIES =>
                {
                    attempts += 1;
                }
                Err(e) => return Err(e),
            }
        };

        let token = self.tokens.issue(user.id, user.role)?;
        Ok(SignupOutcome {
            token,
            user,
            kid_profile: None,
        })
    }

    /// Kid branch: resolve the parent by code, then create the kid-role
    /// user, the kid profile, and the parent link as one transaction — an
    /// unknown code or any mid-sequence failure leaves no partial state.
    async fn signup_kid(
        &self,
        email: String,
        password_hash: String,
        family_code: &str,
        name: String,
        age: i32,
    ) -> AppResult<SignupOutcome> {
        let parent = self.family.resolve_by_code(family_code).await?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))?;

        let create_user = CreateUser {
            email,
            password_hash,
            role: UserRole::Kid,
            family_code: parent.family_code.clone(),
            parent_id: Some(parent.id),
            name: Some(name.clone()),
        };
        let user = self.users.create_in_tx(&mut tx, &create_user).await?;

        let create_kid = CreateKid {
            name,
            age,
            avatar: None,
            interests: Vec::new(),
            parent_id: parent.id,
        };
        let kid = self.kids.create_in_tx(&mut tx, &create_kid).await?;

        self.family.link_kid_in_tx(&mut tx, parent.id, kid.id).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit signup", e))?;

        let token = self.tokens.issue(user.id, user.role)?;
        Ok(SignupOutcome {
            token,
            user,
            kid_profile: Some(kid),
        })
    }

    /// Authenticates by email/password and issues a token.
    pub async fn login(
        &self,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<LoginOutcome> {
        let (email, password) = match (
            email.as_deref().filter(|e| !e.trim().is_empty()),
            password.as_deref().filter(|p| !p.is_empty()),
        ) {
            (Some(email), Some(password)) => (email, password),
            _ => return Err(AppError::validation("Email and password are required")),
        };

        let user = self
            .users
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_else(|| AppError::authentication(INVALID_CREDENTIALS))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let token = self.tokens.issue(user.id, user.role)?;
        info!(user_id = %user.id, "User logged in");
        Ok(LoginOutcome { token, user })
    }

    /// Re-fetches the identity behind a verified token. Only the id is
    /// trusted from the claims; the record may have been deleted since
    /// issuance.
    pub async fn current_user(&self, user_id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
