//! User repository implementation.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use kidnest_core::error::{AppError, ErrorKind};
use kidnest_core::result::AppResult;
use kidnest_entity::user::model::CreateUser;
use kidnest_entity::user::{User, UserRole};

/// Conflict message produced when an insert trips the parent family-code
/// unique index. The family linkage manager treats it as a retry signal.
pub const FAMILY_CODE_CONFLICT: &str = "Family code already in use";

/// Conflict message produced when an insert trips the email unique index.
pub const EMAIL_CONFLICT: &str = "Email already registered";

const INSERT_USER: &str = "INSERT INTO users \
     (id, email, password_hash, role, family_code, parent_id, name, kid_ids, created_at) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, '{}', now()) \
     RETURNING *";

/// Repository for user identity records.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Whether any parent already owns the given family code.
    pub async fn family_code_exists(&self, code: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE family_code = $1 AND role = 'parent')",
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check family code", e))
    }

    /// Find the parent user owning the given family code.
    pub async fn find_parent_by_family_code(&self, code: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE family_code = $1 AND role = 'parent'",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find parent by family code", e)
        })
    }

    /// Insert a new user record.
    ///
    /// Unique violations on the email or parent family-code indexes are
    /// surfaced as [`ErrorKind::Conflict`] with the corresponding message
    /// constant so callers can react (duplicate email vs. code retry).
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(INSERT_USER)
            .bind(Uuid::new_v4())
            .bind(&data.email)
            .bind(&data.password_hash)
            .bind(data.role)
            .bind(&data.family_code)
            .bind(data.parent_id)
            .bind(&data.name)
            .fetch_one(&self.pool)
            .await
            .map_err(map_insert_error)
    }

    /// Insert a new user record inside an open transaction.
    pub async fn create_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        data: &CreateUser,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(INSERT_USER)
            .bind(Uuid::new_v4())
            .bind(&data.email)
            .bind(&data.password_hash)
            .bind(data.role)
            .bind(&data.family_code)
            .bind(data.parent_id)
            .bind(&data.name)
            .fetch_one(&mut **tx)
            .await
            .map_err(map_insert_error)
    }

    /// Append a kid-profile id to a parent's kid-id set, inside an open
    /// transaction. No dedup: callers invoke this once per created profile.
    pub async fn append_kid_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        parent_id: Uuid,
        kid_id: Uuid,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE users SET kid_ids = array_append(kid_ids, $1) \
             WHERE id = $2 AND role = $3",
        )
        .bind(kid_id)
        .bind(parent_id)
        .bind(UserRole::Parent)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to link kid to parent", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Parent not found"));
        }
        Ok(())
    }

    /// Remove a kid-profile id from a parent's kid-id set, inside an open
    /// transaction.
    pub async fn remove_kid_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        parent_id: Uuid,
        kid_id: Uuid,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET kid_ids = array_remove(kid_ids, $1) WHERE id = $2",
        )
        .bind(kid_id)
        .bind(parent_id)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to unlink kid from parent", e)
        })?;
        Ok(())
    }
}

/// Map an insert failure, translating unique violations into conflicts.
fn map_insert_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some("users_family_code_parent_key") => AppError::conflict(FAMILY_CODE_CONFLICT),
                _ => AppError::conflict(EMAIL_CONFLICT),
            };
        }
    }
    AppError::with_source(ErrorKind::Database, "Failed to create user", err)
}
