//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use kidnest_auth::jwt::decoder::TokenDecoder;
use kidnest_auth::jwt::encoder::TokenEncoder;
use kidnest_auth::password::hasher::PasswordHasher;
use kidnest_core::config::AppConfig;
use kidnest_database::repositories::kid::KidRepository;
use kidnest_database::repositories::user::UserRepository;
use kidnest_service::auth::AuthService;
use kidnest_service::family::FamilyLinkage;
use kidnest_service::kid::KidService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Kid profile repository.
    pub kid_repo: Arc<KidRepository>,
    /// Password hasher (Argon2).
    pub password_hasher: Arc<PasswordHasher>,
    /// Bearer token encoder.
    pub token_encoder: Arc<TokenEncoder>,
    /// Bearer token decoder and validator.
    pub token_decoder: Arc<TokenDecoder>,
    /// Family linkage manager.
    pub family_linkage: Arc<FamilyLinkage>,
    /// Auth flow service.
    pub auth_service: Arc<AuthService>,
    /// Kid profile service.
    pub kid_service: Arc<KidService>,
}

impl AppState {
    /// Wires repositories and services from configuration and a connected
    /// pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let kid_repo = Arc::new(KidRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));

        let family_linkage = Arc::new(FamilyLinkage::new(
            Arc::clone(&user_repo),
            config.auth.family_code_max_attempts,
        ));

        let auth_service = Arc::new(AuthService::new(
            db_pool.clone(),
            Arc::clone(&user_repo),
            Arc::clone(&kid_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_encoder),
            Arc::clone(&family_linkage),
            config.auth.password_min_length,
        ));

        let kid_service = Arc::new(KidService::new(
            db_pool.clone(),
            Arc::clone(&kid_repo),
            Arc::clone(&user_repo),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            user_repo,
            kid_repo,
            password_hasher,
            token_encoder,
            token_decoder,
            family_linkage,
            auth_service,
            kid_service,
        }
    }
}
