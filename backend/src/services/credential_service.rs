//! Credential business logic service.
//!
//! Registers accounts, hashes passwords and issues signed tokens.

use crate::config::Config;
use crate::database::models::{CreateUser, LoginUser, RegisterUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::avatar::gravatar_url;
use crate::utils::jwt::JwtUtils;
use bcrypt::{hash, verify};
use sqlx::SqlitePool;
use tracing::{info, warn};
use uuid::Uuid;

pub struct CredentialService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    jwt_utils: JwtUtils,
    bcrypt_cost: u32,
}

impl<'a> CredentialService<'a> {
    /// Creates a new CredentialService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    /// * `config` - Supplies the signing secret, token lifetime and hashing cost
    pub fn new(pool: &'a SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            jwt_utils: JwtUtils::from_config(config),
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    /// Registers a new user and returns a signed token for it.
    ///
    /// # Arguments
    /// * `register_user` - Already validated registration payload
    ///
    /// # Returns
    /// The signed token; no other user data is returned
    ///
    /// # Errors
    /// Returns `ServiceError` for:
    /// - An email that is already registered (`AlreadyExists`)
    /// - Hashing or signing failures (`InternalError`)
    /// - Storage failures (`Database`)
    pub async fn register(&self, register_user: RegisterUser) -> ServiceResult<String> {
        let repo = UserRepository::new(self.pool);

        if repo.get_user_by_email(&register_user.email).await?.is_some() {
            warn!("Registration rejected, email already in use");
            return Err(ServiceError::already_exists("User", &register_user.email));
        }

        let avatar = gravatar_url(&register_user.email);
        let password_hash = self.hash_password(&register_user.password)?;

        let data = CreateUser {
            id: Uuid::now_v7().to_string(),
            name: register_user.name,
            email: register_user.email,
            avatar,
            password_hash,
        };
        let email = data.email.clone();

        // A concurrent registration may have taken the email since the lookup.
        let user = repo
            .create_user(data)
            .await?
            .ok_or_else(|| ServiceError::already_exists("User", email))?;

        info!("Registered user {}", user.id);
        self.jwt_utils.generate_token(&user.id)
    }

    /// Checks an email and password pair and returns a signed token.
    ///
    /// Unknown emails and wrong passwords fail the same way.
    pub async fn authenticate(&self, login: LoginUser) -> ServiceResult<String> {
        let repo = UserRepository::new(self.pool);

        let user = match repo.get_user_by_email(&login.email).await? {
            Some(user) => user,
            None => {
                warn!("Login rejected for unknown email");
                return Err(ServiceError::InvalidCredentials);
            }
        };

        if !Self::verify_password(&login.password, &user.password_hash)? {
            warn!("Login rejected for user {}", user.id);
            return Err(ServiceError::InvalidCredentials);
        }

        self.jwt_utils.generate_token(&user.id)
    }

    /// Retrieves the user behind an authenticated token.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the user doesn't exist
    pub async fn current_user(&self, user_id: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);
        let user = repo
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;
        Ok(user)
    }

    /// Hashes a password with a freshly generated salt.
    fn hash_password(&self, password: &str) -> ServiceResult<String> {
        hash(password, self.bcrypt_cost)
            .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
    }

    /// Verifies a password against the stored hash.
    fn verify_password(password: &str, hash: &str) -> ServiceResult<bool> {
        verify(password, hash).map_err(|e| {
            ServiceError::internal_error(format!("Password verification failed: {}", e))
        })
    }
}
