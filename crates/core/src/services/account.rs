//! Account service: registration, login, and session tokens.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::Set;
use serde::Deserialize;
use tanzconnect_common::{AppError, AppResult, IdGenerator};
use tanzconnect_db::{
    entities::account::{self, UserType},
    repositories::AccountRepository,
};
use validator::Validate;

/// Account service for identity operations.
///
/// Every operation takes the acting identity explicitly; nothing reads a
/// process-wide session.
#[derive(Clone)]
pub struct AccountService {
    account_repo: AccountRepository,
    id_gen: IdGenerator,
}

/// Input for creating a new account.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,

    pub user_type: UserType,
}

/// Input for signing in to an existing account.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl AccountService {
    /// Create a new account service.
    #[must_use]
    pub const fn new(account_repo: AccountRepository) -> Self {
        Self {
            account_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Register a new account with the chosen marketplace role.
    pub async fn register(&self, input: RegisterInput) -> AppResult<account::Model> {
        input.validate()?;

        // Friendly check; the unique index on email_lower is the real guard
        if self
            .account_repo
            .find_by_email(&input.email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&input.password)?;
        let account_id = self.id_gen.generate();
        let token = self.id_gen.generate_token();

        let model = account::ActiveModel {
            id: Set(account_id),
            email: Set(input.email.clone()),
            email_lower: Set(input.email.to_lowercase()),
            user_type: Set(input.user_type),
            password: Set(password_hash),
            token: Set(Some(token)),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let account = self.account_repo.create(model).await?;

        tracing::info!(account_id = %account.id, user_type = ?account.user_type, "Account registered");

        Ok(account)
    }

    /// Authenticate an account by session token.
    pub async fn authenticate_by_token(&self, token: &str) -> AppResult<account::Model> {
        self.account_repo
            .find_by_token(token)
            .await?
            .ok_or(AppError::Unauthorized)
    }

    /// Authenticate an account by email and password.
    pub async fn authenticate(&self, input: &LoginInput) -> AppResult<account::Model> {
        let account = self
            .account_repo
            .find_by_email(&input.email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !verify_password(&input.password, &account.password)? {
            return Err(AppError::Unauthorized);
        }

        Ok(account)
    }

    /// Rotate an account's session token, invalidating the current one.
    pub async fn regenerate_token(&self, account_id: &str) -> AppResult<String> {
        let account = self.account_repo.get_by_id(account_id).await?;
        let new_token = self.id_gen.generate_token();

        let mut active: account::ActiveModel = account.into();
        active.token = Set(Some(new_token.clone()));
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        self.account_repo.update(active).await?;

        Ok(new_token)
    }
}

/// Hash a password using Argon2.
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
