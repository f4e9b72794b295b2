use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::jwt::JwtManager;
use crate::auth::password::PasswordService;
use crate::database::models::Restaurant;
use crate::database::repository::Repository;
use crate::utils::error::DomainError;

/// Result of a successful signup or login.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub account_id: Uuid,
    pub email: String,
    pub token: String,
    pub restaurant: Restaurant,
}

pub struct AuthService {
    repository: Arc<Repository>,
    jwt_manager: Arc<JwtManager>,
}

impl AuthService {
    pub fn new(repository: Arc<Repository>, jwt_manager: Arc<JwtManager>) -> Self {
        Self {
            repository,
            jwt_manager,
        }
    }

    /// Creates the account together with its restaurant profile and
    /// signs the owner in.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        restaurant_name: &str,
        owner_name: Option<&str>,
    ) -> Result<AuthOutcome, DomainError> {
        info!("Signup attempt for email: {}", email);

        // 1. Reject duplicate emails before doing any work
        if self.repository.find_account_by_email(email).await?.is_some() {
            warn!("Signup failed: email already registered: {}", email);
            return Err(DomainError::EmailAlreadyExists(email.to_string()));
        }

        // 2. Hash the password
        let password_hash = PasswordService::hash_password(password)?;

        // 3. Create the account and restaurant in one transaction
        let (account, restaurant) = self
            .repository
            .create_owner(email, &password_hash, restaurant_name, owner_name)
            .await?;

        // 4. Issue the bearer token
        let token = self
            .jwt_manager
            .generate_token(&account.id, &account.email)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        info!("Signup successful for: {}", email);
        Ok(AuthOutcome {
            account_id: account.id,
            email: account.email,
            token,
            restaurant,
        })
    }

    /// Verifies credentials and issues a fresh token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, DomainError> {
        info!("Login attempt for email: {}", email);

        // 1. Look up the account
        let account = self
            .repository
            .find_account_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: no account for: {}", email);
                DomainError::InvalidCredentials
            })?;

        // 2. Verify the password
        let password_valid = PasswordService::verify_password(password, &account.password_hash)
            .map_err(|_| DomainError::InvalidCredentials)?;
        if !password_valid {
            warn!("Login failed: invalid password for: {}", email);
            return Err(DomainError::InvalidCredentials);
        }

        // 3. Issue the bearer token
        let token = self
            .jwt_manager
            .generate_token(&account.id, &account.email)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        // 4. Record the login time, without failing the login over it
        if let Err(err) = self.repository.touch_last_login(&account.id).await {
            error!("Failed to record login time for {}: {}", account.id, err);
        }

        let restaurant = self
            .repository
            .get_restaurant(&account.id)
            .await?
            .ok_or(DomainError::RecordNotFound)?;

        info!("Login successful for: {}", email);
        Ok(AuthOutcome {
            account_id: account.id,
            email: account.email,
            token,
            restaurant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::DatabaseConfig;
    use crate::database::pool::DbPool;

    async fn service() -> AuthService {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_max_size: 1,
            pool_timeout_seconds: 5,
        };
        let pool = DbPool::new(&config).await.unwrap();
        AuthService::new(
            Arc::new(Repository::new(pool)),
            Arc::new(JwtManager::new("auth-test-secret", 3600)),
        )
    }

    #[tokio::test]
    async fn signup_then_login_issues_tokens() {
        let auth = service().await;

        let signed_up = auth
            .signup("owner@example.com", "hunter2-secret", "Test Kitchen", None)
            .await
            .unwrap();
        assert!(!signed_up.token.is_empty());
        assert_eq!(signed_up.restaurant.name, "Test Kitchen");
        assert!(!signed_up.restaurant.is_setup_complete);

        let logged_in = auth.login("owner@example.com", "hunter2-secret").await.unwrap();
        assert_eq!(logged_in.account_id, signed_up.account_id);
        assert_eq!(logged_in.restaurant.id, signed_up.account_id);
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let auth = service().await;

        auth.signup("owner@example.com", "hunter2-secret", "Test Kitchen", None)
            .await
            .unwrap();
        let err = auth
            .signup("owner@example.com", "other-secret", "Other Kitchen", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_alike() {
        let auth = service().await;

        auth.signup("owner@example.com", "hunter2-secret", "Test Kitchen", None)
            .await
            .unwrap();

        let wrong_password = auth.login("owner@example.com", "bad-guess").await.unwrap_err();
        assert!(matches!(wrong_password, DomainError::InvalidCredentials));

        let unknown_email = auth.login("ghost@example.com", "hunter2-secret").await.unwrap_err();
        assert!(matches!(unknown_email, DomainError::InvalidCredentials));
    }
}
