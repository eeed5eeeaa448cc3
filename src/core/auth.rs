//! # Auth Service
//!
//! There is no backend. `SimulatedAuthService` waits for a configurable
//! delay and then accepts exactly one set of demo credentials.
//! The trait is the seam a real backend would plug into.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};

use crate::core::session::CurrentUser;
use crate::core::validation::{
    ResetMethod, SignupForm, ValidationError, validate_reset_target, validate_sign_in,
};

pub const DEFAULT_DEMO_EMAIL: &str = "demo@loopzy.com";
pub const DEFAULT_DEMO_PASSWORD: &str = "password";
pub const DEFAULT_SIGN_IN_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Input rejected before reaching the service.
    Validation(ValidationError),
    /// Well-formed but wrong email/password.
    InvalidCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Validation(e) => write!(f, "{e}"),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<ValidationError> for AuthError {
    fn from(e: ValidationError) -> Self {
        AuthError::Validation(e)
    }
}

#[async_trait]
pub trait AuthService: Send + Sync {
    fn name(&self) -> &str;

    async fn sign_in(&self, email: &str, password: &str) -> Result<CurrentUser, AuthError>;

    async fn sign_up(&self, form: &SignupForm) -> Result<CurrentUser, AuthError>;

    async fn send_reset_code(&self, method: ResetMethod, target: &str) -> Result<(), AuthError>;
}

pub struct SimulatedAuthService {
    demo_email: String,
    demo_password: String,
    delay: Duration,
}

impl SimulatedAuthService {
    pub fn new(demo_email: String, demo_password: String, delay: Duration) -> Self {
        Self {
            demo_email,
            demo_password,
            delay,
        }
    }

    /// The user the demo credentials sign in as.
    pub fn demo_user(&self) -> CurrentUser {
        let username = self
            .demo_email
            .split('@')
            .next()
            .unwrap_or("demo")
            .to_string();
        CurrentUser::new("demo", username, self.demo_email.clone())
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            debug!("Simulating {}ms auth latency", self.delay.as_millis());
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for SimulatedAuthService {
    fn default() -> Self {
        Self::new(
            DEFAULT_DEMO_EMAIL.to_string(),
            DEFAULT_DEMO_PASSWORD.to_string(),
            Duration::from_millis(DEFAULT_SIGN_IN_DELAY_MS),
        )
    }
}

#[async_trait]
impl AuthService for SimulatedAuthService {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<CurrentUser, AuthError> {
        validate_sign_in(email, password)?;
        self.simulate_latency().await;
        if email == self.demo_email && password == self.demo_password {
            info!("Sign-in accepted for {}", email);
            Ok(self.demo_user())
        } else {
            info!("Sign-in rejected for {}", email);
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn sign_up(&self, form: &SignupForm) -> Result<CurrentUser, AuthError> {
        form.validate()?;
        self.simulate_latency().await;
        info!("Account created for {}", form.username);
        Ok(CurrentUser::with_new_id(
            form.username.clone(),
            form.email.clone(),
        ))
    }

    async fn send_reset_code(&self, method: ResetMethod, target: &str) -> Result<(), AuthError> {
        validate_reset_target(method, target)?;
        self.simulate_latency().await;
        info!("Reset code sent by {} to {}", method.noun(), target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_service() -> SimulatedAuthService {
        SimulatedAuthService::new(
            DEFAULT_DEMO_EMAIL.to_string(),
            DEFAULT_DEMO_PASSWORD.to_string(),
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn test_demo_credentials_sign_in() {
        let user = instant_service()
            .sign_in("demo@loopzy.com", "password")
            .await
            .unwrap();
        assert_eq!(user.email, "demo@loopzy.com");
        assert_eq!(user.username, "demo");
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let err = instant_service()
            .sign_in("demo@loopzy.com", "hunter2")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_malformed_email_fails_validation() {
        let err = instant_service().sign_in("demo", "password").await.unwrap_err();
        assert_eq!(err, AuthError::Validation(ValidationError::InvalidEmail));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_waits_for_configured_delay() {
        let service = SimulatedAuthService::default();
        let start = tokio::time::Instant::now();
        service.sign_in("demo@loopzy.com", "password").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(DEFAULT_SIGN_IN_DELAY_MS));
    }

    #[tokio::test]
    async fn test_sign_up_returns_new_user() {
        let form = SignupForm {
            full_name: "New User".to_string(),
            email: "new@loopzy.com".to_string(),
            phone_number: "5550100".to_string(),
            username: "newbie".to_string(),
            password: "Secret123".to_string(),
            confirm_password: "Secret123".to_string(),
            agreed_to_terms: true,
        };
        let user = instant_service().sign_up(&form).await.unwrap();
        assert_eq!(user.username, "newbie");
        assert_eq!(user.email, "new@loopzy.com");
        assert!(!user.id.is_empty());
    }

    #[tokio::test]
    async fn test_reset_code_checks_target_for_method() {
        let service = instant_service();
        assert!(
            service
                .send_reset_code(ResetMethod::Email, "someone@loopzy.com")
                .await
                .is_ok()
        );
        assert!(service.send_reset_code(ResetMethod::Phone, "5550100").await.is_ok());
        assert_eq!(
            service.send_reset_code(ResetMethod::Email, "5550100").await,
            Err(AuthError::Validation(ValidationError::InvalidEmail))
        );
        assert_eq!(
            service.send_reset_code(ResetMethod::Phone, "").await,
            Err(AuthError::Validation(ValidationError::MissingResetTarget(
                ResetMethod::Phone
            )))
        );
    }
}
