// Authentication stub. Credentials are never verified; both entry points
// resolve after a fixed delay and fabricate the session user. This gates
// route access only and is not a security boundary.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::sleep;
use tracing::info;

use crate::records::User;
use crate::repository::UserRepository;
use crate::store::{SessionStore, StoreError, KEY_IS_LOGGED_IN};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("could not save the session user")]
    Storage(#[from] StoreError),
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    // Simulated backend latency for login/register.
    pub delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub matric_number: String,
    pub faculty: Option<String>,
    pub department: Option<String>,
    pub level: Option<String>,
}

pub struct AuthService {
    store: Arc<SessionStore>,
    users: Arc<dyn UserRepository>,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(store: Arc<SessionStore>, users: Arc<dyn UserRepository>, config: AuthConfig) -> Self {
        Self {
            store,
            users,
            config,
        }
    }

    // Always succeeds: the stub fabricates a fixed student profile around
    // the caller's email. The password is ignored.
    pub async fn login(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        sleep(Duration::from_millis(self.config.delay_ms)).await;

        let user = User {
            id: "123".to_string(),
            name: "John Doe".to_string(),
            email: email.to_string(),
            matric_number: "20/03SEN078".to_string(),
            role: "student".to_string(),
            faculty: None,
            department: None,
            level: None,
        };

        self.users.replace(user.clone()).await?;
        self.store.set(KEY_IS_LOGGED_IN, "true".to_string());
        info!(email, "login succeeded");
        Ok(user)
    }

    // The password/confirm comparison is the one client-side validation in
    // the flow; it fails before the simulated backend call and before any
    // store write.
    pub async fn register(&self, form: RegistrationForm) -> Result<User, AuthError> {
        if form.password != form.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        sleep(Duration::from_millis(self.config.delay_ms)).await;

        let user = User {
            id: "123".to_string(),
            name: form.full_name,
            email: form.email,
            matric_number: form.matric_number,
            role: "student".to_string(),
            faculty: form.faculty,
            department: form.department,
            level: form.level,
        };

        self.users.replace(user.clone()).await?;
        self.store.set(KEY_IS_LOGGED_IN, "true".to_string());
        info!(email = %user.email, "registration succeeded");
        Ok(user)
    }

    // Clears the login flag and the session user only; accommodation
    // requests and payments survive logout.
    pub async fn logout(&self) {
        self.store.remove(KEY_IS_LOGGED_IN);
        self.users.clear().await;
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.get(KEY_IS_LOGGED_IN).as_deref() == Some("true")
    }

    pub async fn current_user(&self) -> Option<User> {
        if self.is_logged_in() {
            self.users.current().await
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SessionUserRepository;
    use crate::store::{KEY_REQUESTS, KEY_USER};

    fn service() -> (AuthService, Arc<SessionStore>) {
        let store = Arc::new(SessionStore::new());
        let users = Arc::new(SessionUserRepository::new(store.clone()));
        let service = AuthService::new(store.clone(), users, AuthConfig { delay_ms: 5 });
        (service, store)
    }

    fn sample_form() -> RegistrationForm {
        RegistrationForm {
            full_name: "Aisha Bello".to_string(),
            email: "aisha@student.alhikmah.edu.ng".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
            matric_number: "21/08CSC045".to_string(),
            faculty: Some("natural_sciences".to_string()),
            department: Some("computer_science".to_string()),
            level: Some("300".to_string()),
        }
    }

    #[tokio::test]
    async fn test_login_fabricates_the_stub_user() {
        let (service, _) = service();
        assert!(!service.is_logged_in());

        let user = service.login("john@example.com", "whatever").await.unwrap();
        assert_eq!(user.id, "123");
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.matric_number, "20/03SEN078");
        assert_eq!(user.email, "john@example.com");

        assert!(service.is_logged_in());
        assert_eq!(service.current_user().await.unwrap(), user);
    }

    #[tokio::test]
    async fn test_register_carries_the_form_fields() {
        let (service, _) = service();

        let user = service.register(sample_form()).await.unwrap();
        assert_eq!(user.name, "Aisha Bello");
        assert_eq!(user.matric_number, "21/08CSC045");
        assert_eq!(user.faculty.as_deref(), Some("natural_sciences"));
        assert_eq!(user.level.as_deref(), Some("300"));
        assert!(service.is_logged_in());
    }

    #[tokio::test]
    async fn test_password_mismatch_writes_nothing() {
        let (service, store) = service();

        let mut form = sample_form();
        form.confirm_password = "different".to_string();

        let result = service.register(form).await;
        assert!(matches!(result, Err(AuthError::PasswordMismatch)));
        assert!(!service.is_logged_in());
        assert!(store.get(KEY_USER).is_none());
    }

    #[tokio::test]
    async fn test_each_login_overwrites_the_session_user() {
        let (service, _) = service();

        service.register(sample_form()).await.unwrap();
        let user = service.login("john@example.com", "pw").await.unwrap();

        // The registered profile is gone; one user per session.
        assert_eq!(service.current_user().await.unwrap(), user);
        assert_eq!(user.name, "John Doe");
    }

    #[tokio::test]
    async fn test_logout_preserves_requests_and_payments() {
        let (service, store) = service();
        service.login("john@example.com", "pw").await.unwrap();
        store.set(KEY_REQUESTS, r#"[{"id":"r1"}]"#.to_string());

        service.logout().await;

        assert!(!service.is_logged_in());
        assert!(service.current_user().await.is_none());
        assert!(store.get(KEY_REQUESTS).is_some());
    }
}
