//! Simulated backend for the auth flows and marketplace data.
//!
//! Every auth call waits for its configured latency and then succeeds with
//! the mock user for that flow; no input other than local form validation is
//! ever rejected. Delays run under the caller's [`TaskGroup`], so a call
//! made by a view that has since been torn down resolves to
//! [`MockApiError::Cancelled`] and the caller skips its state update.

#[cfg(test)]
#[path = "mock_api_test.rs"]
mod mock_api_test;

use std::time::Duration;

use crate::config::MockLatency;
use crate::error::MockApiError;
use crate::net::fixtures;
use crate::net::types::{OAuthProvider, User};
use crate::state::auth::RegistrationForm;
use crate::state::product::ProductDetail;
use crate::util::task::{TaskGroup, scoped_tasks, sleep};

const DEMO_NAME: &str = "Demo User";
const DEMO_EMAIL: &str = "demo@example.com";
const NEW_USER_NAME: &str = "New User";
const NEW_USER_EMAIL: &str = "newuser@example.com";

/// Handle to the simulated API, scoped to one view's task group.
#[derive(Clone, Debug)]
pub struct MockApi {
    latency: MockLatency,
    tasks: TaskGroup,
}

impl MockApi {
    #[must_use]
    pub fn new(latency: MockLatency, tasks: TaskGroup) -> Self {
        Self { latency, tasks }
    }

    /// Handle for the current component, cancelled when it is disposed.
    #[must_use]
    pub fn for_view() -> Self {
        Self::new(leptos::prelude::expect_context::<MockLatency>(), scoped_tasks())
    }

    #[must_use]
    pub fn tasks(&self) -> &TaskGroup {
        &self.tasks
    }

    async fn delay(&self, duration: Duration) -> Result<(), MockApiError> {
        self.tasks.guard(sleep(duration)).await
    }

    /// Pretend to text a one-time code to `phone`.
    ///
    /// # Errors
    ///
    /// [`MockApiError::Cancelled`] if the owning view went away.
    pub async fn send_otp(&self, phone: &str) -> Result<(), MockApiError> {
        self.delay(self.latency.request()).await?;
        log::info!("mock OTP sent to {phone}");
        Ok(())
    }

    /// Sign in with a phone number and code.
    ///
    /// # Errors
    ///
    /// [`MockApiError::Cancelled`] if the owning view went away.
    pub async fn verify_otp(&self, phone: &str) -> Result<User, MockApiError> {
        self.delay(self.latency.request()).await?;
        Ok(phone_login_user(phone))
    }

    /// Sign in with username (or email) and password.
    ///
    /// # Errors
    ///
    /// [`MockApiError::Cancelled`] if the owning view went away.
    pub async fn login_with_password(&self, username: &str) -> Result<User, MockApiError> {
        self.delay(self.latency.request()).await?;
        Ok(password_login_user(username))
    }

    /// Sign in through a third-party provider.
    ///
    /// # Errors
    ///
    /// [`MockApiError::Cancelled`] if the owning view went away.
    pub async fn login_with_oauth(&self, provider: OAuthProvider) -> Result<User, MockApiError> {
        self.delay(self.latency.oauth()).await?;
        Ok(oauth_user(provider, false))
    }

    /// Create an account from a verified phone number.
    ///
    /// # Errors
    ///
    /// [`MockApiError::Cancelled`] if the owning view went away.
    pub async fn register_with_otp(&self, phone: &str) -> Result<User, MockApiError> {
        self.delay(self.latency.request()).await?;
        Ok(phone_registration_user(phone))
    }

    /// Create an account from the registration form.
    ///
    /// # Errors
    ///
    /// [`MockApiError::Cancelled`] if the owning view went away.
    pub async fn register_with_form(&self, form: &RegistrationForm) -> Result<User, MockApiError> {
        self.delay(self.latency.request()).await?;
        Ok(form_registration_user(form))
    }

    /// Create an account through a third-party provider.
    ///
    /// # Errors
    ///
    /// [`MockApiError::Cancelled`] if the owning view went away.
    pub async fn register_with_oauth(&self, provider: OAuthProvider) -> Result<User, MockApiError> {
        self.delay(self.latency.oauth()).await?;
        Ok(oauth_user(provider, true))
    }

    /// Look up the product page for a feed post.
    ///
    /// # Errors
    ///
    /// [`MockApiError::NotFound`] for an unknown post id.
    pub fn product(post_id: &str) -> Result<ProductDetail, MockApiError> {
        fixtures::product_detail(post_id)
            .ok_or_else(|| MockApiError::NotFound(format!("post {post_id}")))
    }
}

fn base_user(name: &str, email: &str) -> User {
    User { id: "1".to_owned(), name: name.to_owned(), email: email.to_owned(), ..User::default() }
}

#[must_use]
pub fn phone_login_user(phone: &str) -> User {
    User { phone: Some(phone.to_owned()), ..base_user(DEMO_NAME, DEMO_EMAIL) }
}

/// Demo user for a password login. The email is the username when the
/// username looks like one.
#[must_use]
pub fn password_login_user(username: &str) -> User {
    let email = if username.contains('@') { username } else { DEMO_EMAIL };
    User { username: Some(username.to_owned()), ..base_user(DEMO_NAME, email) }
}

#[must_use]
pub fn oauth_user(provider: OAuthProvider, is_new_user: bool) -> User {
    let (name, email) =
        if is_new_user { (NEW_USER_NAME, NEW_USER_EMAIL) } else { (DEMO_NAME, DEMO_EMAIL) };
    User { provider: Some(provider.label().to_owned()), is_new_user, ..base_user(name, email) }
}

#[must_use]
pub fn phone_registration_user(phone: &str) -> User {
    User { phone: Some(phone.to_owned()), is_new_user: true, ..base_user(NEW_USER_NAME, "") }
}

#[must_use]
pub fn form_registration_user(form: &RegistrationForm) -> User {
    User {
        username: Some(form.username.trim().to_owned()),
        is_new_user: true,
        ..base_user(&form.display_name(), form.email.trim())
    }
}
