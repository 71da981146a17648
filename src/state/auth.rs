#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::{AuthRules, DEFAULT_COUNTRY_CODE};
use crate::error::FormError;

/// Submission state shared by the auth forms on one page.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub loading: bool,
}

impl AuthState {
    /// Mark a submission as started. Returns `false` if one is already in
    /// flight, in which case the caller must not submit again.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish(&mut self) {
        self.loading = false;
    }
}

/// Which tab of the login/register card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Phone,
    Account,
    Other,
}

impl AuthTab {
    pub const ALL: [Self; 3] = [Self::Phone, Self::Account, Self::Other];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::Account => "Account",
            Self::Other => "Other",
        }
    }
}

/// Phone + one-time-code flow.
///
/// Two steps: enter a phone number and request a code, then type the code.
/// After a code is sent a countdown blocks resending until it reaches zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpForm {
    pub country_code: String,
    pub phone: String,
    pub otp_sent: bool,
    pub code: String,
    pub countdown: u32,
    rules: AuthRules,
}

impl Default for OtpForm {
    fn default() -> Self {
        Self::new(AuthRules::default())
    }
}

impl OtpForm {
    #[must_use]
    pub fn new(rules: AuthRules) -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_owned(),
            phone: String::new(),
            otp_sent: false,
            code: String::new(),
            countdown: 0,
            rules,
        }
    }

    /// Full number as shown in the "code sent to" line.
    #[must_use]
    pub fn full_number(&self) -> String {
        format!("{} {}", self.country_code, self.phone.trim())
    }

    /// Whether the send button is enabled.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.phone.trim().is_empty()
    }

    /// Check the phone step before the send request goes out.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingPhone`] when the phone field is blank.
    pub fn validate_phone(&self) -> Result<(), FormError> {
        if self.can_send() { Ok(()) } else { Err(FormError::MissingPhone) }
    }

    /// Store user input for the code field, keeping only digits up to the
    /// code length.
    pub fn set_code(&mut self, raw: &str) {
        self.code = sanitize_code(raw, self.rules.otp_length);
    }

    /// Record that a code was sent and start the resend cooldown.
    pub fn mark_sent(&mut self) {
        self.otp_sent = true;
        self.countdown = self.rules.resend_cooldown_secs;
    }

    /// Advance the cooldown by one second. Returns `true` while it is still
    /// running afterwards.
    pub fn tick(&mut self) -> bool {
        self.countdown = self.countdown.saturating_sub(1);
        self.countdown > 0
    }

    /// Restart the cooldown for a resend.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ResendCooldown`] while the previous cooldown is
    /// still running.
    pub fn request_resend(&mut self) -> Result<(), FormError> {
        if self.countdown > 0 {
            return Err(FormError::ResendCooldown { remaining: self.countdown });
        }
        self.countdown = self.rules.resend_cooldown_secs;
        Ok(())
    }

    /// Check the code step before verification.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::OtpIncomplete`] unless the code has exactly the
    /// configured number of digits.
    pub fn verify(&self) -> Result<(), FormError> {
        if self.code.len() == self.rules.otp_length {
            Ok(())
        } else {
            Err(FormError::OtpIncomplete { expected: self.rules.otp_length })
        }
    }

    /// Go back to the phone step ("change number").
    pub fn reset(&mut self) {
        self.otp_sent = false;
        self.code.clear();
        self.countdown = 0;
    }
}

/// Keep ASCII digits only, truncated to `max` characters.
#[must_use]
pub fn sanitize_code(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Username/password login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordLogin {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
    pub show_password: bool,
}

impl PasswordLogin {
    /// # Errors
    ///
    /// Returns [`FormError::MissingCredentials`] when either field is blank.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        Ok(())
    }
}

/// Account registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub agree_terms: bool,
    pub show_password: bool,
    pub show_confirm_password: bool,
}

impl RegistrationForm {
    /// Validate in display order: terms, confirmation, length.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`FormError`].
    pub fn validate(&self, rules: &AuthRules) -> Result<(), FormError> {
        if !self.agree_terms {
            return Err(FormError::TermsNotAccepted);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if self.password.chars().count() < rules.min_password_len {
            return Err(FormError::PasswordTooShort { min: rules.min_password_len });
        }
        Ok(())
    }

    /// Name shown for the new account: full name, or username when blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = self.full_name.trim();
        if full.is_empty() { self.username.trim().to_owned() } else { full.to_owned() }
    }
}
