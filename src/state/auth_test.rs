use super::*;

fn filled_registration() -> RegistrationForm {
    RegistrationForm {
        email: "new@example.com".into(),
        username: "newbie".into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
        agree_terms: true,
        ..RegistrationForm::default()
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn auth_state_rejects_double_submit() {
    let mut state = AuthState::default();
    assert!(state.begin());
    assert!(!state.begin());
    state.finish();
    assert!(state.begin());
}

// =============================================================
// OtpForm
// =============================================================

#[test]
fn otp_form_defaults_to_vietnam_code() {
    let form = OtpForm::default();
    assert_eq!(form.country_code, "+84");
    assert!(!form.otp_sent);
    assert_eq!(form.countdown, 0);
}

#[test]
fn otp_form_needs_phone_before_sending() {
    let mut form = OtpForm::default();
    assert!(!form.can_send());
    assert_eq!(form.validate_phone(), Err(FormError::MissingPhone));
    form.phone = "  ".into();
    assert!(!form.can_send());
    form.phone = "901234567".into();
    assert!(form.validate_phone().is_ok());
    assert_eq!(form.full_number(), "+84 901234567");
}

#[test]
fn otp_code_keeps_only_six_digits() {
    let mut form = OtpForm::default();
    form.set_code("12a3-45 678");
    assert_eq!(form.code, "123456");
}

#[test]
fn otp_verify_requires_full_code() {
    let mut form = OtpForm::default();
    form.set_code("123");
    assert_eq!(form.verify(), Err(FormError::OtpIncomplete { expected: 6 }));
    form.set_code("123456");
    assert!(form.verify().is_ok());
}

#[test]
fn otp_countdown_runs_sixty_ticks() {
    let mut form = OtpForm::default();
    form.mark_sent();
    assert!(form.otp_sent);
    assert_eq!(form.countdown, 60);
    let mut ticks = 1;
    while form.tick() {
        ticks += 1;
    }
    assert_eq!(ticks, 60);
    assert_eq!(form.countdown, 0);
    assert!(!form.tick());
}

#[test]
fn otp_resend_blocked_during_cooldown() {
    let mut form = OtpForm::default();
    form.mark_sent();
    form.tick();
    assert_eq!(form.request_resend(), Err(FormError::ResendCooldown { remaining: 59 }));
    form.countdown = 0;
    assert!(form.request_resend().is_ok());
    assert_eq!(form.countdown, 60);
}

#[test]
fn otp_reset_returns_to_phone_step() {
    let mut form = OtpForm::default();
    form.phone = "901234567".into();
    form.mark_sent();
    form.set_code("123456");
    form.reset();
    assert!(!form.otp_sent);
    assert!(form.code.is_empty());
    assert_eq!(form.countdown, 0);
    assert_eq!(form.phone, "901234567");
}

#[test]
fn sanitize_code_respects_custom_length() {
    assert_eq!(sanitize_code("98765", 4), "9876");
    assert_eq!(sanitize_code("", 6), "");
}

// =============================================================
// PasswordLogin
// =============================================================

#[test]
fn password_login_requires_both_fields() {
    let mut form = PasswordLogin::default();
    assert_eq!(form.validate(), Err(FormError::MissingCredentials));
    form.username = "demo".into();
    assert_eq!(form.validate(), Err(FormError::MissingCredentials));
    form.password = "x".into();
    assert!(form.validate().is_ok());
}

// =============================================================
// RegistrationForm
// =============================================================

#[test]
fn registration_checks_terms_first() {
    let form =
        RegistrationForm { agree_terms: false, password: "a".into(), ..filled_registration() };
    assert_eq!(form.validate(&AuthRules::default()), Err(FormError::TermsNotAccepted));
}

#[test]
fn registration_checks_confirmation_before_length() {
    let form = RegistrationForm {
        password: "abc".into(),
        confirm_password: "abd".into(),
        ..filled_registration()
    };
    assert_eq!(form.validate(&AuthRules::default()), Err(FormError::PasswordMismatch));
}

#[test]
fn registration_rejects_short_password() {
    let form = RegistrationForm {
        password: "abc".into(),
        confirm_password: "abc".into(),
        ..filled_registration()
    };
    assert_eq!(form.validate(&AuthRules::default()), Err(FormError::PasswordTooShort { min: 6 }));
}

#[test]
fn registration_accepts_valid_form() {
    assert!(filled_registration().validate(&AuthRules::default()).is_ok());
}

#[test]
fn registration_display_name_falls_back_to_username() {
    let mut form = filled_registration();
    assert_eq!(form.display_name(), "newbie");
    form.full_name = "Nguyen Van A".into();
    assert_eq!(form.display_name(), "Nguyen Van A");
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn auth_tabs_start_on_phone() {
    assert_eq!(AuthTab::default(), AuthTab::Phone);
    let labels: Vec<_> = AuthTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Phone", "Account", "Other"]);
}
