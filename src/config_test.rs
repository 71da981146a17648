use super::*;

// =============================================================
// parse_millis
// =============================================================

#[test]
fn parse_millis_uses_default_when_absent() {
    assert_eq!(parse_millis(None, 1000), 1000);
}

#[test]
fn parse_millis_accepts_trimmed_number() {
    assert_eq!(parse_millis(Some(" 250 "), 1000), 250);
}

#[test]
fn parse_millis_rejects_garbage() {
    assert_eq!(parse_millis(Some("fast"), 1000), 1000);
    assert_eq!(parse_millis(Some("-5"), 1000), 1000);
}

// =============================================================
// MockLatency
// =============================================================

#[test]
fn mock_latency_defaults_match_simulated_round_trips() {
    let latency = MockLatency::default();
    assert_eq!(latency.request(), Duration::from_millis(1000));
    assert_eq!(latency.oauth(), Duration::from_millis(1500));
    assert_eq!(latency.tick(), Duration::from_secs(1));
}

#[test]
fn mock_latency_instant_is_all_zero() {
    let latency = MockLatency::instant();
    assert_eq!(latency.request(), Duration::ZERO);
    assert_eq!(latency.oauth(), Duration::ZERO);
    assert_eq!(latency.tick(), Duration::ZERO);
}

// =============================================================
// AuthRules
// =============================================================

#[test]
fn auth_rules_defaults() {
    let rules = AuthRules::default();
    assert_eq!(rules.otp_length, 6);
    assert_eq!(rules.min_password_len, 6);
    assert_eq!(rules.resend_cooldown_secs, 60);
}

#[test]
fn default_country_code_is_offered() {
    assert!(COUNTRY_CODES.contains(&DEFAULT_COUNTRY_CODE));
}
