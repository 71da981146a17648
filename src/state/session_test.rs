use super::*;

fn demo_user() -> User {
    User {
        id: "1".into(),
        name: "Demo User".into(),
        email: "demo@example.com".into(),
        ..User::default()
    }
}

fn on_route(route: Route) -> SessionState {
    let mut state = SessionState::default();
    state.navigate(route);
    state
}

#[derive(Clone, Debug)]
enum Op {
    Navigate(Route),
    Auth(bool),
    Guest(bool),
    User,
    LogOut,
}

fn apply(state: &mut SessionState, op: &Op) {
    match op {
        Op::Navigate(route) => state.navigate(route.clone()),
        Op::Auth(value) => state.set_authenticated(*value),
        Op::Guest(value) => state.set_guest(*value),
        Op::User => state.set_user(Some(demo_user())),
        Op::LogOut => state.log_out(),
    }
}

fn all_ops() -> Vec<Op> {
    vec![
        Op::Navigate(Route::Login),
        Op::Navigate(Route::Register),
        Op::Navigate(Route::Home),
        Op::Navigate(Route::product("42")),
        Op::Navigate(Route::Profile),
        Op::Auth(true),
        Op::Auth(false),
        Op::Guest(true),
        Op::Guest(false),
        Op::User,
        Op::LogOut,
    ]
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_default_is_unauthenticated_on_login() {
    let state = SessionState::default();
    assert_eq!(state.route(), &Route::Login);
    assert!(!state.is_authenticated());
    assert!(!state.is_guest());
    assert!(state.current_user().is_none());
    assert!(state.product_params().is_none());
    assert_eq!(state.mode(), SessionMode::Unauthenticated);
}

// =============================================================
// Route
// =============================================================

#[test]
fn route_names_round_trip_to_strings() {
    let names: Vec<&str> = RouteName::ALL.iter().map(|n| n.as_str()).collect();
    assert_eq!(
        names,
        ["login", "register", "home", "product", "notifications", "profile", "orders"]
    );
}

#[test]
fn only_notifications_profile_orders_are_protected() {
    let protected: Vec<RouteName> =
        RouteName::ALL.into_iter().filter(|n| n.is_protected()).collect();
    assert_eq!(protected, [RouteName::Notifications, RouteName::Profile, RouteName::Orders]);
    assert!(!Route::product("1").is_protected());
}

// =============================================================
// Invariants over operation sequences
// =============================================================

#[test]
fn authenticated_and_guest_never_both_true() {
    let ops = all_ops();
    let mut frontier = vec![SessionState::default()];
    for _depth in 0..4 {
        let mut next = Vec::with_capacity(frontier.len() * ops.len());
        for state in &frontier {
            for op in &ops {
                let mut s = state.clone();
                apply(&mut s, op);
                assert!(
                    !(s.is_authenticated() && s.is_guest()),
                    "both flags set after {op:?}: {s:?}"
                );
                if !s.is_authenticated() {
                    assert!(s.current_user().is_none(), "user visible while signed out: {s:?}");
                }
                next.push(s);
            }
        }
        next.dedup();
        frontier = next;
    }
}

// =============================================================
// set_authenticated
// =============================================================

#[test]
fn sign_in_from_login_goes_home() {
    let mut state = SessionState::default();
    state.set_authenticated(true);
    assert!(state.is_authenticated());
    assert!(!state.is_guest());
    assert_eq!(state.route(), &Route::Home);
}

#[test]
fn sign_in_from_register_goes_home() {
    let mut state = on_route(Route::Register);
    state.set_authenticated(true);
    assert_eq!(state.route(), &Route::Home);
    assert_eq!(state.mode(), SessionMode::Authenticated);
}

#[test]
fn sign_in_elsewhere_keeps_route() {
    let mut state = on_route(Route::product("7"));
    state.set_authenticated(true);
    assert_eq!(state.route(), &Route::product("7"));
    assert_eq!(state.product_params().map(|p| p.post_id.as_str()), Some("7"));
}

#[test]
fn sign_in_clears_guest_mode() {
    let mut state = SessionState::default();
    state.set_guest(true);
    state.navigate(Route::product("3"));
    state.set_authenticated(true);
    assert!(!state.is_guest());
    assert!(state.is_authenticated());
    assert_eq!(state.route(), &Route::product("3"));
}

#[test]
fn sign_out_returns_to_login_from_any_route() {
    for route in
        [Route::Home, Route::product("1"), Route::Notifications, Route::Profile, Route::Orders]
    {
        let mut state = SessionState::default();
        state.sign_in(demo_user());
        state.navigate(route);
        state.set_authenticated(false);
        assert!(!state.is_authenticated());
        assert_eq!(state.route(), &Route::Login);
        assert!(state.current_user().is_none());
    }
}

// =============================================================
// set_guest
// =============================================================

#[test]
fn enter_guest_from_any_state_goes_home() {
    let mut signed_in = SessionState::default();
    signed_in.sign_in(demo_user());
    signed_in.navigate(Route::Orders);

    for mut state in [SessionState::default(), on_route(Route::Register), signed_in] {
        state.set_guest(true);
        assert!(state.is_guest());
        assert!(!state.is_authenticated());
        assert_eq!(state.route(), &Route::Home);
    }
}

#[test]
fn enter_guest_is_idempotent() {
    let mut once = SessionState::default();
    once.set_guest(true);
    let mut twice = once.clone();
    twice.set_guest(true);
    assert_eq!(once, twice);
}

#[test]
fn leave_guest_returns_to_login() {
    let mut state = SessionState::default();
    state.set_guest(true);
    state.navigate(Route::product("2"));
    state.set_guest(false);
    assert!(!state.is_guest());
    assert_eq!(state.route(), &Route::Login);
    assert_eq!(state.mode(), SessionMode::Unauthenticated);
}

// =============================================================
// navigate / set_user
// =============================================================

#[test]
fn navigate_without_params_drops_previous_params() {
    let mut state = SessionState::default();
    state.navigate(Route::product("42"));
    assert_eq!(state.product_params(), Some(&ProductParams { post_id: "42".into() }));
    state.navigate(Route::Home);
    assert!(state.product_params().is_none());
}

#[test]
fn navigate_does_not_enforce_access() {
    let mut state = SessionState::default();
    state.set_guest(true);
    state.navigate(Route::Profile);
    assert_eq!(state.route_name(), RouteName::Profile);
}

#[test]
fn user_stored_before_sign_in_becomes_visible() {
    let mut state = SessionState::default();
    state.set_user(Some(demo_user()));
    assert!(state.current_user().is_none());
    state.set_authenticated(true);
    assert_eq!(state.current_user().map(|u| u.id.as_str()), Some("1"));
}

// =============================================================
// log_out
// =============================================================

#[test]
fn log_out_as_guest_exits_guest_mode() {
    let mut state = SessionState::default();
    state.set_guest(true);
    state.log_out();
    assert_eq!(state.mode(), SessionMode::Unauthenticated);
    assert_eq!(state.route(), &Route::Login);
}

#[test]
fn log_out_when_signed_in_signs_out() {
    let mut state = SessionState::default();
    state.sign_in(demo_user());
    state.log_out();
    assert_eq!(state.mode(), SessionMode::Unauthenticated);
    assert!(state.current_user().is_none());
}
