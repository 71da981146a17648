//! Centralized access control.
//!
//! DESIGN
//! ======
//! The session store records whatever route it is asked for. Deciding what
//! is actually rendered happens once, here, in the root component. Pages
//! never check `is_guest` themselves to bounce the user elsewhere.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use super::session::{Route, SessionMode, SessionState};

/// The page the root component renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Home,
    Product,
    Notifications,
    Profile,
    Orders,
}

impl Page {
    fn of(route: &Route) -> Self {
        match route {
            Route::Login => Self::Login,
            Route::Register => Self::Register,
            Route::Home => Self::Home,
            Route::Product(_) => Self::Product,
            Route::Notifications => Self::Notifications,
            Route::Profile => Self::Profile,
            Route::Orders => Self::Orders,
        }
    }
}

/// Decide which page to render for the current session.
///
/// - signed out: register if asked for, otherwise login
/// - guest: protected routes show register
/// - authenticated: whatever the route says
#[must_use]
pub fn resolve_page(state: &SessionState) -> Page {
    let route = state.route();
    match state.mode() {
        SessionMode::Unauthenticated => {
            if matches!(route, Route::Register) {
                Page::Register
            } else {
                Page::Login
            }
        }
        SessionMode::Guest if route.is_protected() => Page::Register,
        SessionMode::Guest | SessionMode::Authenticated => Page::of(route),
    }
}

/// The route a link to `target` should navigate to in this session.
///
/// Guests following a link to a protected page are sent to register
/// directly, so that signing up afterwards lands them on home.
#[must_use]
pub fn guard_destination(state: &SessionState, target: Route) -> Route {
    if state.is_guest() && target.is_protected() { Route::Register } else { target }
}
