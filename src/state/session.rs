#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Parameters carried by the product route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductParams {
    pub post_id: String,
}

/// Where the app is. Route parameters live inside the variant that needs
/// them, so a route without parameters never carries stale ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Login,
    Register,
    Home,
    Product(ProductParams),
    Notifications,
    Profile,
    Orders,
}

impl Route {
    #[must_use]
    pub fn product(post_id: impl Into<String>) -> Self {
        Self::Product(ProductParams { post_id: post_id.into() })
    }

    #[must_use]
    pub fn name(&self) -> RouteName {
        match self {
            Self::Login => RouteName::Login,
            Self::Register => RouteName::Register,
            Self::Home => RouteName::Home,
            Self::Product(_) => RouteName::Product,
            Self::Notifications => RouteName::Notifications,
            Self::Profile => RouteName::Profile,
            Self::Orders => RouteName::Orders,
        }
    }

    #[must_use]
    pub fn is_protected(&self) -> bool {
        self.name().is_protected()
    }
}

/// Parameter-less route discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Login,
    Register,
    Home,
    Product,
    Notifications,
    Profile,
    Orders,
}

impl RouteName {
    pub const ALL: [Self; 7] = [
        Self::Login,
        Self::Register,
        Self::Home,
        Self::Product,
        Self::Notifications,
        Self::Profile,
        Self::Orders,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Home => "home",
            Self::Product => "product",
            Self::Notifications => "notifications",
            Self::Profile => "profile",
            Self::Orders => "orders",
        }
    }

    /// Routes that only an authenticated session may render.
    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Notifications | Self::Profile | Self::Orders)
    }
}

/// The three mutually exclusive session modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    Unauthenticated,
    Guest,
    Authenticated,
}

/// Navigation and session state: where the user is and who they are.
///
/// Provided to views as `RwSignal<SessionState>`. Fields are private so the
/// transitions below are the only way to change them; `authenticated` and
/// `guest` are never both true.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    route: Route,
    authenticated: bool,
    guest: bool,
    user: Option<User>,
}

impl SessionState {
    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn route_name(&self) -> RouteName {
        self.route.name()
    }

    #[must_use]
    pub fn product_params(&self) -> Option<&ProductParams> {
        match &self.route {
            Route::Product(params) => Some(params),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.guest
    }

    /// The signed-in user. Always `None` outside an authenticated session.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        if self.authenticated { self.user.as_ref() } else { None }
    }

    #[must_use]
    pub fn mode(&self) -> SessionMode {
        match (self.authenticated, self.guest) {
            (true, _) => SessionMode::Authenticated,
            (false, true) => SessionMode::Guest,
            (false, false) => SessionMode::Unauthenticated,
        }
    }

    /// Move to `route`. Access control is not checked here; see
    /// [`crate::state::access::resolve_page`].
    pub fn navigate(&mut self, route: Route) {
        log::debug!("navigate {} -> {}", self.route.name().as_str(), route.name().as_str());
        self.route = route;
    }

    /// Enter or leave the authenticated mode.
    ///
    /// Entering clears guest mode and leaves the login/register pages for
    /// home; any other route is kept. Leaving drops the user and returns to
    /// login.
    pub fn set_authenticated(&mut self, value: bool) {
        self.authenticated = value;
        if value {
            self.guest = false;
            if matches!(self.route, Route::Login | Route::Register) {
                self.navigate(Route::Home);
            }
        } else {
            self.user = None;
            self.navigate(Route::Login);
        }
        log::debug!("session mode {:?}", self.mode());
    }

    /// Enter or leave guest mode. Both directions navigate: entering lands
    /// on home, leaving lands on login.
    pub fn set_guest(&mut self, value: bool) {
        self.guest = value;
        if value {
            self.authenticated = false;
            self.navigate(Route::Home);
        } else {
            self.navigate(Route::Login);
        }
        log::debug!("session mode {:?}", self.mode());
    }

    /// Replace the stored user verbatim.
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Header "log out": exits guest mode for guests, signs out otherwise.
    pub fn log_out(&mut self) {
        if self.guest {
            self.set_guest(false);
        } else {
            self.set_authenticated(false);
        }
    }

    /// Store `user` and enter the authenticated mode in one step, the way
    /// every successful login or registration finishes.
    pub fn sign_in(&mut self, user: User) {
        log::info!("signed in as {}", user.id);
        self.set_user(Some(user));
        self.set_authenticated(true);
    }
}
