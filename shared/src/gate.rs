//! Authentication gates for page layouts
//!
//! The dashboard layout sends anonymous visitors to the login page and the
//! public landing page sends signed-in users to the dashboard. Both read the
//! same `{loading, user}` auth state and differ only in which side redirects.

/// Where anonymous visitors are sent
pub const LOGIN_PATH: &str = "/login";
/// Where signed-in users are sent from the landing page
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Snapshot of the session as seen by the auth hook
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState<U> {
    pub loading: bool,
    pub user: Option<U>,
}

impl<U> AuthState<U> {
    /// Session still resolving
    pub fn loading() -> Self {
        Self {
            loading: true,
            user: None,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            loading: false,
            user: None,
        }
    }

    pub fn signed_in(user: U) -> Self {
        Self {
            loading: false,
            user: Some(user),
        }
    }
}

/// Which page the gate protects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    /// Requires a user, redirects to login otherwise
    Dashboard,
    /// Public page, redirects signed-in users to the dashboard
    Landing,
}

impl GateKind {
    /// Redirect target for a resolved session, if any
    pub fn redirect_for<U>(&self, state: &AuthState<U>) -> Option<&'static str> {
        if state.loading {
            return None;
        }
        match (self, state.user.is_some()) {
            (GateKind::Dashboard, false) => Some(LOGIN_PATH),
            (GateKind::Landing, true) => Some(DASHBOARD_PATH),
            _ => None,
        }
    }
}

/// What the layout renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    /// Loading indicator while the session resolves
    Loading,
    /// Nothing; a navigation is under way
    Redirecting,
    /// The wrapped page
    Content,
}

impl GateView {
    pub fn renders_content(&self) -> bool {
        matches!(self, GateView::Content)
    }
}

/// Client-side router
pub trait Navigator {
    fn push(&mut self, path: &str);
}

/// Stateful gate that navigates once per transition into a redirect
#[derive(Debug, Clone)]
pub struct AuthGate {
    kind: GateKind,
    redirected: bool,
}

impl AuthGate {
    pub fn new(kind: GateKind) -> Self {
        Self {
            kind,
            redirected: false,
        }
    }

    pub fn dashboard() -> Self {
        Self::new(GateKind::Dashboard)
    }

    pub fn landing() -> Self {
        Self::new(GateKind::Landing)
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Decide what to render for `state`, navigating if needed
    ///
    /// Re-rendering in the same redirecting state does not navigate again.
    pub fn evaluate<U, N: Navigator + ?Sized>(
        &mut self,
        state: &AuthState<U>,
        navigator: &mut N,
    ) -> GateView {
        match self.kind.redirect_for(state) {
            Some(path) => {
                if !self.redirected {
                    navigator.push(path);
                    self.redirected = true;
                }
                GateView::Redirecting
            }
            None => {
                self.redirected = false;
                if state.loading {
                    GateView::Loading
                } else {
                    GateView::Content
                }
            }
        }
    }
}
