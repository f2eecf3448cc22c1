//! Pantry Tracker WASM Module
//!
//! Browser bindings for the theme control and the layout auth gates.
//! The JS side owns storage and routing; these types only decide.

use pantry_tracker_shared::gate::{AuthGate, AuthState, GateKind, GateView, Navigator};
use pantry_tracker_shared::theme::{ThemeMode, ThemeProvider, ThemeSelect, ThemeToggle};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Next mode in the light → dark → system cycle
///
/// Unknown names restart the cycle from `system`.
#[wasm_bindgen]
pub fn next_theme(current: &str) -> String {
    current
        .parse::<ThemeMode>()
        .unwrap_or_default()
        .next()
        .to_string()
}

#[derive(Serialize)]
struct ThemeOptionJson {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

/// Theme state mirrored from the page's theme provider
#[wasm_bindgen]
pub struct ThemeCycle {
    mode: ThemeMode,
}

impl ThemeProvider for ThemeCycle {
    fn theme(&self) -> ThemeMode {
        self.mode
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }
}

#[wasm_bindgen]
impl ThemeCycle {
    #[wasm_bindgen(constructor)]
    pub fn new(initial: &str) -> ThemeCycle {
        ThemeCycle {
            mode: initial.parse().unwrap_or_default(),
        }
    }

    pub fn current(&self) -> String {
        self.mode.to_string()
    }

    /// Advance and return the new mode
    pub fn toggle(&mut self) -> String {
        ThemeToggle::toggle(self).to_string()
    }

    /// Jump to `value`; returns false and keeps the mode if it is unknown
    pub fn select(&mut self, value: &str) -> bool {
        ThemeSelect::select_value(self, value).is_ok()
    }

    /// Dropdown options as JSON: `[{value, label, selected}]`
    pub fn options_json(&self) -> String {
        let options: Vec<ThemeOptionJson> = ThemeSelect::options(self)
            .into_iter()
            .map(|o| ThemeOptionJson {
                value: o.mode.as_str(),
                label: o.label,
                selected: o.selected,
            })
            .collect();
        serde_json::to_string(&options).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Collects the path the gate wants to navigate to
#[derive(Default)]
struct PendingRedirect(Option<String>);

impl Navigator for PendingRedirect {
    fn push(&mut self, path: &str) {
        self.0 = Some(path.to_string());
    }
}

/// Auth gate for a layout; JS performs the returned redirect
#[wasm_bindgen]
pub struct AuthGateBinding {
    gate: AuthGate,
    redirect: Option<String>,
}

#[wasm_bindgen]
impl AuthGateBinding {
    /// Gate for the dashboard layout
    pub fn dashboard() -> AuthGateBinding {
        AuthGateBinding {
            gate: AuthGate::dashboard(),
            redirect: None,
        }
    }

    /// Gate for the public landing page
    pub fn landing() -> AuthGateBinding {
        AuthGateBinding {
            gate: AuthGate::landing(),
            redirect: None,
        }
    }

    /// Which layout this gate protects: "dashboard" or "landing"
    pub fn kind(&self) -> String {
        match self.gate.kind() {
            GateKind::Dashboard => "dashboard",
            GateKind::Landing => "landing",
        }
        .to_string()
    }

    /// Evaluate the auth state; returns "loading", "redirecting" or "content"
    pub fn evaluate(&mut self, loading: bool, has_user: bool) -> String {
        let state = AuthState {
            loading,
            user: has_user.then_some(()),
        };
        let mut navigator = PendingRedirect::default();
        let view = self.gate.evaluate(&state, &mut navigator);
        self.redirect = navigator.0;

        match view {
            GateView::Loading => "loading",
            GateView::Redirecting => "redirecting",
            GateView::Content => "content",
        }
        .to_string()
    }

    /// Path to navigate to after the last `evaluate`, if a new redirect was issued
    pub fn take_redirect(&mut self) -> Option<String> {
        self.redirect.take()
    }
}
