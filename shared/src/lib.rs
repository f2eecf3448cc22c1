//! Pantry Tracker Shared Library
//!
//! This crate contains shared types, models, and UI state machines used
//! across the backend, the API client, and the WASM bindings.

pub mod errors;
pub mod gate;
pub mod models;
pub mod theme;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use gate::{AuthGate, AuthState, GateKind, GateView, Navigator};
pub use models::*;
pub use theme::{ThemeMode, ThemeProvider, ThemeSelect, ThemeToggle};
pub use types::*;
