//! Theme control
//!
//! `ThemeMode` is a three-state cycle. Storage of the chosen mode belongs to
//! whatever implements [`ThemeProvider`] (local storage in the browser, a
//! profile field on the server).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ParseThemeError;

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// All modes in cycle order
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// The mode a toggle moves to
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Human-readable label for selectors
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// Source of truth for the active theme
pub trait ThemeProvider {
    fn theme(&self) -> ThemeMode;
    fn set_theme(&mut self, mode: ThemeMode);
}

/// Button that cycles light → dark → system
pub struct ThemeToggle;

impl ThemeToggle {
    /// Advance the provider to the next mode and return it
    pub fn toggle<P: ThemeProvider + ?Sized>(provider: &mut P) -> ThemeMode {
        let next = provider.theme().next();
        provider.set_theme(next);
        next
    }
}

/// A selectable option in the theme dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    pub mode: ThemeMode,
    pub label: &'static str,
    pub selected: bool,
}

/// Dropdown that jumps straight to a mode
pub struct ThemeSelect;

impl ThemeSelect {
    /// Options in cycle order with the active one marked
    pub fn options<P: ThemeProvider + ?Sized>(provider: &P) -> Vec<ThemeOption> {
        let current = provider.theme();
        ThemeMode::ALL
            .iter()
            .map(|&mode| ThemeOption {
                mode,
                label: mode.label(),
                selected: mode == current,
            })
            .collect()
    }

    pub fn select<P: ThemeProvider + ?Sized>(provider: &mut P, mode: ThemeMode) {
        provider.set_theme(mode);
    }

    /// Select from a raw option value, leaving the theme alone if it does not parse
    pub fn select_value<P: ThemeProvider + ?Sized>(
        provider: &mut P,
        value: &str,
    ) -> Result<ThemeMode, ParseThemeError> {
        let mode = value.parse()?;
        provider.set_theme(mode);
        Ok(mode)
    }
}
