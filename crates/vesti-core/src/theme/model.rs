//! Theme domain model.
//!
//! A `Theme` is a complete set of named color tokens. Themes are only ever
//! constructed whole via [`Theme::for_mode`], so a consumer can never observe
//! a partially applied palette.

use serde::{Deserialize, Serialize};

/// The user-selectable presentation mode, persisted across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A complete, internally consistent set of presentation tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub primary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_light: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
}

impl Theme {
    /// Returns the full palette for the given mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                mode,
                primary: "#007bff",
                background: "#ffffff",
                surface: "#f8f9fa",
                card: "#ffffff",
                text: "#333333",
                text_secondary: "#666666",
                text_light: "#999999",
                border: "#e9ecef",
                success: "#28a745",
                error: "#dc3545",
                warning: "#ffc107",
                info: "#17a2b8",
            },
            ThemeMode::Dark => Self {
                mode,
                primary: "#66b3ff",
                background: "#121212",
                surface: "#1e1e1e",
                card: "#2d2d2d",
                text: "#ffffff",
                text_secondary: "#b3b3b3",
                text_light: "#808080",
                border: "#404040",
                success: "#4caf50",
                error: "#f44336",
                warning: "#ff9800",
                info: "#2196f3",
            },
        }
    }
}
