//! Colors for the desktop app, modelled on the Bootswatch "journal" theme

use ptak_core::Severity;

#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_window: &'static str,
    pub bg_tab: &'static str,
    pub bg_tab_active: &'static str,
    pub bg_overlay: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub info: &'static str,
    pub primary: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub on_accent: &'static str,
}

pub const JOURNAL: ColorPalette = ColorPalette {
    bg_window: "#ffffff",
    bg_tab: "#f7f7f9",
    bg_tab_active: "#ffffff",
    bg_overlay: "rgba(0, 0, 0, 0.35)",
    text_primary: "#222222",
    text_muted: "#777777",
    border: "#dddddd",
    info: "#369",
    primary: "#eb6864",
    success: "#22b24c",
    warning: "#f5e625",
    danger: "#f57a00",
    on_accent: "#ffffff",
};

/// Button flavours used by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Info,
    Primary,
    Success,
}

impl ColorPalette {
    pub const fn button(&self, style: ButtonStyle) -> &'static str {
        match style {
            ButtonStyle::Info => self.info,
            ButtonStyle::Primary => self.primary,
            ButtonStyle::Success => self.success,
        }
    }

    /// Accent bar color for a dialog of the given severity.
    pub const fn severity(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.danger,
        }
    }
}
