//! Color themes and styling for the calculator.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::core::Accent;

/// Display mode for the calculator. Cosmetic only: never touches the data
/// model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Dark
    }
}

/// Color scheme resolved from the display mode.
pub struct Theme {
    /// Accent for the focused field and the title.
    pub primary: Color,
    /// Normal text.
    pub text: Color,
    /// Labels, hints, placeholders.
    pub muted: Color,
    /// Count metrics.
    pub info: Color,
    /// Monetary metrics.
    pub success: Color,
    /// ROI and daily budget.
    pub warning: Color,
    /// Screen background.
    pub background: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
            info: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            background: Color::Reset,
        }
    }

    pub fn light() -> Self {
        Self {
            primary: Color::Blue,
            text: Color::Black,
            muted: Color::Gray,
            info: Color::Blue,
            success: Color::Green,
            warning: Color::Magenta,
            background: Color::White,
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    pub fn value_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn stale_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for an output card's value.
    pub fn accent_style(&self, accent: Accent) -> Style {
        let color = match accent {
            Accent::Info => self.info,
            Accent::Success => self.success,
            Accent::Warning => self.warning,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
