//! Style palette for the controls menu.

use ratatui::style::{Color, Modifier, Style};

/// Named styles used by the menu renderer.
#[derive(Debug, Clone, Copy)]
pub struct MenuTheme {
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
    pub warning: Color,
    pub pending: Color,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            text: Color::White,
            dim: Color::DarkGray,
            warning: Color::Yellow,
            pending: Color::Magenta,
        }
    }
}

impl MenuTheme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Accent + bold.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// A slot awaiting input.
    pub fn pending(&self) -> Style {
        Style::default()
            .fg(self.pending)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    }
}
