//! Colour tokens for the movers chart.
//!
//! Gainers are drawn green and losers red. Axis chrome stays muted so the
//! bars carry the contrast.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Gainer bars
    pub gainer: Color,
    /// Loser bars
    pub loser: Color,
    /// Chart title and border
    pub accent: Color,
    /// Axis lines, tick labels, hints
    pub muted: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            gainer: Color::Green,
            loser: Color::Red,
            accent: Color::Cyan,
            muted: Color::Rgb(100, 149, 237),
            text: Color::White,
        }
    }
}

impl Theme {
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn axis(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text)
    }
}
