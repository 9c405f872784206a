//! Full-screen chart viewer.
//!
//! Blocks until the user closes the window with `q`, `Esc`, or `Enter`.

use std::io::{self, stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use niftyscan_core::MoverBar;

use crate::movers_chart::MoversChart;
use crate::theme::Theme;

/// Show the gainers/losers chart until the user dismisses it.
pub fn show_movers(gainers: &[MoverBar], losers: &[MoverBar]) -> Result<()> {
    // Restore the terminal before the panic message is printed.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let theme = Theme::default();
    let result = run_viewer(&mut terminal, gainers, losers, &theme);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_viewer(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    gainers: &[MoverBar],
    losers: &[MoverBar],
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|f| f.render_widget(MoversChart::new(gainers, losers, theme), f.area()))?;

        // Resize and other events just trigger a redraw.
        if let Event::Key(key) = event::read()? {
            if closes_viewer(&key) {
                return Ok(());
            }
        }
    }
}

/// Key presses that dismiss the chart.
pub fn closes_viewer(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && matches!(
            key.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_close_keys() {
        assert!(closes_viewer(&press(KeyCode::Char('q'))));
        assert!(closes_viewer(&press(KeyCode::Esc)));
        assert!(closes_viewer(&press(KeyCode::Enter)));
    }

    #[test]
    fn test_other_keys_keep_viewer_open() {
        assert!(!closes_viewer(&press(KeyCode::Char('j'))));
        assert!(!closes_viewer(&press(KeyCode::Left)));
    }

    #[test]
    fn test_release_does_not_close() {
        let mut key = press(KeyCode::Esc);
        key.kind = KeyEventKind::Release;
        assert!(!closes_viewer(&key));
    }
}
