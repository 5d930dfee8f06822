use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::ResolvedKeybinds;
use crate::ui::theme::Theme;

pub fn help_text(keybinds: &ResolvedKeybinds) -> String {
    format!(
        " [Esc]/[{}] Quit | [\u{2191}\u{2193}] Navigate | [{}] Terminate process ",
        key_label(keybinds.quit),
        key_label(keybinds.terminate)
    )
}

/// Static centered help line.
pub fn render(frame: &mut Frame, area: Rect, keybinds: &ResolvedKeybinds, theme: &Theme) {
    let line = Line::from(Span::styled(help_text(keybinds), theme.help));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        _ => "?".to_string(),
    }
}
