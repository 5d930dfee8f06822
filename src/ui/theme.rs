use ratatui::style::{Color, Modifier, Style};

/// Text styles for every screen element.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub column_header: Style,
    pub row: Style,
    pub selected_row: Style,
    pub status_ok: Style,
    pub status_err: Style,
    pub help: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Yellow rows, white-on-blue selection, cyan help.
    pub fn classic() -> Self {
        Theme {
            header: Style::default()
                .fg(Color::Yellow)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
            column_header: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            row: Style::default().fg(Color::Yellow).bg(Color::Black),
            selected_row: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            status_ok: Style::default()
                .fg(Color::Green)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
            status_err: Style::default()
                .fg(Color::Red)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
            help: Style::default()
                .fg(Color::Cyan)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}
