pub mod header;
pub mod help;
pub mod process_table;
pub mod statusbar;
pub mod theme;

use std::rc::Rc;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::App;
use crate::ui::theme::Theme;

const LEFT_MARGIN: u16 = 5;
const TABLE_CHUNK: usize = 3;
/// Column header plus the blank line under it.
const TABLE_HEADER_ROWS: u16 = 2;

pub fn draw(frame: &mut Frame, app: &App) {
    draw_with_theme(frame, app, &Theme::default());
}

/// How many process rows fit in the table on a screen of this size.
pub fn table_rows(area: Rect) -> usize {
    usize::from(split(area)[TABLE_CHUNK].height.saturating_sub(TABLE_HEADER_ROWS))
}

fn split(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area)
}

pub fn draw_with_theme(frame: &mut Frame, app: &App, theme: &Theme) {
    let chunks = split(frame.area());

    header::render(frame, chunks[1], app.load, theme);
    process_table::render(
        frame,
        indent(chunks[TABLE_CHUNK]),
        app.visible(),
        app.cursor.selected(),
        theme,
    );
    statusbar::render(frame, indent(chunks[4]), app.active_status(), theme);
    help::render(frame, chunks[6], &app.keybinds, theme);
}

fn indent(area: Rect) -> Rect {
    let margin = LEFT_MARGIN.min(area.width);
    Rect {
        x: area.x + margin,
        width: area.width - margin,
        ..area
    }
}
