use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::system::snapshot::SystemLoad;
use crate::ui::theme::Theme;

pub fn header_text(load: SystemLoad) -> String {
    format!(
        " CPU: {:.1}%   MEM: {:.1}% ",
        load.cpu_percent, load.mem_percent
    )
}

/// Centered whole-system CPU/MEM line.
pub fn render(frame: &mut Frame, area: Rect, load: SystemLoad, theme: &Theme) {
    let line = Line::from(Span::styled(header_text(load), theme.header));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
