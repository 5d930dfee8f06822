use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{StatusKind, StatusMessage};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, status: Option<&StatusMessage>, theme: &Theme) {
    let Some(status) = status else {
        return;
    };
    let style = match status.kind {
        StatusKind::Success => theme.status_ok,
        StatusKind::Failure => theme.status_err,
    };
    let line = Line::from(Span::styled(status.text.as_str(), style));
    frame.render_widget(Paragraph::new(line), area);
}
