use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::format::fit_width;
use crate::system::process::ProcessRecord;
use crate::ui::theme::Theme;

const NAME_WIDTH: usize = 25;

pub fn column_header() -> String {
    format!(
        "{:<10} {:<25} {:>8}      {:>8}",
        "PID", "NAME", "CPU (%)", "MEM (%)"
    )
}

pub fn format_row(record: &ProcessRecord) -> String {
    format!(
        "{:<10} {} {:>7.1}%      {:>7.1}%",
        record.pid,
        fit_width(&record.name, NAME_WIDTH),
        record.cpu_percent,
        record.mem_percent
    )
}

/// Column header, a blank line, then one row per visible record.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    rows: &[ProcessRecord],
    selected: Option<usize>,
    theme: &Theme,
) {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(Line::from(Span::styled(column_header(), theme.column_header)));
    lines.push(Line::default());
    lines.extend(rows.iter().enumerate().map(|(index, record)| {
        let style = if selected == Some(index) {
            theme.selected_row
        } else {
            theme.row
        };
        Line::from(Span::styled(format_row(record), style))
    }));

    frame.render_widget(Paragraph::new(lines), area);
}
