use crate::ui::app::App;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{ARANGO_GREEN, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let controller = app.controller();

    if let Some(bar) = controller.chrome().widget() {
        frame.render_widget(bar, header);
    }
    frame.render_widget(Clear, body);
    frame.render_widget(content_widget(app), body);
    if let Some(hints) = controller.footer().widget(footer) {
        frame.render_widget(hints, footer);
    }

    if let Some(buffer) = app.prompt().buffer() {
        let popup = centered_rect(60, 3, area);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("#", Style::default().fg(HEADER_SEPARATOR)),
                Span::styled(buffer.to_string(), Style::default().fg(HEADER_TEXT)),
            ]))
            .block(
                Block::default()
                    .title("Go to location")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
            popup,
        );
        if let Some(position) = prompt_cursor(popup, buffer) {
            frame.set_cursor_position(position);
        }
    }
}

/// Cursor cell after the typed text, or `None` once it runs past the border.
fn prompt_cursor(popup: Rect, buffer: &str) -> Option<(u16, u16)> {
    let typed = u16::try_from(buffer.chars().count()).unwrap_or(u16::MAX);
    let cursor_x = popup.x.saturating_add(2).saturating_add(typed);
    let right_border = popup.x.saturating_add(popup.width.saturating_sub(1));
    (cursor_x < right_border && popup.height > 1).then(|| (cursor_x, popup.y + 1))
}

fn content_widget(app: &App) -> Paragraph<'static> {
    let pane = app.controller().pane();
    let mut lines: Vec<Line<'static>> = pane
        .lines()
        .iter()
        .map(|line| Line::from(line.clone()))
        .collect();

    if pane.owner().is_none() {
        lines.push(Line::from("Loading..."));
    }
    if let Some(unmatched) = app.unmatched() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("No screen at '#{}'", unmatched),
            Style::default().fg(HEADER_SEPARATOR),
        ));
    }

    let title = if pane.title().is_empty() {
        " arangoadmin ".to_string()
    } else {
        format!(" {} ", pane.title())
    };
    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(title, Style::default().fg(ARANGO_GREEN)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
