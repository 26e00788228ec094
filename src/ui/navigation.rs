use crate::nav::{MenuItem, NavigationState};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, ARANGO_GREEN, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Persistent navigation bar with the menu and its active-item indicator.
///
/// Nothing is drawn until `render` has produced the menu line; selecting a
/// menu item afterwards restyles the stored line.
pub struct NavigationChrome {
    state: NavigationState,
    menu_line: Option<Line<'static>>,
    renders: u32,
}

impl NavigationChrome {
    pub fn new(state: NavigationState) -> Self {
        Self {
            state,
            menu_line: None,
            renders: 0,
        }
    }

    pub fn render(&mut self) {
        self.menu_line = Some(menu_line(self.state.active()));
        self.renders += 1;
        tracing::trace!(renders = self.renders, "navigation chrome rendered");
    }

    pub fn renders(&self) -> u32 {
        self.renders
    }

    pub fn select_menu_item(&mut self, item: MenuItem) {
        self.state.select(item);
        if self.menu_line.is_some() {
            self.menu_line = Some(menu_line(Some(item)));
        }
        tracing::debug!(menu_item = item.id(), "menu item selected");
    }

    pub fn active(&self) -> Option<MenuItem> {
        self.state.active()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The rendered bar, or `None` before the first `render`.
    pub fn widget(&self) -> Option<Paragraph<'static>> {
        let line = self.menu_line.clone()?;
        Some(
            Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        )
    }
}

fn menu_line(active: Option<MenuItem>) -> Line<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);
    let active_style = Style::default()
        .fg(ARANGO_GREEN)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled("  ArangoDB", Style::default().fg(ARANGO_GREEN)),
        Span::styled("  │", separator_style),
    ];
    for item in MenuItem::ALL {
        let style = if active == Some(item) {
            active_style
        } else {
            text_style
        };
        spans.push(Span::styled(
            format!(" {} {} ", item.hotkey(), item.label()),
            style,
        ));
        spans.push(Span::styled("│", separator_style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw_rows(chrome: &NavigationChrome) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(90, 3)).expect("terminal");
        terminal
            .draw(|frame| {
                if let Some(widget) = chrome.widget() {
                    frame.render_widget(widget, frame.area());
                }
            })
            .expect("draw");

        let buffer = terminal.backend().buffer();
        (0..3_u16)
            .map(|y| {
                (0..90_u16)
                    .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn active_style_at(chrome: &NavigationChrome, label: &str) -> bool {
        let Some(widget) = chrome.widget() else {
            return false;
        };
        let mut terminal = Terminal::new(TestBackend::new(90, 3)).expect("terminal");
        terminal
            .draw(|frame| frame.render_widget(widget, frame.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        let row: String = (0..90_u16)
            .filter_map(|x| buffer.cell((x, 1_u16)).map(|cell| cell.symbol().to_string()))
            .collect();
        let Some(byte_offset) = row.find(label) else {
            return false;
        };
        let column = row[..byte_offset].chars().count() as u16;
        buffer
            .cell((column, 1_u16))
            .is_some_and(|cell| cell.bg == ACTIVE_HIGHLIGHT)
    }

    #[test]
    fn selection_is_visible_through_shared_state() {
        let state = NavigationState::new();
        let mut chrome = NavigationChrome::new(state.clone());
        chrome.select_menu_item(MenuItem::Query);
        assert_eq!(state.active(), Some(MenuItem::Query));
        assert_eq!(chrome.active(), Some(MenuItem::Query));
    }

    #[test]
    fn nothing_is_drawn_before_render() {
        let mut chrome = NavigationChrome::new(NavigationState::new());
        assert!(chrome.widget().is_none());
        assert!(draw_rows(&chrome).iter().all(|row| row.is_empty()));

        chrome.render();
        assert_eq!(chrome.renders(), 1);
        let rows = draw_rows(&chrome);
        assert!(rows[1].contains("ArangoDB"));
        assert!(rows[1].contains("1 Collections"));
        assert!(rows[1].contains("6 About"));
    }

    #[test]
    fn selection_restyles_the_rendered_bar() {
        let mut chrome = NavigationChrome::new(NavigationState::new());
        chrome.render();
        assert!(!active_style_at(&chrome, "4 Shell"));

        chrome.select_menu_item(MenuItem::Shell);
        assert!(active_style_at(&chrome, "4 Shell"));
        assert!(!active_style_at(&chrome, "3 Query"));
    }

    #[test]
    fn selection_before_render_is_picked_up_by_render() {
        let mut chrome = NavigationChrome::new(NavigationState::new());
        chrome.select_menu_item(MenuItem::Logs);
        assert!(chrome.widget().is_none());

        chrome.render();
        assert!(active_style_at(&chrome, "5 Logs"));
    }
}
