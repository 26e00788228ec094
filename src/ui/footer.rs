use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " 1-6: Menu │ g: Go to location │ q: Quit";

/// Text produced by the footer's single render.
#[derive(Clone, Debug, PartialEq, Eq)]
struct FooterText {
    hints: &'static str,
    version: String,
}

/// Static footer, rendered once at startup.
pub struct FooterChrome {
    text: Option<FooterText>,
    renders: u32,
}

impl Default for FooterChrome {
    fn default() -> Self {
        Self::new()
    }
}

impl FooterChrome {
    pub fn new() -> Self {
        Self {
            text: None,
            renders: 0,
        }
    }

    pub fn render(&mut self) {
        self.text = Some(FooterText {
            hints: HINTS,
            version: format!("arangoadmin v{} ", VERSION),
        });
        self.renders += 1;
        tracing::trace!(renders = self.renders, "footer chrome rendered");
    }

    pub fn renders(&self) -> u32 {
        self.renders
    }

    /// The rendered footer laid out for `area`, or `None` before `render`.
    pub fn widget(&self, area: Rect) -> Option<Paragraph<'static>> {
        let text = self.text.as_ref()?;

        // Padding by char count, the hints contain box-drawing characters
        let hints_width = text.hints.chars().count();
        let version_width = text.version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(text.hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(text.version.clone(), text_style),
        ]);

        Some(
            Paragraph::new(line)
                .style(text_style)
                .alignment(Alignment::Left)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(GLOBAL_BORDER)),
                ),
        )
    }
}
