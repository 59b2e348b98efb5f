//! Help overlay widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::event::HELP_BINDINGS;
use crate::theme::Theme;

use super::centered_rect;

/// Help overlay listing key bindings.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = HELP_BINDINGS.len() as u16 + 2;
        let popup = centered_rect(40, height, area);

        let lines: Vec<Line> = HELP_BINDINGS
            .iter()
            .map(|binding| {
                Line::from(vec![
                    Span::styled(format!("{:>16}", binding.keys), self.theme.help_key),
                    Span::styled(format!("  {}", binding.description), self.theme.help_desc),
                ])
            })
            .collect();

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border)
                    .title(" Help ")
                    .style(self.theme.base()),
            )
            .render(popup, buf);
    }
}
