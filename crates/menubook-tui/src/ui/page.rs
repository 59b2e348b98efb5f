//! Flip-book page widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use menubook_core::Item;
use menubook_layout::{FlipDirection, Page, PageEntry};

use crate::theme::Theme;

const CONTINUED_SUFFIX: &str = " (cont.)";
const IMAGE_MARKER: &str = "▣ ";
const EMPTY_PAGE: &str = "No items yet.";

/// Renders one page of the book.
pub struct PageView<'a> {
    page: &'a Page,
    theme: &'a Theme,
    direction: FlipDirection,
}

impl<'a> PageView<'a> {
    /// Create a new page view.
    pub fn new(page: &'a Page, theme: &'a Theme, direction: FlipDirection) -> Self {
        Self {
            page,
            theme,
            direction,
        }
    }

    fn heading_lines(
        &self,
        label: &str,
        continued: bool,
        description: &str,
        image_url: &str,
    ) -> Vec<Line<'a>> {
        let mut lines = Vec::with_capacity(3);

        let mut title = Vec::with_capacity(2);
        if !image_url.is_empty() {
            title.push(Span::styled(IMAGE_MARKER, self.theme.image_marker));
        }
        let suffix = if continued { CONTINUED_SUFFIX } else { "" };
        title.push(Span::styled(format!("{label}{suffix}"), self.theme.heading));
        lines.push(Line::from(title));

        if !description.is_empty() {
            lines.push(Line::styled(description.to_string(), self.theme.heading_desc));
        }
        lines
    }

    fn item_lines(&self, item: &Item, width: u16) -> Vec<Line<'a>> {
        let marker = if item.has_image() { IMAGE_MARKER } else { "" };
        let price = item.price_label();
        let used = marker.width() + item.name.width() + price.width();
        let gap = usize::from(width).saturating_sub(used).max(1);

        let mut lines = vec![Line::from(vec![
            Span::styled(marker, self.theme.image_marker),
            Span::styled(item.name.clone(), self.theme.item_name),
            Span::raw(" ".repeat(gap)),
            Span::styled(price, self.theme.price),
        ])];

        if let Some(description) = item.description() {
            lines.push(Line::styled(format!("  {description}"), self.theme.item_desc));
        }
        lines
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let flip = match self.direction {
            FlipDirection::Next => " ▸ ",
            FlipDirection::Prev => " ◂ ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(flip)
            .style(self.theme.base());
        let inner_width = block.inner(area).width;

        let mut lines = Vec::new();
        for entry in self.page {
            match entry {
                PageEntry::Heading {
                    label,
                    continued,
                    description,
                    image_url,
                } => {
                    if !lines.is_empty() {
                        lines.push(Line::default());
                    }
                    lines.extend(self.heading_lines(label, *continued, description, image_url));
                }
                PageEntry::Item { item } => {
                    lines.extend(self.item_lines(item, inner_width));
                }
            }
        }

        if lines.is_empty() {
            lines.push(Line::styled(EMPTY_PAGE, self.theme.hint));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
