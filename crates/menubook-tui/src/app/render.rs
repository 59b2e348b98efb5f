//! Application rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use menubook_layout::BookView;

use crate::theme::Theme;
use crate::ui::{AppLayout, HelpOverlay, PageView};

use super::constants::MULTI_PAGE_HINT;
use super::AppMode;

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub mode: AppMode,
    pub theme: &'a Theme,
    pub book: &'a BookView,
}

/// Render the whole viewer.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    Block::default().style(ctx.theme.base()).render(area, buf);

    let layout = AppLayout::new(area, ctx.book.is_multi_page());

    render_header(ctx, layout.header, buf);
    if let Some(hint) = layout.hint {
        Paragraph::new(Line::styled(MULTI_PAGE_HINT, ctx.theme.hint)).render(hint, buf);
    }

    PageView::new(
        ctx.book.current_page(),
        ctx.theme,
        ctx.book.navigator().direction(),
    )
    .render(layout.main, buf);

    render_footer(ctx, layout.footer, buf);

    if ctx.mode == AppMode::Help {
        HelpOverlay::new(ctx.theme).render(area, buf);
    }
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let name = ctx.book.menu().restaurant_name.as_str();
    Paragraph::new(Line::styled(name, ctx.theme.title))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let navigator = ctx.book.navigator();

    let line = if ctx.book.is_multi_page() {
        let back = if navigator.is_first() { "   " } else { "◂ h" };
        let next = if navigator.is_last() { "   " } else { "l ▸" };
        Line::from(vec![
            Span::styled(back, ctx.theme.help_key),
            Span::styled(format!("  {}  ", navigator.label()), ctx.theme.footer),
            Span::styled(next, ctx.theme.help_key),
        ])
    } else {
        Line::styled("? help  q quit", ctx.theme.footer)
    };

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(area, buf);
}
