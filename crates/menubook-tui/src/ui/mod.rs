//! UI components and widgets.

mod help;
mod page;

pub use help::HelpOverlay;
pub use page::PageView;

use ratatui::layout::{Constraint, Layout, Rect};

/// Layout areas for the viewer.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub hint: Option<Rect>,
    pub main: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    pub fn new(area: Rect, show_hint: bool) -> Self {
        let [header, hint, main, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(u16::from(show_hint)),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            hint: show_hint.then_some(hint),
            main,
            footer,
        }
    }
}

/// Center a rectangle of at most `width` x `height` inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
