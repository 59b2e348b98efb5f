//! Main application state and logic.

mod constants;
mod render;

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{DefaultTerminal, Frame};
use tracing::debug;

use menubook_core::MenuPayload;
use menubook_layout::BookView;

use crate::event::KeyAction;
use crate::settings::ViewerSettings;
use crate::theme::Theme;
use crate::TuiConfig;

use self::constants::TICK_INTERVAL_MS;
use self::render::{render_app, RenderContext};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
    Quit,
}

/// Viewer application state.
pub struct App {
    mode: AppMode,
    book: BookView,
    theme: Theme,
    settings: ViewerSettings,
    needs_redraw: bool,
}

impl App {
    /// Create the viewer for a terminal `columns` wide.
    pub fn new(menu: MenuPayload, config: TuiConfig, columns: u16) -> Self {
        let settings = config.settings;
        let theme = settings
            .theme
            .as_deref()
            .and_then(Theme::from_name)
            .unwrap_or_else(|| Theme::for_style(&menu.style()));
        let book = BookView::new(menu, &config.layout, settings.width_px(columns));

        debug!(
            capacity = book.capacity(),
            pages = book.pages().len(),
            style = %theme.style,
            "viewer started"
        );

        Self {
            mode: AppMode::Normal,
            book,
            theme,
            settings,
            needs_redraw: true,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// The paginated menu.
    pub fn book(&self) -> &BookView {
        &self.book
    }

    /// Active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Run the application with async event loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while self.mode != AppMode::Quit {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    self.handle_event(event);
                }

                _ = interval.tick() => {
                    // Periodic tick
                }
            }
        }

        Ok(())
    }

    /// Handle a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_action(KeyAction::from_key_event(key_event));
            }
            Event::Resize(columns, _) => self.handle_resize(columns),
            _ => {}
        }
    }

    /// Re-estimate capacity for a new terminal width.
    pub fn handle_resize(&mut self, columns: u16) {
        self.book.resize(self.settings.width_px(columns));
        self.needs_redraw = true;
    }

    /// Handle a key action.
    pub fn handle_action(&mut self, action: KeyAction) {
        if action == KeyAction::None {
            return;
        }
        self.needs_redraw = true;

        if self.mode == AppMode::Help {
            match action {
                KeyAction::ToggleHelp | KeyAction::Cancel => self.mode = AppMode::Normal,
                KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::FlipNext => self.book.next(),
            KeyAction::FlipPrev => self.book.prev(),
            KeyAction::FirstPage => self.book.first(),
            KeyAction::LastPage => self.book.last(),
            KeyAction::ToggleHelp => self.mode = AppMode::Help,
            KeyAction::Cancel | KeyAction::Quit | KeyAction::ForceQuit => {
                self.mode = AppMode::Quit;
            }
            KeyAction::None => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = RenderContext {
            mode: self.mode,
            theme: &self.theme,
            book: &self.book,
        };

        render_app(&ctx, area, buf);
    }
}
