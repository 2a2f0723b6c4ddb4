use crate::app::state::AppState;
use crate::controls::scrubber::ControlRect;
use crate::ui::components::{control_buttons, progress_bar, volume_bar};
use crate::ui::panels::help_panel;
use anyhow::Result;
use crossterm::execute;
use crossterm::{event, terminal};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;
use std::io::{self, Stdout};

const PANEL_HEIGHT: u16 = 7;
const PANEL_MAX_WIDTH: u16 = 80;
const TIME_WIDTH: u16 = 9;
const BUTTON_WIDTH: u16 = 3;
const VOLUME_WIDTH: u16 = 17;

#[derive(Debug, Default, Clone, Copy)]
pub struct UiLayout {
    pub full: Rect,
    pub panel: Rect,
    pub title: Rect,

    pub elapsed: Rect,
    pub progress: Rect,
    pub duration: Rect,

    pub play_button: Rect,
    pub mute_button: Rect,
    pub volume: Rect,
    pub close_button: Rect,

    pub help: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    PlayPause,
    Mute,
    Close,
}

pub fn layout(full: Rect) -> UiLayout {
    let width = full.width.min(PANEL_MAX_WIDTH);
    let height = full.height.min(PANEL_HEIGHT);
    let panel = Rect {
        x: full.x + (full.width - width) / 2,
        y: full.y + (full.height - height) / 2,
        width,
        height,
    };
    let inner = panel.inner(&Margin { horizontal: 2, vertical: 1 });

    let row = |dy: u16| Rect { x: inner.x, y: inner.y + dy, width: inner.width, height: 1 };
    let title = row(0);

    let time_row = row(2);
    let time_w = TIME_WIDTH.min(time_row.width / 4);
    let elapsed = Rect { width: time_w, ..time_row };
    let duration = Rect { x: time_row.x + time_row.width - time_w, width: time_w, ..time_row };
    let progress = Rect {
        x: elapsed.x + time_w + 1,
        width: time_row.width.saturating_sub(2 * time_w + 2),
        ..time_row
    };

    let controls = row(4);
    let play_button = Rect { width: BUTTON_WIDTH.min(controls.width), ..controls };
    let mute_button = Rect { x: play_button.x + BUTTON_WIDTH + 2, width: BUTTON_WIDTH, ..controls };
    let volume = Rect {
        x: mute_button.x + BUTTON_WIDTH + 1,
        width: VOLUME_WIDTH.min(controls.width.saturating_sub(3 * BUTTON_WIDTH + 4)),
        ..controls
    };
    let close_button = Rect {
        x: controls.x + controls.width.saturating_sub(BUTTON_WIDTH),
        width: BUTTON_WIDTH,
        ..controls
    };

    let help = Rect {
        x: panel.x + panel.width / 4,
        y: panel.y,
        width: panel.width / 2,
        height: panel.height,
    };

    UiLayout {
        full,
        panel,
        title,
        elapsed,
        progress,
        duration,
        play_button,
        mute_button,
        volume,
        close_button,
        help,
    }
}

/// Scrubber geometry for a one-row track: the thumb spans columns
/// `x..=x + width - 1`, so the last column maps to `max`.
pub fn track_rect(r: Rect) -> ControlRect {
    ControlRect {
        x: r.x as f64,
        y: r.y as f64,
        width: r.width.saturating_sub(1) as f64,
        height: r.height.saturating_sub(1) as f64,
    }
}

/// Like [`track_rect`] but inside the `[` `]` brackets of the volume bar.
pub fn volume_track_rect(r: Rect) -> ControlRect {
    track_rect(Rect { x: r.x + 1, width: r.width.saturating_sub(2), ..r })
}

pub fn hit_test(layout: &UiLayout, col: u16, row: u16) -> Option<Button> {
    if contains(layout.play_button, col, row) {
        return Some(Button::PlayPause);
    }
    if contains(layout.mute_button, col, row) {
        return Some(Button::Mute);
    }
    if contains(layout.close_button, col, row) {
        return Some(Button::Close);
    }
    None
}

fn contains(r: Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn enter(&mut self) -> Result<()> {
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            event::EnableMouseCapture,
            event::EnableFocusChange
        )?;
        terminal::enable_raw_mode()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            io::stdout(),
            event::DisableFocusChange,
            event::DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        Ok(())
    }

    pub fn draw(&mut self, app: &AppState) -> Result<UiLayout> {
        let mut layout_out = UiLayout::default();

        self.terminal.draw(|f| {
            let size = f.size();
            let l = layout(size);
            layout_out = l;

            let mut base_style = Style::default().fg(app.theme.color_text());
            if !app.config.transparent_background {
                base_style = base_style.bg(app.theme.color_base());
            }
            f.render_widget(ratatui::widgets::Clear, size);
            f.render_widget(Block::default().style(base_style), size);

            if size.width < 40 || size.height < PANEL_HEIGHT {
                f.render_widget(
                    Paragraph::new("Terminal too small").style(Style::default().fg(app.theme.color_subtext())),
                    size,
                );
                return;
            }

            f.render_widget(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.color_subtext()))
                    .title(" scrubdeck "),
                l.panel,
            );

            let title = Line::from(vec![
                Span::styled(app.track.title.as_str(), Style::default().fg(app.theme.color_text())),
                Span::styled(" · ", Style::default().fg(app.theme.color_subtext())),
                Span::styled(app.track.artist.as_str(), Style::default().fg(app.theme.color_subtext())),
            ]);
            f.render_widget(Paragraph::new(title), l.title);

            let time_style = Style::default().fg(app.theme.color_subtext());
            f.render_widget(
                Paragraph::new(app.transport.elapsed_text()).style(time_style),
                l.elapsed,
            );
            f.render_widget(
                Paragraph::new(app.transport.duration_text())
                    .style(time_style)
                    .alignment(Alignment::Right),
                l.duration,
            );
            progress_bar::render(f, l.progress, &app.theme, app.scrubber.fill_percent());
            volume_bar::render(f, l.volume, &app.theme, app.volume_scrubber.fill_percent());
            control_buttons::render(f, &l, app);

            if app.help.is_open() {
                help_panel::render(f, l.help, &app.theme);
            }
        })?;

        Ok(layout_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_do_not_overlap() {
        let l = layout(Rect::new(0, 0, 80, 24));
        assert_eq!(l.panel, Rect::new(0, 8, 80, 7));
        assert_eq!(l.progress.y, l.elapsed.y);
        assert!(l.progress.x >= l.elapsed.x + l.elapsed.width);
        assert!(l.progress.x + l.progress.width <= l.duration.x);
        assert!(l.volume.x >= l.mute_button.x + l.mute_button.width);
        assert!(l.volume.x + l.volume.width <= l.close_button.x);
        assert_ne!(l.progress.y, l.play_button.y);
    }

    #[test]
    fn buttons_hit_test() {
        let l = layout(Rect::new(0, 0, 80, 24));
        assert_eq!(hit_test(&l, l.play_button.x, l.play_button.y), Some(Button::PlayPause));
        assert_eq!(hit_test(&l, l.mute_button.x + 2, l.mute_button.y), Some(Button::Mute));
        assert_eq!(hit_test(&l, l.close_button.x, l.close_button.y), Some(Button::Close));
        assert_eq!(hit_test(&l, l.progress.x, l.progress.y), None);
        assert_eq!(hit_test(&l, l.volume.x + 3, l.volume.y), None);
    }

    #[test]
    fn track_rect_spans_every_column() {
        let r = track_rect(Rect::new(10, 4, 21, 1));
        assert_eq!(r, ControlRect { x: 10.0, y: 4.0, width: 20.0, height: 0.0 });
        assert!(r.contains(10.0, 4.0));
        assert!(r.contains(30.0, 4.0));
        assert!(!r.contains(31.0, 4.0));

        let v = volume_track_rect(Rect::new(10, 4, 17, 1));
        assert_eq!(v.x, 11.0);
        assert_eq!(v.width, 14.0);
    }
}
