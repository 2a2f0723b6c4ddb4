use crate::ui::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, fill_percent: f64) {
    let w = area.width as usize;
    if w == 0 {
        return;
    }

    let knob = knob_column(w, fill_percent);
    let left = "─".repeat(knob);
    let right = "─".repeat(w.saturating_sub(1 + knob));

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(theme.color_accent2())),
        Span::styled("○", Style::default().fg(theme.color_accent())),
        Span::styled(right, Style::default().fg(theme.color_subtext())),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

// knob moves on [0, w-1]
fn knob_column(w: usize, fill_percent: f64) -> usize {
    if w <= 1 {
        return 0;
    }
    let ratio = (fill_percent / 100.0).clamp(0.0, 1.0);
    (ratio * (w as f64 - 1.0)).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knob_reaches_both_ends() {
        assert_eq!(knob_column(21, 0.0), 0);
        assert_eq!(knob_column(21, 50.0), 10);
        assert_eq!(knob_column(21, 100.0), 20);
        assert_eq!(knob_column(1, 100.0), 0);
    }
}
