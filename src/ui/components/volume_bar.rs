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
    if w == 1 {
        f.render_widget(Paragraph::new("["), area);
        return;
    }

    let inner = w.saturating_sub(2);
    let filled = filled_cells(inner, fill_percent);

    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(theme.color_subtext())),
        Span::styled("█".repeat(filled), Style::default().fg(theme.color_accent())),
        Span::styled("░".repeat(inner - filled), Style::default().fg(theme.color_subtext())),
        Span::styled("]", Style::default().fg(theme.color_subtext())),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn filled_cells(inner: usize, fill_percent: f64) -> usize {
    let ratio = (fill_percent / 100.0).clamp(0.0, 1.0);
    ((ratio * inner as f64).round() as usize).min(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_bounded_by_inner_width() {
        assert_eq!(filled_cells(15, 0.0), 0);
        assert_eq!(filled_cells(15, 100.0), 15);
        assert_eq!(filled_cells(15, 140.0), 15);
        assert_eq!(filled_cells(10, 25.0), 3);
    }
}
