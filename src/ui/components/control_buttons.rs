use crate::app::state::AppState;
use crate::controls::{PlaybackIndicator, VolumeLevel};
use crate::ui::tui::UiLayout;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render(f: &mut Frame, layout: &UiLayout, app: &AppState) {
    let style = Style::default().fg(app.theme.color_text());

    let play = match app.transport.indicator() {
        PlaybackIndicator::Playing => "[⏸]",
        PlaybackIndicator::Paused => "[▶]",
    };
    f.render_widget(Paragraph::new(play).style(style), layout.play_button);

    let mute = match app.volume.level() {
        VolumeLevel::Muted => "[x]",
        VolumeLevel::Low => "[-]",
        VolumeLevel::High => "[+]",
    };
    f.render_widget(
        Paragraph::new(mute).style(Style::default().fg(app.theme.color_accent())),
        layout.mute_button,
    );

    f.render_widget(
        Paragraph::new("[✕]").style(Style::default().fg(app.theme.color_subtext())),
        layout.close_button,
    );
}
