use crate::app::state::AppState;
use crate::playback::local_player::LocalPlayer;
use crate::ui::tui::{Tui, UiLayout};
use crate::utils::input::{map_key, map_mouse};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};

pub fn run(app: &mut AppState, player: &mut LocalPlayer) -> Result<()> {
    let mut tui = Tui::new()?;
    tui.enter()?;

    let result = drive(app, player, &mut tui);

    app.teardown();
    tui.exit()?;
    result
}

fn drive(app: &mut AppState, player: &mut LocalPlayer, tui: &mut Tui) -> Result<()> {
    let mut last_layout = UiLayout::default();

    loop {
        let frame_start = Instant::now();

        // poll input (non-blocking)
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(k) if k.kind == KeyEventKind::Press => {
                    let action = map_key(k, app.help.is_open());
                    app.handle_action(action, &last_layout, player, frame_start);
                }
                Event::Mouse(m) => {
                    let action = map_mouse(m);
                    app.handle_action(action, &last_layout, player, frame_start);
                }
                Event::FocusLost => app.on_focus_lost(),
                _ => {}
            }
        }

        app.pump(player, frame_start);
        if app.should_quit {
            break;
        }

        last_layout = tui.draw(app)?;
        app.apply_layout(&last_layout);

        // frame pacing
        let frame_dt = app.config.frame_time();
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dt {
            std::thread::sleep(frame_dt - elapsed);
        }
    }

    Ok(())
}
