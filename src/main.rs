use anyhow::{Context, Result};
use clap::Parser;
use scrubdeck::app;
use scrubdeck::cli::CliArgs;
use scrubdeck::data::config::Config;
use scrubdeck::playback::local_player::LocalPlayer;
use scrubdeck::playback::source::MediaSource;
use scrubdeck::ui::theme::Theme;

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let mut config = Config::load_or_default(args.config.as_deref())?;
    if args.autoplay {
        config.autoplay = true;
    }
    if let Some(v) = args.volume {
        config.initial_volume = v;
    }
    let theme = Theme::load(&config.theme);

    let mut player = LocalPlayer::try_new(config.time_update()).context("no audio output device")?;
    let track = player
        .load(&args.input)
        .with_context(|| format!("cannot open {}", args.input.display()))?;

    let autoplay = config.autoplay;
    let mut app = app::state::AppState::new(config, theme);
    app.load_track(track);
    if autoplay {
        player.play()?;
    }

    app::event_loop::run(&mut app, &mut player)
}
