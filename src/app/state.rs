use crate::controls::dismiss::{DismissPolicy, Dismissable, Interaction};
use crate::controls::scrubber::{PointerButton, PointerKind, RangeConfig, ScrubberControl};
use crate::controls::{MediaBinding, TransportEvent, VolumeBinding, VolumeEvent};
use crate::data::config::Config;
use crate::playback::metadata::TrackInfo;
use crate::playback::source::MediaSource;
use crate::ui::theme::Theme;
use crate::ui::tui::{hit_test, track_rect, volume_track_rect, Button, UiLayout};
use crate::utils::input::Action;
use std::time::Instant;

#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub theme: Theme,
    pub track: TrackInfo,

    pub scrubber: ScrubberControl,
    pub transport: MediaBinding,
    pub volume_scrubber: ScrubberControl,
    pub volume: VolumeBinding,

    pub help: Dismissable,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        let debounce = config.value_debounce();

        let mut scrubber = ScrubberControl::new(debounce);
        let mut transport = MediaBinding::new();
        transport.reset(&mut scrubber);

        let mut volume_scrubber = ScrubberControl::new(debounce);
        volume_scrubber.reset(RangeConfig {
            min: Some(0.0),
            max: Some(1.0),
            value: Some(config.initial_volume.clamp(0.0, 1.0) as f64),
        });
        let mut volume = VolumeBinding::new();
        // first pump pushes the initial volume into the media source
        volume.refresh(&volume_scrubber);

        Self {
            config,
            theme,
            track: TrackInfo::default(),
            scrubber,
            transport,
            volume_scrubber,
            volume,
            help: Dismissable::new(DismissPolicy::default()),
            should_quit: false,
        }
    }

    pub fn load_track(&mut self, track: TrackInfo) {
        self.transport.reset(&mut self.scrubber);
        self.track = track;
    }

    /// Hands the freshly drawn geometry to the controls.
    pub fn apply_layout(&mut self, layout: &UiLayout) {
        self.scrubber.set_rect(track_rect(layout.progress));
        self.volume_scrubber.set_rect(volume_track_rect(layout.volume));
    }

    /// Applies one input action. Control notifications it raises are
    /// delivered before returning, so a committed scrub reaches the media
    /// source ahead of any playback tick.
    pub fn handle_action(
        &mut self,
        action: Action,
        layout: &UiLayout,
        media: &mut dyn MediaSource,
        now: Instant,
    ) {
        self.route_action(action, layout, media, now);
        self.dispatch_controls(media);
    }

    fn route_action(
        &mut self,
        action: Action,
        layout: &UiLayout,
        media: &mut dyn MediaSource,
        now: Instant,
    ) {
        match action {
            Action::Quit => self.transport.close(),
            Action::TogglePlayPause => self.toggle_playback(media),
            Action::ToggleMute => self.volume.toggle_mute(&mut self.volume_scrubber, now),
            Action::ToggleHelp => {
                self.help.toggle();
            }
            Action::CloseOverlay => {
                self.help.handle(Interaction::Escape);
            }
            Action::Pointer(p) => {
                // an active gesture owns every move/release until it ends
                if self.scrubber.captures_pointer() {
                    self.scrubber.handle_pointer(p);
                    return;
                }
                if self.volume_scrubber.captures_pointer() {
                    self.volume_scrubber.handle_pointer(p);
                    return;
                }
                if p.kind != PointerKind::Press {
                    return;
                }

                if self.help.is_open() {
                    let inside = contains(layout.help, p.x, p.y);
                    self.help.handle(Interaction::Click { inside });
                    return;
                }

                if p.button == PointerButton::Primary {
                    if let Some(button) = hit_test(layout, p.x as u16, p.y as u16) {
                        self.press_button(button, media, now);
                        return;
                    }
                }
                if !self.scrubber.handle_pointer(p) {
                    self.volume_scrubber.handle_pointer(p);
                }
            }
            Action::None => {}
        }
    }

    fn press_button(&mut self, button: Button, media: &mut dyn MediaSource, now: Instant) {
        match button {
            Button::PlayPause => self.toggle_playback(media),
            Button::Mute => self.volume.toggle_mute(&mut self.volume_scrubber, now),
            Button::Close => self.transport.close(),
        }
    }

    fn toggle_playback(&mut self, media: &mut dyn MediaSource) {
        if let Err(e) = self.transport.toggle_playback(media) {
            log::warn!("play/pause failed: {e:#}");
        }
    }

    /// Delivers queued notifications: scrubbers to their bindings first,
    /// then media to transport, then transport requests to the host.
    pub fn pump(&mut self, media: &mut dyn MediaSource, now: Instant) {
        self.dispatch_controls(media);

        for ev in media.poll_events(now) {
            self.transport.on_media_event(ev, &mut self.scrubber, &*media, now);
        }

        for ev in self.transport.drain_events() {
            match ev {
                TransportEvent::Close => self.should_quit = true,
            }
        }
    }

    fn dispatch_controls(&mut self, media: &mut dyn MediaSource) {
        for ev in self.scrubber.drain_events() {
            if let Err(e) = self.transport.on_scrubber_event(ev, &self.scrubber, media) {
                log::warn!("seek failed: {e:#}");
            }
        }

        for ev in self.volume_scrubber.drain_events() {
            self.volume.on_scrubber_event(ev, &self.volume_scrubber);
        }
        for ev in self.volume.drain_events() {
            let VolumeEvent::Change { value, level } = ev;
            log::debug!("volume {value:.2} ({})", level.as_str());
            media.set_volume(value as f32);
        }
    }

    /// Terminal lost focus: any drag in progress will never see its release.
    pub fn on_focus_lost(&mut self) {
        self.scrubber.cancel_gesture();
        self.volume_scrubber.cancel_gesture();
    }

    pub fn teardown(&mut self) {
        self.scrubber.teardown();
        self.volume_scrubber.teardown();
    }
}

fn contains(r: ratatui::layout::Rect, x: f64, y: f64) -> bool {
    x >= r.x as f64 && x < (r.x + r.width) as f64 && y >= r.y as f64 && y < (r.y + r.height) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::scrubber::PointerEvent;
    use crate::controls::{PlaybackIndicator, VolumeLevel};
    use crate::playback::source::fake::FakeMedia;
    use crate::playback::source::MediaEvent;
    use crate::ui::tui::layout;
    use ratatui::layout::Rect;
    use std::time::Duration;

    struct Host {
        app: AppState,
        media: FakeMedia,
        layout: UiLayout,
        now: Instant,
    }

    impl Host {
        fn new() -> Self {
            let mut app = AppState::new(Config::default(), Theme::load("system"));
            let layout = layout(Rect::new(0, 0, 80, 24));
            app.apply_layout(&layout);
            let mut media = FakeMedia::with_duration(200);
            media.pending.push(MediaEvent::LoadedMetadata);
            let mut host = Self { app, media, layout, now: Instant::now() };
            host.pump();
            host
        }

        fn act(&mut self, action: Action) {
            self.app.handle_action(action, &self.layout, &mut self.media, self.now);
            self.pump();
        }

        fn pointer(&mut self, p: PointerEvent) {
            self.act(Action::Pointer(p));
        }

        fn pump(&mut self) {
            self.app.pump(&mut self.media, self.now);
        }

        fn tick(&mut self, secs: u64) {
            self.now += Duration::from_millis(250);
            self.media.position = Duration::from_secs(secs);
            self.media.pending.push(MediaEvent::TimeUpdate);
            self.pump();
        }

        fn progress_x(&self, fraction: f64) -> f64 {
            let r = track_rect(self.layout.progress);
            r.x + r.width * fraction
        }

        fn progress_y(&self) -> f64 {
            self.layout.progress.y as f64
        }
    }

    #[test]
    fn initial_volume_reaches_media() {
        let host = Host::new();
        assert_eq!(host.media.volume, 1.0);
        assert_eq!(host.app.volume.level(), VolumeLevel::High);
        assert_eq!(host.app.transport.duration_text(), "3:20");
    }

    #[test]
    fn drag_on_progress_seeks_on_release_only() {
        let mut host = Host::new();
        let y = host.progress_y();

        host.pointer(PointerEvent::press(PointerButton::Primary, host.progress_x(0.25), y));
        assert!(host.app.scrubber.seeking());
        // dragging far off the track keeps the gesture and clamps
        host.pointer(PointerEvent::moved(host.progress_x(0.5), y + 5.0));
        host.tick(3);
        assert_eq!(host.app.scrubber.value(), 100.0);
        assert!(host.media.seeks.is_empty());

        host.pointer(PointerEvent::release(PointerButton::Primary, 0.0, 0.0));
        assert!(!host.app.scrubber.seeking());
        assert_eq!(host.media.seeks, vec![Duration::from_secs(100)]);
    }

    #[test]
    fn release_wins_over_tick_in_the_same_frame() {
        let mut host = Host::new();
        host.media.paused = false;
        host.tick(3);
        let y = host.progress_y();

        host.pointer(PointerEvent::press(PointerButton::Primary, host.progress_x(0.25), y));
        host.pointer(PointerEvent::moved(host.progress_x(0.5), y));
        assert_eq!(host.app.scrubber.value(), 100.0);

        // playback ticked before the release was processed
        host.media.pending.push(MediaEvent::TimeUpdate);
        host.pointer(PointerEvent::release(PointerButton::Primary, host.progress_x(0.5), y));

        assert_eq!(host.media.seeks, vec![Duration::from_secs(100)]);
        assert_eq!(host.app.scrubber.value(), 100.0);
    }

    #[test]
    fn failing_play_is_logged_not_fatal() {
        let mut host = Host::new();
        host.media.fail_play = true;

        host.act(Action::TogglePlayPause);
        let play = host.layout.play_button;
        host.pointer(PointerEvent::press(PointerButton::Primary, play.x as f64, play.y as f64));

        assert!(host.media.paused);
        assert_eq!(host.app.transport.indicator(), PlaybackIndicator::Paused);
        assert!(!host.app.should_quit);
    }

    #[test]
    fn focus_loss_cancels_drag_without_seeking() {
        let mut host = Host::new();
        let y = host.progress_y();
        host.pointer(PointerEvent::press(PointerButton::Primary, host.progress_x(0.75), y));
        host.app.on_focus_lost();
        host.pump();
        assert!(!host.app.scrubber.captures_pointer());
        assert!(host.media.seeks.is_empty());
        assert_eq!(host.app.scrubber.value(), 0.0);
    }

    #[test]
    fn buttons_drive_transport_and_volume() {
        let mut host = Host::new();
        let play = host.layout.play_button;
        host.pointer(PointerEvent::press(PointerButton::Primary, play.x as f64, play.y as f64));
        assert!(!host.media.paused);
        assert_eq!(host.app.transport.indicator(), PlaybackIndicator::Playing);

        let mute = host.layout.mute_button;
        host.pointer(PointerEvent::press(PointerButton::Primary, mute.x as f64, mute.y as f64));
        assert_eq!(host.media.volume, 0.0);
        assert_eq!(host.app.volume.level(), VolumeLevel::Muted);

        host.act(Action::ToggleMute);
        assert_eq!(host.media.volume, 1.0);
    }

    #[test]
    fn volume_drag_sets_gain() {
        let mut host = Host::new();
        let r = volume_track_rect(host.layout.volume);
        host.pointer(PointerEvent::press(PointerButton::Primary, r.x + r.width * 0.25, r.y));
        host.pointer(PointerEvent::release(PointerButton::Primary, r.x + r.width * 0.25, r.y));
        assert_eq!(host.app.volume.level(), VolumeLevel::Low);
        assert_eq!(host.media.volume, 0.25);
    }

    #[test]
    fn close_and_quit_stop_the_loop() {
        let mut host = Host::new();
        let close = host.layout.close_button;
        host.pointer(PointerEvent::press(PointerButton::Primary, close.x as f64, close.y as f64));
        assert!(host.app.should_quit);

        let mut host = Host::new();
        host.act(Action::Quit);
        assert!(host.app.should_quit);
    }

    #[test]
    fn help_overlay_absorbs_clicks_until_dismissed() {
        let mut host = Host::new();
        host.act(Action::ToggleHelp);
        assert!(host.app.help.is_open());

        let play = host.layout.play_button;
        let inside = host.layout.help;
        host.pointer(PointerEvent::press(PointerButton::Primary, inside.x as f64 + 1.0, inside.y as f64 + 1.0));
        assert!(host.app.help.is_open());

        host.pointer(PointerEvent::press(PointerButton::Primary, 0.0, 0.0));
        assert!(!host.app.help.is_open());
        assert!(host.media.paused);

        host.pointer(PointerEvent::press(PointerButton::Primary, play.x as f64, play.y as f64));
        assert!(!host.media.paused);
    }
}
