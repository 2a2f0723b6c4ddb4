//! Binds a media source to a scrubber.
//!
//! The scrubber's seeking flag decides which update stream may write its
//! value: while a gesture is active, playback ticks refresh only the elapsed
//! label; otherwise ticks write the playback position through the
//! scrubber's debounced setter. A released gesture commits the scrubber's
//! value back into the media position.

use crate::controls::error::ControlError;
use crate::controls::scrubber::{RangeConfig, ScrubberControl, ScrubberEvent};
use crate::playback::source::{MediaEvent, MediaSource};
use crate::utils::timefmt::{TimeLayout, PLACEHOLDER};
use anyhow::Result;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackIndicator {
    Playing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportEvent {
    /// The user asked to dismiss the transport. Handled by the host.
    Close,
}

impl TransportEvent {
    pub fn bubbles(self) -> bool {
        true
    }
}

#[derive(Debug)]
pub struct MediaBinding {
    indicator: PlaybackIndicator,
    layout: TimeLayout,
    elapsed_text: String,
    duration_text: String,
    events: Vec<TransportEvent>,
}

impl Default for MediaBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaBinding {
    pub fn new() -> Self {
        Self {
            indicator: PlaybackIndicator::Paused,
            layout: TimeLayout::default(),
            elapsed_text: PLACEHOLDER.to_string(),
            duration_text: PLACEHOLDER.to_string(),
            events: Vec::new(),
        }
    }

    pub fn indicator(&self) -> PlaybackIndicator {
        self.indicator
    }

    pub fn elapsed_text(&self) -> &str {
        &self.elapsed_text
    }

    pub fn duration_text(&self) -> &str {
        &self.duration_text
    }

    /// Prepares the scrubber for a newly loaded source: the duration is
    /// looked up again on the next metadata notification.
    pub fn reset(&mut self, scrubber: &mut ScrubberControl) {
        scrubber.cancel_gesture();
        scrubber.reset(RangeConfig { min: Some(0.0), max: None, value: Some(0.0) });
        scrubber.drain_events();
        self.layout = TimeLayout::default();
        self.elapsed_text = PLACEHOLDER.to_string();
        self.duration_text = PLACEHOLDER.to_string();
    }

    pub fn on_media_event(
        &mut self,
        event: MediaEvent,
        scrubber: &mut ScrubberControl,
        media: &dyn MediaSource,
        now: Instant,
    ) {
        match event {
            MediaEvent::Play => self.indicator = PlaybackIndicator::Playing,
            MediaEvent::Pause => self.indicator = PlaybackIndicator::Paused,
            MediaEvent::LoadedMetadata => self.sync_duration(scrubber, media, now),
            MediaEvent::TimeUpdate => {
                self.sync_duration(scrubber, media, now);
                self.sync_time(scrubber, media, now);
            }
            MediaEvent::Ended => scrubber.set_percentage(100.0),
        }
    }

    pub fn on_scrubber_event(
        &mut self,
        event: ScrubberEvent,
        scrubber: &ScrubberControl,
        media: &mut dyn MediaSource,
    ) -> Result<()> {
        if matches!(event, ScrubberEvent::Input | ScrubberEvent::Change) && !scrubber.has_max() {
            log::trace!("scrub ignored: {}", ControlError::MissingMetadata);
            return Ok(());
        }
        match event {
            ScrubberEvent::Input => {
                self.elapsed_text = self.layout.format(secs_to_duration(scrubber.value()));
            }
            ScrubberEvent::Change => {
                let target = secs_to_duration(scrubber.value());
                log::debug!("committing scrub to {:?}", target);
                media.set_current_time(target)?;
            }
            ScrubberEvent::Seeking | ScrubberEvent::Seeked => {}
        }
        Ok(())
    }

    pub fn toggle_playback(&mut self, media: &mut dyn MediaSource) -> Result<()> {
        if media.is_paused() || media.is_ended() {
            media.play()
        } else {
            media.pause()
        }
    }

    pub fn close(&mut self) {
        self.events.push(TransportEvent::Close);
    }

    pub fn drain_events(&mut self) -> Vec<TransportEvent> {
        std::mem::take(&mut self.events)
    }

    fn sync_duration(&mut self, scrubber: &mut ScrubberControl, media: &dyn MediaSource, now: Instant) {
        if scrubber.has_max() {
            return;
        }
        match known_duration(media) {
            Ok(total) => {
                scrubber.configure(
                    RangeConfig { max: Some(total.as_secs_f64()), ..Default::default() },
                    now,
                );
                self.layout = TimeLayout::for_total(total);
                self.duration_text = self.layout.format(total);
            }
            Err(e) => log::trace!("duration label deferred: {e}"),
        }
    }

    fn sync_time(&mut self, scrubber: &mut ScrubberControl, media: &dyn MediaSource, now: Instant) {
        let pos = media.current_time();
        if !scrubber.seeking() {
            if scrubber.has_max() {
                scrubber.set_value(pos.as_secs_f64(), now);
            } else {
                log::trace!("tick not applied to scrubber: {}", ControlError::MissingMetadata);
            }
        }
        self.elapsed_text = self.layout.format(pos);
    }
}

fn known_duration(media: &dyn MediaSource) -> Result<Duration, ControlError> {
    match media.duration() {
        Some(d) if !d.is_zero() => Ok(d),
        _ => Err(ControlError::MissingMetadata),
    }
}

fn secs_to_duration(secs: f64) -> Duration {
    if secs.is_finite() && secs > 0.0 {
        Duration::from_secs_f64(secs)
    } else {
        Duration::ZERO
    }
}
