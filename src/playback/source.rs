use anyhow::Result;
use std::time::{Duration, Instant};

/// Notifications a media source raises, in the order it observed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    Play,
    Pause,
    Ended,
    LoadedMetadata,
    TimeUpdate,
}

/// A time-based media source the transport can drive.
pub trait MediaSource {
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self) -> Result<()>;
    fn is_paused(&self) -> bool;
    fn is_ended(&self) -> bool;
    /// `None` until the source knows its length.
    fn duration(&self) -> Option<Duration>;
    fn current_time(&self) -> Duration;
    fn set_current_time(&mut self, pos: Duration) -> Result<()>;
    fn set_volume(&mut self, volume: f32);
    /// Drains notifications raised since the last poll.
    fn poll_events(&mut self, now: Instant) -> Vec<MediaEvent>;
}

#[cfg(test)]
pub mod fake {
    use super::*;

    /// Scripted media source: tests move its clock and push events by hand.
    #[derive(Debug, Default)]
    pub struct FakeMedia {
        pub paused: bool,
        pub ended: bool,
        pub duration: Option<Duration>,
        pub position: Duration,
        pub volume: f32,
        pub seeks: Vec<Duration>,
        pub pending: Vec<MediaEvent>,
        /// Makes `play` fail the way an unreadable file would.
        pub fail_play: bool,
    }

    impl FakeMedia {
        pub fn with_duration(secs: u64) -> Self {
            Self {
                paused: true,
                duration: Some(Duration::from_secs(secs)),
                volume: 1.0,
                ..Default::default()
            }
        }
    }

    impl MediaSource for FakeMedia {
        fn play(&mut self) -> Result<()> {
            if self.fail_play {
                anyhow::bail!("media file went away");
            }
            self.paused = false;
            self.ended = false;
            self.pending.push(MediaEvent::Play);
            Ok(())
        }

        fn pause(&mut self) -> Result<()> {
            self.paused = true;
            self.pending.push(MediaEvent::Pause);
            Ok(())
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn is_ended(&self) -> bool {
            self.ended
        }

        fn duration(&self) -> Option<Duration> {
            self.duration
        }

        fn current_time(&self) -> Duration {
            self.position
        }

        fn set_current_time(&mut self, pos: Duration) -> Result<()> {
            self.position = pos;
            self.seeks.push(pos);
            Ok(())
        }

        fn set_volume(&mut self, volume: f32) {
            self.volume = volume;
        }

        fn poll_events(&mut self, _now: Instant) -> Vec<MediaEvent> {
            std::mem::take(&mut self.pending)
        }
    }
}
