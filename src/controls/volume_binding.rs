use crate::controls::scrubber::{ScrubberControl, ScrubberEvent};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    Muted,
    Low,
    High,
}

impl VolumeLevel {
    pub fn from_value(value: f64) -> Self {
        if value == 0.0 {
            VolumeLevel::Muted
        } else if value < 0.5 {
            VolumeLevel::Low
        } else {
            VolumeLevel::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VolumeLevel::Muted => "mute",
            VolumeLevel::Low => "low",
            VolumeLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeEvent {
    Change { value: f64, level: VolumeLevel },
}

/// Volume indicator and mute toggle layered over a `[0, 1]` scrubber.
#[derive(Debug)]
pub struct VolumeBinding {
    level: VolumeLevel,
    previous: Option<f64>,
    events: Vec<VolumeEvent>,
}

impl Default for VolumeBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeBinding {
    pub fn new() -> Self {
        Self { level: VolumeLevel::High, previous: None, events: Vec::new() }
    }

    pub fn level(&self) -> VolumeLevel {
        self.level
    }

    pub fn is_muted(&self) -> bool {
        self.level == VolumeLevel::Muted
    }

    pub fn on_scrubber_event(&mut self, event: ScrubberEvent, scrubber: &ScrubberControl) {
        if matches!(event, ScrubberEvent::Input | ScrubberEvent::Change) {
            self.refresh(scrubber);
        }
    }

    pub fn toggle_mute(&mut self, scrubber: &mut ScrubberControl, now: Instant) {
        if self.is_muted() {
            // Muted by dragging to zero leaves nothing to restore.
            let restore = self.previous.unwrap_or_else(|| scrubber.max());
            log::debug!("unmuting to {restore}");
            scrubber.set_value(restore, now);
        } else {
            let current = scrubber.value();
            log::debug!("muting from {current}");
            self.previous = Some(current);
            scrubber.set_value(0.0, now);
        }
        // a toggle inside the debounce window must still redraw the bar
        scrubber.update();
        self.refresh(scrubber);
    }

    /// Re-derives the level from the scrubber and publishes it.
    pub fn refresh(&mut self, scrubber: &ScrubberControl) {
        let value = scrubber.value();
        self.level = VolumeLevel::from_value(value);
        self.events.push(VolumeEvent::Change { value, level: self.level });
    }

    pub fn drain_events(&mut self) -> Vec<VolumeEvent> {
        std::mem::take(&mut self.events)
    }
}
