//! Draggable range control.
//!
//! `ScrubberControl` owns its bounds, value and seek state. Pointer input
//! drives an Idle/Seeking state machine; notifications are queued in an
//! outbox the host drains with [`ScrubberControl::drain_events`] and hands to
//! whichever bindings observe the control.
//!
//! Two write paths exist for the value:
//! - pointer-driven writes while seeking recompute the fill synchronously;
//! - programmatic writes ([`ScrubberControl::set_value`]) store the value at
//!   once but only recompute the fill through a leading-edge debounce, which
//!   absorbs bursty external updates such as playback ticks.

use crate::controls::debounce::Debouncer;
use crate::controls::error::ControlError;
use crate::controls::value_map::{clamp, fill_percentage, map_position};
use std::time::{Duration, Instant};

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Move,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub button: PointerButton,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn press(button: PointerButton, x: f64, y: f64) -> Self {
        Self { kind: PointerKind::Press, button, x, y }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self { kind: PointerKind::Move, button: PointerButton::Primary, x, y }
    }

    pub fn release(button: PointerButton, x: f64, y: f64) -> Self {
        Self { kind: PointerKind::Release, button, x, y }
    }
}

/// Screen area of the track. Both edges are inclusive, so a track whose
/// `width` is 0 still covers a single column.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ControlRect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrubberEvent {
    /// A gesture started.
    Seeking,
    /// A gesture ended, by release or cancellation.
    Seeked,
    /// The value moved mid-gesture.
    Input,
    /// The gesture was released; its final value should be committed.
    Change,
}

impl ScrubberEvent {
    /// Whether observers outside the control see this event.
    pub fn bubbles(self) -> bool {
        matches!(self, ScrubberEvent::Input | ScrubberEvent::Change)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekState {
    Idle,
    Seeking,
}

/// Partial reconfiguration; `None` leaves a field untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeConfig {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub value: Option<f64>,
}

// Held for the lifetime of a press..release gesture. While present the
// control captures every move/release regardless of where it lands.
#[derive(Debug, Clone, Copy)]
struct ActiveGesture {
    value_at_press: Option<f64>,
}

#[derive(Debug)]
pub struct ScrubberControl {
    min: Option<f64>,
    max: Option<f64>,
    value: Option<f64>,
    rect: ControlRect,
    fill_percent: f64,
    gesture: Option<ActiveGesture>,
    fill_debounce: Debouncer,
    events: Vec<ScrubberEvent>,
}

impl ScrubberControl {
    pub fn new(debounce_interval: Duration) -> Self {
        Self {
            min: None,
            max: None,
            value: None,
            rect: ControlRect::default(),
            fill_percent: 0.0,
            gesture: None,
            fill_debounce: Debouncer::new(debounce_interval),
            events: Vec::new(),
        }
    }

    pub fn min(&self) -> f64 {
        self.min.unwrap_or(DEFAULT_MIN)
    }

    pub fn max(&self) -> f64 {
        self.max.unwrap_or(DEFAULT_MAX)
    }

    pub fn has_max(&self) -> bool {
        self.max.is_some()
    }

    /// Current value; falls back to `min` until one is assigned.
    pub fn value(&self) -> f64 {
        self.value.unwrap_or_else(|| self.min())
    }

    pub fn fill_percent(&self) -> f64 {
        self.fill_percent
    }

    pub fn seeking(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn state(&self) -> SeekState {
        if self.seeking() {
            SeekState::Seeking
        } else {
            SeekState::Idle
        }
    }

    /// True while a gesture owns pointer move/release routing.
    pub fn captures_pointer(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn rect(&self) -> ControlRect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: ControlRect) {
        self.rect = rect;
    }

    /// Merges `config` into the current bounds/value.
    ///
    /// Bounds changes recompute the fill at once; a value goes through the
    /// debounced setter like any other programmatic write.
    pub fn configure(&mut self, config: RangeConfig, now: Instant) {
        if config.min.is_some() {
            self.min = config.min;
        }
        if config.max.is_some() {
            self.max = config.max;
        }
        match config.value {
            Some(v) => self.set_value(v, now),
            None => self.update(),
        }
    }

    /// Replaces bounds and value wholesale; `None` unsets a field.
    pub fn reset(&mut self, config: RangeConfig) {
        self.min = config.min;
        self.max = config.max;
        self.value = config.value;
        self.update();
    }

    pub fn set_value(&mut self, value: f64, now: Instant) {
        self.value = Some(value);
        if self.fill_debounce.try_acquire(now) {
            self.update();
        } else {
            log::trace!("fill update for {value} dropped by debounce");
        }
    }

    /// Forces the visual fill, bypassing value and state machine.
    pub fn set_percentage(&mut self, percent: f64) {
        self.fill_percent = clamp(percent, 0.0, 100.0);
    }

    /// Recomputes the fill from value and bounds.
    pub fn update(&mut self) {
        match fill_percentage(self.value(), self.min(), self.max()) {
            Ok(p) => self.set_percentage(p),
            Err(e) => log::trace!("skipping fill update: {e}"),
        }
    }

    /// Feeds one pointer event through the state machine. Returns whether
    /// the event caused a transition or a value change.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event.kind {
            PointerKind::Press => self.on_press(event),
            PointerKind::Move => self.on_move(event),
            PointerKind::Release => self.on_release(event),
        }
    }

    fn on_press(&mut self, event: PointerEvent) -> bool {
        if let Err(e) = require_primary(event.button) {
            log::trace!("press ignored: {e}");
            return false;
        }
        if self.gesture.is_some() || !self.rect.contains(event.x, event.y) {
            return false;
        }

        self.gesture = Some(ActiveGesture { value_at_press: self.value });
        log::debug!("scrubber seeking from {}", self.value());
        self.events.push(ScrubberEvent::Seeking);
        self.set_position(event.x);
        true
    }

    fn on_move(&mut self, event: PointerEvent) -> bool {
        if self.gesture.is_none() {
            return false;
        }
        self.set_position(event.x);
        self.events.push(ScrubberEvent::Input);
        true
    }

    fn on_release(&mut self, event: PointerEvent) -> bool {
        if self.gesture.is_none() {
            return false;
        }
        if let Err(e) = require_primary(event.button) {
            log::trace!("release ignored: {e}");
            return false;
        }

        self.gesture = None;
        log::debug!("scrubber seeked to {}", self.value());
        self.events.push(ScrubberEvent::Seeked);
        self.events.push(ScrubberEvent::Change);
        true
    }

    /// Ends an in-flight gesture without committing it (focus loss, hide).
    /// The value held at press time is restored and no `Change` is emitted.
    pub fn cancel_gesture(&mut self) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        log::debug!("scrubber gesture cancelled");
        self.value = gesture.value_at_press;
        self.update();
        self.events.push(ScrubberEvent::Seeked);
        true
    }

    /// Releases everything the control holds: the gesture, the debounce
    /// token and any undelivered notifications.
    pub fn teardown(&mut self) {
        self.gesture = None;
        self.fill_debounce.cancel();
        self.events.clear();
    }

    pub fn drain_events(&mut self) -> Vec<ScrubberEvent> {
        std::mem::take(&mut self.events)
    }

    fn set_position(&mut self, pointer_x: f64) {
        self.value = Some(map_position(
            pointer_x,
            self.rect.x,
            self.rect.width,
            self.min(),
            self.max(),
        ));
        self.update();
    }
}

fn require_primary(button: PointerButton) -> Result<(), ControlError> {
    match button {
        PointerButton::Primary => Ok(()),
        _ => Err(ControlError::NonPrimaryInput),
    }
}
