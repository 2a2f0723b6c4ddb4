pub mod debounce;
pub mod dismiss;
pub mod error;
pub mod media_binding;
pub mod scrubber;
pub mod value_map;
pub mod volume_binding;

pub use error::ControlError;
pub use media_binding::{MediaBinding, PlaybackIndicator, TransportEvent};
pub use scrubber::{ControlRect, PointerButton, PointerEvent, RangeConfig, ScrubberControl, ScrubberEvent};
pub use volume_binding::{VolumeBinding, VolumeEvent, VolumeLevel};
