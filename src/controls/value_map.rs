use crate::controls::error::ControlError;

/// `min(max(num, min), max)`.
///
/// Unlike `f64::clamp` this never panics when `min > max`, and a NaN input
/// collapses to `min`.
pub fn clamp(num: f64, min: f64, max: f64) -> f64 {
    num.max(min).min(max)
}

/// Maps a pointer coordinate onto a value in `[min, max]`.
///
/// The fraction along the control is scaled by `max`, not `max - min`, so
/// controls with a non-zero `min` see values offset from the fill formula.
/// A zero-width control maps everything to `min`.
pub fn map_position(pointer: f64, origin: f64, width: f64, min: f64, max: f64) -> f64 {
    match try_map_position(pointer, origin, width, min, max) {
        Ok(v) => v,
        Err(e) => {
            log::trace!("mapping pointer to min: {e}");
            min
        }
    }
}

pub fn try_map_position(
    pointer: f64,
    origin: f64,
    width: f64,
    min: f64,
    max: f64,
) -> Result<f64, ControlError> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ControlError::ZeroWidthControl);
    }
    let fraction = (pointer - origin) / width;
    Ok(clamp(fraction * max, min, max))
}

/// Percentage of the track covered by `value`, in `[0, 100]`.
pub fn fill_percentage(value: f64, min: f64, max: f64) -> Result<f64, ControlError> {
    let diff = max - min;
    if diff == 0.0 || !diff.is_finite() {
        return Err(ControlError::DegenerateRange);
    }
    Ok(clamp((value - min) / diff * 100.0, 0.0, 100.0))
}
