use thiserror::Error;

/// Reasons a control update is skipped.
///
/// None of these reach the host as failures: handlers log them at trace
/// level and keep the last valid display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("range is degenerate (max - min == 0)")]
    DegenerateRange,
    #[error("media duration is not known yet")]
    MissingMetadata,
    #[error("pointer event from a non-primary button")]
    NonPrimaryInput,
    #[error("control has zero measured width")]
    ZeroWidthControl,
}
