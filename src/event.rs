//! Notifications fired by the hosting runtime.

/// An event the stage camera reacts to.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StageEvent {
    /// The logical stage dimensions changed to `(width, height)`.
    StageSizeChanged(f64, f64),
}
