//! The stage camera: its state, the projection it produces and its binding to the host.

pub use self::projection::{correct_pointer, stage_projection, StageProjection, ZOOM_ELEMENT};
pub use self::state::CameraState;
pub use self::viewport::ViewportTransform;

pub mod projection;
mod state;
mod viewport;
