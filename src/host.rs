//! Collaborators supplied by the hosting runtime.
//!
//! The stage camera never reaches into the host directly. Everything it reads or writes
//! goes through one of these traits, handed over when the camera is built.

use glamx::Mat4;

/// The render side of the host: the surface the stage is drawn on.
pub trait RenderSurface {
    /// Replaces the projection matrix used for the next frames.
    fn set_projection(&mut self, projection: Mat4);

    /// Sets the physical render-surface size, in pixels.
    fn set_surface_size(&mut self, width: f64, height: f64);

    /// Sets the clear color. Channels are nominally in [0.0, 1.0] but are not clamped.
    fn set_clear_color(&mut self, red: f32, green: f32, blue: f32);

    /// Allows touch tests against drawables lying outside the default stage area.
    ///
    /// Surfaces without touch tests can ignore this.
    fn set_offscreen_touching(&mut self, _enabled: bool) {}
}

/// The host's mouse, as seen by scripts before any camera correction.
pub trait PointerSource {
    /// The pointer position in stage coordinates, with the host's own device
    /// corrections already applied.
    fn raw_pointer(&self) -> (f64, f64);
}

/// The script runtime owning the stage.
pub trait StageRuntime {
    /// The logical stage size `(width, height)`.
    fn stage_size(&self) -> (f64, f64);

    /// Enables or disables clamping sprites to the stage bounds.
    fn set_fencing(&mut self, enabled: bool);
}
