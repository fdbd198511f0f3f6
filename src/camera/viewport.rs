use crate::camera::projection::{self, StageProjection};
use crate::camera::CameraState;
use crate::color::HexColor;
use crate::event::StageEvent;
use crate::host::{PointerSource, RenderSurface};

/// The stage camera bound to its host collaborators.
///
/// Every mutation of the camera state is followed by a projection push to the render
/// surface, and pointer queries go through the camera's pan/zoom correction.
///
/// # Example
/// ```
/// use stagecam::prelude::*;
///
/// #[derive(Default)]
/// struct Surface {
///     projection: Option<Mat4>,
/// }
///
/// impl RenderSurface for Surface {
///     fn set_projection(&mut self, projection: Mat4) {
///         self.projection = Some(projection);
///     }
///     fn set_surface_size(&mut self, _: f64, _: f64) {}
///     fn set_clear_color(&mut self, _: f32, _: f32, _: f32) {}
/// }
///
/// struct Mouse;
///
/// impl PointerSource for Mouse {
///     fn raw_pointer(&self) -> (f64, f64) {
///         (10.0, 20.0)
///     }
/// }
///
/// let mut camera = ViewportTransform::new(Surface::default(), Mouse, (480.0, 360.0));
/// camera.set_zoom(200.0);
///
/// assert_eq!(camera.surface().projection.unwrap().w_axis.w, 0.5);
/// assert_eq!(camera.mouse_position(), (5.0, 10.0));
/// ```
#[derive(Clone, Debug)]
pub struct ViewportTransform<R, P> {
    state: CameraState,
    stage_size: (f64, f64),
    projection: StageProjection,
    surface: R,
    pointer: P,
}

impl<R: RenderSurface, P: PointerSource> ViewportTransform<R, P> {
    /// Creates a camera with the default pose and pushes its projection.
    pub fn new(surface: R, pointer: P, stage_size: (f64, f64)) -> Self {
        Self::with_state(surface, pointer, stage_size, CameraState::default())
    }

    /// Creates a camera starting at `state` and pushes its projection.
    pub fn with_state(surface: R, pointer: P, stage_size: (f64, f64), state: CameraState) -> Self {
        let projection = projection::stage_projection(&state, stage_size.0, stage_size.1);
        let mut res = ViewportTransform {
            state,
            stage_size,
            projection,
            surface,
            pointer,
        };

        res.recompute_projection();
        res
    }

    /// The current camera state.
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// The camera pan `(x, y)`.
    pub fn pan(&self) -> (f64, f64) {
        (self.state.pan_x, self.state.pan_y)
    }

    /// The zoom percentage.
    pub fn zoom(&self) -> f64 {
        self.state.zoom_percent
    }

    /// The rotation in degrees, as accumulated.
    pub fn rotation(&self) -> f64 {
        self.state.rotation_degrees
    }

    /// The background color, as set.
    pub fn background(&self) -> &HexColor {
        &self.state.background
    }

    /// The last logical stage size reported by the host.
    pub fn stage_size(&self) -> (f64, f64) {
        self.stage_size
    }

    /// The projection last pushed to the render surface.
    pub fn projection(&self) -> &StageProjection {
        &self.projection
    }

    /// The render surface.
    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// The pointer source.
    pub fn pointer(&self) -> &P {
        &self.pointer
    }

    /// Sets both pan components at once.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.state.pan_x = x;
        self.state.pan_y = y;
        self.recompute_projection();
    }

    /// Sets the horizontal pan.
    pub fn set_pan_x(&mut self, x: f64) {
        self.state.pan_x = x;
        self.recompute_projection();
    }

    /// Sets the vertical pan.
    pub fn set_pan_y(&mut self, y: f64) {
        self.state.pan_y = y;
        self.recompute_projection();
    }

    /// Sets the zoom percentage. Zero and negative values are accepted.
    pub fn set_zoom(&mut self, zoom_percent: f64) {
        self.state.zoom_percent = zoom_percent;
        self.recompute_projection();
    }

    /// Sets the rotation in degrees, without normalizing it.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.state.rotation_degrees = degrees;
        self.recompute_projection();
    }

    /// Sets the background color and pushes its decoded channels as the clear color.
    ///
    /// The background is part of the camera state, so this also pushes the projection
    /// like every other mutation, even though the matrix does not depend on the color.
    pub fn set_background(&mut self, color: impl Into<HexColor>) {
        self.state.background = color.into();
        let clear = self.state.background.to_color();
        self.surface.set_clear_color(clear.r, clear.g, clear.b);
        self.recompute_projection();
    }

    /// Recomputes the projection from the current state and pushes it, with the
    /// matching surface size, to the render surface.
    pub fn recompute_projection(&mut self) {
        self.projection =
            projection::stage_projection(&self.state, self.stage_size.0, self.stage_size.1);

        log::debug!(
            "Stage projection updated: pan ({}, {}), zoom {}%, rotation {}°.",
            self.state.pan_x,
            self.state.pan_y,
            self.state.zoom_percent,
            self.state.rotation_degrees
        );

        let (width, height) = self.projection.surface_size;
        self.surface.set_projection(self.projection.matrix);
        self.surface.set_surface_size(width, height);
    }

    /// Handles a host notification.
    pub fn handle_event(&mut self, event: &StageEvent) {
        match *event {
            StageEvent::StageSizeChanged(width, height) => {
                log::debug!("Stage resized to {}x{}.", width, height);
                self.stage_size = (width, height);
                self.recompute_projection();
            }
        }
    }

    /// The pointer position, corrected for the camera pan and zoom.
    pub fn mouse_position(&self) -> (f64, f64) {
        let raw = self.pointer.raw_pointer();
        let corrected = projection::correct_pointer(&self.state, raw);
        log::trace!("Pointer {:?} corrected to {:?}.", raw, corrected);
        corrected
    }

    /// The corrected pointer abscissa.
    pub fn mouse_x(&self) -> f64 {
        self.mouse_position().0
    }

    /// The corrected pointer ordinate.
    pub fn mouse_y(&self) -> f64 {
        self.mouse_position().1
    }

    /// Tears the camera down, giving the collaborators back to the host.
    pub fn into_parts(self) -> (R, P, CameraState) {
        (self.surface, self.pointer, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedPointer, RecordingSurface};
    use approx::assert_relative_eq;

    fn camera() -> ViewportTransform<RecordingSurface, FixedPointer> {
        let _ = env_logger::builder().is_test(true).try_init();
        ViewportTransform::new(
            RecordingSurface::default(),
            FixedPointer(30.0, -40.0),
            (480.0, 360.0),
        )
    }

    #[test]
    fn construction_pushes_the_initial_projection() {
        let cam = camera();
        assert_eq!(cam.surface().projections.len(), 1);
        assert_eq!(cam.surface().sizes, vec![(480.0, 360.0)]);
        assert_eq!(cam.surface().last_projection(), Some(cam.projection().matrix));
    }

    #[test]
    fn every_mutation_pushes_a_projection() {
        let mut cam = camera();
        cam.set_pan(1.0, 2.0);
        cam.set_pan_x(3.0);
        cam.set_pan_y(4.0);
        cam.set_zoom(50.0);
        cam.set_rotation(15.0);
        cam.set_background("#123456");

        assert_eq!(cam.surface().projections.len(), 7);
        assert_eq!(cam.pan(), (3.0, 4.0));
        assert_eq!(cam.zoom(), 50.0);
        assert_eq!(cam.rotation(), 15.0);
        assert_eq!(cam.projection().zoom_divisor(), 2.0);
    }

    #[test]
    fn background_pushes_decoded_channels() {
        let mut cam = camera();
        cam.set_background("#ff0000");

        assert_eq!(cam.background().as_str(), "#ff0000");
        assert_eq!(cam.surface().clear_colors, vec![(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn background_change_repushes_an_unchanged_projection() {
        let mut cam = camera();
        cam.set_zoom(50.0);
        let before = *cam.projection();
        cam.set_background("#0000ff");

        let surface = cam.surface();
        assert_eq!(surface.projections.len(), 3);
        assert_eq!(surface.sizes.len(), 3);
        assert_eq!(surface.last_projection(), Some(before.matrix));
        assert_eq!(surface.clear_colors, vec![(0.0, 0.0, 1.0)]);
    }

    #[test]
    fn resize_updates_stage_size_and_surface() {
        let mut cam = camera();
        cam.set_zoom(400.0);
        cam.handle_event(&StageEvent::StageSizeChanged(640.0, 360.0));

        assert_eq!(cam.stage_size(), (640.0, 360.0));
        assert_eq!(cam.surface().sizes.last(), Some(&(640.0, 360.0)));
        // Resizing keeps the zoom.
        assert_eq!(cam.projection().zoom_divisor(), 0.25);
        assert_relative_eq!(cam.projection().element(0), 2.0 / 640.0);
    }

    #[test]
    fn surface_size_ignores_zoom_and_pan() {
        let mut cam = camera();
        cam.set_zoom(10.0);
        cam.set_pan(1000.0, -1000.0);
        cam.set_rotation(45.0);

        assert_eq!(cam.surface().sizes.last(), Some(&(480.0, 360.0)));
    }

    #[test]
    fn pointer_goes_through_the_correction() {
        let mut cam = camera();
        assert_relative_eq!(cam.mouse_x(), 30.0);
        assert_relative_eq!(cam.mouse_y(), -40.0);

        cam.set_pan(50.0, 0.0);
        cam.set_zoom(200.0);
        assert_relative_eq!(cam.mouse_x(), (30.0 + 50.0) / 2.0);
        assert_relative_eq!(cam.mouse_y(), -40.0 / 2.0);
    }

    #[test]
    fn zero_zoom_is_accepted_silently() {
        let mut cam = camera();
        cam.set_zoom(0.0);

        assert!(!cam.projection().zoom_divisor().is_finite());
        assert!(!cam.mouse_x().is_finite());
    }

    #[test]
    fn into_parts_returns_the_collaborators() {
        let mut cam = camera();
        cam.set_pan_x(7.0);
        let (surface, pointer, state) = cam.into_parts();

        assert_eq!(surface.projections.len(), 2);
        assert_eq!(pointer, FixedPointer(30.0, -40.0));
        assert_eq!(state.pan_x, 7.0);
    }
}
