use crate::color::HexColor;

/// The pose and background of a stage camera.
///
/// No field is bounded. A zoom of zero or below, or a rotation past a full turn, is
/// stored as given and flows into the projection unchanged.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraState {
    /// Horizontal camera offset, in stage units.
    pub pan_x: f64,
    /// Vertical camera offset, in stage units.
    pub pan_y: f64,
    /// Camera rotation in degrees. Accumulates without wrapping around.
    pub rotation_degrees: f64,
    /// Zoom as a percentage, `100.0` meaning no zoom.
    pub zoom_percent: f64,
    /// The stage clear color.
    pub background: HexColor,
}

impl Default for CameraState {
    fn default() -> Self {
        CameraState {
            pan_x: 0.0,
            pan_y: 0.0,
            rotation_degrees: 0.0,
            zoom_percent: 100.0,
            background: HexColor::default(),
        }
    }
}

impl CameraState {
    /// The camera rotation converted to radians.
    #[inline]
    pub fn rotation_radians(&self) -> f64 {
        self.rotation_degrees * std::f64::consts::PI / 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_an_untouched_stage() {
        let state = CameraState::default();
        assert_eq!(state.pan_x, 0.0);
        assert_eq!(state.pan_y, 0.0);
        assert_eq!(state.rotation_degrees, 0.0);
        assert_eq!(state.zoom_percent, 100.0);
        assert_eq!(state.background.as_str(), "#ffffff");
    }

    #[test]
    fn rotation_is_not_normalized() {
        let state = CameraState {
            rotation_degrees: 540.0,
            ..CameraState::default()
        };
        assert_eq!(state.rotation_degrees, 540.0);
        assert_relative_eq!(state.rotation_radians(), 3.0 * std::f64::consts::PI);
    }
}
