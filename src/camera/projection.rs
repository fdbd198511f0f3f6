//! Stage projection math.
//!
//! The helpers here operate on column-major [`Mat4`]s the way the host renderer's own
//! 4x4 helpers do: arithmetic in double precision, results stored as `f32`.

use crate::camera::CameraState;
use glamx::Mat4;

/// Index of the clip-space `w` scale in the flat column-major matrix.
///
/// The host divides clip-space coordinates by this component, so the stage camera
/// stores `100 / zoom` here instead of the usual `1`.
pub const ZOOM_ELEMENT: usize = 15;

/// The output of [`stage_projection`]: what gets pushed to the render surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StageProjection {
    /// The projection matrix, zoom divisor included.
    pub matrix: Mat4,
    /// The physical render-surface size `(width, height)`.
    pub surface_size: (f64, f64),
}

impl StageProjection {
    /// The matrix element at `index` of the flat column-major layout.
    pub fn element(&self, index: usize) -> f32 {
        self.matrix.to_cols_array()[index]
    }

    /// The zoom divisor stored in the matrix.
    pub fn zoom_divisor(&self) -> f32 {
        self.element(ZOOM_ELEMENT)
    }

    /// The matrix as 64 raw bytes, ready for a uniform buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.matrix)
    }
}

/// Computes an orthographic projection sending the given box to the unit cube.
///
/// `near` and `far` are distances along the negative z axis. Nothing is checked:
/// degenerate boxes produce infinite or `NaN` entries.
pub fn orthographic(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Mat4 {
    let mut m = [0.0f32; 16];

    m[0] = (2.0 / (right - left)) as f32;
    m[5] = (2.0 / (top - bottom)) as f32;
    m[10] = (2.0 / (near - far)) as f32;
    m[12] = ((left + right) / (left - right)) as f32;
    m[13] = ((bottom + top) / (bottom - top)) as f32;
    m[14] = ((near + far) / (near - far)) as f32;
    m[15] = 1.0;

    Mat4::from_cols_array(&m)
}

/// Multiplies `m` by a rotation of `angle` radians around the z axis.
pub fn z_rotate(m: &Mat4, angle: f64) -> Mat4 {
    let src = m.to_cols_array();
    let mut dst = src;
    let (s, c) = angle.sin_cos();

    for i in 0..4 {
        let a = src[i] as f64;
        let b = src[4 + i] as f64;
        dst[i] = (c * a + s * b) as f32;
        dst[4 + i] = (c * b - s * a) as f32;
    }

    Mat4::from_cols_array(&dst)
}

/// Multiplies `m` by a scaling matrix. The translation column is left untouched.
pub fn scale(m: &Mat4, sx: f64, sy: f64, sz: f64) -> Mat4 {
    let mut dst = m.to_cols_array();

    for (col, factor) in [sx, sy, sz].iter().enumerate() {
        for row in 0..4 {
            let i = col * 4 + row;
            dst[i] = (factor * dst[i] as f64) as f32;
        }
    }

    Mat4::from_cols_array(&dst)
}

/// Builds the stage projection for `state` on a stage of the given logical size.
///
/// The view box is the stage centered on the camera pan. Its bottom and top are handed
/// to [`orthographic`] swapped, and the resulting y flip is undone by a final `(1, -1, 1)`
/// scale. The rotation is applied in between, and the zoom is written last into
/// [`ZOOM_ELEMENT`].
pub fn stage_projection(state: &CameraState, stage_width: f64, stage_height: f64) -> StageProjection {
    let left = stage_width / -2.0 + state.pan_x;
    let right = stage_width / 2.0 + state.pan_x;
    let bottom = stage_height / -2.0 + state.pan_y;
    let top = stage_height / 2.0 + state.pan_y;

    let ortho = orthographic(left, right, top, bottom, -1.0, 1.0);
    let rotated = z_rotate(&ortho, state.rotation_radians());
    let flipped = scale(&rotated, 1.0, -1.0, 1.0);

    let mut m = flipped.to_cols_array();
    m[ZOOM_ELEMENT] = (100.0 / state.zoom_percent) as f32;

    StageProjection {
        matrix: Mat4::from_cols_array(&m),
        surface_size: ((right - left).abs(), (bottom - top).abs()),
    }
}

/// Maps a raw host pointer position into the camera's coordinate space.
///
/// Only pan and zoom are taken into account. The pan is added, not subtracted.
pub fn correct_pointer(state: &CameraState, raw: (f64, f64)) -> (f64, f64) {
    (
        (raw.0 + state.pan_x) / state.zoom_percent * 100.0,
        (raw.1 + state.pan_y) / state.zoom_percent * 100.0,
    )
}
