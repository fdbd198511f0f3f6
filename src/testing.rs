//! Recording host doubles shared by the unit tests.

use crate::host::{PointerSource, RenderSurface, StageRuntime};
use glamx::Mat4;

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub projections: Vec<Mat4>,
    pub sizes: Vec<(f64, f64)>,
    pub clear_colors: Vec<(f32, f32, f32)>,
    pub offscreen_touching: bool,
}

impl RecordingSurface {
    pub fn last_projection(&self) -> Option<Mat4> {
        self.projections.last().copied()
    }
}

impl RenderSurface for RecordingSurface {
    fn set_projection(&mut self, projection: Mat4) {
        self.projections.push(projection);
    }

    fn set_surface_size(&mut self, width: f64, height: f64) {
        self.sizes.push((width, height));
    }

    fn set_clear_color(&mut self, red: f32, green: f32, blue: f32) {
        self.clear_colors.push((red, green, blue));
    }

    fn set_offscreen_touching(&mut self, enabled: bool) {
        self.offscreen_touching = enabled;
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedPointer(pub f64, pub f64);

impl PointerSource for FixedPointer {
    fn raw_pointer(&self) -> (f64, f64) {
        (self.0, self.1)
    }
}

#[derive(Clone, Debug)]
pub struct MockRuntime {
    pub stage_size: (f64, f64),
    pub fencing: bool,
}

impl Default for MockRuntime {
    fn default() -> Self {
        MockRuntime {
            stage_size: (480.0, 360.0),
            fencing: true,
        }
    }
}

impl StageRuntime for MockRuntime {
    fn stage_size(&self) -> (f64, f64) {
        self.stage_size
    }

    fn set_fencing(&mut self, enabled: bool) {
        self.fencing = enabled;
    }
}
