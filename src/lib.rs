/*!
# stagecam

Camera controls for the stage of a block-programming runtime.

A project's scripts get a handful of blocks to pan, zoom, rotate and recolor the stage.
The camera turns its pose into an orthographic projection, pushes it to the host's
render surface, and corrects the mouse position reported to scripts so that it follows
the pan and zoom.

## Features
* a [`CameraState`](camera::CameraState) holding pan, zoom, rotation and background color.
* the pure projection math in [`camera::projection`], usable without any host.
* a [`ViewportTransform`](camera::ViewportTransform) binding the camera to a
  [`RenderSurface`](host::RenderSurface) and a [`PointerSource`](host::PointerSource).
* the [`CameraControls`](extension::CameraControls) and
  [`HelloWorld`](extension::HelloWorld) extensions, dispatching blocks by opcode.

Nothing is validated. A zoom of zero yields a non-finite projection, rotations are never
wrapped, and badly formed colors decode to `NaN` channels. The only refusal happens at
load time, when an extension is not granted direct access to the runtime.

```
use stagecam::prelude::*;

struct Surface;

impl RenderSurface for Surface {
    fn set_projection(&mut self, _: Mat4) {}
    fn set_surface_size(&mut self, _: f64, _: f64) {}
    fn set_clear_color(&mut self, _: f32, _: f32, _: f32) {}
}

struct Runtime;

impl StageRuntime for Runtime {
    fn stage_size(&self) -> (f64, f64) {
        (480.0, 360.0)
    }
    fn set_fencing(&mut self, _: bool) {}
}

struct Mouse;

impl PointerSource for Mouse {
    fn raw_pointer(&self) -> (f64, f64) {
        (0.0, 0.0)
    }
}

let mut camera =
    CameraControls::load(&LoadContext::unsandboxed(), &mut Runtime, Surface, Mouse).unwrap();

camera.run_block("turnDirRight", &[BlockArg::Number(370.0)]).unwrap();
assert_eq!(camera.get_dir(), 370.0);

let dir = camera.run_block("getDir", &[]).unwrap();
assert_eq!(dir.as_ref().and_then(BlockValue::as_number), Some(370.0));
```

A complete program driving both extensions through a printing host lives in
`demos/camera_script.rs` (`cargo run --example camera_script`).
*/
#![allow(clippy::float_cmp)]

pub use glamx;

pub mod argument;
pub mod camera;
pub mod color;
pub mod event;
pub mod extension;
pub mod host;

#[cfg(test)]
mod testing;

pub mod prelude {
    pub use crate::argument::*;
    pub use crate::camera::*;
    pub use crate::color::{Color, HexColor};
    pub use crate::event::*;
    pub use crate::extension::*;
    pub use crate::host::*;
    pub use glamx::Mat4;
}
