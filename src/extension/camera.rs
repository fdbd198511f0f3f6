use crate::argument::{BlockArg, BlockValue};
use crate::camera::ViewportTransform;
use crate::event::StageEvent;
use crate::extension::{positional, Extension, ExtensionError, LoadContext};
use crate::host::{PointerSource, RenderSurface, StageRuntime};

/// The camera extension: blocks to pan, zoom, rotate and recolor the stage.
///
/// Loading it disables sprite fencing and enables off-stage touch tests, since panned or
/// zoomed content routinely lies outside the default stage box.
#[derive(Clone, Debug)]
pub struct CameraControls<R, P> {
    viewport: ViewportTransform<R, P>,
}

impl<R: RenderSurface, P: PointerSource> CameraControls<R, P> {
    /// The id this extension registers under.
    pub const ID: &'static str = "DTcameracontrols";
    /// The extension name.
    pub const NAME: &'static str = "Camera";

    /// Loads the extension and pushes the initial projection.
    ///
    /// Fails when `ctx` is sandboxed, in which case nothing on the host is touched.
    pub fn load<S: StageRuntime>(
        ctx: &LoadContext,
        runtime: &mut S,
        mut surface: R,
        pointer: P,
    ) -> Result<Self, ExtensionError> {
        if !ctx.unsandboxed {
            return Err(ExtensionError::Sandboxed {
                message: "Camera extension must be run unsandboxed",
            });
        }

        runtime.set_fencing(false);
        surface.set_offscreen_touching(true);

        let viewport = ViewportTransform::new(surface, pointer, runtime.stage_size());
        log::info!("Loaded extension {}.", Self::ID);

        Ok(CameraControls { viewport })
    }

    /// The underlying viewport transform.
    pub fn viewport(&self) -> &ViewportTransform<R, P> {
        &self.viewport
    }

    /// Unloads the extension.
    pub fn into_viewport(self) -> ViewportTransform<R, P> {
        self.viewport
    }

    /// Forwards a host notification to the camera.
    pub fn handle_event(&mut self, event: &StageEvent) {
        self.viewport.handle_event(event)
    }

    /// The mouse x position reported to scripts.
    pub fn mouse_x(&self) -> f64 {
        self.viewport.mouse_x()
    }

    /// The mouse y position reported to scripts.
    pub fn mouse_y(&self) -> f64 {
        self.viewport.mouse_y()
    }

    /// `set camera to x: [x] y: [y]`
    pub fn set_both(&mut self, x: f64, y: f64) {
        self.viewport.set_pan(x, y);
    }

    /// `change camera zoom by [val]`
    pub fn change_zoom(&mut self, val: f64) {
        let zoom = self.viewport.zoom() + val;
        self.viewport.set_zoom(zoom);
    }

    /// `set camera zoom to [val] %`
    pub fn set_zoom(&mut self, val: f64) {
        self.viewport.set_zoom(val);
    }

    /// `change camera x by [val]`
    pub fn change_x(&mut self, val: f64) {
        let x = self.viewport.pan().0 + val;
        self.viewport.set_pan_x(x);
    }

    /// `set camera x to [val]`
    pub fn set_x(&mut self, val: f64) {
        self.viewport.set_pan_x(val);
    }

    /// `change camera y by [val]`
    pub fn change_y(&mut self, val: f64) {
        let y = self.viewport.pan().1 + val;
        self.viewport.set_pan_y(y);
    }

    /// `set camera y to [val]`
    pub fn set_y(&mut self, val: f64) {
        self.viewport.set_pan_y(val);
    }

    /// `point camera in direction [val]`
    pub fn set_dir(&mut self, val: f64) {
        self.viewport.set_rotation(val);
    }

    /// `turn camera right [val] degrees`
    pub fn turn_dir_right(&mut self, val: f64) {
        let dir = self.viewport.rotation() + val;
        self.viewport.set_rotation(dir);
    }

    /// `turn camera left [val] degrees`
    pub fn turn_dir_left(&mut self, val: f64) {
        let dir = self.viewport.rotation() - val;
        self.viewport.set_rotation(dir);
    }

    /// `camera x`
    pub fn get_x(&self) -> f64 {
        self.viewport.pan().0
    }

    /// `camera y`
    pub fn get_y(&self) -> f64 {
        self.viewport.pan().1
    }

    /// `camera direction`
    pub fn get_dir(&self) -> f64 {
        self.viewport.rotation()
    }

    /// `camera zoom`
    pub fn get_zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    /// `set background color to [val]`
    pub fn set_col(&mut self, val: &str) {
        self.viewport.set_background(val);
    }

    /// `background color`
    pub fn get_col(&self) -> &str {
        self.viewport.background().as_str()
    }
}

impl<R: RenderSurface, P: PointerSource> Extension for CameraControls<R, P> {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run_block(
        &mut self,
        opcode: &str,
        args: &[BlockArg],
    ) -> Result<Option<BlockValue>, ExtensionError> {
        let val = |opcode: &'static str| positional(args, 0, opcode, "val").map(BlockArg::to_number);

        let report = match opcode {
            "setBoth" => {
                let x = positional(args, 0, "setBoth", "x")?.to_number();
                let y = positional(args, 1, "setBoth", "y")?.to_number();
                self.set_both(x, y);
                None
            }
            "changeZoom" => {
                self.change_zoom(val("changeZoom")?);
                None
            }
            "setZoom" => {
                self.set_zoom(val("setZoom")?);
                None
            }
            "changeX" => {
                self.change_x(val("changeX")?);
                None
            }
            "setX" => {
                self.set_x(val("setX")?);
                None
            }
            "changeY" => {
                self.change_y(val("changeY")?);
                None
            }
            "setY" => {
                self.set_y(val("setY")?);
                None
            }
            "setDir" => {
                self.set_dir(val("setDir")?);
                None
            }
            "turnDirRight" => {
                self.turn_dir_right(val("turnDirRight")?);
                None
            }
            "turnDirLeft" => {
                self.turn_dir_left(val("turnDirLeft")?);
                None
            }
            "setCol" => {
                let color = positional(args, 0, "setCol", "val")?.to_text();
                self.set_col(&color);
                None
            }
            "getX" => Some(BlockValue::Number(self.get_x())),
            "getY" => Some(BlockValue::Number(self.get_y())),
            "getDir" => Some(BlockValue::Number(self.get_dir())),
            "getZoom" => Some(BlockValue::Number(self.get_zoom())),
            "getCol" => Some(BlockValue::Text(self.get_col().to_string())),
            _ => {
                return Err(ExtensionError::UnknownOpcode {
                    extension: Self::ID,
                    opcode: opcode.to_string(),
                })
            }
        };

        Ok(report)
    }
}
