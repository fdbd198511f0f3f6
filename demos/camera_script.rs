//! Drives the camera extension the way a running project would.
//!
//! A fake host prints every projection it receives, then a short script pans, zooms,
//! turns and recolors the stage before reading the camera back through its reporters.
use stagecam::prelude::*;

struct PrintingSurface;

impl RenderSurface for PrintingSurface {
    fn set_projection(&mut self, projection: Mat4) {
        println!("projection: {:?}", projection.to_cols_array());
    }

    fn set_surface_size(&mut self, width: f64, height: f64) {
        println!("surface size: {}x{}", width, height);
    }

    fn set_clear_color(&mut self, red: f32, green: f32, blue: f32) {
        println!("clear color: ({}, {}, {})", red, green, blue);
    }

    fn set_offscreen_touching(&mut self, enabled: bool) {
        println!("offscreen touching: {}", enabled);
    }
}

struct Mouse {
    x: f64,
    y: f64,
}

impl PointerSource for Mouse {
    fn raw_pointer(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

struct Stage;

impl StageRuntime for Stage {
    fn stage_size(&self) -> (f64, f64) {
        (480.0, 360.0)
    }

    fn set_fencing(&mut self, enabled: bool) {
        println!("fencing: {}", enabled);
    }
}

fn main() -> Result<(), ExtensionError> {
    env_logger::init();

    let mouse = Mouse { x: 40.0, y: -20.0 };
    let mut camera = CameraControls::load(
        &LoadContext::unsandboxed(),
        &mut Stage,
        PrintingSurface,
        mouse,
    )?;

    let script: Vec<(&str, Vec<BlockArg>)> = vec![
        ("setBoth", vec![BlockArg::Number(60.0), "-30".into()]),
        ("changeZoom", vec![BlockArg::Number(100.0)]),
        ("turnDirRight", vec![BlockArg::Number(90.0)]),
        ("setCol", vec!["#1e90ff".into()]),
    ];

    for (opcode, args) in &script {
        println!("> {}", opcode);
        camera.run_block(opcode, args)?;
    }

    camera.handle_event(&StageEvent::StageSizeChanged(960.0, 720.0));

    for opcode in &["getX", "getY", "getDir", "getZoom"] {
        if let Some(value) = camera.run_block(opcode, &[])?.and_then(|v| v.as_number()) {
            println!("{} = {}", opcode, value);
        }
    }

    if let Some(color) = camera.run_block("getCol", &[])? {
        println!("getCol = {}", color.as_text().unwrap_or_default());
    }

    println!("mouse = ({}, {})", camera.mouse_x(), camera.mouse_y());

    let mut hello = HelloWorld::load(&LoadContext::unsandboxed())?;
    if let Some(answer) = hello.run_block("hello", &[])? {
        println!("hello = {}", answer);
    }

    Ok(())
}
