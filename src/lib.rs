/*!
Shared helpers for the OpenGL demo programs.

Each demo opens a window, uploads a few static vertex buffers, loads a vertex/fragment shader
pair from the `shaders` directory and redraws every frame. This library holds the parts the demos
have in common:

 - The `window` module creates the window and the OpenGL context and runs the event loop. A demo
   plugs into it by implementing `ApplicationContext`.
 - The `shader` module reads GLSL files from disk and links them into a `glium::Program`.
 - The `objects` module contains the procedural sphere and the cube, both usable as pure CPU
   meshes or as uploaded GPU objects.
 - The `transform` and `controls` modules build the model, view and projection matrices and map
   keyboard bindings onto the transformation state.

# Example

```no_run
use glium::Surface;
use glw::{ApplicationContext, DemoError, State};

struct Blank;

impl ApplicationContext for Blank {
    const WINDOW_TITLE: &'static str = "Blank";

    fn new(_: &glium::Display<glutin::surface::WindowSurface>) -> Result<Self, DemoError> {
        Ok(Blank)
    }

    fn draw_frame(&mut self, display: &glium::Display<glutin::surface::WindowSurface>)
                  -> Result<(), DemoError>
    {
        let mut target = display.draw();
        target.clear_color(1.0, 1.0, 1.0, 1.0);
        target.finish()?;
        Ok(())
    }
}

fn main() {
    State::<Blank>::run_loop();
}
```

*/
#![warn(missing_docs)]

#[macro_use]
extern crate glium;

pub mod controls;
pub mod objects;
pub mod shader;
pub mod transform;
pub mod window;

mod error;

pub use crate::controls::Controls;
pub use crate::error::DemoError;
pub use crate::objects::{ColorMode, DrawMode};
pub use crate::shader::{load_program, ShaderError};
pub use crate::transform::Model;
pub use crate::window::{ApplicationContext, CreationError, State, WindowConfig};

/// Installs the `env_logger` backend for the `log` facade.
///
/// The filter defaults to `info` and can be overridden with `RUST_LOG`. Calling this more than
/// once is harmless.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}
