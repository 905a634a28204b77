#[macro_use]
extern crate glium;

use glium::index::{NoIndices, PrimitiveType};
use glium::uniforms::EmptyUniforms;
use glium::{Display, Program, Surface, VertexBuffer};
use glutin::surface::WindowSurface;
use glw::shader::{load_program, shader_path};
use glw::{ApplicationContext, DemoError, State};

#[derive(Copy, Clone)]
struct Vertex {
    position: [f32; 4],
}

implement_vertex!(Vertex, position);

struct Application {
    vertex_buffer: VertexBuffer<Vertex>,
    program: Program,
}

impl ApplicationContext for Application {
    const WINDOW_TITLE: &'static str = "Hello Graphics World";

    fn new(display: &Display<WindowSurface>) -> Result<Self, DemoError> {
        let vertex_buffer = VertexBuffer::new(display, &[
            Vertex { position: [ 0.75,  0.75, 0.0, 1.0] },
            Vertex { position: [ 0.75, -0.75, 0.0, 1.0] },
            Vertex { position: [-0.75, -0.75, 0.0, 1.0] },
        ])?;

        let program = load_program(display, shader_path("basic.vert"), shader_path("basic.frag"))?;

        Ok(Self { vertex_buffer, program })
    }

    fn draw_frame(&mut self, display: &Display<WindowSurface>) -> Result<(), DemoError> {
        let mut target = display.draw();
        target.clear_color(1.0, 1.0, 1.0, 1.0);

        let drawn = target.draw(&self.vertex_buffer, NoIndices(PrimitiveType::TrianglesList),
                                &self.program, &EmptyUniforms, &Default::default());

        // the frame has to be finished even if the draw call failed
        target.finish()?;
        drawn?;

        Ok(())
    }
}

fn main() {
    glw::init_logging();
    State::<Application>::run_loop();
}
