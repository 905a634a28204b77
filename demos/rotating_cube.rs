#[macro_use]
extern crate glium;

use glium::{Display, DrawParameters, Program, Surface};
use glutin::surface::WindowSurface;
use winit::event::VirtualKeyCode;

use glw::objects::Cube;
use glw::shader::{load_program, shader_path};
use glw::transform::{perspective, view};
use glw::window::aspect_ratio;
use glw::{ApplicationContext, ColorMode, Controls, DemoError, State};

struct Application {
    cube: Cube,
    program: Program,
    controls: Controls,
    aspect_ratio: f32,
}

impl ApplicationContext for Application {
    const WINDOW_TITLE: &'static str = "Rotating Cube";

    fn new(display: &Display<WindowSurface>) -> Result<Self, DemoError> {
        let cube = Cube::new(display, ColorMode::PerSide)?;
        let program = load_program(display, shader_path("cube.vert"), shader_path("cube.frag"))?;

        Ok(Self {
            cube,
            program,
            controls: Controls::spinning([0.3, 0.5, 0.0]),
            aspect_ratio: 1.0,
        })
    }

    fn update(&mut self) {
        self.controls.advance();
    }

    fn handle_key(&mut self, key: VirtualKeyCode) {
        self.controls.handle_key(key);
    }

    fn reshape(&mut self, width: u32, height: u32) {
        self.aspect_ratio = aspect_ratio(width, height);
    }

    fn draw_frame(&mut self, display: &Display<WindowSurface>) -> Result<(), DemoError> {
        self.cube.set_color_mode(display, self.controls.color_mode)?;
        self.cube.draw_mode = self.controls.draw_mode;
        self.cube.model = self.controls.model();

        let view: [[f32; 4]; 4] = view(self.controls.eye, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]).into();
        let projection: [[f32; 4]; 4] = perspective(30.0, self.aspect_ratio, 0.1, 100.0).into();

        let uniforms = uniform! {
            model: self.cube.model.to_array(),
            view: view,
            projection: projection,
        };

        let params = DrawParameters {
            depth: glium::Depth {
                test: glium::draw_parameters::DepthTest::IfLess,
                write: true,
                .. Default::default()
            },
            .. Default::default()
        };

        let mut target = display.draw();
        target.clear_color_and_depth((0.0, 0.0, 0.0, 1.0), 1.0);

        let drawn = self.cube.draw(&mut target, &self.program, &uniforms, &params);

        target.finish()?;
        drawn?;

        Ok(())
    }
}

fn main() {
    glw::init_logging();
    State::<Application>::run_loop();
}
