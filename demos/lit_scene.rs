#[macro_use]
extern crate glium;

use cgmath::Vector4;
use glium::{Display, DrawParameters, Frame, Program, Surface};
use glutin::surface::WindowSurface;
use winit::event::VirtualKeyCode;

use glw::objects::{Cube, Sphere};
use glw::shader::{load_program, shader_path};
use glw::transform::{normal_matrix, perspective, view, Model};
use glw::window::aspect_ratio;
use glw::{ApplicationContext, ColorMode, Controls, DemoError, DrawMode, State};

const SPHERE_LATS: u32 = 40;
const SPHERE_LONGS: u32 = 40;

struct Application {
    sphere: Sphere,
    cube: Cube,
    light_marker: Sphere,
    program: Program,
    controls: Controls,
    aspect_ratio: f32,
}

impl Application {
    fn draw_scene(&self, target: &mut Frame) -> Result<(), DemoError> {
        let view_matrix = view(self.controls.eye, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let view: [[f32; 4]; 4] = view_matrix.into();
        let projection: [[f32; 4]; 4] = perspective(30.0, self.aspect_ratio, 0.1, 100.0).into();

        let [lx, ly, lz] = self.controls.light;
        let light_position: [f32; 3] = (view_matrix * Vector4::new(lx, ly, lz, 1.0)).truncate().into();

        let params = DrawParameters {
            depth: glium::Depth {
                test: glium::draw_parameters::DepthTest::IfLess,
                write: true,
                .. Default::default()
            },
            .. Default::default()
        };

        let uniforms = |model: &Model, emissive: bool| uniform! {
            model: model.to_array(),
            view: view,
            projection: projection,
            normal_matrix: normal_matrix(view_matrix * model.matrix()),
            light_position: light_position,
            emissive: emissive,
        };

        self.sphere.draw(target, &self.program, &uniforms(&self.sphere.model, false), &params)?;
        self.cube.draw(target, &self.program, &uniforms(&self.cube.model, false), &params)?;
        self.light_marker.draw(target, &self.program,
                               &uniforms(&self.light_marker.model, true), &params)?;

        Ok(())
    }
}

impl ApplicationContext for Application {
    const WINDOW_TITLE: &'static str = "Lit Sphere and Cube";

    fn new(display: &Display<WindowSurface>) -> Result<Self, DemoError> {
        let sphere = Sphere::new(display, SPHERE_LATS, SPHERE_LONGS)?;
        let cube = Cube::new(display, ColorMode::Solid)?;
        let light_marker = Sphere::new(display, 8, 8)?;
        let program = load_program(display, shader_path("lit.vert"), shader_path("lit.frag"))?;

        let mut controls = Controls::spinning([0.0, 0.3, 0.0]);
        controls.color_mode = ColorMode::Solid;
        controls.eye = [0.0, 1.0, 6.0];
        let controls = controls.with_reset();

        Ok(Self { sphere, cube, light_marker, program, controls, aspect_ratio: 1.0 })
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
        self.sphere.draw_mode = self.controls.draw_mode;
        self.cube.draw_mode = self.controls.draw_mode;
        self.light_marker.draw_mode = DrawMode::Polygons;

        let scene = self.controls.model();

        self.sphere.model = scene;
        self.sphere.model.translate(-0.8, 0.0, 0.0).scale(0.6, 0.6, 0.6);

        self.cube.model = scene;
        self.cube.model.translate(0.8, 0.0, 0.0).scale(0.9, 0.9, 0.9);

        let [lx, ly, lz] = self.controls.light;
        self.light_marker.model.reset().translate(lx, ly, lz).scale(0.05, 0.05, 0.05);

        let mut target = display.draw();
        target.clear_color_and_depth((0.05, 0.05, 0.1, 1.0), 1.0);

        let drawn = self.draw_scene(&mut target);

        target.finish()?;
        drawn
    }
}

fn main() {
    glw::init_logging();
    State::<Application>::run_loop();
}
