use glium::backend::Facade;
use glium::index::{NoIndices, PrimitiveType};
use glium::uniforms::Uniforms;
use glium::{DrawError, DrawParameters, Program, Surface, VertexBuffer};

use crate::error::DemoError;
use crate::objects::{Color, ColorMode, DrawMode, Normal, Position};
use crate::transform::Model;

/// Color of every vertex in `ColorMode::Solid`.
pub const SOLID_COLOR: [f32; 4] = [0.8, 0.3, 0.1, 1.0];

/// Face colors in `ColorMode::PerSide`, in the order of `FACES`.
pub const SIDE_COLORS: [[f32; 4]; 6] = [
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
];

// outward normal, then the corners counter-clockwise as seen from outside
const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    // front
    ([0.0, 0.0, 1.0],
     [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]]),
    // back
    ([0.0, 0.0, -1.0],
     [[0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5]]),
    // right
    ([1.0, 0.0, 0.0],
     [[0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5]]),
    // left
    ([-1.0, 0.0, 0.0],
     [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]]),
    // top
    ([0.0, 1.0, 0.0],
     [[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]]),
    // bottom
    ([0.0, -1.0, 0.0],
     [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]]),
];

/// Vertices of a unit cube centred on the origin, as a list of 12 triangles.
///
/// Each face has its own four corners so that normals stay flat.
#[derive(Clone, Debug)]
pub struct CubeMesh {
    /// Vertex positions, six per face.
    pub positions: Vec<Position>,
    /// Vertex colors.
    pub colors: Vec<Color>,
    /// Outward face normals.
    pub normals: Vec<Normal>,
}

impl CubeMesh {
    /// Number of vertices of the triangle list.
    pub const NUM_VERTICES: usize = 36;

    /// Builds the cube with the given coloring.
    pub fn new(color_mode: ColorMode) -> CubeMesh {
        let mut positions = Vec::with_capacity(Self::NUM_VERTICES);
        let mut normals = Vec::with_capacity(Self::NUM_VERTICES);

        for &(normal, corners) in FACES.iter() {
            for &corner in [0, 1, 2, 0, 2, 3].iter() {
                positions.push(Position { position: corners[corner] });
                normals.push(Normal { normal });
            }
        }

        CubeMesh { positions, colors: cube_colors(color_mode), normals }
    }
}

fn cube_colors(color_mode: ColorMode) -> Vec<Color> {
    let vertices_per_face = CubeMesh::NUM_VERTICES / FACES.len();

    (0 .. CubeMesh::NUM_VERTICES)
        .map(|vertex| match color_mode {
            ColorMode::PerSide => Color { color: SIDE_COLORS[vertex / vertices_per_face] },
            ColorMode::Solid => Color { color: SOLID_COLOR },
        })
        .collect()
}

/// A cube uploaded to the GPU.
pub struct Cube {
    positions: VertexBuffer<Position>,
    colors: VertexBuffer<Color>,
    normals: VertexBuffer<Normal>,
    color_mode: ColorMode,

    /// How the cube is rasterized.
    pub draw_mode: DrawMode,

    /// Model matrix of the cube.
    pub model: Model,
}

impl Cube {
    /// Builds and uploads a cube.
    pub fn new<F>(facade: &F, color_mode: ColorMode) -> Result<Cube, DemoError>
        where F: Facade + ?Sized
    {
        let mesh = CubeMesh::new(color_mode);

        Ok(Cube {
            positions: VertexBuffer::new(facade, &mesh.positions)?,
            colors: VertexBuffer::new(facade, &mesh.colors)?,
            normals: VertexBuffer::new(facade, &mesh.normals)?,
            color_mode,
            draw_mode: DrawMode::default(),
            model: Model::default(),
        })
    }

    /// Returns the current coloring.
    #[inline]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Changes the coloring, uploading a new color buffer if needed.
    pub fn set_color_mode<F>(&mut self, facade: &F, color_mode: ColorMode)
                             -> Result<(), DemoError>
        where F: Facade + ?Sized
    {
        if color_mode != self.color_mode {
            self.colors = VertexBuffer::new(facade, &cube_colors(color_mode))?;
            self.color_mode = color_mode;
        }

        Ok(())
    }

    /// Draws the cube on `target`. See `Sphere::draw`.
    pub fn draw<S, U>(&self, target: &mut S, program: &Program, uniforms: &U,
                      params: &DrawParameters<'_>) -> Result<(), DrawError>
        where S: Surface, U: Uniforms
    {
        let primitive = match self.draw_mode {
            DrawMode::Points => PrimitiveType::Points,
            DrawMode::Lines | DrawMode::Polygons => PrimitiveType::TrianglesList,
        };

        target.draw((&self.positions, &self.colors, &self.normals), NoIndices(primitive),
                    program, uniforms, &self.draw_mode.draw_parameters(params.clone()))
    }
}
