use std::ops::Range;

use glium::backend::Facade;
use glium::index::{NoIndices, PrimitiveType};
use glium::uniforms::Uniforms;
use glium::{DrawError, DrawParameters, IndexBuffer, Program, Surface, VertexBuffer};

use crate::error::DemoError;
use crate::objects::{Color, DrawMode, Normal, Position};
use crate::transform::Model;

/// Fewest latitude bands that still close the sphere: two fans and no strip.
pub const MIN_LATS: u32 = 2;

/// Fewest longitudes that still enclose a volume.
pub const MIN_LONGS: u32 = 3;

/// Most latitude bands. Keeps vertex and index counts well inside `u32`.
pub const MAX_LATS: u32 = 2048;

/// Most longitudes.
pub const MAX_LONGS: u32 = 2048;

/// A contiguous run of the index array drawn with a single primitive type.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexBatch {
    /// How the indices of the run are assembled.
    pub primitive: PrimitiveType,
    /// Position of the run inside `SphereMesh::indices`.
    pub range: Range<usize>,
}

/// A unit sphere tessellated along latitudes and longitudes.
///
/// The first vertex is the north pole `(0, 0, 1)` and the last one the south pole `(0, 0, -1)`.
/// In between lie `num_lats - 1` rows of `num_longs` vertices each, from north to south, every
/// row going west to east starting at -180 degrees.
///
/// The index array holds a triangle fan around the north pole, one triangle strip per latitude
/// band, and a triangle fan around the south pole, in that order. `batches` tells where each of
/// them starts and ends.
#[derive(Clone, Debug)]
pub struct SphereMesh {
    num_lats: u32,
    num_longs: u32,
    /// Vertex positions.
    pub positions: Vec<Position>,
    /// Vertex colors, equal to the position with an opaque alpha.
    pub colors: Vec<Color>,
    /// Vertex normals, equal to the position since the sphere has a radius of one.
    pub normals: Vec<Normal>,
    /// Fan and strip indices.
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Builds the mesh. The resolution is clamped to `MIN_LATS ..= MAX_LATS` and
    /// `MIN_LONGS ..= MAX_LONGS`.
    pub fn new(num_lats: u32, num_longs: u32) -> SphereMesh {
        let num_lats = num_lats.clamp(MIN_LATS, MAX_LATS);
        let num_longs = num_longs.clamp(MIN_LONGS, MAX_LONGS);

        let positions = unit_sphere(num_lats, num_longs);

        let colors = positions.iter()
            .map(|&Position { position: [x, y, z] }| Color { color: [x, y, z, 1.0] })
            .collect();

        let normals = positions.iter()
            .map(|&Position { position }| Normal { normal: position })
            .collect();

        let indices = sphere_indices(num_lats, num_longs);

        SphereMesh { num_lats, num_longs, positions, colors, normals, indices }
    }

    /// Number of latitude bands.
    #[inline]
    pub fn num_lats(&self) -> u32 {
        self.num_lats
    }

    /// Number of vertices on each latitude row.
    #[inline]
    pub fn num_longs(&self) -> u32 {
        self.num_longs
    }

    /// Number of vertices: both poles plus every latitude row.
    #[inline]
    pub fn num_vertices(&self) -> u32 {
        2 + (self.num_lats - 1) * self.num_longs
    }

    /// Lists the draw calls needed to render `indices`: the north fan, every latitude strip and
    /// the south fan.
    pub fn batches(&self) -> Vec<IndexBatch> {
        let fan_len = self.num_longs as usize + 2;
        let strip_len = 2 * self.num_longs as usize + 2;
        let num_strips = self.num_lats as usize - 2;

        let mut batches = Vec::with_capacity(num_strips + 2);
        batches.push(IndexBatch { primitive: PrimitiveType::TriangleFan, range: 0 .. fan_len });

        let mut start = fan_len;
        for _ in 0 .. num_strips {
            batches.push(IndexBatch {
                primitive: PrimitiveType::TriangleStrip,
                range: start .. start + strip_len,
            });
            start += strip_len;
        }

        batches.push(IndexBatch {
            primitive: PrimitiveType::TriangleFan,
            range: start .. start + fan_len,
        });

        batches
    }
}

fn unit_sphere(num_lats: u32, num_longs: u32) -> Vec<Position> {
    let mut positions = Vec::with_capacity((2 + (num_lats - 1) * num_longs) as usize);

    positions.push(Position { position: [0.0, 0.0, 1.0] });

    let lat_step = 180.0 / num_lats as f32;
    let long_step = 360.0 / num_longs as f32;

    for row in 1 .. num_lats {
        let lat = (90.0 - row as f32 * lat_step).to_radians();

        for col in 0 .. num_longs {
            let lon = (-180.0 + col as f32 * long_step).to_radians();

            positions.push(Position {
                position: [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()],
            });
        }
    }

    positions.push(Position { position: [0.0, 0.0, -1.0] });

    positions
}

fn sphere_indices(num_lats: u32, num_longs: u32) -> Vec<u32> {
    let num_vertices = 2 + (num_lats - 1) * num_longs;
    let num_indices = 2 * (num_longs + 2) + (num_lats - 2) * (2 * num_longs + 2);
    let mut indices = Vec::with_capacity(num_indices as usize);

    // north pole fan, closed on the first vertex of the first row
    indices.extend(0 ..= num_longs);
    indices.push(1);

    let mut start = 1;
    for _ in 0 .. num_lats - 2 {
        for i in 0 .. num_longs {
            indices.push(start + i);
            indices.push(start + i + num_longs);
        }

        indices.push(start);
        indices.push(start + num_longs);

        start += num_longs;
    }

    // south pole fan, walking the last row backwards
    let south = num_vertices - 1;
    indices.extend((south - num_longs ..= south).rev());
    indices.push(south - 1);

    indices
}

/// A sphere uploaded to the GPU.
pub struct Sphere {
    positions: VertexBuffer<Position>,
    colors: VertexBuffer<Color>,
    normals: VertexBuffer<Normal>,
    batches: Vec<IndexBuffer<u32>>,

    /// How the sphere is rasterized.
    pub draw_mode: DrawMode,

    /// Model matrix of the sphere.
    pub model: Model,
}

impl Sphere {
    /// Tessellates a sphere with the given resolution and uploads it.
    pub fn new<F>(facade: &F, num_lats: u32, num_longs: u32) -> Result<Sphere, DemoError>
        where F: Facade + ?Sized
    {
        Sphere::from_mesh(facade, &SphereMesh::new(num_lats, num_longs))
    }

    /// Uploads an existing mesh.
    pub fn from_mesh<F>(facade: &F, mesh: &SphereMesh) -> Result<Sphere, DemoError>
        where F: Facade + ?Sized
    {
        let positions = VertexBuffer::new(facade, &mesh.positions)?;
        let colors = VertexBuffer::new(facade, &mesh.colors)?;
        let normals = VertexBuffer::new(facade, &mesh.normals)?;

        let batches = mesh.batches().into_iter()
            .map(|batch| IndexBuffer::new(facade, batch.primitive, &mesh.indices[batch.range]))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Uploaded sphere with {} vertices and {} batches", mesh.num_vertices(),
                    batches.len());

        Ok(Sphere {
            positions,
            colors,
            normals,
            batches,
            draw_mode: DrawMode::default(),
            model: Model::default(),
        })
    }

    /// Draws the sphere on `target`.
    ///
    /// The program receives the `position`, `color` and `normal` attributes. The polygon mode
    /// and point size of `params` are overridden by `draw_mode`.
    pub fn draw<S, U>(&self, target: &mut S, program: &Program, uniforms: &U,
                      params: &DrawParameters<'_>) -> Result<(), DrawError>
        where S: Surface, U: Uniforms
    {
        let vertices = (&self.positions, &self.colors, &self.normals);
        let params = self.draw_mode.draw_parameters(params.clone());

        if self.draw_mode == DrawMode::Points {
            return target.draw(vertices, NoIndices(PrimitiveType::Points), program, uniforms,
                               &params);
        }

        for batch in &self.batches {
            target.draw(vertices, batch, program, uniforms, &params)?;
        }

        Ok(())
    }
}
