/*!
Drawable objects shared by the demos.

Every object comes in two halves. The mesh (`SphereMesh`, `CubeMesh`) is plain CPU data and can
be built and inspected without an OpenGL context. The object (`Sphere`, `Cube`) uploads a mesh
into vertex and index buffers and knows how to draw it in the current `DrawMode`.

Vertex attributes are stored in separate buffers, one per attribute, and bound together as a
tuple when drawing. Shaders consume them as `position`, `color` and `normal`.

*/
pub use self::cube::{Cube, CubeMesh, SIDE_COLORS, SOLID_COLOR};
pub use self::mode::{ColorMode, DrawMode, POINT_SIZE};
pub use self::sphere::{IndexBatch, Sphere, SphereMesh, MAX_LATS, MAX_LONGS, MIN_LATS, MIN_LONGS};

mod cube;
mod mode;
mod sphere;

/// Vertex position attribute.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    /// Object space position.
    pub position: [f32; 3],
}

implement_vertex!(Position, position);

/// Vertex color attribute.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// RGBA color.
    pub color: [f32; 4],
}

implement_vertex!(Color, color);

/// Vertex normal attribute.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Normal {
    /// Object space normal, of unit length.
    pub normal: [f32; 3],
}

implement_vertex!(Normal, normal);
