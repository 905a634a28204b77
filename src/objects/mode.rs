use std::fmt;

use glium::draw_parameters::PolygonMode;
use glium::DrawParameters;

/// Size of the points drawn in `DrawMode::Points`.
pub const POINT_SIZE: f32 = 3.0;

/// How the primitives of an object are rasterized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum DrawMode {
    /// Every vertex as a single point.
    Points,
    /// Triangle outlines.
    Lines,
    /// Filled triangles.
    #[default]
    Polygons,
}

impl DrawMode {
    /// Returns the mode that follows this one: points, lines, polygons and back to points.
    pub fn next(self) -> DrawMode {
        match self {
            DrawMode::Points => DrawMode::Lines,
            DrawMode::Lines => DrawMode::Polygons,
            DrawMode::Polygons => DrawMode::Points,
        }
    }

    /// Adjusts `params` so that triangles are rasterized according to this mode.
    pub fn draw_parameters<'a>(self, params: DrawParameters<'a>) -> DrawParameters<'a> {
        let polygon_mode = match self {
            DrawMode::Lines => PolygonMode::Line,
            DrawMode::Points | DrawMode::Polygons => PolygonMode::Fill,
        };

        DrawParameters {
            polygon_mode,
            point_size: Some(POINT_SIZE),
            .. params
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fmt.write_str(match *self {
            DrawMode::Points => "Draw Points",
            DrawMode::Lines => "Draw Lines",
            DrawMode::Polygons => "Draw Polygons",
        })
    }
}

/// How the cube faces are colored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Each face has its own color.
    #[default]
    PerSide,
    /// The whole object has one color.
    Solid,
}

impl ColorMode {
    /// Switches between the two modes.
    pub fn toggle(self) -> ColorMode {
        match self {
            ColorMode::PerSide => ColorMode::Solid,
            ColorMode::Solid => ColorMode::PerSide,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fmt.write_str(match *self {
            ColorMode::PerSide => "Color per side",
            ColorMode::Solid => "Solid Color",
        })
    }
}
