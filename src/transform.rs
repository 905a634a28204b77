//! Model, view and projection matrices.
//!
//! Everything is built with `cgmath` and handed to glium as column-major arrays.

use cgmath::{Deg, InnerSpace, Matrix, Matrix3, Matrix4, Point3, SquareMatrix, Vector3};

/// A model matrix built by chaining transformations.
///
/// Every operation post-multiplies the current matrix, so the last transformation applied is
/// the first one a vertex goes through.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Model {
    matrix: Matrix4<f32>,
}

impl Model {
    /// An identity model.
    #[inline]
    pub fn identity() -> Model {
        Model { matrix: Matrix4::identity() }
    }

    /// Goes back to the identity.
    pub fn reset(&mut self) -> &mut Model {
        self.matrix = Matrix4::identity();
        self
    }

    /// Appends a translation.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Model {
        self.matrix = self.matrix * Matrix4::from_translation(Vector3::new(x, y, z));
        self
    }

    /// Appends a scale along each axis.
    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Model {
        self.matrix = self.matrix * Matrix4::from_nonuniform_scale(x, y, z);
        self
    }

    /// Appends a rotation of `angle` degrees around `axis`.
    ///
    /// A zero axis leaves the model unchanged.
    pub fn rotate(&mut self, angle: f32, axis: [f32; 3]) -> &mut Model {
        let axis = Vector3::from(axis);

        if axis.magnitude2() > 0.0 {
            self.matrix = self.matrix * Matrix4::from_axis_angle(axis.normalize(), Deg(angle));
        }

        self
    }

    /// Returns the matrix.
    #[inline]
    pub fn matrix(&self) -> Matrix4<f32> {
        self.matrix
    }

    /// Returns the matrix in the layout glium expects for a `mat4` uniform.
    #[inline]
    pub fn to_array(&self) -> [[f32; 4]; 4] {
        self.matrix.into()
    }
}

impl Default for Model {
    #[inline]
    fn default() -> Model {
        Model::identity()
    }
}

/// Builds a right-handed perspective projection.
pub fn perspective(fov_degrees: f32, aspect_ratio: f32, znear: f32, zfar: f32) -> Matrix4<f32> {
    cgmath::perspective(Deg(fov_degrees), aspect_ratio, znear, zfar)
}

/// Builds a view matrix for a camera at `eye` looking at `target`.
pub fn view(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> Matrix4<f32> {
    Matrix4::look_at_rh(Point3::from(eye), Point3::from(target), Vector3::from(up))
}

/// Returns the matrix that takes object space normals to the space of `model_view`: the
/// inverse transpose of its upper 3x3 part.
///
/// A singular matrix, such as a model scaled to zero, yields the identity.
pub fn normal_matrix(model_view: Matrix4<f32>) -> [[f32; 3]; 3] {
    let upper = Matrix3::from_cols(model_view.x.truncate(), model_view.y.truncate(),
                                   model_view.z.truncate());

    upper.invert().map(|inverse| inverse.transpose()).unwrap_or_else(Matrix3::identity).into()
}
