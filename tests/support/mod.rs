/*!
Test supports module.

*/

#![allow(dead_code)]

/// Tolerance used when comparing floats produced by trigonometry.
pub const EPSILON: f32 = 1e-5;

/// Returns true if `a` and `b` differ by less than `EPSILON`.
pub fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Asserts that two vectors are equal component-wise up to `EPSILON`.
pub fn assert_vec_close(actual: [f32; 3], expected: [f32; 3]) {
    for i in 0 .. 3 {
        assert!(close(actual[i], expected[i]), "{:?} != {:?}", actual, expected);
    }
}

/// Asserts that two matrices are equal component-wise up to `EPSILON`.
pub fn assert_mat4_close(actual: [[f32; 4]; 4], expected: [[f32; 4]; 4]) {
    for col in 0 .. 4 {
        for row in 0 .. 4 {
            assert!(close(actual[col][row], expected[col][row]),
                    "{:?} != {:?}", actual, expected);
        }
    }
}

/// Returns the length of a vector.
pub fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Transforms the point `p` by the column-major matrix `m`.
pub fn transform_point(m: [[f32; 4]; 4], p: [f32; 3]) -> [f32; 3] {
    let mut out = [0.0; 3];
    for row in 0 .. 3 {
        out[row] = m[0][row] * p[0] + m[1][row] * p[1] + m[2][row] * p[2] + m[3][row];
    }
    out
}

pub const IDENTITY: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];
