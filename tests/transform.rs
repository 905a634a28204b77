use glw::transform::{normal_matrix, perspective, view, Model};

mod support;

#[test]
fn default_is_identity() {
    assert_eq!(Model::default().to_array(), support::IDENTITY);
}

#[test]
fn translate() {
    let mut model = Model::identity();
    model.translate(1.0, 2.0, 3.0);

    support::assert_vec_close(support::transform_point(model.to_array(), [0.0, 0.0, 0.0]),
                              [1.0, 2.0, 3.0]);
}

#[test]
fn scale() {
    let mut model = Model::identity();
    model.scale(2.0, 3.0, 4.0);

    support::assert_vec_close(support::transform_point(model.to_array(), [1.0, 1.0, 1.0]),
                              [2.0, 3.0, 4.0]);
}

#[test]
fn rotate_degrees() {
    let mut model = Model::identity();
    model.rotate(90.0, [0.0, 0.0, 1.0]);

    support::assert_vec_close(support::transform_point(model.to_array(), [1.0, 0.0, 0.0]),
                              [0.0, 1.0, 0.0]);
}

#[test]
fn rotate_normalizes_axis() {
    let mut unit = Model::identity();
    unit.rotate(30.0, [0.0, 1.0, 0.0]);

    let mut long = Model::identity();
    long.rotate(30.0, [0.0, 5.0, 0.0]);

    support::assert_mat4_close(unit.to_array(), long.to_array());
}

#[test]
fn rotate_around_zero_axis_is_ignored() {
    let mut model = Model::identity();
    model.rotate(45.0, [0.0, 0.0, 0.0]);

    assert_eq!(model.to_array(), support::IDENTITY);
}

#[test]
fn transformations_are_post_multiplied() {
    // scale is applied to the vertex first, then the translation
    let mut model = Model::identity();
    model.translate(1.0, 0.0, 0.0).scale(2.0, 2.0, 2.0);

    support::assert_vec_close(support::transform_point(model.to_array(), [1.0, 0.0, 0.0]),
                              [3.0, 0.0, 0.0]);
}

#[test]
fn reset() {
    let mut model = Model::identity();
    model.translate(1.0, 2.0, 3.0).rotate(10.0, [1.0, 0.0, 0.0]);
    model.reset();

    assert_eq!(model, Model::identity());
}

#[test]
fn view_moves_eye_to_origin() {
    let view: [[f32; 4]; 4] = view([0.0, 0.0, 4.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]).into();

    support::assert_vec_close(support::transform_point(view, [0.0, 0.0, 4.0]), [0.0, 0.0, 0.0]);
    support::assert_vec_close(support::transform_point(view, [0.0, 0.0, 0.0]), [0.0, 0.0, -4.0]);
}

#[test]
fn perspective_maps_near_and_far_planes() {
    let projection: [[f32; 4]; 4] = perspective(60.0, 1.5, 0.1, 100.0).into();

    let clip_z = |z: f32| {
        let z_clip = projection[2][2] * z + projection[3][2];
        let w_clip = projection[2][3] * z + projection[3][3];
        z_clip / w_clip
    };

    assert!((clip_z(-0.1) + 1.0).abs() < 1e-3);
    assert!((clip_z(-100.0) - 1.0).abs() < 1e-3);

    // aspect ratio divides the horizontal focal length
    assert!(support::close(projection[0][0] * 1.5, projection[1][1]));
}

#[test]
fn normal_matrix_of_rotation_is_the_rotation() {
    let mut model = Model::identity();
    model.rotate(30.0, [1.0, 1.0, 0.0]);

    let normal = normal_matrix(model.matrix());
    let full = model.to_array();

    for col in 0 .. 3 {
        for row in 0 .. 3 {
            assert!(support::close(normal[col][row], full[col][row]));
        }
    }
}

#[test]
fn normal_matrix_undoes_non_uniform_scale() {
    let mut model = Model::identity();
    model.scale(2.0, 1.0, 1.0);

    let normal = normal_matrix(model.matrix());
    assert!(support::close(normal[0][0], 0.5));
    assert!(support::close(normal[1][1], 1.0));
}

#[test]
fn normal_matrix_of_singular_model() {
    let mut model = Model::identity();
    model.scale(0.0, 0.0, 0.0);

    assert_eq!(normal_matrix(model.matrix()),
               [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
}
