use glium::index::PrimitiveType;
use glw::objects::{IndexBatch, SphereMesh, MAX_LATS, MAX_LONGS};

mod support;

#[test]
fn vertex_count() {
    let mesh = SphereMesh::new(4, 6);

    assert_eq!(mesh.num_vertices(), 20);
    assert_eq!(mesh.positions.len(), 20);
    assert_eq!(mesh.colors.len(), 20);
    assert_eq!(mesh.normals.len(), 20);
}

#[test]
fn poles() {
    let mesh = SphereMesh::new(10, 12);

    assert_eq!(mesh.positions.first().unwrap().position, [0.0, 0.0, 1.0]);
    assert_eq!(mesh.positions.last().unwrap().position, [0.0, 0.0, -1.0]);
}

#[test]
fn vertices_on_unit_sphere() {
    let mesh = SphereMesh::new(16, 24);

    for vertex in &mesh.positions {
        assert!(support::close(support::length(vertex.position), 1.0), "{:?}", vertex);
    }
}

#[test]
fn rows_follow_latitudes() {
    let mesh = SphereMesh::new(4, 6);
    let half = 0.5f32.sqrt();

    // rows at 45, 0 and -45 degrees
    for (row, z) in [half, 0.0, -half].iter().enumerate() {
        for col in 0 .. 6 {
            let vertex = mesh.positions[1 + row * 6 + col].position;
            assert!(support::close(vertex[2], *z), "row {} col {}: {:?}", row, col, vertex);
        }
    }

    // each row starts at -180 degrees of longitude
    support::assert_vec_close(mesh.positions[1].position, [-half, 0.0, half]);
    support::assert_vec_close(mesh.positions[7].position, [-1.0, 0.0, 0.0]);
}

#[test]
fn colors_and_normals_derive_from_positions() {
    let mesh = SphereMesh::new(8, 8);

    for i in 0 .. mesh.positions.len() {
        let [x, y, z] = mesh.positions[i].position;
        assert_eq!(mesh.colors[i].color, [x, y, z, 1.0]);
        assert_eq!(mesh.normals[i].normal, [x, y, z]);
    }
}

#[test]
fn index_count() {
    let mesh = SphereMesh::new(4, 6);
    assert_eq!(mesh.indices.len(), 2 * (6 + 2) + 2 * (2 * 6 + 2));

    let mesh = SphereMesh::new(20, 30);
    assert_eq!(mesh.indices.len(), 2 * (30 + 2) + 18 * (2 * 30 + 2));
}

#[test]
fn indices_in_range() {
    let mesh = SphereMesh::new(13, 17);
    let num_vertices = mesh.num_vertices();

    assert!(mesh.indices.iter().all(|&i| i < num_vertices));
}

#[test]
fn every_vertex_is_referenced() {
    let mesh = SphereMesh::new(9, 11);
    let mut used = vec![false; mesh.num_vertices() as usize];

    for &i in &mesh.indices {
        used[i as usize] = true;
    }

    assert!(used.iter().all(|&u| u));
}

#[test]
fn north_fan() {
    let mesh = SphereMesh::new(4, 6);
    assert_eq!(&mesh.indices[0 .. 8], &[0, 1, 2, 3, 4, 5, 6, 1]);
}

#[test]
fn first_strip() {
    let mesh = SphereMesh::new(4, 6);
    assert_eq!(&mesh.indices[8 .. 22], &[1, 7, 2, 8, 3, 9, 4, 10, 5, 11, 6, 12, 1, 7]);
}

#[test]
fn south_fan() {
    let mesh = SphereMesh::new(4, 6);
    assert_eq!(&mesh.indices[36 .. 44], &[19, 18, 17, 16, 15, 14, 13, 18]);
}

#[test]
fn batches() {
    let mesh = SphereMesh::new(4, 6);

    assert_eq!(mesh.batches(), vec![
        IndexBatch { primitive: PrimitiveType::TriangleFan, range: 0 .. 8 },
        IndexBatch { primitive: PrimitiveType::TriangleStrip, range: 8 .. 22 },
        IndexBatch { primitive: PrimitiveType::TriangleStrip, range: 22 .. 36 },
        IndexBatch { primitive: PrimitiveType::TriangleFan, range: 36 .. 44 },
    ]);
}

#[test]
fn batches_cover_all_indices() {
    let mesh = SphereMesh::new(25, 31);
    let batches = mesh.batches();

    assert_eq!(batches.len(), 25);
    assert_eq!(batches.first().unwrap().range.start, 0);
    assert_eq!(batches.last().unwrap().range.end, mesh.indices.len());

    for pair in batches.windows(2) {
        assert_eq!(pair[0].range.end, pair[1].range.start);
    }
}

#[test]
fn strips_have_no_degenerate_triangles() {
    let mesh = SphereMesh::new(6, 8);

    for batch in mesh.batches().iter().filter(|b| b.primitive == PrimitiveType::TriangleStrip) {
        for triangle in mesh.indices[batch.range.clone()].windows(3) {
            assert!(triangle[0] != triangle[1] && triangle[1] != triangle[2]
                    && triangle[0] != triangle[2], "{:?}", triangle);
        }
    }
}

#[test]
fn resolution_is_clamped() {
    let mesh = SphereMesh::new(0, 1);

    assert_eq!(mesh.num_lats(), 2);
    assert_eq!(mesh.num_longs(), 3);
    assert_eq!(mesh.num_vertices(), 5);
    assert_eq!(mesh.indices, vec![0, 1, 2, 3, 1, 4, 3, 2, 1, 3]);
    assert_eq!(mesh.batches().len(), 2);
}

#[test]
fn huge_resolutions_are_capped() {
    let tall = SphereMesh::new(u32::MAX, 3);
    assert_eq!(tall.num_lats(), MAX_LATS);
    assert_eq!(tall.num_vertices() as usize, tall.positions.len());
    assert_eq!(tall.positions.len(), 2 + (MAX_LATS as usize - 1) * 3);

    let wide = SphereMesh::new(2, 65537);
    assert_eq!(wide.num_longs(), MAX_LONGS);
    assert_eq!(wide.indices.len(), 2 * (MAX_LONGS as usize + 2));
    assert!(wide.indices.iter().all(|&i| i < wide.num_vertices()));
}
