use super::*;

const TWO_DISJOINT_TRIANGLES: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
v 2.0 0.0 0.0
v 3.0 0.0 0.0
v 2.0 1.0 0.0
f 1 2 3
f 4 5 6
";

const TWO_TRIANGLES_SHARING_AN_EDGE: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3
f 1 3 4
";

const QUAD: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3 4
";

const TRIANGLE_WITH_ATTRIBUTES: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
vn 0.0 0.0 1.0
f 1/1/1 2/2/1 3/3/1
";

// ============
// Deduplication
// ============

#[test]
fn test_disjoint_triangles_keep_all_vertices() {
    let (vertices, indices) = obj_from_str(TWO_DISJOINT_TRIANGLES).unwrap();
    assert_eq!(vertices.len(), 6);
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_shared_vertices_reuse_first_seen_index() {
    let (vertices, indices) = obj_from_str(TWO_TRIANGLES_SHARING_AN_EDGE).unwrap();
    assert_eq!(vertices.len(), 4);
    assert_eq!(indices, vec![0, 1, 2, 0, 2, 3]);
}

#[test]
fn test_first_seen_order_is_face_order() {
    let (vertices, _indices) = obj_from_str(TWO_TRIANGLES_SHARING_AN_EDGE).unwrap();
    assert_eq!(vertices[0].position, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(vertices[1].position, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(vertices[2].position, Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(vertices[3].position, Vec3::new(0.0, 1.0, 0.0));
}

// ============
// Triangulation
// ============

#[test]
fn test_quad_is_triangulated() {
    let (vertices, indices) = obj_from_str(QUAD).unwrap();
    assert_eq!(vertices.len(), 4);
    assert_eq!(indices.len(), 6);
    assert!(indices.iter().all(|&i| i < 4));
    // The quad splits into two triangles sharing the 0-2 diagonal
    assert_eq!(indices.iter().filter(|&&i| i == 0).count(), 2);
    assert_eq!(indices.iter().filter(|&&i| i == 2).count(), 2);
}

// ============
// Attributes
// ============

#[test]
fn test_texcoords_and_normals_are_resolved() {
    let (vertices, indices) = obj_from_str(TRIANGLE_WITH_ATTRIBUTES).unwrap();
    assert_eq!(vertices.len(), 3);
    assert_eq!(indices, vec![0, 1, 2]);

    assert_eq!(vertices[1].tex_coords, Vec2::new(1.0, 0.0));
    assert_eq!(vertices[2].tex_coords, Vec2::new(0.0, 1.0));
    for vertex in &vertices {
        assert_eq!(vertex.normal, Vec3::new(0.0, 0.0, 1.0));
    }
}

#[test]
fn test_missing_attributes_default_to_zero() {
    let (vertices, _indices) = obj_from_str(TWO_DISJOINT_TRIANGLES).unwrap();
    for vertex in &vertices {
        assert_eq!(vertex.tex_coords, Vec2::ZERO);
        assert_eq!(vertex.normal, Vec3::ZERO);
    }
}

// ============
// Failure modes
// ============

#[test]
fn test_empty_input_fails() {
    assert!(matches!(obj_from_str(""), Err(Error::MeshParse(_))));
}

#[test]
fn test_malformed_position_fails() {
    let result = obj_from_str("v a b c\nf 1 2 3\n");
    assert!(matches!(result, Err(Error::MeshParse(_))));
}

#[test]
fn test_missing_file_reports_path() {
    let result = obj_from_file("does/not/exist.obj");
    match result {
        Err(Error::Io(msg)) => assert!(msg.contains("does/not/exist.obj")),
        other => panic!("expected Io error, got {:?}", other.map(|_| ())),
    }
}
