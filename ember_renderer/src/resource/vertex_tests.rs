use super::*;

use std::collections::hash_map::DefaultHasher;

fn hash_of(vertex: &Vertex) -> u64 {
    let mut hasher = DefaultHasher::new();
    vertex.hash(&mut hasher);
    hasher.finish()
}

// ============
// Equality
// ============

#[test]
fn test_identical_vertices_are_equal() {
    let a = Vertex::new(
        Vec3::new(1.0, 2.0, 3.0),
        Vec2::new(0.5, 0.25),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let b = a;
    assert_eq!(a, b);
}

#[test]
fn test_sub_epsilon_difference_is_equal() {
    let a = Vertex::new(Vec3::new(1e-8, 0.0, 0.0), Vec2::ZERO, Vec3::ZERO);
    let b = Vertex::new(Vec3::new(2e-8, 0.0, 0.0), Vec2::ZERO, Vec3::ZERO);
    assert_eq!(a, b);
}

#[test]
fn test_component_difference_breaks_equality() {
    let a = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec2::ZERO, Vec3::Y);
    let mut b = a;
    b.position.z = 3.5;
    assert_ne!(a, b);

    let mut c = a;
    c.tex_coords.x = 0.5;
    assert_ne!(a, c);

    let mut d = a;
    d.normal = Vec3::X;
    assert_ne!(a, d);
}

// ============
// Hashing
// ============

#[test]
fn test_bit_identical_vertices_hash_identically() {
    let a = Vertex::new(
        Vec3::new(0.1, -0.2, 0.3),
        Vec2::new(0.7, 0.9),
        Vec3::new(0.0, 0.0, 1.0),
    );
    let b = a;
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_distinct_vertices_hash_differently() {
    let a = Vertex::new(Vec3::ZERO, Vec2::ZERO, Vec3::ZERO);
    let b = Vertex::new(Vec3::X, Vec2::ZERO, Vec3::ZERO);
    assert_ne!(hash_of(&a), hash_of(&b));
}

// ============
// Layout
// ============

#[test]
fn test_layout_indices_and_sizes() {
    assert_eq!(Vertex::attrib_index(Attribute::Position), 0);
    assert_eq!(Vertex::attrib_index(Attribute::TexCoords), 1);
    assert_eq!(Vertex::attrib_index(Attribute::Normal), 2);

    assert_eq!(Vertex::component_count(Attribute::Position), 3);
    assert_eq!(Vertex::component_count(Attribute::TexCoords), 2);
    assert_eq!(Vertex::component_count(Attribute::Normal), 3);

    assert_eq!(Vertex::base_type(Attribute::Position), DataType::Float);
    assert_eq!(Vertex::component_type(Attribute::Normal), DataType::Float);
    assert!(!Vertex::normalized(Attribute::Position));
}

#[test]
fn test_layout_offsets_are_contiguous() {
    assert_eq!(Vertex::relative_offset(Attribute::Position), 0);
    assert_eq!(Vertex::relative_offset(Attribute::TexCoords), 12);
    assert_eq!(Vertex::relative_offset(Attribute::Normal), 20);
    assert_eq!(Vertex::stride(), 32);
}

#[test]
fn test_vertex_is_plain_bytes() {
    let vertices = [
        Vertex::new(Vec3::X, Vec2::ZERO, Vec3::Y),
        Vertex::new(Vec3::Z, Vec2::ONE, Vec3::Y),
    ];
    let bytes: &[u8] = bytemuck::cast_slice(&vertices);
    assert_eq!(bytes.len(), 2 * Vertex::stride() as usize);
}
