use std::hash::{Hash, Hasher};
use std::mem;

use bytemuck::{Pod, Zeroable};
use ember_gl::{Attribute, DataType, VertexLayout};
use glam::{Vec2, Vec3};

/// Interleaved mesh vertex: position, texture coordinates, normal
///
/// Equality is component-wise with an `f32::EPSILON` tolerance so
/// vertices that only differ by float noise collapse during mesh
/// deduplication. Hashing uses the raw float bits; bit-identical
/// vertices hash identically, which is the case the OBJ loader
/// produces (repeated index triples reference the same source floats).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub tex_coords: Vec2,
    pub normal: Vec3,
}

impl Vertex {
    pub fn new(position: Vec3, tex_coords: Vec2, normal: Vec3) -> Self {
        Self {
            position,
            tex_coords,
            normal,
        }
    }
}

fn near(a: f32, b: f32) -> bool {
    (a - b).abs() < f32::EPSILON
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        near(self.position.x, other.position.x)
            && near(self.position.y, other.position.y)
            && near(self.position.z, other.position.z)
            && near(self.tex_coords.x, other.tex_coords.x)
            && near(self.tex_coords.y, other.tex_coords.y)
            && near(self.normal.x, other.normal.x)
            && near(self.normal.y, other.normal.y)
            && near(self.normal.z, other.normal.z)
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.x.to_bits().hash(state);
        self.position.y.to_bits().hash(state);
        self.position.z.to_bits().hash(state);
        self.tex_coords.x.to_bits().hash(state);
        self.tex_coords.y.to_bits().hash(state);
        self.normal.x.to_bits().hash(state);
        self.normal.y.to_bits().hash(state);
        self.normal.z.to_bits().hash(state);
    }
}

impl VertexLayout for Vertex {
    fn attrib_index(attr: Attribute) -> u32 {
        match attr {
            Attribute::Position => 0,
            Attribute::TexCoords => 1,
            Attribute::Normal => 2,
            _ => 0,
        }
    }

    fn base_type(_attr: Attribute) -> DataType {
        DataType::Float
    }

    fn component_count(attr: Attribute) -> i32 {
        match attr {
            Attribute::Position => 3,
            Attribute::TexCoords => 2,
            Attribute::Normal => 3,
            _ => 0,
        }
    }

    fn component_type(_attr: Attribute) -> DataType {
        DataType::Float
    }

    fn stride() -> i32 {
        mem::size_of::<Vertex>() as i32
    }

    fn relative_offset(attr: Attribute) -> u32 {
        match attr {
            Attribute::Position => mem::offset_of!(Vertex, position) as u32,
            Attribute::TexCoords => mem::offset_of!(Vertex, tex_coords) as u32,
            Attribute::Normal => mem::offset_of!(Vertex, normal) as u32,
            _ => 0,
        }
    }

    fn normalized(_attr: Attribute) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;
