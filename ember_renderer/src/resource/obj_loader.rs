use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::gfx_debug;
use crate::resource::Vertex;

/// Load an indexed mesh from a Wavefront OBJ file
pub fn obj_from_file<P: AsRef<Path>>(path: P) -> Result<(Vec<Vertex>, Vec<u32>)> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| Error::Io(format!("unable to open file '{}': {}", path.display(), err)))?;
    obj_from_reader(&mut BufReader::new(file))
}

/// Load an indexed mesh from OBJ text
pub fn obj_from_str(data: &str) -> Result<(Vec<Vertex>, Vec<u32>)> {
    obj_from_reader(&mut data.as_bytes())
}

/// Load an indexed mesh from a reader yielding OBJ text
///
/// Faces are triangulated; position, texture-coordinate, and normal
/// index triples are resolved into interleaved [`Vertex`] values.
/// Identical vertices are shared: the first occurrence assigns the
/// index, every repeat reuses it, so vertex order is first-seen order.
/// Missing normals or texture coordinates default to zero.
pub fn obj_from_reader<R: BufRead>(reader: &mut R) -> Result<(Vec<Vertex>, Vec<u32>)> {
    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    };

    let (models, _materials) = tobj::load_obj_buf(reader, &load_options, |_| {
        // Materials are not used; resolve every mtllib to nothing
        Ok((Vec::new(), Default::default()))
    })
    .map_err(|err| Error::MeshParse(err.to_string()))?;

    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let mut vertex_index_map: FxHashMap<Vertex, u32> = FxHashMap::default();

    for model in &models {
        let mesh = &model.mesh;

        for (i, &position_index) in mesh.indices.iter().enumerate() {
            let p = 3 * position_index as usize;
            let position = Vec3::new(
                mesh.positions[p],
                mesh.positions[p + 1],
                mesh.positions[p + 2],
            );

            let tex_coords = match mesh.texcoord_indices.get(i) {
                Some(&t) => {
                    let t = 2 * t as usize;
                    Vec2::new(mesh.texcoords[t], mesh.texcoords[t + 1])
                }
                None => Vec2::ZERO,
            };

            let normal = match mesh.normal_indices.get(i) {
                Some(&n) => {
                    let n = 3 * n as usize;
                    Vec3::new(mesh.normals[n], mesh.normals[n + 1], mesh.normals[n + 2])
                }
                None => Vec3::ZERO,
            };

            let vertex = Vertex::new(position, tex_coords, normal);
            match vertex_index_map.get(&vertex) {
                Some(&index) => indices.push(index),
                None => {
                    let index = vertices.len() as u32;
                    vertices.push(vertex);
                    indices.push(index);
                    vertex_index_map.insert(vertex, index);
                }
            }
        }
    }

    if indices.is_empty() {
        return Err(Error::MeshParse("object file contains no faces".to_string()));
    }

    gfx_debug!(
        "ember::ObjLoader",
        "loaded mesh: {} unique vertices, {} indices",
        vertices.len(),
        indices.len()
    );

    Ok((vertices, indices))
}

#[cfg(test)]
#[path = "obj_loader_tests.rs"]
mod tests;
