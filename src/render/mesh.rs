use glium::implement_vertex;
use uuid::Uuid;

/// A `Vertex` is just a 3D position; color is derived from it in the shader.
#[derive(Copy, Clone)]
pub struct Vertex {
    pub position: [f32; 3],
}
implement_vertex!(Vertex, position);

/// An abstract representation of a model by its vertices and indices.
///
/// Simply a store of model data that must be loaded onto the GPU for rendering.
pub struct Mesh {
    pub mesh_id: Uuid,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Creates a new `Mesh` from a list of vertices and triangle-list indices.
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Mesh {
        Mesh {
            mesh_id: Uuid::new_v4(),
            vertices,
            indices,
        }
    }
}

/// Builds the demo cube spanning (-1, -1, -1) to (1, 1, 1).
///
/// The corners are numbered by coordinate sign, x varying slowest:
///
/// ```text
///       [2]------[6]
///    [3]------[7] |
///     |  |     |  |
///     |  |     |  |
///     | [0]----|-[4]
///    [1]------[5]
/// ```
///
/// Each loop iteration emits one of a pair of opposing faces. The winding is
/// not consistent between faces, so face culling must stay disabled.
pub fn cube() -> Mesh {
    let mut vertices = Vec::with_capacity(8);
    for x in &[-1.0, 1.0] {
        for y in &[-1.0, 1.0] {
            for z in &[-1.0, 1.0] {
                vertices.push(Vertex {
                    position: [*x, *y, *z],
                });
            }
        }
    }

    let mut indices: Vec<u32> = Vec::with_capacity(36);
    for i in 0..2u32 {
        // left and right faces
        indices.extend_from_slice(&[i * 4, i * 4 + 1, i * 4 + 2, i * 4 + 3, i * 4 + 2, i * 4 + 1]);

        // bottom and top faces
        indices.extend_from_slice(&[i * 2, i * 2 + 1, i * 2 + 4, i * 2 + 5, i * 2 + 4, i * 2 + 1]);

        // back and front faces
        indices.extend_from_slice(&[i, i + 2, i + 4, i + 6, i + 4, i + 2]);
    }

    Mesh::new(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::cube;

    #[test]
    fn test_cube_has_eight_vertices_and_twelve_triangles() {
        let mesh = cube();

        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), 36);
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn test_cube_indices_stay_in_range() {
        let mesh = cube();

        assert!(mesh.indices.iter().all(|i| *i < 8));
    }

    #[test]
    fn test_cube_vertices_sit_on_unit_corners() {
        let mesh = cube();

        for vertex in &mesh.vertices {
            for coordinate in &vertex.position {
                assert_eq!(coordinate.abs(), 1.0);
            }
        }
    }

    #[test]
    fn test_cube_uses_every_corner() {
        let mesh = cube();

        for corner in 0..8u32 {
            assert!(mesh.indices.contains(&corner));
        }
    }
}
