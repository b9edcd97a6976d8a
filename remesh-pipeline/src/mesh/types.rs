//! Indexed triangle mesh

/// An indexed triangle mesh: shared vertex positions plus index triples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriMesh {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,
    /// Triangles as indices into `positions`
    pub triangles: Vec<[u32; 3]>,
}

impl TriMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Facet normal of triangle `i` (cross product, not normalized)
    pub fn facet_normal(&self, i: usize) -> [f32; 3] {
        let [a, b, c] = self.triangles[i];
        let a = self.positions[a as usize];
        let b = self.positions[b as usize];
        let c = self.positions[c as usize];
        let ab = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let ac = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        [
            ab[1] * ac[2] - ab[2] * ac[1],
            ab[2] * ac[0] - ab[0] * ac[2],
            ab[0] * ac[1] - ab[1] * ac[0],
        ]
    }

    /// Axis-aligned cube centered at the origin with the given edge length.
    ///
    /// 8 vertices, 12 triangles; used as a self-generated test asset.
    pub fn cube(edge: f32) -> Self {
        let h = edge / 2.0;
        let positions = vec![
            [-h, -h, -h],
            [h, -h, -h],
            [h, h, -h],
            [-h, h, -h],
            [-h, -h, h],
            [h, -h, h],
            [h, h, h],
            [-h, h, h],
        ];
        let triangles = vec![
            // -z
            [0, 2, 1],
            [0, 3, 2],
            // +z
            [4, 5, 6],
            [4, 6, 7],
            // -y
            [0, 1, 5],
            [0, 5, 4],
            // +y
            [3, 6, 2],
            [3, 7, 6],
            // -x
            [0, 4, 7],
            [0, 7, 3],
            // +x
            [1, 2, 6],
            [1, 6, 5],
        ];
        Self {
            positions,
            triangles,
        }
    }
}
