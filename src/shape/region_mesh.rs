use crate::bounding_volume::{point_cloud_aabb, Aabb};
use crate::error::MeshError;
use crate::math::{Point, Real, Vector};
use crate::query::{ray_parity_contains, winding_number, ContainmentTest, PointContainment};
use crate::utils::SortedPair;
use hashbrown::hash_map::{Entry, HashMap};
use smallvec::SmallVec;

/// Volumes smaller than this fraction of the mesh's bounding-box volume are
/// considered zero.
const ZERO_VOLUME_TOLERANCE: Real = 1.0e-9;

/// A closed, consistently oriented, triangle mesh bounding the solid of a region.
///
/// Construction validates the mesh: every edge must be shared by exactly two
/// triangles with opposite orientations, no triangle may be degenerate and the
/// enclosed volume must be non-zero. Vertices with bitwise-identical
/// coordinates are merged first, since building-model exporters commonly emit
/// one vertex per triangle corner.
#[derive(Clone, Debug)]
pub struct RegionMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    aabb: Aabb,
    signed_volume: Real,
}

impl RegionMesh {
    /// Creates a new region mesh from a vertex buffer and an index buffer.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Result<Self, MeshError> {
        if indices.is_empty() {
            return Err(MeshError::EmptyIndices);
        }

        for (fid, idx) in indices.iter().enumerate() {
            for vid in idx {
                if *vid as usize >= vertices.len() {
                    return Err(MeshError::VertexOutOfBounds {
                        triangle: fid as u32,
                        vertex: *vid,
                        num_vertices: vertices.len(),
                    });
                }
            }
        }

        if let Some(vid) = vertices
            .iter()
            .position(|pt| !pt.coords.iter().all(|x| x.is_finite()))
        {
            return Err(MeshError::NonFiniteVertex(vid as u32));
        }

        let (vertices, indices) = merge_duplicate_vertices(vertices, indices);
        check_triangle_areas(&vertices, &indices)?;
        check_topology(&indices)?;

        let aabb = point_cloud_aabb(&vertices).ok_or(MeshError::EmptyIndices)?;
        let signed_volume = signed_volume(&vertices, &indices);
        let tolerance = aabb.volume() * ZERO_VOLUME_TOLERANCE;

        if abs_diff_eq!(signed_volume, 0.0, epsilon = tolerance) {
            return Err(MeshError::ZeroVolume);
        }

        Ok(Self {
            vertices,
            indices,
            aabb,
            signed_volume,
        })
    }

    /// Creates the closed mesh of an axis-aligned box with the given corners.
    pub fn cuboid(mins: Point<Real>, maxs: Point<Real>) -> Result<Self, MeshError> {
        let (vertices, indices) = Aabb::new(mins, maxs).to_trimesh();
        Self::new(vertices, indices)
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The axis-aligned bounding box of this mesh.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The volume enclosed by this mesh.
    #[inline]
    pub fn volume(&self) -> Real {
        self.signed_volume.abs()
    }

    /// Do the triangle normals point toward the interior of the solid?
    #[inline]
    pub fn is_inside_out(&self) -> bool {
        self.signed_volume < 0.0
    }

    /// Does this mesh contain `point`?
    pub fn contains_point(&self, point: &Point<Real>, test: ContainmentTest) -> bool {
        if !self.aabb.contains_local_point(point) {
            return false;
        }

        match test {
            ContainmentTest::WindingNumber => {
                winding_number(&self.vertices, &self.indices, point).abs() > 0.5
            }
            ContainmentTest::RayParity => {
                ray_parity_contains(&self.vertices, &self.indices, point)
            }
        }
    }
}

impl PointContainment for RegionMesh {
    fn aabb(&self) -> Aabb {
        self.aabb
    }

    fn contains_point(&self, point: &Point<Real>, test: ContainmentTest) -> bool {
        RegionMesh::contains_point(self, point, test)
    }
}

impl Aabb {
    /// Discretize the boundary of this AABB as a triangle-mesh.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let center = self.center();
        let extents = self.extents();
        let (mut coords, faces) = unit_cuboid();

        for pt in &mut coords {
            *pt = center + pt.coords.component_mul(&extents);
        }

        (coords, faces)
    }
}

/**
 * Generates a cuboid shape with a split index buffer.
 *
 * The cuboid is centered at the origin, and has its half extents set to 0.5.
 */
fn unit_cuboid() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let coords = vec![
        Point::new(-0.5, -0.5, 0.5),
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, 0.5),
    ];

    let faces = vec![
        [4, 5, 0],
        [5, 1, 0],
        [5, 6, 1],
        [6, 2, 1],
        [6, 7, 3],
        [2, 6, 3],
        [7, 4, 0],
        [3, 7, 0],
        [0, 1, 2],
        [3, 0, 2],
        [7, 6, 5],
        [4, 7, 5],
    ];

    (coords, faces)
}

/// Merges the vertices with bitwise-identical coordinates and remaps the index buffer.
///
/// Vertices not referenced by any triangle are dropped.
fn merge_duplicate_vertices(
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let mut new_vertices = Vec::with_capacity(vertices.len());
    let mut new_ids = HashMap::with_capacity(vertices.len());

    let indices = indices
        .iter()
        .map(|idx| {
            idx.map(|vid| {
                let pt = vertices[vid as usize];
                // `+ 0.0` turns -0.0 into 0.0 so both hash identically.
                let key = pt.coords.map(|x| (x + 0.0).to_bits());

                match new_ids.entry((key.x, key.y, key.z)) {
                    Entry::Occupied(entry) => *entry.get(),
                    Entry::Vacant(entry) => {
                        new_vertices.push(pt);
                        *entry.insert(new_vertices.len() as u32 - 1)
                    }
                }
            })
        })
        .collect();

    (new_vertices, indices)
}

/// Checks that no triangle has collinear vertices.
fn check_triangle_areas(vertices: &[Point<Real>], indices: &[[u32; 3]]) -> Result<(), MeshError> {
    for (fid, idx) in indices.iter().enumerate() {
        let a = vertices[idx[0] as usize];
        let ab = vertices[idx[1] as usize] - a;
        let ac = vertices[idx[2] as usize] - a;

        if ab.cross(&ac).norm() <= Real::EPSILON * ab.norm() * ac.norm() {
            return Err(MeshError::BadTriangle(fid as u32));
        }
    }

    Ok(())
}

/// Checks that every edge is shared by exactly two triangles traversing it in
/// opposite directions.
fn check_topology(indices: &[[u32; 3]]) -> Result<(), MeshError> {
    // For each undirected edge, the triangles sharing it and whether they
    // traverse it from its smallest to its largest vertex.
    let mut edge_faces: HashMap<SortedPair<u32>, SmallVec<[(u32, bool); 2]>> = HashMap::new();

    for (fid, idx) in indices.iter().enumerate() {
        if idx[0] == idx[1] || idx[0] == idx[2] || idx[1] == idx[2] {
            return Err(MeshError::BadTriangle(fid as u32));
        }

        for k in 0..3 {
            let (a, b) = (idx[k], idx[(k + 1) % 3]);
            edge_faces
                .entry(SortedPair::new(a, b))
                .or_default()
                .push((fid as u32, a < b));
        }
    }

    // Walk the triangles in order so the reported edge doesn't depend on the
    // hash-map iteration order.
    for idx in indices {
        for k in 0..3 {
            let key = SortedPair::new(idx[k], idx[(k + 1) % 3]);
            let edge = (*key.first(), *key.second());
            let faces = &edge_faces[&key];

            if faces.len() != 2 {
                return Err(MeshError::NonManifoldEdge {
                    edge,
                    num_triangles: faces.len(),
                });
            }

            if faces[0].1 == faces[1].1 {
                return Err(MeshError::BadAdjacentTrianglesOrientation {
                    triangle1: faces[0].0,
                    triangle2: faces[1].0,
                    edge,
                });
            }
        }
    }

    Ok(())
}

/// The signed volume enclosed by a closed triangle mesh.
///
/// Positive if the triangles are counterclockwise when seen from the outside.
fn signed_volume(vertices: &[Point<Real>], indices: &[[u32; 3]]) -> Real {
    // Tetrahedra are fanned from the first vertex rather than the origin to
    // limit cancellation for meshes far from the origin.
    let apex = vertices[0];
    let mut volume = 0.0;

    for idx in indices {
        let a: Vector<Real> = vertices[idx[0] as usize] - apex;
        let b = vertices[idx[1] as usize] - apex;
        let c = vertices[idx[2] as usize] - apex;
        volume += a.dot(&b.cross(&c));
    }

    volume / 6.0
}
