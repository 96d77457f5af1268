//! Errors raised by the adjacency pipeline.
//!
//! Every error is terminal for the current batch: nothing is retried and
//! nothing is silently repaired. Retrying with different inputs (a coarser
//! voxel size, fixed meshes) is left to the caller.

/// A defect found while validating the triangle mesh of a single region.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum MeshError {
    /// A region mesh must contain at least one triangle.
    #[error("the mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that doesn't exist.
    #[error("the triangle {triangle} references the vertex {vertex} but the mesh only has {num_vertices} vertices.")]
    VertexOutOfBounds {
        /// The offending triangle.
        triangle: u32,
        /// The out-of-range vertex index.
        vertex: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
    /// A vertex has a NaN or infinite coordinate.
    #[error("the vertex {0} has a non-finite coordinate.")]
    NonFiniteVertex(u32),
    /// Found a triangle with two identical vertices, or three collinear ones.
    #[error("the triangle {0} is degenerate: its vertices are collinear or repeated.")]
    BadTriangle(u32),
    /// An edge isn't shared by exactly two triangles, so the mesh doesn't bound a solid.
    #[error("the edge {edge:?} is shared by {num_triangles} triangle(s) instead of 2.")]
    NonManifoldEdge {
        /// The edge, as a sorted pair of vertex indices.
        edge: (u32, u32),
        /// The number of triangles sharing that edge.
        num_triangles: usize,
    },
    /// At least two adjacent triangles have opposite orientations.
    #[error("the triangles {triangle1} and {triangle2} sharing the edge {edge:?} have opposite orientations.")]
    BadAdjacentTrianglesOrientation {
        /// The first triangle, with an orientation opposite to the second triangle.
        triangle1: u32,
        /// The second triangle, with an orientation opposite to the first triangle.
        triangle2: u32,
        /// The edge shared between the two triangles.
        edge: (u32, u32),
    },
    /// The mesh is closed but encloses no volume.
    #[error("the mesh encloses a zero volume.")]
    ZeroVolume,
}

/// Missing or invalid parameters.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ConfigurationError {
    /// No region was supplied, so there is nothing to build a grid around.
    #[error("at least one region is required to build a label volume.")]
    NoRegions,
    /// The voxel size must be strictly positive and finite.
    #[error("invalid voxel size {0}: it must be strictly positive and finite.")]
    InvalidVoxelSize(f64),
    /// The grid needed to cover the regions has more cells than can be addressed.
    #[error("a grid of {dims:?} cells is too large.")]
    GridTooLarge {
        /// The number of cells along each axis.
        dims: [usize; 3],
    },
    /// A grid dimension is zero or the cell buffer doesn't match the dimensions.
    #[error("a label volume of dimensions {dims:?} needs {expected} cells but {found} were given.")]
    InconsistentDimensions {
        /// The requested dimensions.
        dims: [usize; 3],
        /// The number of cells implied by `dims`.
        expected: usize,
        /// The number of cells actually given.
        found: usize,
    },
}

/// Malformed region geometry.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// The mesh of the given region failed validation.
    #[error("invalid mesh for region `{label}`: {error}")]
    InvalidMesh {
        /// The label of the offending region.
        label: String,
        /// The defect found in its mesh.
        #[source]
        error: MeshError,
    },
    /// The mesh of a region isn't associated to any label yet.
    #[error("invalid region mesh: {0}")]
    Mesh(#[from] MeshError),
    /// Two regions share the same label, so adjacency ownership would be undefined.
    #[error("the label `{0}` is used by more than one region.")]
    DuplicateLabel(String),
}

/// The adjacency relation references something the label catalog doesn't know.
///
/// This always points to an upstream defect, e.g., a label volume assembled
/// by hand with region indices that have no catalog entry.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum DataIntegrityError {
    /// A cell or a contact references a region index outside of the label catalog.
    #[error("a cell references the region index {id} but the catalog only has {catalog_len} labels.")]
    UnknownRegion {
        /// The unknown region index.
        id: u32,
        /// The number of labels in the catalog.
        catalog_len: usize,
    },
    /// The label catalog lists the same label more than once.
    #[error("the label `{0}` appears more than once in the catalog.")]
    DuplicateLabel(String),
    /// A storey filter was given a label it has no storey for.
    #[error("no storey is known for the label `{0}`.")]
    MissingStorey(String),
}

/// Any error raised by the adjacency pipeline.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum AdjacencyError {
    /// Missing or invalid parameters.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    /// Malformed region geometry.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),
    /// The adjacency relation references an unknown label.
    #[error("data integrity error: {0}")]
    DataIntegrity(#[from] DataIntegrityError),
}

impl From<MeshError> for AdjacencyError {
    fn from(error: MeshError) -> Self {
        AdjacencyError::Geometry(error.into())
    }
}
