use crate::error::GeometryError;
use crate::math::{Point, Real};
use crate::shape::RegionMesh;
use indexmap::IndexMap;

/// Whether a region is a real room or a neutral area.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum RegionCategory {
    /// A room, taking part in the adjacency relation.
    #[default]
    Normal,
    /// Geometry that is part of the building but not a room (e.g. a generic
    /// circulation area).
    ///
    /// Neutral cells never appear in the adjacency relation, but contacts are
    /// still searched across them.
    Neutral,
}

impl RegionCategory {
    /// The space type name building models use for neutral areas.
    pub const NEUTRAL_TYPE_NAME: &'static str = "Area";

    /// Classifies a space from its type name (the long name of the space in
    /// the building model).
    pub fn from_type_name(type_name: Option<&str>) -> Self {
        match type_name {
            Some(Self::NEUTRAL_TYPE_NAME) => RegionCategory::Neutral,
            _ => RegionCategory::Normal,
        }
    }
}

/// A labeled closed solid: one interior space, or a neutral area.
#[derive(Clone, Debug)]
pub struct Region {
    label: String,
    mesh: RegionMesh,
    category: RegionCategory,
    storey: Option<u32>,
    type_name: Option<String>,
}

impl Region {
    /// Creates a new region.
    pub fn new(label: impl Into<String>, mesh: RegionMesh, category: RegionCategory) -> Self {
        Self {
            label: label.into(),
            mesh,
            category,
            storey: None,
            type_name: None,
        }
    }

    /// Creates a new room.
    pub fn normal(label: impl Into<String>, mesh: RegionMesh) -> Self {
        Self::new(label, mesh, RegionCategory::Normal)
    }

    /// Creates a new neutral area.
    pub fn neutral(label: impl Into<String>, mesh: RegionMesh) -> Self {
        Self::new(label, mesh, RegionCategory::Neutral)
    }

    /// Creates a new region from raw vertex and index buffers.
    ///
    /// The error names the region whose mesh is invalid.
    pub fn from_buffers(
        label: impl Into<String>,
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
        category: RegionCategory,
    ) -> Result<Self, GeometryError> {
        let label = label.into();

        match RegionMesh::new(vertices, indices) {
            Ok(mesh) => Ok(Self::new(label, mesh, category)),
            Err(error) => Err(GeometryError::InvalidMesh { label, error }),
        }
    }

    /// Assigns this region to a building storey.
    pub fn with_storey(mut self, storey: u32) -> Self {
        self.storey = Some(storey);
        self
    }

    /// Sets the type name of this region.
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// The unique label of this region.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The closed mesh bounding this region.
    #[inline]
    pub fn mesh(&self) -> &RegionMesh {
        &self.mesh
    }

    /// The category of this region.
    #[inline]
    pub fn category(&self) -> RegionCategory {
        self.category
    }

    /// Is this region a neutral area?
    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.category == RegionCategory::Neutral
    }

    /// The storey this region belongs to, if known.
    #[inline]
    pub fn storey(&self) -> Option<u32> {
        self.storey
    }

    /// The type name of this region, if known.
    #[inline]
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}

/// The type names of the rooms (neutral areas excluded), keyed by label.
///
/// Rooms without a type name are skipped.
pub fn type_names(regions: &[Region]) -> IndexMap<String, String> {
    regions
        .iter()
        .filter(|region| !region.is_neutral())
        .filter_map(|region| Some((region.label.clone(), region.type_name.clone()?)))
        .collect()
}

/// The storeys of the rooms (neutral areas excluded), keyed by label.
///
/// Rooms without a storey are skipped.
pub fn storeys(regions: &[Region]) -> IndexMap<String, u32> {
    regions
        .iter()
        .filter(|region| !region.is_neutral())
        .filter_map(|region| Some((region.label.clone(), region.storey?)))
        .collect()
}
