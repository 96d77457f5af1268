use crate::error::ConfigurationError;
use crate::math::Real;
use crate::query::ContainmentTest;

/// The default edge length of a grid cell, in model length units.
pub const DEFAULT_VOXEL_SIZE: Real = 0.5;

/// The default number of extra cells probed past an ambient or neutral neighbor.
pub const DEFAULT_SEARCH_DEPTH: usize = 2;

/// Parameters of the whole adjacency pipeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct AdjacencyParameters {
    /// The edge length of a grid cell.
    ///
    /// Smaller cells resolve thinner walls but the cost grows with the cube of
    /// the inverse of this value.
    pub voxel_size: Real,
    /// The number of extra cells probed past an ambient or neutral neighbor
    /// before giving up on finding a contact.
    ///
    /// With a value of zero, only cells that directly touch are adjacent.
    pub search_depth: usize,
    /// The point-in-solid test used to classify the grid cells.
    pub containment: ContainmentTest,
    /// Labels of the regions to ignore entirely.
    pub exclude_labels: Vec<String>,
}

impl Default for AdjacencyParameters {
    fn default() -> Self {
        Self {
            voxel_size: DEFAULT_VOXEL_SIZE,
            search_depth: DEFAULT_SEARCH_DEPTH,
            containment: ContainmentTest::default(),
            exclude_labels: Vec::new(),
        }
    }
}

impl AdjacencyParameters {
    /// Sets the voxel size.
    pub fn with_voxel_size(mut self, voxel_size: Real) -> Self {
        self.voxel_size = voxel_size;
        self
    }

    /// Sets the search depth.
    pub fn with_search_depth(mut self, search_depth: usize) -> Self {
        self.search_depth = search_depth;
        self
    }

    /// Sets the containment test.
    pub fn with_containment(mut self, containment: ContainmentTest) -> Self {
        self.containment = containment;
        self
    }

    /// Adds a label to the set of ignored regions.
    pub fn exclude(mut self, label: impl Into<String>) -> Self {
        self.exclude_labels.push(label.into());
        self
    }

    /// Is the region with this label excluded from the computation?
    pub fn is_excluded(&self, label: &str) -> bool {
        self.exclude_labels.iter().any(|excluded| excluded == label)
    }

    /// Checks that these parameters can be used to build a grid.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_voxel_size(self.voxel_size)
    }
}

pub(crate) fn validate_voxel_size(voxel_size: Real) -> Result<(), ConfigurationError> {
    if voxel_size.is_finite() && voxel_size > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidVoxelSize(voxel_size))
    }
}
