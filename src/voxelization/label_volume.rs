use crate::error::{AdjacencyError, ConfigurationError, GeometryError};
use crate::math::DIM;
use crate::utils::HashSet;
use std::fmt;

/// The index of a normal region in the label catalog of a [`LabelVolume`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RegionId(pub u32);

impl RegionId {
    /// The position of this region in the label catalog.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The content of one grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Cell {
    /// Not contained by any region.
    #[default]
    Ambient,
    /// Contained by a neutral area.
    Neutral,
    /// Contained by the given normal region.
    Region(RegionId),
}

impl Cell {
    /// Is this cell `Ambient` or `Neutral`?
    ///
    /// Sentinel cells never take part in the adjacency relation.
    #[inline]
    pub fn is_sentinel(self) -> bool {
        !matches!(self, Cell::Region(_))
    }

    /// The region contained in this cell, if any.
    #[inline]
    pub fn region(self) -> Option<RegionId> {
        match self {
            Cell::Region(id) => Some(id),
            _ => None,
        }
    }
}

/// The number of cells of each kind in a label volume.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellCensus {
    /// The number of ambient cells.
    pub ambient: usize,
    /// The number of neutral cells.
    pub neutral: usize,
    /// The number of cells of each catalog region, indexed by [`RegionId`].
    pub regions: Vec<usize>,
    /// The number of cells holding a region that is not in the catalog.
    pub unknown: usize,
}

/// A dense 3D array of cells, together with the labels of the regions it references.
///
/// Cells are stored with the `x` index varying fastest, then `y`, then `z`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct LabelVolume {
    dims: [usize; DIM],
    cells: Vec<Cell>,
    catalog: Vec<String>,
}

impl LabelVolume {
    /// Assembles a label volume from its raw parts.
    ///
    /// Labels of `catalog` must be unique. Cells referencing a region outside
    /// of `catalog` are accepted here and reported when the adjacency relation
    /// is computed.
    pub fn new(
        dims: [usize; DIM],
        cells: Vec<Cell>,
        catalog: Vec<String>,
    ) -> Result<Self, AdjacencyError> {
        let expected = dims[0]
            .checked_mul(dims[1])
            .and_then(|n| n.checked_mul(dims[2]))
            .ok_or(ConfigurationError::GridTooLarge { dims })?;

        if expected == 0 || cells.len() != expected {
            return Err(ConfigurationError::InconsistentDimensions {
                dims,
                expected,
                found: cells.len(),
            }
            .into());
        }

        {
            let mut labels = HashSet::default();
            for label in &catalog {
                if !labels.insert(label.as_str()) {
                    return Err(GeometryError::DuplicateLabel(label.clone()).into());
                }
            }
        }

        Ok(Self {
            dims,
            cells,
            catalog,
        })
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn dims(&self) -> [usize; DIM] {
        self.dims
    }

    /// The total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Is this volume empty?
    ///
    /// Always `false` since a volume has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All the cells, in linear order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The labels of the normal regions, indexed by [`RegionId`].
    #[inline]
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// The label of the given region.
    pub fn label(&self, id: RegionId) -> Option<&str> {
        self.catalog.get(id.index()).map(|label| label.as_str())
    }

    /// The linear index of the cell `(i, j, k)`.
    #[inline]
    pub fn linear_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + j * self.dims[0] + k * self.dims[0] * self.dims[1]
    }

    /// The cell `(i, j, k)`, or `None` if it is outside of the volume.
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<Cell> {
        if i < self.dims[0] && j < self.dims[1] && k < self.dims[2] {
            Some(self.cells[self.linear_index(i, j, k)])
        } else {
            None
        }
    }

    /// The first region referenced by a cell but missing from the catalog, in
    /// linear order.
    pub fn first_unknown_region(&self) -> Option<RegionId> {
        self.cells
            .iter()
            .filter_map(|cell| cell.region())
            .find(|id| id.index() >= self.catalog.len())
    }

    /// Counts the cells of each kind.
    pub fn census(&self) -> CellCensus {
        let mut census = CellCensus {
            regions: vec![0; self.catalog.len()],
            ..CellCensus::default()
        };

        for cell in &self.cells {
            match cell {
                Cell::Ambient => census.ambient += 1,
                Cell::Neutral => census.neutral += 1,
                Cell::Region(id) => match census.regions.get_mut(id.index()) {
                    Some(count) => *count += 1,
                    None => census.unknown += 1,
                },
            }
        }

        census
    }
}
