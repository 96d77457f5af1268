use crate::bounding_volume::Aabb;
use crate::error::ConfigurationError;
use crate::math::{Point, Real, Vector, DIM};
use crate::parameters::validate_voxel_size;

/// A regular, axis-aligned, grid of sample points.
///
/// The grid covers a bounding box padded on every side so the outermost layer
/// of samples lies strictly outside of every region. Samples are evenly spaced
/// between the two corners of the padded box: the first sample of each axis
/// is on its lower bound and the last one is exactly on its upper bound.
///
/// Because the padded extent is re-centered around the tight bounding box, the
/// actual spacing between two samples is slightly larger than the requested
/// voxel size.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Grid {
    mins: Point<Real>,
    maxs: Point<Real>,
    spacing: Vector<Real>,
    voxel_size: Real,
    dims: [usize; DIM],
    tight_bounds: Aabb,
}

impl Grid {
    /// Builds the grid sampling `bounds` with cells of approximately `voxel_size`.
    pub fn new(bounds: &Aabb, voxel_size: Real) -> Result<Self, ConfigurationError> {
        validate_voxel_size(voxel_size)?;

        let extents = bounds.extents();
        let mut mins = Point::origin();
        let mut maxs = Point::origin();
        let mut spacing = Vector::zeros();
        let mut dims = [0; DIM];

        for k in 0..DIM {
            let num_samples = (extents[k] / voxel_size).floor() + 2.0;

            if !num_samples.is_finite() || num_samples >= usize::MAX as Real {
                return Err(ConfigurationError::GridTooLarge {
                    dims: [usize::MAX; DIM],
                });
            }

            // This is negative: the samples overflow the tight box on both sides.
            let remainder = extents[k] - num_samples * voxel_size;
            mins[k] = bounds.mins[k] + remainder / 2.0 - voxel_size;
            maxs[k] = bounds.maxs[k] - remainder / 2.0 + voxel_size;
            dims[k] = num_samples as usize;
            spacing[k] = (maxs[k] - mins[k]) / (num_samples - 1.0);
        }

        if dims[0]
            .checked_mul(dims[1])
            .and_then(|n| n.checked_mul(dims[2]))
            .is_none()
        {
            return Err(ConfigurationError::GridTooLarge { dims });
        }

        Ok(Self {
            mins,
            maxs,
            spacing,
            voxel_size,
            dims,
            tight_bounds: *bounds,
        })
    }

    /// Builds the grid covering all the given bounding boxes.
    pub fn covering<'a>(
        aabbs: impl IntoIterator<Item = &'a Aabb>,
        voxel_size: Real,
    ) -> Result<Self, ConfigurationError> {
        let mut aabbs = aabbs.into_iter();
        let first = aabbs.next().ok_or(ConfigurationError::NoRegions)?;
        let bounds = aabbs.fold(*first, |acc, aabb| acc.merged(aabb));
        Self::new(&bounds, voxel_size)
    }

    /// The number of samples along each axis.
    #[inline]
    pub fn dims(&self) -> [usize; DIM] {
        self.dims
    }

    /// The total number of samples.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    /// The position of the sample `(0, 0, 0)`.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        self.mins
    }

    /// The padded box the samples are spread over.
    #[inline]
    pub fn extended_bounds(&self) -> Aabb {
        Aabb::new(self.mins, self.maxs)
    }

    /// The bounding box of the regions this grid was built for.
    #[inline]
    pub fn tight_bounds(&self) -> &Aabb {
        &self.tight_bounds
    }

    /// The distance between two consecutive samples along each axis.
    #[inline]
    pub fn spacing(&self) -> Vector<Real> {
        self.spacing
    }

    /// The voxel size requested when building this grid.
    #[inline]
    pub fn voxel_size(&self) -> Real {
        self.voxel_size
    }

    /// The linear index of the sample `(i, j, k)`.
    ///
    /// The `x` index varies fastest, then `y`, then `z`.
    #[inline]
    pub fn linear_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + j * self.dims[0] + k * self.dims[0] * self.dims[1]
    }

    /// The position of the sample `(i, j, k)`.
    pub fn cell_center(&self, i: usize, j: usize, k: usize) -> Point<Real> {
        let ijk = [i, j, k];
        let mut center = Point::origin();

        for d in 0..DIM {
            center[d] = if ijk[d] + 1 == self.dims[d] {
                self.maxs[d]
            } else {
                self.mins[d] + ijk[d] as Real * self.spacing[d]
            };
        }

        center
    }

    /// Is the sample `(i, j, k)` on the outermost layer of this grid?
    pub fn is_on_shell(&self, i: usize, j: usize, k: usize) -> bool {
        let ijk = [i, j, k];
        (0..DIM).any(|d| ijk[d] == 0 || ijk[d] + 1 == self.dims[d])
    }
}
