use crate::math::DIM;
use crate::voxelization::{Cell, LabelVolume};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Two cells found on both sides of a label change.
///
/// `second` is the effective neighbor of `first`: either the next cell along
/// the scanned axis, or the first region found past it by the fallback probe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContactCandidate {
    /// The cell before the label change.
    pub first: Cell,
    /// The effective neighbor of `first`.
    pub second: Cell,
}

impl ContactCandidate {
    /// Creates a new candidate.
    pub fn new(first: Cell, second: Cell) -> Self {
        Self { first, second }
    }
}

/// The raw contact candidates found along each axis.
///
/// Candidates may repeat, include sentinel cells, self-pairs, and both
/// orderings of the same pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawContacts {
    /// The candidates found along the `x`, `y` and `z` axes, in scan order.
    pub axes: [Vec<ContactCandidate>; DIM],
}

impl RawContacts {
    /// The candidates found along the given axis.
    #[inline]
    pub fn axis(&self, axis: usize) -> &[ContactCandidate] {
        &self.axes[axis]
    }

    /// All the candidates, axis after axis.
    pub fn iter(&self) -> impl Iterator<Item = &ContactCandidate> {
        self.axes.iter().flatten()
    }

    /// The total number of candidates.
    pub fn len(&self) -> usize {
        self.axes.iter().map(|axis| axis.len()).sum()
    }

    /// Were no candidates found at all?
    pub fn is_empty(&self) -> bool {
        self.axes.iter().all(|axis| axis.is_empty())
    }
}

/// Scans `volume` along its three axes for pairs of neighbor cells with
/// different contents.
///
/// When the neighbor of a cell is ambient or neutral, up to `search_depth`
/// further cells are probed along the same axis and the first region found
/// replaces the neighbor. The probe stops at the boundary of the volume, in
/// which case the original neighbor is kept.
pub fn detect_contacts(volume: &LabelVolume, search_depth: usize) -> RawContacts {
    let [_, _, nz] = volume.dims();

    #[cfg(not(feature = "parallel"))]
    let slices: Vec<_> = (0..nz)
        .map(|k| scan_slice(volume, k, search_depth))
        .collect();

    #[cfg(feature = "parallel")]
    let slices: Vec<_> = (0..nz)
        .into_par_iter()
        .map(|k| scan_slice(volume, k, search_depth))
        .collect();

    let mut result = RawContacts::default();

    for slice in slices {
        for (all, found) in result.axes.iter_mut().zip(slice) {
            all.extend(found);
        }
    }

    for (axis, candidates) in result.axes.iter().enumerate() {
        log::trace!("{} raw contact candidates along axis {}.", candidates.len(), axis);
    }

    result
}

/// Scans all the cells with the `z` index `k`.
fn scan_slice(
    volume: &LabelVolume,
    k: usize,
    search_depth: usize,
) -> [Vec<ContactCandidate>; DIM] {
    let dims = volume.dims();
    let cells = volume.cells();
    let strides = [1, dims[0], dims[0] * dims[1]];
    let mut result: [Vec<ContactCandidate>; DIM] = Default::default();

    for j in 0..dims[1] {
        for i in 0..dims[0] {
            let ijk = [i, j, k];
            let id = volume.linear_index(i, j, k);
            let first = cells[id];

            for axis in 0..DIM {
                if ijk[axis] + 1 >= dims[axis] {
                    continue;
                }

                let stride = strides[axis];
                let neighbor = cells[id + stride];

                if neighbor == first {
                    continue;
                }

                let mut second = neighbor;

                if neighbor.is_sentinel() {
                    for step in 1..=search_depth {
                        if ijk[axis] + 1 + step >= dims[axis] {
                            break;
                        }

                        let probed = cells[id + (1 + step) * stride];
                        if !probed.is_sentinel() {
                            second = probed;
                            break;
                        }
                    }
                }

                result[axis].push(ContactCandidate::new(first, second));
            }
        }
    }

    result
}
