use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::{ContainmentTest, PointContainment};
use crate::voxelization::{Cell, Grid, RegionId};
use rstar::{Envelope, RTree, RTreeObject, SelectionFunction, AABB};
use smallvec::SmallVec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The bounding box of one classifier layer, stored in the R-tree.
#[derive(Copy, Clone, Debug)]
struct LayerEnvelope {
    layer: usize,
    envelope: AABB<[Real; 3]>,
}

impl RTreeObject for LayerEnvelope {
    type Envelope = AABB<[Real; 3]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Selects the layers whose bounding box contains a point.
struct ContainingPoint([Real; 3]);

impl SelectionFunction<LayerEnvelope> for ContainingPoint {
    fn should_unpack_parent(&self, envelope: &AABB<[Real; 3]>) -> bool {
        envelope.contains_point(&self.0)
    }

    fn should_unpack_leaf(&self, leaf: &LayerEnvelope) -> bool {
        leaf.envelope.contains_point(&self.0)
    }
}

/// Labels grid samples with the region containing them.
///
/// Regions are stacked in layers of increasing precedence: all the neutral
/// areas first, then the normal regions in input order. When several regions
/// contain the same sample, the layer with the highest precedence wins, which
/// is equivalent to letting every region overwrite the samples of the ones
/// before it.
pub struct RegionClassifier<'a, S> {
    layers: Vec<(Cell, &'a S)>,
    tree: RTree<LayerEnvelope>,
    test: ContainmentTest,
}

impl<'a, S: PointContainment> RegionClassifier<'a, S> {
    /// Creates a classifier for the given neutral areas and normal regions.
    ///
    /// The `i`-th normal region is labeled with `RegionId(i)`.
    pub fn new<N, R>(neutral: N, normal: R, test: ContainmentTest) -> Self
    where
        N: IntoIterator<Item = &'a S>,
        R: IntoIterator<Item = &'a S>,
    {
        let neutral = neutral.into_iter().map(|shape| (Cell::Neutral, shape));
        let normal = normal
            .into_iter()
            .enumerate()
            .map(|(i, shape)| (Cell::Region(RegionId(i as u32)), shape));
        let layers: Vec<_> = neutral.chain(normal).collect();

        let envelopes = layers
            .iter()
            .enumerate()
            .map(|(layer, (_, shape))| LayerEnvelope {
                layer,
                envelope: shape.aabb().to_envelope(),
            })
            .collect();

        Self {
            layers,
            tree: RTree::bulk_load(envelopes),
            test,
        }
    }

    /// The bounding boxes of all the regions known by this classifier.
    pub fn aabbs(&self) -> impl Iterator<Item = Aabb> + '_ {
        self.layers.iter().map(|(_, shape)| shape.aabb())
    }

    /// The cell a sample at `point` belongs to.
    pub fn classify_point(&self, point: &Point<Real>) -> Cell {
        let mut candidates: SmallVec<[usize; 8]> = self
            .tree
            .locate_with_selection_function(ContainingPoint(point.coords.into()))
            .map(|envelope| envelope.layer)
            .collect();
        candidates.sort_unstable_by(|a, b| b.cmp(a));

        for layer in candidates {
            let (cell, shape) = self.layers[layer];
            if shape.contains_point(point, self.test) {
                return cell;
            }
        }

        Cell::Ambient
    }

    fn classify_slice(&self, grid: &Grid, k: usize, slice: &mut [Cell]) {
        let [nx, _, _] = grid.dims();

        for (id, cell) in slice.iter_mut().enumerate() {
            let center = grid.cell_center(id % nx, id / nx, k);
            *cell = self.classify_point(&center);
        }
    }
}

impl<'a, S: PointContainment + Sync> RegionClassifier<'a, S> {
    /// Classifies every sample of `grid`, in linear order.
    pub fn classify(&self, grid: &Grid) -> Vec<Cell> {
        let [nx, ny, _] = grid.dims();
        let mut cells = vec![Cell::Ambient; grid.num_cells()];

        #[cfg(not(feature = "parallel"))]
        {
            for (k, slice) in cells.chunks_mut(nx * ny).enumerate() {
                self.classify_slice(grid, k, slice);
            }
        }

        #[cfg(feature = "parallel")]
        {
            cells
                .par_chunks_mut(nx * ny)
                .enumerate()
                .for_each(|(k, slice)| self.classify_slice(grid, k, slice));
        }

        cells
    }
}
