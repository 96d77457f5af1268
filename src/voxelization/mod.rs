//! Sampling of the region solids on a regular grid.

pub use self::classifier::RegionClassifier;
pub use self::grid::Grid;
pub use self::label_volume::{Cell, CellCensus, LabelVolume, RegionId};

mod classifier;
mod grid;
mod label_volume;
