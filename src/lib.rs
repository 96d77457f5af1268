/*!
space-adjacency
===============

**space-adjacency** infers which interior spaces of a building touch each other
directly from their closed 3D solids.

The solids are sampled on a regular grid, every sample is labeled with the
region containing it, and the label volume is scanned along the three axes to
find cells whose labels differ. Thin gaps (door openings, wall voids) are
bridged by probing a few cells past an unlabeled neighbor.

```
use space_adjacency::math::Point;
use space_adjacency::shape::{Region, RegionMesh};
use space_adjacency::{build_label_volume, compute_adjacency, DEFAULT_SEARCH_DEPTH};

let kitchen = RegionMesh::cuboid(Point::new(0.0, 0.0, 0.0), Point::new(4.0, 3.0, 2.5)).unwrap();
let hallway = RegionMesh::cuboid(Point::new(4.0, 0.0, 0.0), Point::new(6.0, 3.0, 2.5)).unwrap();
let regions = vec![
    Region::normal("kitchen", kitchen),
    Region::normal("hallway", hallway),
];

let (_grid, volume) = build_label_volume(&regions, 0.5).unwrap();
let adjacency = compute_adjacency(&volume, DEFAULT_SEARCH_DEPTH).unwrap();
assert!(adjacency.are_adjacent("kitchen", "hallway"));
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod adjacency;
pub mod bounding_volume;
mod error;
mod parameters;
mod pipeline;
pub mod query;
pub mod shape;
pub mod utils;
pub mod voxelization;

pub use self::error::{
    AdjacencyError, ConfigurationError, DataIntegrityError, GeometryError, MeshError,
};
pub use self::parameters::{AdjacencyParameters, DEFAULT_SEARCH_DEPTH, DEFAULT_VOXEL_SIZE};
pub use self::pipeline::{
    build_label_volume, build_label_volume_with, compute_adjacency, infer_adjacency,
};

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Point3, Vector3};

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
