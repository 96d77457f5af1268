//! Region solids and their categories.

pub use self::region::{storeys, type_names, Region, RegionCategory};
pub use self::region_mesh::RegionMesh;

mod region;
mod region_mesh;
