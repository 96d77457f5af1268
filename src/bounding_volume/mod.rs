//! Bounding volumes.

pub use self::aabb::{point_cloud_aabb, Aabb};

mod aabb;
