//! Point-in-solid queries.

pub use self::containment::{winding_number, ContainmentTest, PointContainment};
pub(crate) use self::containment::ray_parity_contains;
pub use self::ray::{local_ray_intersection_with_triangle, Ray};

mod containment;
mod ray;
