use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::{local_ray_intersection_with_triangle, Ray};
use core::f64::consts::PI;

/// The algorithm used to decide whether a point lies inside a closed triangle mesh.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ContainmentTest {
    /// Generalized winding number: the sum of the solid angles subtended by
    /// every triangle, divided by `4π`.
    ///
    /// Insensitive to rays grazing shared edges and to the global orientation
    /// of the mesh. This is the default.
    #[default]
    WindingNumber,
    /// Crossing parity of three rays cast along fixed skewed directions,
    /// combined by majority vote.
    RayParity,
}

/// A solid that can tell whether it contains a point.
///
/// This is the only capability the grid classifier needs from a region, so
/// anything implementing it (a triangle mesh, an analytic primitive, an
/// accelerated structure) can be voxelized.
pub trait PointContainment {
    /// The axis-aligned bounding box of this solid.
    ///
    /// Points outside of it must never be reported as contained.
    fn aabb(&self) -> Aabb;

    /// Does this solid contain `point`, according to the given test?
    ///
    /// Implementors that have a single exact answer may ignore `test`.
    fn contains_point(&self, point: &Point<Real>, test: ContainmentTest) -> bool;
}

// NOTE: not axis-aligned on purpose so a ray cast from a grid sample doesn't
//       run along the faces or edges of axis-aligned walls.
const PARITY_RAY_DIRECTIONS: [[Real; 3]; 3] = [
    [1.0, 0.137_158_32, 0.059_243_48],
    [0.071_331_96, 1.0, 0.113_947_05],
    [0.124_670_11, 0.043_129_57, 1.0],
];

/// Computes the generalized winding number of `point` with regard to the
/// triangle mesh described by `vertices` and `indices`.
///
/// The result is close to `±1` for points inside a closed mesh (the sign
/// depends on the orientation of the triangles) and close to `0` outside.
pub fn winding_number(vertices: &[Point<Real>], indices: &[[u32; 3]], point: &Point<Real>) -> Real {
    let mut total_angle = 0.0;

    for idx in indices {
        let a = vertices[idx[0] as usize] - point;
        let b = vertices[idx[1] as usize] - point;
        let c = vertices[idx[2] as usize] - point;
        total_angle += triangle_solid_angle(&a, &b, &c);
    }

    total_angle / (4.0 * PI)
}

/// Signed solid angle subtended by a triangle whose vertices are given
/// relative to the observation point (Van Oosterom & Strackee).
fn triangle_solid_angle(a: &Vector<Real>, b: &Vector<Real>, c: &Vector<Real>) -> Real {
    let la = a.norm();
    let lb = b.norm();
    let lc = c.norm();

    let numerator = a.dot(&b.cross(c));
    let denominator = la * lb * lc + a.dot(b) * lc + b.dot(c) * la + c.dot(a) * lb;

    2.0 * numerator.atan2(denominator)
}

/// Tests containment by casting three rays from `point` and counting, for
/// each of them, how many triangles it crosses.
///
/// An odd count is a vote for "inside"; at least two of the three rays must agree.
pub(crate) fn ray_parity_contains(
    vertices: &[Point<Real>],
    indices: &[[u32; 3]],
    point: &Point<Real>,
) -> bool {
    let mut inside_votes = 0;

    for dir in &PARITY_RAY_DIRECTIONS {
        let ray = Ray::new(*point, Vector::from(*dir));
        let crossings = indices
            .iter()
            .filter(|idx| {
                local_ray_intersection_with_triangle(
                    &vertices[idx[0] as usize],
                    &vertices[idx[1] as usize],
                    &vertices[idx[2] as usize],
                    &ray,
                )
                .is_some()
            })
            .count();

        if crossings % 2 == 1 {
            inside_votes += 1;
        }
    }

    inside_votes >= 2
}

#[cfg(test)]
mod test {
    use super::{ray_parity_contains, winding_number};
    use crate::math::Point;
    use crate::shape::RegionMesh;

    #[test]
    fn winding_number_of_cuboid() {
        let mesh =
            RegionMesh::cuboid(Point::new(0.0, 0.0, 0.0), Point::new(2.0, 1.0, 3.0)).unwrap();
        let inside = Point::new(1.0, 0.5, 1.5);
        let outside = Point::new(2.5, 0.5, 1.5);

        assert_relative_eq!(
            winding_number(mesh.vertices(), mesh.indices(), &inside),
            1.0,
            epsilon = 1.0e-9
        );
        assert_relative_eq!(
            winding_number(mesh.vertices(), mesh.indices(), &outside),
            0.0,
            epsilon = 1.0e-9
        );
    }

    #[test]
    fn inverted_cuboid_winds_negatively() {
        let mesh =
            RegionMesh::cuboid(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0)).unwrap();
        let flipped: Vec<_> = mesh.indices().iter().map(|[a, b, c]| [*a, *c, *b]).collect();

        assert_relative_eq!(
            winding_number(mesh.vertices(), &flipped, &Point::new(0.5, 0.5, 0.5)),
            -1.0,
            epsilon = 1.0e-9
        );
    }

    #[test]
    fn ray_parity_of_cuboid() {
        let mesh =
            RegionMesh::cuboid(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0)).unwrap();

        // The center lies on the diagonal of every face along the axes: the
        // skewed rays must not be fooled by it.
        assert!(ray_parity_contains(
            mesh.vertices(),
            mesh.indices(),
            &Point::origin()
        ));
        assert!(ray_parity_contains(
            mesh.vertices(),
            mesh.indices(),
            &Point::new(0.9, -0.9, 0.3)
        ));
        assert!(!ray_parity_contains(
            mesh.vertices(),
            mesh.indices(),
            &Point::new(1.1, 0.0, 0.0)
        ));
        assert!(!ray_parity_contains(
            mesh.vertices(),
            mesh.indices(),
            &Point::new(-3.0, -3.0, -3.0)
        ));
    }
}
