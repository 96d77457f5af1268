//! Rays and ray/triangle intersection.

use crate::math::{Point, Real, Vector};

/// A ray, defined by its origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Computes the point at the given parameter on this ray.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Computes the intersection between a triangle and a ray.
///
/// If an intersection is found, the time of impact and a flag telling whether
/// the ray hit the front face (the side its counterclockwise normal points
/// to) are returned. Only hits with a non-negative time of impact count.
pub fn local_ray_intersection_with_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    ray: &Ray,
) -> Option<(Real, bool)> {
    let ab = *b - *a;
    let ac = *c - *a;

    // normal
    let n = ab.cross(&ac);
    let d = n.dot(&ray.dir);

    // the normal and the ray direction are perpendicular
    if d == 0.0 {
        return None;
    }

    let ap = ray.origin - *a;
    let t = ap.dot(&n);

    // the ray does not intersect the halfspace defined by the triangle
    if (t < 0.0 && d < 0.0) || (t > 0.0 && d > 0.0) {
        return None;
    }

    let front_face = d < 0.0;
    let d = d.abs();

    //
    // intersection: compute barycentric coordinates
    //
    let e = -ray.dir.cross(&ap);

    let toi = if t < 0.0 {
        let v = -ac.dot(&e);

        if v < 0.0 || v > d {
            return None;
        }

        let w = ab.dot(&e);

        if w < 0.0 || v + w > d {
            return None;
        }

        -t / d
    } else {
        let v = ac.dot(&e);

        if v < 0.0 || v > d {
            return None;
        }

        let w = -ab.dot(&e);

        if w < 0.0 || v + w > d {
            return None;
        }

        t / d
    };

    Some((toi, front_face))
}
