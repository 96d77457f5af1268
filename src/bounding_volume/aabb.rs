//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corners. Region meshes cache their AABB
/// so the classifier can reject a region without touching its triangles, and
/// the union of all region AABBs sets the extent of the sampling grid.
///
/// # Example
///
/// ```rust
/// use space_adjacency::bounding_volume::Aabb;
/// use space_adjacency::math::Point;
///
/// let aabb = Aabb::from_points([
///     Point::new(1.0, 2.0, 3.0),
///     Point::new(-1.0, 4.0, 2.0),
///     Point::new(0.0, 0.0, 5.0),
/// ]);
///
/// assert_eq!(aabb.mins, Point::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point::new(1.0, 4.0, 5.0));
/// assert!(aabb.contains_local_point(&Point::new(0.0, 1.0, 3.0)));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its two corners.
    ///
    /// Each component of `mins` should be smaller than or equal to the
    /// matching component of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` components set to `Real::MAX`
    /// and `maxs` components set to `-Real::MAX`.
    ///
    /// This is the neutral element of [`Aabb::merge`].
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Computes the smallest AABB containing all the given points.
    ///
    /// Returns an invalid AABB (see [`Aabb::new_invalid`]) if `pts` is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.take_point(pt);
        }

        result
    }

    /// Is `mins <= maxs` on every axis?
    #[inline]
    pub fn is_valid(&self) -> bool {
        (0..DIM).all(|i| self.mins[i] <= self.maxs[i])
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// Enlarges this AABB so it also contains `other`.
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// This AABB enlarged by `amount` on every side.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Aabb {
        Aabb {
            mins: self.mins - Vector::repeat(amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// Does this AABB contain a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Converts this AABB to the envelope type of the `rstar` R-tree.
    #[inline]
    pub fn to_envelope(&self) -> rstar::AABB<[Real; 3]> {
        rstar::AABB::from_corners(self.mins.into(), self.maxs.into())
    }
}

/// Computes the AABB of a set of points.
///
/// Returns `None` if `pts` is empty.
pub fn point_cloud_aabb<'a, I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();
    let p0 = *it.next()?;
    let mut result = Aabb::new(p0, p0);

    for pt in it {
        result.take_point(*pt);
    }

    Some(result)
}

#[cfg(test)]
mod test {
    use super::{point_cloud_aabb, Aabb};
    use crate::math::{Point, Vector};

    #[test]
    fn empty_point_cloud_has_no_aabb() {
        assert!(point_cloud_aabb(&[]).is_none());
        assert!(!Aabb::from_points(core::iter::empty()).is_valid());
    }

    #[test]
    fn merge_and_loosen() {
        let a = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Point::new(2.0, -1.0, 0.5), Point::new(3.0, 0.5, 4.0));
        let merged = a.merged(&b);
        assert_eq!(merged.mins, Point::new(0.0, -1.0, 0.0));
        assert_eq!(merged.maxs, Point::new(3.0, 1.0, 4.0));

        let mut invalid = Aabb::new_invalid();
        invalid.merge(&a);
        assert_eq!(invalid, a);

        let loose = a.loosened(0.5);
        assert_eq!(loose.extents(), Vector::repeat(2.0));
        assert!(loose.contains_local_point(&Point::new(-0.25, 1.25, 0.5)));
        assert!(!a.contains_local_point(&Point::new(-0.25, 1.25, 0.5)));
    }

    #[test]
    fn envelope_matches_corners() {
        let aabb = Aabb::new(Point::new(-1.0, 2.0, 3.0), Point::new(1.0, 4.0, 5.0));
        let envelope = aabb.to_envelope();
        assert_eq!(envelope.lower(), [-1.0, 2.0, 3.0]);
        assert_eq!(envelope.upper(), [1.0, 4.0, 5.0]);
    }
}
