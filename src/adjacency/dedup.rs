use crate::adjacency::ContactCandidate;
use crate::utils::{HashSet, SortedPair};
use crate::voxelization::RegionId;

/// An unordered pair of distinct regions in contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactPair(SortedPair<RegionId>);

impl ContactPair {
    /// Creates the pair `{a, b}`, or `None` if `a == b`.
    pub fn new(a: RegionId, b: RegionId) -> Option<Self> {
        let pair = SortedPair::new(a, b);
        (!pair.is_diagonal()).then_some(Self(pair))
    }

    /// The region of this pair with the smallest index.
    #[inline]
    pub fn first(&self) -> RegionId {
        *self.0.first()
    }

    /// The region of this pair with the largest index.
    #[inline]
    pub fn second(&self) -> RegionId {
        *self.0.second()
    }
}

/// Collapses raw contact candidates into a sorted set of distinct pairs.
///
/// Candidates with an ambient or neutral side are dropped, as are
/// candidates between a region and itself. The result does not depend on the
/// order of `candidates`.
pub fn deduplicate<'a>(
    candidates: impl IntoIterator<Item = &'a ContactCandidate>,
) -> Vec<ContactPair> {
    let mut pairs = HashSet::default();

    for candidate in candidates {
        if let (Some(a), Some(b)) = (candidate.first.region(), candidate.second.region()) {
            if let Some(pair) = ContactPair::new(a, b) {
                let _ = pairs.insert(pair);
            }
        }
    }

    let mut pairs: Vec<_> = pairs.into_iter().collect();
    pairs.sort_unstable();
    pairs
}
