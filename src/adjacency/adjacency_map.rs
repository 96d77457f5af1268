use crate::adjacency::ContactPair;
use crate::error::DataIntegrityError;
use crate::voxelization::RegionId;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// The regions adjacent to each region, keyed by label.
///
/// Every label of the catalog the map was built from is a key, in catalog
/// order, even if it has no neighbor. The relation is symmetric and never
/// relates a label to itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(transparent))]
pub struct AdjacencyMap {
    neighbors: IndexMap<String, BTreeSet<String>>,
}

impl AdjacencyMap {
    /// Groups contact pairs by label.
    ///
    /// Fails if `catalog` lists a label twice or if a pair references a
    /// region outside of `catalog`.
    pub fn materialize(
        pairs: &[ContactPair],
        catalog: &[String],
    ) -> Result<Self, DataIntegrityError> {
        let mut neighbors = IndexMap::with_capacity(catalog.len());

        for label in catalog {
            if neighbors.insert(label.clone(), BTreeSet::new()).is_some() {
                return Err(DataIntegrityError::DuplicateLabel(label.clone()));
            }
        }

        let label = |id: RegionId| {
            catalog
                .get(id.index())
                .ok_or(DataIntegrityError::UnknownRegion {
                    id: id.0,
                    catalog_len: catalog.len(),
                })
        };

        for pair in pairs {
            let a = label(pair.first())?;
            let b = label(pair.second())?;

            let _ = neighbors[pair.first().index()].insert(b.clone());
            let _ = neighbors[pair.second().index()].insert(a.clone());
        }

        Ok(Self { neighbors })
    }

    /// The labels adjacent to `label`, or `None` if `label` is unknown.
    pub fn get(&self, label: &str) -> Option<&BTreeSet<String>> {
        self.neighbors.get(label)
    }

    /// The labels adjacent to `label`, in lexicographic order.
    ///
    /// Empty if `label` is unknown.
    pub fn neighbors<'a>(&'a self, label: &str) -> impl Iterator<Item = &'a str> {
        self.neighbors
            .get(label)
            .into_iter()
            .flatten()
            .map(|neighbor| neighbor.as_str())
    }

    /// Are the regions labeled `a` and `b` adjacent?
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.neighbors
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }

    /// All the labels of this map, in catalog order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.neighbors.keys().map(|label| label.as_str())
    }

    /// Iterates through each label and its neighbors, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.neighbors
            .iter()
            .map(|(label, neighbors)| (label.as_str(), neighbors))
    }

    /// The number of labels in this map.
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Does this map have no label at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// The number of adjacent pairs.
    pub fn num_edges(&self) -> usize {
        self.neighbors.values().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Each adjacent pair, once.
    ///
    /// The first label of each pair comes first in catalog order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges = Vec::with_capacity(self.num_edges());

        for (i, (label, neighbors)) in self.neighbors.iter().enumerate() {
            for neighbor in neighbors {
                if self
                    .neighbors
                    .get_index_of(neighbor.as_str())
                    .is_some_and(|j| j > i)
                {
                    edges.push((label.as_str(), neighbor.as_str()));
                }
            }
        }

        edges
    }

    /// Keeps only the neighbors on the same storey, then drops the labels left
    /// without any neighbor.
    ///
    /// Fails if a label involved in an adjacency has no entry in `storeys`.
    pub fn filter_by_storey(
        &self,
        storeys: &IndexMap<String, u32>,
    ) -> Result<Self, DataIntegrityError> {
        let storey = |label: &str| {
            storeys
                .get(label)
                .copied()
                .ok_or_else(|| DataIntegrityError::MissingStorey(label.to_string()))
        };
        let mut neighbors = IndexMap::new();

        for (label, adjacent) in &self.neighbors {
            if adjacent.is_empty() {
                continue;
            }

            let own = storey(label)?;
            let mut kept = BTreeSet::new();

            for neighbor in adjacent {
                if storey(neighbor)? == own {
                    let _ = kept.insert(neighbor.clone());
                }
            }

            if !kept.is_empty() {
                let _ = neighbors.insert(label.clone(), kept);
            }
        }

        Ok(Self { neighbors })
    }
}

impl<'a> IntoIterator for &'a AdjacencyMap {
    type Item = (&'a String, &'a BTreeSet<String>);
    type IntoIter = indexmap::map::Iter<'a, String, BTreeSet<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.neighbors.iter()
    }
}
