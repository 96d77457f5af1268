use space_adjacency::adjacency::AdjacencyMap;
use space_adjacency::math::Point;
use space_adjacency::shape::{Region, RegionMesh};
use std::collections::{BTreeMap, BTreeSet};

mod determinism;
mod floor_plan;
mod label_volume_contacts;

pub fn room(label: &str, mins: [f64; 3], maxs: [f64; 3]) -> Region {
    let mesh = RegionMesh::cuboid(Point::from(mins), Point::from(maxs)).unwrap();
    Region::normal(label, mesh)
}

pub fn area(label: &str, mins: [f64; 3], maxs: [f64; 3]) -> Region {
    let mesh = RegionMesh::cuboid(Point::from(mins), Point::from(maxs)).unwrap();
    Region::neutral(label, mesh).with_type_name("Area")
}

pub fn sorted(map: &AdjacencyMap) -> BTreeMap<String, BTreeSet<String>> {
    map.iter()
        .map(|(label, neighbors)| (label.to_string(), neighbors.clone()))
        .collect()
}

/// Checks the properties every adjacency map must have.
pub fn assert_well_formed(map: &AdjacencyMap) {
    for (label, neighbors) in map.iter() {
        assert!(!neighbors.contains(label), "{label} is adjacent to itself");

        for neighbor in neighbors {
            assert!(
                map.are_adjacent(neighbor, label),
                "{label} -> {neighbor} is not symmetric"
            );
        }
    }
}
