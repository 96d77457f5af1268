use space_adjacency::adjacency::{deduplicate, detect_contacts};
use space_adjacency::voxelization::{Cell, LabelVolume, RegionId};
use space_adjacency::{compute_adjacency, AdjacencyError, DataIntegrityError, GeometryError};

const O: Cell = Cell::Ambient;
const N: Cell = Cell::Neutral;
const A: Cell = Cell::Region(RegionId(0));
const B: Cell = Cell::Region(RegionId(1));
const C: Cell = Cell::Region(RegionId(2));

fn catalog() -> Vec<String> {
    vec!["A".to_string(), "B".to_string(), "C".to_string()]
}

/// A volume with a single row of cells along `axis`.
fn line(axis: usize, cells: Vec<Cell>) -> LabelVolume {
    let mut dims = [1; 3];
    dims[axis] = cells.len();
    LabelVolume::new(dims, cells, catalog()).unwrap()
}

#[test]
fn one_cell_gap_needs_a_search_depth() {
    for axis in 0..3 {
        let volume = line(axis, vec![O, A, O, B, O]);

        let direct = compute_adjacency(&volume, 0).unwrap();
        assert!(!direct.are_adjacent("A", "B"));

        for depth in 1..4 {
            let bridged = compute_adjacency(&volume, depth).unwrap();
            assert!(bridged.are_adjacent("A", "B"));
            assert!(bridged.are_adjacent("B", "A"));
        }
    }
}

#[test]
fn neutral_cells_are_searched_across() {
    let volume = line(0, vec![O, A, N, N, B, O]);

    assert!(!compute_adjacency(&volume, 1).unwrap().are_adjacent("A", "B"));
    assert!(compute_adjacency(&volume, 2).unwrap().are_adjacent("A", "B"));
}

#[test]
fn three_region_chain() {
    let volume = line(1, vec![O, A, O, B, C, O]);
    let adjacency = compute_adjacency(&volume, 1).unwrap();

    assert_eq!(adjacency.neighbors("A").collect::<Vec<_>>(), ["B"]);
    assert_eq!(adjacency.neighbors("B").collect::<Vec<_>>(), ["A", "C"]);
    assert_eq!(adjacency.neighbors("C").collect::<Vec<_>>(), ["B"]);
    assert_eq!(adjacency.num_edges(), 2);
    super::assert_well_formed(&adjacency);
}

#[test]
fn search_past_the_boundary_keeps_the_neighbor() {
    let volume = line(2, vec![A, O, O]);
    let contacts = detect_contacts(&volume, 10);
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts.axis(2)[0].second, O);

    let adjacency = compute_adjacency(&volume, 10).unwrap();
    assert_eq!(adjacency.len(), 3);
    assert_eq!(adjacency.num_edges(), 0);
}

#[test]
fn shared_faces_collapse_into_one_pair() {
    // Two 4x4x4 blocks touching along a 4x4 face.
    let dims = [8, 4, 4];
    let cells = (0..128).map(|id| if id % 8 < 4 { A } else { B }).collect();
    let volume = LabelVolume::new(dims, cells, catalog()).unwrap();

    let contacts = detect_contacts(&volume, 2);
    assert_eq!(contacts.axis(0).len(), 16);
    assert!(contacts.axis(1).is_empty());
    assert!(contacts.axis(2).is_empty());

    let pairs = deduplicate(contacts.iter());
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].first(), RegionId(0));
    assert_eq!(pairs[0].second(), RegionId(1));

    let adjacency = compute_adjacency(&volume, 2).unwrap();
    assert_eq!(adjacency.edges(), [("A", "B")]);
    assert!(adjacency.get("C").unwrap().is_empty());
}

#[test]
fn unknown_region_is_reported() {
    let volume = line(0, vec![O, A, Cell::Region(RegionId(3)), O]);
    assert_eq!(
        compute_adjacency(&volume, 2).unwrap_err(),
        DataIntegrityError::UnknownRegion {
            id: 3,
            catalog_len: 3
        }
    );
}

#[test]
fn isolated_unknown_region_is_reported() {
    // The unknown region only touches ambient cells, so no contact pair
    // references it.
    let volume = line(0, vec![O, A, O, Cell::Region(RegionId(7)), O]);

    for depth in [0, 2] {
        assert_eq!(
            compute_adjacency(&volume, depth).unwrap_err(),
            DataIntegrityError::UnknownRegion {
                id: 7,
                catalog_len: 3
            }
        );
    }
}

#[test]
fn duplicate_catalog_labels_are_rejected() {
    let cells = vec![O, Cell::Region(RegionId(1)), Cell::Region(RegionId(2)), O];
    let catalog = vec!["A".to_string(), "A".to_string(), "B".to_string()];

    assert_eq!(
        LabelVolume::new([4, 1, 1], cells, catalog).unwrap_err(),
        AdjacencyError::Geometry(GeometryError::DuplicateLabel("A".to_string()))
    );
}
