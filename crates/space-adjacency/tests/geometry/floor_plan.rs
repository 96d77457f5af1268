use super::{area, assert_well_formed, room, sorted};
use space_adjacency::query::ContainmentTest;
use space_adjacency::shape::{storeys, type_names, Region, RegionCategory};
use space_adjacency::voxelization::Cell;
use space_adjacency::{
    build_label_volume, build_label_volume_with, compute_adjacency, infer_adjacency,
    AdjacencyParameters,
};

/// Two storeys of offices separated by 0.2 thick walls and slabs.
///
/// The store room is 2 units away from the second office, and the corridor
/// is a neutral area along the first two offices.
fn building() -> Vec<Region> {
    vec![
        room("Office 1", [0.0, 0.0, 0.0], [4.0, 4.0, 3.0])
            .with_storey(0)
            .with_type_name("Office"),
        room("Office 2", [4.2, 0.0, 0.0], [8.0, 4.0, 3.0])
            .with_storey(0)
            .with_type_name("Office"),
        room("Store", [10.0, 0.0, 0.0], [12.0, 4.0, 3.0])
            .with_storey(0)
            .with_type_name("Storage"),
        room("Office 3", [0.0, 0.0, 3.2], [4.0, 4.0, 6.2]).with_storey(1),
        room("Office 4", [0.0, 6.5, 3.2], [4.0, 9.0, 6.2]).with_storey(1),
        area("Corridor", [0.0, 4.2, 0.0], [8.0, 6.0, 3.0]).with_storey(0),
    ]
}

#[test]
fn offices_through_walls_and_slabs() {
    let regions = building();
    let (grid, volume) = build_label_volume(&regions, 0.5).unwrap();
    assert_eq!(grid.dims(), [26, 20, 14]);
    assert_eq!(volume.catalog().len(), 5);

    let adjacency = compute_adjacency(&volume, 2).unwrap();
    assert_well_formed(&adjacency);
    assert_eq!(
        adjacency.labels().collect::<Vec<_>>(),
        ["Office 1", "Office 2", "Store", "Office 3", "Office 4"]
    );
    assert_eq!(
        adjacency.neighbors("Office 1").collect::<Vec<_>>(),
        ["Office 2", "Office 3"]
    );
    assert!(adjacency.get("Store").unwrap().is_empty());
    assert!(adjacency.get("Office 4").unwrap().is_empty());
    assert!(adjacency.get("Corridor").is_none());
    assert_eq!(adjacency.num_edges(), 2);

    // The wall between the two first offices isn't crossed without probing,
    // while a deeper search reaches the store room.
    let direct = compute_adjacency(&volume, 0).unwrap();
    assert!(!direct.are_adjacent("Office 1", "Office 2"));
    assert!(direct.are_adjacent("Office 1", "Office 3"));

    let deep = compute_adjacency(&volume, 3).unwrap();
    assert!(deep.are_adjacent("Office 2", "Store"));
}

#[test]
fn cells_stay_inside_their_region() {
    let regions = building();
    let (grid, volume) = build_label_volume(&regions, 0.5).unwrap();
    let [nx, ny, nz] = grid.dims();
    let census = volume.census();

    assert_eq!(census.regions, [245, 245, 140, 245, 175]);
    assert_eq!(census.unknown, 0);
    assert!(census.neutral > 0);

    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let cell = volume.get(i, j, k).unwrap();

                if grid.is_on_shell(i, j, k) {
                    assert_eq!(cell, Cell::Ambient);
                }

                if let Some(id) = cell.region() {
                    let label = volume.label(id).unwrap();
                    let region = regions.iter().find(|r| r.label() == label).unwrap();
                    let center = grid.cell_center(i, j, k);
                    assert!(region.mesh().local_aabb().contains_local_point(&center));
                }
            }
        }
    }
}

#[test]
fn containment_tests_agree() {
    let regions = building();
    let (_, winding) =
        build_label_volume_with(&regions, 0.5, ContainmentTest::WindingNumber).unwrap();
    let (_, parity) = build_label_volume_with(&regions, 0.5, ContainmentTest::RayParity).unwrap();
    assert_eq!(winding, parity);
}

#[test]
fn storey_filter_drops_vertical_neighbors() {
    let regions = building();
    let adjacency = infer_adjacency(&regions, &AdjacencyParameters::default()).unwrap();
    let storeys = storeys(&regions);
    assert!(!storeys.contains_key("Corridor"));

    let filtered = adjacency.filter_by_storey(&storeys).unwrap();
    assert_eq!(
        sorted(&filtered).keys().collect::<Vec<_>>(),
        ["Office 1", "Office 2"]
    );
    assert!(filtered.are_adjacent("Office 1", "Office 2"));
    assert!(!filtered.are_adjacent("Office 1", "Office 3"));
}

#[test]
fn attribute_maps() {
    let regions = building();
    let names = type_names(&regions);
    assert_eq!(names.len(), 3);
    assert_eq!(names["Store"], "Storage");

    let corridor = regions.iter().find(|r| r.label() == "Corridor").unwrap();
    assert_eq!(
        RegionCategory::from_type_name(corridor.type_name()),
        corridor.category()
    );
}

#[test]
fn excluding_a_region_removes_its_contacts() {
    let regions = building();
    let params = AdjacencyParameters::default().exclude("Office 3");
    let adjacency = infer_adjacency(&regions, &params).unwrap();

    assert!(adjacency.get("Office 3").is_none());
    assert_eq!(adjacency.len(), 4);
    assert_eq!(adjacency.edges(), [("Office 1", "Office 2")]);
}
