use super::{assert_well_formed, room, sorted};
use space_adjacency::adjacency::{deduplicate, detect_contacts};
use space_adjacency::shape::Region;
use space_adjacency::{build_label_volume, compute_adjacency, infer_adjacency, AdjacencyParameters};

/// A 3x3 grid of rooms separated by 0.2 thick walls.
fn block() -> Vec<Region> {
    let mut regions = Vec::new();

    for row in 0..3 {
        for col in 0..3 {
            let x = col as f64 * 3.2;
            let y = row as f64 * 3.2;
            regions.push(room(
                &format!("R{row}{col}"),
                [x, y, 0.0],
                [x + 3.0, y + 3.0, 2.7],
            ));
        }
    }

    regions
}

fn shuffle<T>(rng: &mut oorandom::Rand32, elements: &mut [T]) {
    for i in (1..elements.len()).rev() {
        let j = rng.rand_range(0..(i as u32 + 1)) as usize;
        elements.swap(i, j);
    }
}

#[test]
fn input_order_does_not_matter() {
    let mut regions = block();
    let params = AdjacencyParameters::default();
    let reference = sorted(&infer_adjacency(&regions, &params).unwrap());
    assert_eq!(reference.len(), 9);
    assert_eq!(reference.values().map(|n| n.len()).sum::<usize>(), 24);
    assert_eq!(
        reference["R11"].iter().collect::<Vec<_>>(),
        ["R01", "R10", "R12", "R21"]
    );
    assert!(!reference["R00"].contains("R11"));

    let mut rng = oorandom::Rand32::new(42);
    for _ in 0..5 {
        shuffle(&mut rng, &mut regions);
        let adjacency = infer_adjacency(&regions, &params).unwrap();
        assert_well_formed(&adjacency);
        assert_eq!(sorted(&adjacency), reference);
    }
}

#[test]
fn candidate_order_does_not_matter() {
    let regions = block();
    let (_, volume) = build_label_volume(&regions, 0.5).unwrap();
    let contacts = detect_contacts(&volume, 2);
    let reference = deduplicate(contacts.iter());
    assert_eq!(reference.len(), 12);

    let mut candidates: Vec<_> = contacts.iter().copied().collect();
    let mut rng = oorandom::Rand32::new(7);
    for _ in 0..5 {
        shuffle(&mut rng, &mut candidates);
        assert_eq!(deduplicate(&candidates), reference);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let regions = block();
    let (grid1, volume1) = build_label_volume(&regions, 0.5).unwrap();
    let (grid2, volume2) = build_label_volume(&regions, 0.5).unwrap();
    assert_eq!(grid1, grid2);
    assert_eq!(volume1, volume2);
    assert_eq!(
        compute_adjacency(&volume1, 2).unwrap(),
        compute_adjacency(&volume2, 2).unwrap()
    );
}
