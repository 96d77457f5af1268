use crate::adjacency::{deduplicate, detect_contacts, AdjacencyMap};
use crate::error::{AdjacencyError, ConfigurationError, DataIntegrityError, GeometryError};
use crate::math::Real;
use crate::parameters::{validate_voxel_size, AdjacencyParameters};
use crate::query::ContainmentTest;
use crate::shape::Region;
use crate::utils::HashSet;
use crate::voxelization::{Grid, LabelVolume, RegionClassifier};

/// Samples the regions on a grid of cells of approximately `voxel_size`.
///
/// Neutral areas are classified first, then normal regions in input order, so
/// a normal region overlapping another one takes the shared cells. The
/// catalog of the resulting volume lists the labels of the normal regions in
/// input order.
pub fn build_label_volume(
    regions: &[Region],
    voxel_size: Real,
) -> Result<(Grid, LabelVolume), AdjacencyError> {
    build_label_volume_with(regions, voxel_size, ContainmentTest::default())
}

/// Same as [`build_label_volume`] but with an explicit point-in-solid test.
pub fn build_label_volume_with(
    regions: &[Region],
    voxel_size: Real,
    test: ContainmentTest,
) -> Result<(Grid, LabelVolume), AdjacencyError> {
    let regions: Vec<_> = regions.iter().collect();
    build(&regions, voxel_size, test)
}

fn build(
    regions: &[&Region],
    voxel_size: Real,
    test: ContainmentTest,
) -> Result<(Grid, LabelVolume), AdjacencyError> {
    if regions.is_empty() {
        return Err(ConfigurationError::NoRegions.into());
    }

    validate_voxel_size(voxel_size)?;

    let mut labels = HashSet::default();
    for region in regions {
        if !labels.insert(region.label()) {
            return Err(GeometryError::DuplicateLabel(region.label().to_string()).into());
        }
    }

    let (neutral, normal): (Vec<&Region>, Vec<&Region>) =
        regions.iter().copied().partition(|region| region.is_neutral());

    let grid = Grid::covering(
        regions.iter().copied().map(|region| region.mesh().local_aabb()),
        voxel_size,
    )?;
    log::debug!(
        "Sampling {} regions ({} neutral) on a {:?} grid.",
        regions.len(),
        neutral.len(),
        grid.dims()
    );

    let classifier = RegionClassifier::new(
        neutral.iter().copied().map(Region::mesh),
        normal.iter().copied().map(Region::mesh),
        test,
    );
    let cells = classifier.classify(&grid);
    let catalog = normal
        .iter()
        .map(|region| region.label().to_string())
        .collect();
    let volume = LabelVolume::new(grid.dims(), cells, catalog)?;

    let census = volume.census();
    log::debug!(
        "Classified {} cells: {} ambient, {} neutral, {} in regions.",
        volume.len(),
        census.ambient,
        census.neutral,
        census.regions.iter().sum::<usize>()
    );

    for (region, count) in normal.iter().zip(&census.regions) {
        if *count == 0 {
            log::warn!(
                "The region `{}` contains no grid sample and can't be adjacent to anything.",
                region.label()
            );
        }
    }

    Ok((grid, volume))
}

/// Computes the adjacency relation between the regions of `volume`.
///
/// `search_depth` is the number of extra cells probed past an ambient or
/// neutral neighbor (see [`detect_contacts`]). Fails if a cell references a
/// region missing from the catalog of `volume`, even if that region touches
/// no other region.
pub fn compute_adjacency(
    volume: &LabelVolume,
    search_depth: usize,
) -> Result<AdjacencyMap, DataIntegrityError> {
    if let Some(id) = volume.first_unknown_region() {
        return Err(DataIntegrityError::UnknownRegion {
            id: id.0,
            catalog_len: volume.catalog().len(),
        });
    }

    let contacts = detect_contacts(volume, search_depth);
    let pairs = deduplicate(contacts.iter());
    log::debug!(
        "{} contact candidates collapsed into {} adjacent pairs.",
        contacts.len(),
        pairs.len()
    );

    AdjacencyMap::materialize(&pairs, volume.catalog())
}

/// Runs the whole pipeline on `regions`.
///
/// Regions listed in [`AdjacencyParameters::exclude_labels`] are ignored.
pub fn infer_adjacency(
    regions: &[Region],
    params: &AdjacencyParameters,
) -> Result<AdjacencyMap, AdjacencyError> {
    params.validate()?;

    let kept: Vec<_> = regions
        .iter()
        .filter(|region| !params.is_excluded(region.label()))
        .collect();

    if kept.len() != regions.len() {
        log::debug!("Ignoring {} excluded regions.", regions.len() - kept.len());
    }

    let (_, volume) = build(&kept, params.voxel_size, params.containment)?;
    Ok(compute_adjacency(&volume, params.search_depth)?)
}
