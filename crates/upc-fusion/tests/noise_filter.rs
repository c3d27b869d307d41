//! Noise filter behaviour on synthetic tiles.

use pretty_assertions::assert_eq;
use upc_config::FusionConfig;
use upc_fusion::{AhnTile, Fuser, FusionError, MemoryAhnReader, NoiseFilter, Point};

const TILE: &str = "2386_9702";
const NOISE: u16 = 99;

/// Flat ground at z = 0 over [0, 100] x [0, 100].
fn flat_reader() -> MemoryAhnReader {
    let axis: Vec<f64> = (0..=10).map(|i| f64::from(i) * 10.0).collect();
    MemoryAhnReader::new().with_tile(
        TILE,
        AhnTile {
            x: axis.clone(),
            y: axis,
            ground_surface: vec![0.0; 121],
        },
    )
}

/// `nx * ny` points spaced 0.1 m apart starting at `origin`.
fn patch(origin: Point, nx: u32, ny: u32) -> Vec<Point> {
    let mut points = Vec::new();
    for i in 0..nx {
        for j in 0..ny {
            points.push([
                origin[0] + f64::from(i) * 0.1,
                origin[1] + f64::from(j) * 0.1,
                origin[2],
            ]);
        }
    }
    points
}

fn run(filter: &impl Fuser, points: &[Point]) -> Vec<bool> {
    let mask = vec![true; points.len()];
    filter
        .label_mask(points, &[], &mask, TILE)
        .expect("filter should run")
}

#[test]
fn small_clusters_are_noise_large_ones_are_not() {
    let mut points = patch([10.0, 10.0, 1.0], 12, 10);
    points.extend(patch([90.0, 90.0, 1.0], 5, 1));

    let result = run(&NoiseFilter::new(NOISE, flat_reader()), &points);

    assert!(result[..120].iter().all(|&noise| !noise));
    assert!(result[120..].iter().all(|&noise| noise));
}

#[test]
fn points_below_ground_beyond_epsilon_are_noise() {
    let points = vec![
        [50.0, 50.0, 1.0],
        [50.0, 50.0, -0.1],
        [50.0, 50.0, -0.5],
        [20.0, 70.0, -3.0],
    ];
    let filter = NoiseFilter::new(NOISE, flat_reader()).with_min_component_size(1);

    assert_eq!(run(&filter, &points), vec![false, false, true, true]);
}

#[test]
fn epsilon_controls_tolerance() {
    let points = vec![[50.0, 50.0, -0.5]];
    let filter = NoiseFilter::new(NOISE, flat_reader())
        .with_min_component_size(1)
        .with_epsilon(1.0);

    assert_eq!(run(&filter, &points), vec![false]);
}

#[test]
fn points_outside_ahn_coverage_are_not_below_ground() {
    let points = vec![[150.0, 150.0, -50.0], [50.0, 50.0, -50.0]];
    let filter = NoiseFilter::new(NOISE, flat_reader()).with_min_component_size(1);

    assert_eq!(run(&filter, &points), vec![false, true]);
}

#[test]
fn pre_mask_limits_labelling() {
    let points = vec![[50.0, 50.0, -5.0], [60.0, 60.0, -5.0], [70.0, 70.0, 1.0]];
    let mask = vec![false, true, true];
    let filter = NoiseFilter::new(NOISE, flat_reader()).with_min_component_size(1);

    let result = filter.label_mask(&points, &[], &mask, TILE).unwrap();
    assert_eq!(result, vec![false, true, false]);
}

#[test]
fn empty_mask_labels_nothing_without_reading_tiles() {
    let points = vec![[50.0, 50.0, -5.0]];
    let filter = NoiseFilter::new(NOISE, MemoryAhnReader::new());

    let result = filter
        .label_mask(&points, &[], &[false], "unknown")
        .unwrap();
    assert_eq!(result, vec![false]);
}

#[test]
fn mask_length_must_match_points() {
    let filter = NoiseFilter::new(NOISE, flat_reader());
    let err = filter
        .label_mask(&[[0.0, 0.0, 0.0]], &[], &[true, true], TILE)
        .unwrap_err();
    assert!(matches!(
        err,
        FusionError::ShapeMismatch {
            expected: 1,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn labels_must_be_empty_or_match_points() {
    let filter = NoiseFilter::new(NOISE, flat_reader());
    let points = patch([50.0, 50.0, 0.0], 2, 1);

    let err = filter
        .label_mask(&points, &[0], &[true, true], TILE)
        .unwrap_err();
    assert!(matches!(
        err,
        FusionError::ShapeMismatch {
            what: "labels",
            expected: 2,
            actual: 1,
        }
    ));

    let result = filter
        .label_mask(&points, &[0, 0], &[true, true], TILE)
        .expect("matching labels are accepted");
    assert_eq!(result.len(), 2);
}

#[test]
fn unknown_tile_is_reported() {
    let filter = NoiseFilter::new(NOISE, flat_reader());
    let err = filter
        .label_mask(&[[0.0, 0.0, 0.0]], &[], &[true], "0000_0000")
        .unwrap_err();
    assert!(matches!(err, FusionError::TileNotFound(_)));
}

#[test]
fn config_parameters_are_validated() {
    let config = FusionConfig {
        octree_level: 0,
        ..FusionConfig::default()
    };
    let err = NoiseFilter::from_config(NOISE, flat_reader(), &config).unwrap_err();
    assert!(matches!(err, FusionError::Config(_)));
}

#[test]
fn configured_filter_reports_its_label() {
    let filter =
        NoiseFilter::from_config(NOISE, flat_reader(), &FusionConfig::default()).unwrap();
    assert_eq!(filter.label(), NOISE);
}
