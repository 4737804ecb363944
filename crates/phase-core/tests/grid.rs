// File: crates/phase-core/tests/grid.rs
// Purpose: Legend ordering, band grouping, shape checks and grid orientation.

use phase_core::grid::{band_ranges, band_rows};
use phase_core::{
    build_phase_diagram, build_phase_diagram_with, generate, parse_str, Dataset, Error, GridSpec, Legend,
    PhaseIndexGrid, PhaseSample, SENTINEL_PHASE,
};

fn sample(t: f64, p: f64, name: &str) -> PhaseSample {
    PhaseSample::new(t, p, name, -1.0)
}

fn two_by_three() -> Dataset {
    Dataset::new(vec![
        sample(0.0, 0.0, "A"),
        sample(0.0, 1.0, "A"),
        sample(0.0, 2.0, "B"),
        sample(10.0, 0.0, "A"),
        sample(10.0, 1.0, "B"),
        sample(10.0, 2.0, "B"),
    ])
}

#[test]
fn worked_example() {
    let data = two_by_three();
    let legend = Legend::from_dataset(&data);
    assert_eq!(legend.names(), ["A", "B"]);

    let (rows, temps, _) = band_rows(&data, &legend).expect("rows");
    assert_eq!(rows, vec![vec![0, 0, 1], vec![0, 1, 1]]);
    assert_eq!(temps, vec![0.0, 10.0]);

    let diagram = build_phase_diagram(&data).expect("diagram");
    assert_eq!(diagram.grid.height(), 3);
    assert_eq!(diagram.grid.width(), 2);
    assert_eq!(diagram.grid.to_rows(), vec![vec![1, 1], vec![0, 1], vec![0, 0]]);
    assert_eq!(diagram.grid.get(0, 1), Some(1));
    assert_eq!(diagram.grid.get(3, 0), None);
    assert_eq!(diagram.grid.row(1), Some(&[0, 1][..]));
    assert_eq!(diagram.grid.row(3), None);

    let b = diagram.bounds;
    assert_eq!((b.t_min, b.t_max, b.p_min, b.p_max), (0.0, 10.0, 0.0, 2.0));
}

#[test]
fn sentinel_goes_last() {
    let data = Dataset::new(vec![
        sample(0.0, 0.0, "zeta"),
        sample(0.0, 1.0, SENTINEL_PHASE),
        sample(0.0, 2.0, "alpha"),
    ]);
    let legend = Legend::from_dataset(&data);
    assert_eq!(legend.names(), ["alpha", "zeta", SENTINEL_PHASE]);
    assert!(legend.has_sentinel());
    assert_eq!(legend.index_of(SENTINEL_PHASE), Some(2));
}

#[test]
fn band_grouping_tolerates_drift() {
    let data = vec![
        sample(0.0, 0.0, "A"),
        sample(0.004, 1.0, "A"),
        sample(0.009, 2.0, "A"),
        sample(10.0, 0.0, "A"),
        sample(10.02, 1.0, "A"),
    ];
    let ranges = band_ranges(&data, 1e-2);
    assert_eq!(ranges, vec![0..3, 3..4, 4..5]);
}

#[test]
fn unequal_bands_are_a_shape_error() {
    let text = "0 0 A -1\n0 1 A -1\n0 2 B -1\n10 0 A -1\n10 1 B -1\n";
    let data = parse_str(text).expect("parse");
    match build_phase_diagram(&data) {
        Err(Error::Shape { band, expected, found, .. }) => {
            assert_eq!((band, expected, found), (1, 3, 2));
        }
        other => panic!("expected shape error, got {:?}", other),
    }
}

fn dataset_with_phases(n: usize) -> Dataset {
    (0..n).map(|i| sample(0.0, i as f64, &format!("p{:02}", i))).collect()
}

#[test]
fn ten_phases_fit_eleven_do_not() {
    let ok = build_phase_diagram(&dataset_with_phases(10)).expect("ten phases fit");
    assert_eq!(ok.legend.len(), 10);

    assert!(matches!(build_phase_diagram(&dataset_with_phases(11)), Err(Error::Config(_))));
    assert!(matches!(build_phase_diagram_with(&dataset_with_phases(3), 2), Err(Error::Config(_))));
}

#[test]
fn empty_dataset_is_a_data_error() {
    assert!(matches!(build_phase_diagram(&Dataset::default()), Err(Error::Data(_))));
}

#[test]
fn from_band_rows_rejects_empty() {
    assert!(PhaseIndexGrid::from_band_rows(&[], &[]).is_err());
}

#[test]
fn generated_dataset_round_trips_into_grid() {
    let spec = GridSpec::default();
    for n in [1usize, 4, 10] {
        let data = generate(n, &spec).expect("generate");
        let diagram = build_phase_diagram(&data).expect("rectangular grid");
        assert_eq!(diagram.grid.width(), 301);
        assert_eq!(diagram.grid.height(), 101);
        assert_eq!(diagram.legend.len(), n);
        assert_eq!(diagram.band_temperatures.len(), 301);

        // Legend order is alphabetical, so "test10" sorts before "test2".
        let first = diagram.legend.index_of("test1");
        let last = diagram.legend.index_of(&format!("test{}", n));

        // Last sample (highest T, highest P) sits top-right and belongs to the last phase.
        assert_eq!(diagram.grid.get(0, 300), last);
        // First sample (lowest T, lowest P) sits bottom-left in the first phase.
        assert_eq!(diagram.grid.get(100, 0), first);

        let b = diagram.bounds;
        assert_eq!((b.t_min, b.t_max, b.p_min, b.p_max), (0.0, 3000.0, 0.0, 100.0));
    }
}
