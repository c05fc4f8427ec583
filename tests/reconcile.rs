use chromap::error::PipelineError;
use chromap::models::{RegionRecord, Solution};
use chromap::reconcile::reconcile;
use chromap::registry::{LabelRegistry, RegionDirectory};
use geo::{LineString, MultiPolygon, Point, Polygon};
use plotters::style::RGBColor;

const RED: RGBColor = RGBColor(255, 0, 0);
const GREY: RGBColor = RGBColor(211, 211, 211);

fn unit_square(x0: f64, y0: f64) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![
            (x0, y0),
            (x0 + 1.0, y0),
            (x0 + 1.0, y0 + 1.0),
            (x0, y0 + 1.0),
            (x0, y0),
        ]),
        vec![],
    )
}

fn region(name: &str, x0: f64) -> RegionRecord {
    RegionRecord {
        name: name.to_string(),
        boundary: MultiPolygon::new(vec![unit_square(x0, 0.0)]),
    }
}

fn simple_directory() -> RegionDirectory {
    RegionDirectory::new([("A", "Alpha"), ("B", "Beta")]).unwrap()
}

fn red_registry() -> LabelRegistry {
    LabelRegistry::new([("R", RED)], GREY).unwrap()
}

#[test]
fn one_render_record_per_geometry_record() {
    let regions = vec![region("Alpha", 0.0), region("Beta", 2.0)];
    let directory = simple_directory();
    let registry = red_registry();

    for solution in [Solution::new(), Solution::from([("A".into(), "R".into())])] {
        let records = reconcile(&regions, &directory, &registry, &solution).unwrap();
        assert_eq!(records.len(), regions.len());
    }
}

#[test]
fn solved_and_unsolved_regions_resolve_as_specified() {
    // Directory {"A":"Alpha","B":"Beta"}, registry {"R": #FF0000},
    // solution {"A":"R"}: Alpha gets red + code label, Beta falls back to
    // grey + canonical-name label.
    let regions = vec![region("Alpha", 0.0), region("Beta", 2.0)];
    let solution = Solution::from([("A".into(), "R".into())]);
    let records = reconcile(&regions, &simple_directory(), &red_registry(), &solution).unwrap();

    assert_eq!(records[0].label, "A");
    assert_eq!(records[0].fill, RED);
    assert_eq!(records[1].label, "Beta");
    assert_eq!(records[1].fill, GREY);
}

#[test]
fn geometry_unknown_to_the_directory_is_unassigned_not_an_error() {
    let regions = vec![region("Alpha", 0.0), region("Gamma", 2.0)];
    let solution = Solution::from([("A".into(), "R".into())]);
    let records = reconcile(&regions, &simple_directory(), &red_registry(), &solution).unwrap();

    assert_eq!(records[1].label, "Gamma");
    assert_eq!(records[1].fill, GREY);
}

#[test]
fn empty_solution_leaves_every_region_unassigned() {
    let regions = vec![region("Alpha", 0.0), region("Beta", 2.0)];
    let records = reconcile(
        &regions,
        &simple_directory(),
        &red_registry(),
        &Solution::new(),
    )
    .unwrap();
    assert!(records.iter().all(|r| r.fill == GREY));
    // Fallback labels are canonical names.
    assert_eq!(records[0].label, "Alpha");
    assert_eq!(records[1].label, "Beta");
}

#[test]
fn unknown_solution_code_is_rejected_before_any_record() {
    let regions = vec![region("Alpha", 0.0)];
    let solution = Solution::from([("Z".into(), "R".into())]);
    let err = reconcile(&regions, &simple_directory(), &red_registry(), &solution).unwrap_err();
    assert_eq!(err, PipelineError::UnknownRegionCode("Z".into()));
}

#[test]
fn unknown_symbolic_label_is_rejected_before_any_record() {
    let regions = vec![region("Alpha", 0.0)];
    let solution = Solution::from([("A".into(), "Purple".into())]);
    let err = reconcile(&regions, &simple_directory(), &red_registry(), &solution).unwrap_err();
    assert!(matches!(err, PipelineError::UnknownLabel { .. }));
}

#[test]
fn duplicate_canonical_name_is_a_directory_error() {
    let err = RegionDirectory::new([("A", "Alpha"), ("B", "Alpha")]).unwrap_err();
    assert!(matches!(err, PipelineError::DuplicateCanonicalName { .. }));
}

#[test]
fn solution_entry_without_geometry_is_ignored() {
    // "B" is a valid directory code but no Beta geometry exists; geometry
    // drives iteration, so the entry simply has no visual effect.
    let regions = vec![region("Alpha", 0.0)];
    let solution = Solution::from([("B".into(), "R".into())]);
    let records = reconcile(&regions, &simple_directory(), &red_registry(), &solution).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].label, "Alpha");
    assert_eq!(records[0].fill, GREY);
}

#[test]
fn reconciliation_is_deterministic_and_order_preserving() {
    let regions = vec![
        region("Beta", 2.0),
        region("Alpha", 0.0),
        region("Gamma", 4.0),
    ];
    let solution = Solution::from([("A".into(), "R".into())]);
    let first = reconcile(&regions, &simple_directory(), &red_registry(), &solution).unwrap();
    let second = reconcile(&regions, &simple_directory(), &red_registry(), &solution).unwrap();
    assert_eq!(first, second);
    let labels: Vec<&str> = first.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["Beta", "A", "Gamma"]);
}

#[test]
fn anchor_is_the_combined_centroid_of_multi_part_boundaries() {
    // Two equal-area squares centred at x = 0.5 and x = 4.5: the combined
    // area-weighted centroid sits at x = 2.5, not at either part.
    let regions = vec![RegionRecord {
        name: "Alpha".to_string(),
        boundary: MultiPolygon::new(vec![unit_square(0.0, 0.0), unit_square(4.0, 0.0)]),
    }];
    let records = reconcile(
        &regions,
        &simple_directory(),
        &red_registry(),
        &Solution::new(),
    )
    .unwrap();
    let anchor = records[0].anchor.unwrap();
    assert!((anchor.x() - 2.5).abs() < 1e-9);
    assert!((anchor.y() - 0.5).abs() < 1e-9);
    let _: Point<f64> = anchor;
}

#[test]
fn degenerate_geometry_keeps_its_record_but_loses_its_anchor() {
    let regions = vec![
        RegionRecord {
            name: "Alpha".to_string(),
            boundary: MultiPolygon::new(vec![]),
        },
        region("Beta", 2.0),
    ];
    let records = reconcile(
        &regions,
        &simple_directory(),
        &red_registry(),
        &Solution::new(),
    )
    .unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].anchor.is_none());
    assert!(records[1].anchor.is_some());
}
