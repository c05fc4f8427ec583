//! Live-network tests, opt-in: `cargo test --features online`.

#![cfg(feature = "online")]

use chromap::reconcile::reconcile;
use chromap::{Client, Solution, datasets};

#[test]
fn fetch_australia_and_reconcile() {
    let (dataset, directory) = datasets::australia();
    let regions = Client::default().fetch_regions(&dataset).unwrap();
    assert!(regions.len() >= 7, "expected at least the 7 modelled regions");
    assert!(regions.iter().any(|r| r.name == "Queensland"));

    let registry = datasets::default_palette().unwrap();
    let solution = Solution::from([
        ("NSW".into(), "B".into()),
        ("QLD".into(), "R".into()),
        ("SA".into(), "G".into()),
    ]);
    let records = reconcile(&regions, &directory, &registry, &solution).unwrap();
    assert_eq!(records.len(), regions.len());
}
