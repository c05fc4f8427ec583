use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

const FIXTURE_GEOJSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": { "name": "Alpha" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,1.0],[0.0,0.0]]]
            }
        },
        {
            "type": "Feature",
            "properties": { "name": "Beta" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[2.0,0.0],[3.0,0.0],[3.0,1.0],[2.0,1.0],[2.0,0.0]]]
            }
        }
    ]
}"#;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("chromap").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chromap"));
}

#[test]
fn renders_local_geojson_end_to_end() {
    let dir = tempdir().unwrap();
    let geojson = dir.path().join("regions.geojson");
    let directory = dir.path().join("directory.json");
    let solution = dir.path().join("solution.json");
    let out = dir.path().join("map.svg");
    std::fs::write(&geojson, FIXTURE_GEOJSON).unwrap();
    std::fs::write(&directory, r#"{ "A": "Alpha", "B": "Beta" }"#).unwrap();
    std::fs::write(&solution, r#"{ "A": "R", "B": "G" }"#).unwrap();

    let mut cmd = Command::cargo_bin("chromap").unwrap();
    cmd.args([
        "render",
        "--geojson",
        geojson.to_str().unwrap(),
        "--name-property",
        "name",
        "--directory",
        directory.to_str().unwrap(),
        "--solution",
        solution.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--legend",
        "bottom",
    ]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Rendered 2 regions"));
    assert!(out.exists());
}

#[test]
fn unknown_solution_code_fails_before_rendering() {
    let dir = tempdir().unwrap();
    let geojson = dir.path().join("regions.geojson");
    let directory = dir.path().join("directory.json");
    let solution = dir.path().join("solution.json");
    let out = dir.path().join("map.svg");
    std::fs::write(&geojson, FIXTURE_GEOJSON).unwrap();
    std::fs::write(&directory, r#"{ "A": "Alpha", "B": "Beta" }"#).unwrap();
    std::fs::write(&solution, r#"{ "Z": "R" }"#).unwrap();

    let mut cmd = Command::cargo_bin("chromap").unwrap();
    cmd.args([
        "render",
        "--geojson",
        geojson.to_str().unwrap(),
        "--name-property",
        "name",
        "--directory",
        directory.to_str().unwrap(),
        "--solution",
        solution.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("absent from the region directory"));
    assert!(!out.exists(), "fatal errors must halt before any drawing");
}

#[test]
fn country_and_geojson_are_mutually_exclusive() {
    let mut cmd = Command::cargo_bin("chromap").unwrap();
    cmd.args([
        "render",
        "--country",
        "au",
        "--geojson",
        "regions.geojson",
        "--name-property",
        "name",
        "--directory",
        "directory.json",
        "--solution",
        "solution.json",
        "--out",
        "map.svg",
    ]);
    cmd.assert().failure();
}
