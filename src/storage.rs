use crate::models::Solution;
use crate::registry::{LabelRegistry, RegionDirectory, parse_hex_color};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Load a solver solution: a JSON object of region code → symbolic label.
pub fn load_solution<P: AsRef<Path>>(path: P) -> Result<Solution> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let solution: Solution = serde_json::from_str(&body)
        .with_context(|| format!("parse solution from {}", path.display()))?;
    Ok(solution)
}

/// Save a solution as a pretty JSON object.
pub fn save_solution<P: AsRef<Path>>(solution: &Solution, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(solution)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Load a region directory: a JSON object of region code → canonical name.
pub fn load_directory<P: AsRef<Path>>(path: P) -> Result<RegionDirectory> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let entries: BTreeMap<String, String> = serde_json::from_str(&body)
        .with_context(|| format!("parse directory from {}", path.display()))?;
    Ok(RegionDirectory::new(entries)?)
}

/// On-disk label colours: symbolic labels plus the reserved `"unassigned"`
/// key, which overrides the default grey encoding and is not a label.
#[derive(Debug, Deserialize)]
struct LabelsFile {
    unassigned: Option<String>,
    #[serde(flatten)]
    labels: BTreeMap<String, String>,
}

/// Load a label registry: a JSON object of symbolic label → `#RRGGBB`.
pub fn load_labels<P: AsRef<Path>>(path: P) -> Result<LabelRegistry> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let raw: LabelsFile = serde_json::from_str(&body)
        .with_context(|| format!("parse labels from {}", path.display()))?;

    let unassigned = match raw.unassigned {
        Some(hex) => parse_hex_color(&hex)?,
        None => crate::datasets::UNASSIGNED_COLOR,
    };
    let mut entries = Vec::with_capacity(raw.labels.len());
    for (label, hex) in raw.labels {
        entries.push((label, parse_hex_color(&hex)?));
    }
    Ok(LabelRegistry::new(entries, unassigned)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn solution_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("solution.json");
        let mut solution = Solution::new();
        solution.insert("NSW".into(), "B".into());
        solution.insert("QLD".into(), "R".into());
        save_solution(&solution, &path).unwrap();
        assert_eq!(load_solution(&path).unwrap(), solution);
    }

    #[test]
    fn labels_file_with_unassigned_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("labels.json");
        std::fs::write(
            &path,
            r##"{ "R": "#FF0000", "G": "#00FF00", "unassigned": "#EEEEEE" }"##,
        )
        .unwrap();
        let registry = load_labels(&path).unwrap();
        assert!(registry.color_of("R").is_some());
        assert!(registry.color_of("unassigned").is_none());
        assert_eq!(
            registry.unassigned_color(),
            parse_hex_color("#EEEEEE").unwrap()
        );
    }

    #[test]
    fn malformed_solution_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("solution.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(load_solution(&path).is_err());
    }
}
