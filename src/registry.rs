//! Static configuration tables: the region directory and the label registry.
//!
//! Both are pure lookup tables checked for injectivity at construction time,
//! so a bad configuration is reported before any rendering proceeds.

use crate::error::PipelineError;
use plotters::style::RGBColor;
use std::collections::HashMap;

/// Parse a `#RRGGBB` hex literal (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Result<RGBColor, PipelineError> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PipelineError::InvalidColor(s.to_string()));
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
    Ok(RGBColor(byte(0), byte(2), byte(4)))
}

fn hex_of(c: RGBColor) -> String {
    format!("#{:02X}{:02X}{:02X}", c.0, c.1, c.2)
}

/// Mapping from short region code to canonical full region name, for one
/// specific geographic dataset.
///
/// Injective in both directions: no duplicate codes, and no two codes for
/// the same canonical name (the name → code inversion is the join key into
/// geometry data). Entry order is preserved but carries no meaning.
#[derive(Debug, Clone)]
pub struct RegionDirectory {
    entries: Vec<(String, String)>,
}

impl RegionDirectory {
    pub fn new<I, S>(entries: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(c, n)| (c.into(), n.into()))
            .collect();

        let mut by_code: HashMap<&str, ()> = HashMap::new();
        let mut by_name: HashMap<&str, &str> = HashMap::new();
        for (code, name) in &entries {
            if by_code.insert(code, ()).is_some() {
                return Err(PipelineError::DuplicateRegionCode(code.clone()));
            }
            if let Some(first) = by_name.insert(name, code) {
                return Err(PipelineError::DuplicateCanonicalName {
                    name: name.clone(),
                    first: first.to_string(),
                    second: code.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.iter().any(|(c, _)| c == code)
    }

    /// Canonical-name → code view used by the reconciliation join.
    ///
    /// Infallible: `new` already rejected duplicate codes and duplicate
    /// canonical names, so the inverted map loses no entries.
    pub fn invert(&self) -> HashMap<&str, &str> {
        self.entries
            .iter()
            .map(|(code, name)| (name.as_str(), code.as_str()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Mapping from symbolic label to its visual encoding, plus the reserved
/// "unassigned" encoding.
///
/// Entry order is stable and drives legend enumeration. Injective: duplicate
/// labels and duplicate colours (including a clash with the unassigned
/// colour) are configuration errors.
#[derive(Debug, Clone)]
pub struct LabelRegistry {
    entries: Vec<(String, RGBColor)>,
    unassigned: RGBColor,
}

impl LabelRegistry {
    pub fn new<I, S>(entries: I, unassigned: RGBColor) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = (S, RGBColor)>,
        S: Into<String>,
    {
        let entries: Vec<(String, RGBColor)> =
            entries.into_iter().map(|(l, c)| (l.into(), c)).collect();

        let mut seen_labels: HashMap<&str, ()> = HashMap::new();
        let mut seen_colors: HashMap<(u8, u8, u8), ()> = HashMap::new();
        seen_colors.insert((unassigned.0, unassigned.1, unassigned.2), ());
        for (label, color) in &entries {
            if seen_labels.insert(label, ()).is_some() {
                return Err(PipelineError::DuplicateLabel(label.clone()));
            }
            if seen_colors.insert((color.0, color.1, color.2), ()).is_some() {
                return Err(PipelineError::DuplicateColor(hex_of(*color)));
            }
        }
        Ok(Self {
            entries,
            unassigned,
        })
    }

    pub fn color_of(&self, label: &str) -> Option<RGBColor> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
    }

    pub fn unassigned_color(&self) -> RGBColor {
        self.unassigned
    }

    /// Labels and colours in stable registry order (legend order).
    pub fn entries(&self) -> &[(String, RGBColor)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_roundtrip() {
        assert_eq!(parse_hex_color("#FF6B6B").unwrap(), RGBColor(255, 107, 107));
        assert_eq!(parse_hex_color("45b7d1").unwrap(), RGBColor(69, 183, 209));
        assert!(parse_hex_color("#123").is_err());
        assert!(parse_hex_color("#GGGGGG").is_err());
    }

    #[test]
    fn directory_rejects_duplicate_code() {
        let err = RegionDirectory::new([("A", "Alpha"), ("A", "Beta")]).unwrap_err();
        assert_eq!(err, PipelineError::DuplicateRegionCode("A".into()));
    }

    #[test]
    fn directory_rejects_duplicate_canonical_name() {
        let err = RegionDirectory::new([("A", "Alpha"), ("B", "Alpha")]).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::DuplicateCanonicalName { ref name, .. } if name == "Alpha"
        ));
    }

    #[test]
    fn directory_inverts() {
        let dir = RegionDirectory::new([("A", "Alpha"), ("B", "Beta")]).unwrap();
        let inv = dir.invert();
        assert_eq!(inv.get("Alpha"), Some(&"A"));
        assert_eq!(inv.get("Beta"), Some(&"B"));
        assert!(dir.contains_code("A"));
        assert!(!dir.contains_code("Alpha"));
    }

    #[test]
    fn registry_rejects_duplicate_label_and_color() {
        let red = RGBColor(255, 0, 0);
        let blue = RGBColor(0, 0, 255);
        let grey = RGBColor(211, 211, 211);

        let err = LabelRegistry::new([("R", red), ("R", blue)], grey).unwrap_err();
        assert_eq!(err, PipelineError::DuplicateLabel("R".into()));

        let err = LabelRegistry::new([("R", red), ("B", red)], grey).unwrap_err();
        assert_eq!(err, PipelineError::DuplicateColor("#FF0000".into()));

        // The unassigned colour participates in the injectivity check.
        let err = LabelRegistry::new([("R", grey)], grey).unwrap_err();
        assert!(matches!(err, PipelineError::DuplicateColor(_)));
    }

    #[test]
    fn registry_lookup_and_order() {
        let reg = LabelRegistry::new(
            [("R", RGBColor(255, 0, 0)), ("G", RGBColor(0, 255, 0))],
            RGBColor(211, 211, 211),
        )
        .unwrap();
        assert_eq!(reg.color_of("R"), Some(RGBColor(255, 0, 0)));
        assert_eq!(reg.color_of("Y"), None);
        let labels: Vec<&str> = reg.entries().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["R", "G"]);
    }
}
