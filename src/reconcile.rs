//! Reconciliation stage: join geometry records to the solver's solution via
//! the region directory, producing the ordered render records that drive the
//! draw step.

use crate::error::PipelineError;
use crate::models::{RegionRecord, RenderRecord, Solution};
use crate::registry::{LabelRegistry, RegionDirectory};
use geo::Centroid;
use log::warn;

/// Produce one [`RenderRecord`] per geometry record, in source order.
///
/// Resolution per record:
/// - canonical name known to the directory and its code assigned in the
///   solution → the label's registry colour, text = region code;
/// - name known but code unassigned → unassigned colour, text = canonical
///   name (no short code context exists, so show the full name);
/// - name unknown to the directory (dependent territory, broader dataset
///   than the modelled domain) → treated exactly like unassigned, no error.
///
/// Validation up front, before any record is produced:
/// - every solution code must exist in the directory
///   ([`PipelineError::UnknownRegionCode`]);
/// - every solution label must exist in the registry
///   ([`PipelineError::UnknownLabel`]).
///
/// The annotation anchor is the area-weighted centroid of the combined
/// multi-polygon. A degenerate boundary yields `anchor: None` and a warning;
/// it never fails the reconciliation.
pub fn reconcile(
    regions: &[RegionRecord],
    directory: &RegionDirectory,
    registry: &LabelRegistry,
    solution: &Solution,
) -> Result<Vec<RenderRecord>, PipelineError> {
    for (code, label) in solution {
        if !directory.contains_code(code) {
            return Err(PipelineError::UnknownRegionCode(code.clone()));
        }
        if registry.color_of(label).is_none() {
            return Err(PipelineError::UnknownLabel {
                code: code.clone(),
                label: label.clone(),
            });
        }
    }

    let code_by_name = directory.invert();

    let mut out = Vec::with_capacity(regions.len());
    for region in regions {
        let (label, fill) = match code_by_name.get(region.name.as_str()) {
            Some(code) => match solution.get(*code) {
                // Validated above, so the colour lookup cannot miss.
                Some(sym) => (
                    code.to_string(),
                    registry
                        .color_of(sym)
                        .unwrap_or_else(|| registry.unassigned_color()),
                ),
                None => (region.name.clone(), registry.unassigned_color()),
            },
            None => (region.name.clone(), registry.unassigned_color()),
        };

        let anchor = region.boundary.centroid();
        if anchor.is_none() {
            warn!(
                "region {:?} has degenerate geometry; annotation will be skipped",
                region.name
            );
        }

        out.push(RenderRecord {
            label,
            fill,
            boundary: region.boundary.clone(),
            anchor,
        });
    }
    Ok(out)
}
