use geo::{MultiPolygon, Point};
use plotters::style::RGBColor;
use std::collections::BTreeMap;

/// Solver output: one entry per region the solver assigned.
///
/// Keys are short region codes (e.g., `"NSW"`), values are symbolic labels
/// from the configured alphabet (e.g., `"R"`). Codes absent from the map mean
/// "unassigned". Persisted as a plain JSON object of string → string.
pub type Solution = BTreeMap<String, String>;

/// One record from a geometry source: a region's canonical name (the join
/// key into the region directory) and its boundary.
///
/// Any additional dataset attributes are dropped at parse time. A region
/// with no usable areal geometry carries an empty `MultiPolygon`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    pub name: String,
    pub boundary: MultiPolygon<f64>,
}

/// Render-ready record derived from one [`RegionRecord`]: the text to draw,
/// the resolved fill colour, the boundary, and the annotation anchor.
///
/// Constructed fresh per render by [`crate::reconcile::reconcile`], never
/// mutated afterwards. `anchor` is `None` exactly when the boundary is
/// degenerate (empty geometry); such a region keeps its fill but gets no
/// text annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRecord {
    pub label: String,
    pub fill: RGBColor,
    pub boundary: MultiPolygon<f64>,
    pub anchor: Option<Point<f64>>,
}
