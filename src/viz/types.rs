//! Public types and constants for the map rendering module.

use plotters::style::RGBColor;

/// Legend placement options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendMode {
    /// Overlay legend inside the map area (upper-right corner).
    Inside,
    /// Separate, non-overlapping legend panel on the right side.
    Right,
    /// Separate, non-overlapping legend band at the top.
    Top,
    /// Separate, non-overlapping legend band at the bottom.
    Bottom,
}

/// Default legend placement: overlaid in a corner, the way thematic maps
/// usually carry their key. You can still override per call.
pub const DEFAULT_LEGEND_MODE: LegendMode = LegendMode::Inside;

/// Rendering configuration for one map.
///
/// Everything the draw step is allowed to vary lives here; the colour
/// assignment itself comes from the label registry, not the style.
#[derive(Debug, Clone)]
pub struct MapStyle {
    /// Output raster/vector size in pixels.
    pub width: u32,
    pub height: u32,
    /// Chart title; empty string omits the caption.
    pub title: String,
    /// Font size for region annotations, in pixels.
    pub font_px: u32,
    pub legend: LegendMode,
    /// Legend heading; empty string omits it.
    pub legend_title: String,
    /// Neutral outline drawn around every region boundary.
    pub stroke: RGBColor,
    pub stroke_width: u32,
    /// Opacity of the white box behind each region annotation, for
    /// legibility over arbitrary fill colours.
    pub annotation_box_alpha: f64,
    pub background: RGBColor,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Map Colouring".to_string(),
            font_px: 14,
            legend: DEFAULT_LEGEND_MODE,
            legend_title: "Colors".to_string(),
            stroke: RGBColor(0, 0, 0),
            stroke_width: 1,
            annotation_box_alpha: 0.6,
            background: RGBColor(255, 255, 255),
        }
    }
}
