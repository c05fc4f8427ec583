//! Map rendering: draw reconciled region records to **SVG** or **PNG**.
//!
//! - Filled region boundaries with a neutral outline
//! - Bold, centered region annotations over a semi-opaque backing box
//! - Legend with one swatch per symbolic label plus "Unassigned"
//! - Legend placement: `Inside`, `Right`, `Top`, `Bottom`
//! - Title, no coordinate axes (thematic maps are not measured against axes)

pub mod legend;
pub mod text;
pub mod types;

// Re-export types for public API
pub use types::{DEFAULT_LEGEND_MODE, LegendMode, MapStyle};

use crate::models::RenderRecord;
use crate::registry::LabelRegistry;
use anyhow::{Result, anyhow};
use geo::BoundingRect;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontFamily, FontStyle};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use legend::{draw_inside_legend, draw_legend_panel, estimate_band_height_px};
use text::estimate_text_width_px;

/// One-time registration of bundled fonts for the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Bold,
            include_bytes!("../../assets/DejaVuSans-Bold.ttf"),
        );
    });
}

/// Render reconciled records to `out_path` (`.svg` for vector output, any
/// other extension goes through the bitmap backend).
///
/// The registry supplies the legend entries; the records supply everything
/// drawn on the map itself. Errors out when there is nothing to draw.
pub fn render_map<P: AsRef<Path>>(
    records: &[RenderRecord],
    registry: &LabelRegistry,
    style: &MapStyle,
    out_path: P,
) -> Result<()> {
    if records.is_empty() {
        return Err(anyhow!("no regions to render"));
    }
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    // Overall extent of the drawable geometry.
    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    for record in records {
        if let Some(rect) = record.boundary.bounding_rect() {
            let (min_x, min_y, max_x, max_y) =
                (rect.min().x, rect.min().y, rect.max().x, rect.max().y);
            bounds = Some(match bounds {
                None => (min_x, min_y, max_x, max_y),
                Some((x0, y0, x1, y1)) => (
                    x0.min(min_x),
                    y0.min(min_y),
                    x1.max(max_x),
                    y1.max(max_y),
                ),
            });
        }
    }
    let (mut min_x, mut min_y, mut max_x, mut max_y) =
        bounds.ok_or_else(|| anyhow!("no drawable geometry in any region"))?;

    // Pad the extent so strokes at the edge are not clipped.
    let pad_x = ((max_x - min_x) * 0.02).max(f64::EPSILON);
    let pad_y = ((max_y - min_y) * 0.02).max(f64::EPSILON);
    min_x -= pad_x;
    max_x += pad_x;
    min_y -= pad_y;
    max_y += pad_y;

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (style.width, style.height))
            .into_drawing_area();
        draw_map(root, records, registry, style, (min_x, max_x), (min_y, max_y))?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (style.width, style.height))
            .into_drawing_area();
        draw_map(root, records, registry, style, (min_x, max_x), (min_y, max_y))?;
    }
    Ok(())
}

fn draw_map<DB>(
    root: DrawingArea<DB, Shift>,
    records: &[RenderRecord],
    registry: &LabelRegistry,
    style: &MapStyle,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<()>
where
    DB: DrawingBackend,
{
    // ----------------------------
    // 1) Legend items & drawing areas
    // ----------------------------
    let mut legend_items: Vec<(String, RGBColor)> = registry
        .entries()
        .iter()
        .map(|(label, color)| (label.clone(), *color))
        .collect();
    legend_items.push(("Unassigned".to_string(), registry.unassigned_color()));

    let (_, root_h_u32) = root.dim_in_pixel();
    let root_h = root_h_u32 as i32;
    let has_legend_title = !style.legend_title.trim().is_empty();
    let legend_labels: Vec<String> = legend_items.iter().map(|(l, _)| l.clone()).collect();

    let (map_area, legend_area_opt): (DrawingArea<DB, Shift>, Option<DrawingArea<DB, Shift>>) =
        match style.legend {
            LegendMode::Right => {
                let (map, legend) = root.split_horizontally((85).percent_width());
                (map, Some(legend))
            }
            LegendMode::Top => {
                let h = estimate_band_height_px(
                    &legend_labels,
                    style.width as i32,
                    has_legend_title,
                )
                .max(40);
                let (legend, map) = root.split_vertically(h);
                (map, Some(legend))
            }
            LegendMode::Bottom => {
                let h = estimate_band_height_px(
                    &legend_labels,
                    style.width as i32,
                    has_legend_title,
                )
                .max(40);
                // keep at least 40px for the map area
                let (map, legend) = root.split_vertically((root_h - h).max(40));
                (map, Some(legend))
            }
            LegendMode::Inside => (root, None),
        };

    map_area
        .fill(&style.background)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if let Some(ref legend_area) = legend_area_opt {
        legend_area
            .fill(&style.background)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    // ----------------------------
    // 2) Build chart: no mesh, no axes
    // ----------------------------
    let mut builder = ChartBuilder::on(&map_area);
    builder.margin(16u32);
    let title = style.title.trim();
    if !title.is_empty() {
        builder.caption(title, (FontFamily::SansSerif, 24, FontStyle::Bold));
    }
    let mut chart = builder
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // ----------------------------
    // 3) Filled boundaries with neutral outline
    // ----------------------------
    let stroke = ShapeStyle {
        color: style.stroke.to_rgba(),
        filled: false,
        stroke_width: style.stroke_width,
    };
    for record in records {
        for polygon in &record.boundary.0 {
            let exterior: Vec<(f64, f64)> =
                polygon.exterior().coords().map(|c| (c.x, c.y)).collect();
            if exterior.is_empty() {
                continue;
            }
            chart
                .draw_series(std::iter::once(Polygon::new(
                    exterior.clone(),
                    record.fill.filled(),
                )))
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            chart
                .draw_series(std::iter::once(PathElement::new(exterior, stroke)))
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            for interior in polygon.interiors() {
                let ring: Vec<(f64, f64)> = interior.coords().map(|c| (c.x, c.y)).collect();
                chart
                    .draw_series(std::iter::once(PathElement::new(ring, stroke)))
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            }
        }
    }

    // ----------------------------
    // 4) Region annotations (skipped for degenerate geometry)
    // ----------------------------
    let annotation_style =
        TextStyle::from((FontFamily::SansSerif, style.font_px as i32, FontStyle::Bold))
            .pos(Pos::new(HPos::Center, VPos::Center));
    for record in records {
        let Some(anchor) = record.anchor else {
            continue;
        };
        let text_w = estimate_text_width_px(&record.label, style.font_px) as i32;
        let half_w = text_w / 2 + 4;
        let half_h = style.font_px as i32 / 2 + 3;
        let element = EmptyElement::at((anchor.x(), anchor.y()))
            + Rectangle::new(
                [(-half_w, -half_h), (half_w, half_h)],
                WHITE.mix(style.annotation_box_alpha).filled(),
            )
            + Text::new(record.label.clone(), (0, 0), annotation_style.clone());
        chart
            .plotting_area()
            .draw(&element)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    // ----------------------------
    // 5) Legend
    // ----------------------------
    if let Some(ref legend_area) = legend_area_opt {
        draw_legend_panel(
            legend_area,
            &legend_items,
            &style.legend_title,
            style.legend,
            style.background,
        )?;
    } else {
        draw_inside_legend(&map_area, &legend_items, &style.legend_title)?;
    }

    // ----------------------------
    // 6) Present
    // ----------------------------
    map_area
        .present()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if let Some(ref legend_area) = legend_area_opt {
        legend_area
            .present()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}
