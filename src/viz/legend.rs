//! Legend layout and drawing: one colour swatch per symbolic label, plus the
//! reserved "Unassigned" entry.

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::text::estimate_text_width_px;
use super::types::LegendMode;

// Layout constants shared by the estimator and the renderers.
const FONT_PX: u32 = 14;
const TITLE_FONT_PX: u32 = 16;
const LINE_H: i32 = FONT_PX as i32 + 6;
const SWATCH: i32 = 12;
const SWATCH_TO_TEXT_GAP: i32 = 8;
const TRAILING_GAP: i32 = 18;
const PAD: i32 = 8;

fn swatch_block_width(label: &str) -> i32 {
    SWATCH + SWATCH_TO_TEXT_GAP + estimate_text_width_px(label, FONT_PX) as i32 + TRAILING_GAP
}

/// Estimate how tall a TOP/BOTTOM legend band must be to fit all items.
/// Mirrors the flow logic in [`draw_legend_panel`]; returns pixels.
pub fn estimate_band_height_px(labels: &[String], total_w: i32, has_title: bool) -> i32 {
    let usable_w = (total_w - 2 * PAD).max(SWATCH);
    let mut rows = 1;
    let mut x = 0;
    for label in labels {
        let block = swatch_block_width(label).min(usable_w);
        if x + block > usable_w && x > 0 {
            rows += 1;
            x = 0;
        }
        x += block;
    }
    let title_h = if has_title {
        TITLE_FONT_PX as i32 + 8
    } else {
        0
    };
    2 * PAD + title_h + rows * LINE_H
}

fn title_style() -> TextStyle<'static> {
    TextStyle::from((FontFamily::SansSerif, TITLE_FONT_PX as i32))
        .pos(Pos::new(HPos::Left, VPos::Top))
}

fn label_style() -> TextStyle<'static> {
    TextStyle::from((FontFamily::SansSerif, FONT_PX as i32))
        .pos(Pos::new(HPos::Left, VPos::Center))
}

fn draw_entry<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    x: i32,
    y_center: i32,
    label: &str,
    color: RGBColor,
) -> Result<()> {
    area.draw(&Rectangle::new(
        [
            (x, y_center - SWATCH / 2),
            (x + SWATCH, y_center + SWATCH / 2),
        ],
        color.filled(),
    ))
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    area.draw(&Rectangle::new(
        [
            (x, y_center - SWATCH / 2),
            (x + SWATCH, y_center + SWATCH / 2),
        ],
        BLACK.stroke_width(1),
    ))
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    area.draw(&Text::new(
        label.to_string(),
        (x + SWATCH + SWATCH_TO_TEXT_GAP, y_center),
        label_style(),
    ))
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Draw the legend into its own panel (Right: single column; Top/Bottom:
/// horizontal flow wrapping into rows).
pub fn draw_legend_panel<DB: DrawingBackend>(
    legend_area: &DrawingArea<DB, Shift>,
    items: &[(String, RGBColor)],
    title: &str, // pass "" to omit
    placement: LegendMode,
    background: RGBColor,
) -> Result<()> {
    legend_area
        .fill(&background)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (w_u32, _) = legend_area.dim_in_pixel();
    let w = w_u32 as i32;
    let has_title = !title.trim().is_empty();

    match placement {
        LegendMode::Right => {
            let mut y = if has_title {
                legend_area
                    .draw(&Text::new(title.to_string(), (PAD, PAD), title_style()))
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                PAD + TITLE_FONT_PX as i32 + 8
            } else {
                PAD
            };
            for (label, color) in items {
                draw_entry(legend_area, PAD, y + LINE_H / 2, label, *color)?;
                y += LINE_H;
            }
        }
        LegendMode::Top | LegendMode::Bottom => {
            let mut y = if has_title {
                legend_area
                    .draw(&Text::new(title.to_string(), (PAD, PAD), title_style()))
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                PAD + TITLE_FONT_PX as i32 + 8
            } else {
                PAD
            };
            let usable_w = (w - 2 * PAD).max(SWATCH);
            let mut x = 0;
            for (label, color) in items {
                let block = swatch_block_width(label).min(usable_w);
                if x + block > usable_w && x > 0 {
                    x = 0;
                    y += LINE_H;
                }
                draw_entry(legend_area, PAD + x, y + LINE_H / 2, label, *color)?;
                x += block;
            }
        }
        LegendMode::Inside => {
            // Inside placement is drawn over the map area, not in a panel.
        }
    }

    Ok(())
}

/// Draw the legend as a boxed overlay in the upper-right corner of the map.
pub fn draw_inside_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    items: &[(String, RGBColor)],
    title: &str,
) -> Result<()> {
    let (w_u32, _) = area.dim_in_pixel();
    let w = w_u32 as i32;
    let has_title = !title.trim().is_empty();

    let widest_item = items
        .iter()
        .map(|(label, _)| swatch_block_width(label))
        .max()
        .unwrap_or(SWATCH);
    let title_w = if has_title {
        estimate_text_width_px(title, TITLE_FONT_PX) as i32
    } else {
        0
    };
    let box_w = widest_item.max(title_w) + 2 * PAD;
    let title_h = if has_title {
        TITLE_FONT_PX as i32 + 8
    } else {
        0
    };
    let box_h = 2 * PAD + title_h + items.len() as i32 * LINE_H;

    let margin = 24;
    let x0 = (w - margin - box_w).max(0);
    let y0 = margin;

    area.draw(&Rectangle::new(
        [(x0, y0), (x0 + box_w, y0 + box_h)],
        WHITE.mix(0.85).filled(),
    ))
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    area.draw(&Rectangle::new(
        [(x0, y0), (x0 + box_w, y0 + box_h)],
        BLACK.stroke_width(1),
    ))
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let mut y = if has_title {
        area.draw(&Text::new(
            title.to_string(),
            (x0 + PAD, y0 + PAD),
            title_style(),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        y0 + PAD + title_h
    } else {
        y0 + PAD
    };
    for (label, color) in items {
        draw_entry(area, x0 + PAD, y + LINE_H / 2, label, *color)?;
        y += LINE_H;
    }

    Ok(())
}
