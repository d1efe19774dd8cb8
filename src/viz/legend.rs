//! Legend entries: deduplication by label, and drawing of external legend panels.

use ahash::AHashSet;
use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::types::LegendMode;
use super::util::{estimate_text_width_px, truncate_to_width};

/// Anything that can report its current legend as ordered (handle, label) pairs.
pub trait LegendSource {
    type Handle: Clone;
    type Error;

    fn legend_handles_labels(&self) -> std::result::Result<Vec<(Self::Handle, String)>, Self::Error>;
}

/// Remove duplicate legend labels from `axis`, keeping the first handle for each label.
///
/// Returns index-aligned handle and label vectors. Errors from the source are
/// passed through untouched.
pub fn dedup_legend<A>(axis: &A) -> std::result::Result<(Vec<A::Handle>, Vec<String>), A::Error>
where
    A: LegendSource + ?Sized,
{
    Ok(dedup_entries(axis.legend_handles_labels()?))
}

/// First-occurrence-wins deduplication over any sequence of (handle, label) pairs.
pub fn dedup_entries<H, I>(entries: I) -> (Vec<H>, Vec<String>)
where
    I: IntoIterator<Item = (H, String)>,
{
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut handles = Vec::new();
    let mut labels = Vec::new();
    for (h, l) in entries {
        if seen.insert(l.clone()) {
            handles.push(h);
            labels.push(l);
        }
    }
    (handles, labels)
}

// Layout constants shared by the estimator and the painter.
const FONT_PX: u32 = 14;
const LINE_H: i32 = FONT_PX as i32 + 4;
const PAD: i32 = 8;
const GLYPH_W: i32 = 20;
const GLYPH_GAP: i32 = 6;
const ITEM_GAP: i32 = 18;

fn item_width(label: &str) -> i32 {
    GLYPH_W + GLYPH_GAP + estimate_text_width_px(label, FONT_PX) as i32 + ITEM_GAP
}

/// Greedy left-to-right flow of legend labels into rows no wider than `usable_w`.
/// Returns index ranges into `labels`, one per row.
fn flow_rows(labels: &[String], start_x: i32, usable_w: i32) -> Vec<std::ops::Range<usize>> {
    let mut rows = Vec::new();
    let mut row_start = 0;
    let mut x = start_x;
    for (i, label) in labels.iter().enumerate() {
        let w = item_width(label);
        if x + w > usable_w && i > row_start {
            rows.push(row_start..i);
            row_start = i;
            x = start_x;
        }
        x += w;
    }
    if row_start < labels.len() {
        rows.push(row_start..labels.len());
    }
    rows
}

/// Height in pixels a Top/Bottom legend band needs for `labels` on a canvas `total_w` wide.
pub fn estimate_band_height_px(labels: &[String], start_x: i32, total_w: i32) -> i32 {
    let rows = flow_rows(labels, start_x, total_w - PAD).len().max(1) as i32;
    2 * PAD + rows * LINE_H
}

/// Draw an external legend panel.
///
/// `Right` lists entries in one column, truncating labels that do not fit.
/// `Top`/`Bottom` flow entries into rows starting at the plot's x-axis origin.
/// `Inside` is drawn by the chart itself and is a no-op here.
pub fn draw_legend_panel<DB: DrawingBackend>(
    legend_area: &DrawingArea<DB, Shift>,
    items: &[(String, RGBAColor)],
    placement: LegendMode,
    axis_x_start_px: i32,
) -> Result<()> {
    legend_area.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let (w_u32, _) = legend_area.dim_in_pixel();
    let w = w_u32 as i32;
    let label_style: TextStyle =
        TextStyle::from((FontFamily::SansSerif, FONT_PX)).pos(Pos::new(HPos::Left, VPos::Center));

    let draw_item = |x: i32, y_center: i32, label: &str, color: &RGBAColor| -> Result<()> {
        let stroke = ShapeStyle {
            color: *color,
            filled: false,
            stroke_width: 2,
        };
        legend_area
            .draw(&PathElement::new(
                vec![(x, y_center), (x + GLYPH_W, y_center)],
                stroke,
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        legend_area
            .draw(&Text::new(
                label.to_string(),
                (x + GLYPH_W + GLYPH_GAP, y_center),
                label_style.clone(),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(())
    };

    match placement {
        LegendMode::Right => {
            let max_text_w = (w - PAD * 2 - GLYPH_W - GLYPH_GAP).max(24) as u32;
            let mut y = PAD + LINE_H / 2 + 20;
            for (label, color) in items {
                let shown = truncate_to_width(label, FONT_PX, max_text_w);
                draw_item(PAD, y, &shown, color)?;
                y += LINE_H;
            }
        }
        LegendMode::Top | LegendMode::Bottom => {
            let labels: Vec<String> = items.iter().map(|(l, _)| l.clone()).collect();
            let mut y = PAD + LINE_H / 2;
            for row in flow_rows(&labels, axis_x_start_px, w - PAD) {
                let mut x = axis_x_start_px;
                for (label, color) in &items[row] {
                    draw_item(x, y, label, color)?;
                    x += item_width(label);
                }
                y += LINE_H;
            }
        }
        LegendMode::Inside => {}
    }

    Ok(())
}
