//! Utility functions for visualization: axis bounds, tick formatting, text measurement.

use super::axis::Axis;

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Truncate to fit `max_px`, ending with a single ellipsis when shortened.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out: String = text.chars().collect();
    while !out.is_empty() {
        out.pop();
        let candidate = format!("{out}…");
        if estimate_text_width_px(&candidate, font_px) <= max_px {
            return candidate;
        }
    }
    out
}

/// Axis-aligned data extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// Extent of all finite points on the axis, padded by 5% per side.
/// Returns `None` when the axis has no finite point.
pub fn data_bounds(axis: &Axis) -> Option<Bounds> {
    let mut pts = axis
        .series()
        .iter()
        .flat_map(|s| s.points.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite());
    let &(x0, y0) = pts.next()?;
    let (mut xmin, mut xmax, mut ymin, mut ymax) = (x0, x0, y0, y0);
    for &(x, y) in pts {
        xmin = xmin.min(x);
        xmax = xmax.max(x);
        ymin = ymin.min(y);
        ymax = ymax.max(y);
    }
    Some(Bounds {
        x: padded(xmin, xmax),
        y: padded(ymin, ymax),
    })
}

fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo - 0.05 * span, hi + 0.05 * span)
    }
}

/// Decimal places for tick labels over a range of width `span`
/// (rates are often ~1e-3, fractions 0..1, temperatures in the hundreds).
pub fn tick_precision(span: f64) -> usize {
    if !span.is_finite() || span <= 0.0 {
        return 2;
    }
    let p = 2 - span.log10().floor() as i32;
    p.clamp(0, 6) as usize
}

/// Split a series into maximal runs of finite points; plotting across a
/// non-finite gap would draw a misleading segment.
pub fn finite_runs(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut cur = Vec::new();
    for &(x, y) in points {
        if x.is_finite() && y.is_finite() {
            cur.push((x, y));
        } else if !cur.is_empty() {
            runs.push(std::mem::take(&mut cur));
        }
    }
    if !cur.is_empty() {
        runs.push(cur);
    }
    runs
}

/// Width of the left label area: widest formatted Y tick plus room for the axis title.
pub fn compute_left_label_area_px(ymin: f64, ymax: f64, ticks: usize, font_px: u32) -> u32 {
    let prec = tick_precision(ymax - ymin);
    let mut max_px = 0u32;
    for i in 0..=ticks {
        let t = if ticks == 0 { 0.0 } else { i as f64 / ticks as f64 };
        let v = ymin + (ymax - ymin) * t;
        max_px = max_px.max(estimate_text_width_px(&format!("{:.*}", prec, v), font_px));
    }
    max_px.saturating_add(34).clamp(56, 160)
}
