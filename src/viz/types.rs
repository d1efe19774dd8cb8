//! Public types and constants for the visualization module.

/// Legend placement options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendMode {
    /// Overlay legend inside the plotting area (may overlap data).
    Inside,
    /// Separate, non-overlapping legend panel on the right side.
    Right,
    /// Separate, non-overlapping legend band at the top.
    Top,
    /// Separate, non-overlapping legend band at the bottom.
    Bottom,
}

/// Thermograms usually carry two or three legend entries; a side panel keeps
/// them clear of the steep part of the decay curve.
pub const DEFAULT_LEGEND_MODE: LegendMode = LegendMode::Right;

/// Stroke style of one plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    pub rgb: (u8, u8, u8),
    pub stroke_width: u32,
}

impl SeriesStyle {
    pub const fn new(rgb: (u8, u8, u8), stroke_width: u32) -> Self {
        Self { rgb, stroke_width }
    }

    /// Observed thermogram: solid black.
    pub const OBSERVED: SeriesStyle = SeriesStyle::new((0, 0, 0), 2);
    /// Modeled thermogram: thin red.
    pub const MODELED: SeriesStyle = SeriesStyle::new((204, 0, 0), 1);
}

/// Image size, title and legend placement for [`super::render_axis`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Empty string omits the caption.
    pub title: String,
    pub legend: LegendMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            title: String::new(),
            legend: DEFAULT_LEGEND_MODE,
        }
    }
}
