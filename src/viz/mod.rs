//! Visualization: collect thermogram series on an [`Axis`] and render to **SVG** or **PNG**.
//!
//! - Axis titles and series come from the plot dictionaries in [`crate::plot_dicts`]
//! - Legend entries are deduplicated by label, so repeated calls on one axis
//!   (several thermograms) show "Observed Data" once
//! - Legend placement: `Inside`, `Right`, `Top`, `Bottom`

pub mod axis;
pub mod legend;
pub mod types;
pub mod util;

pub use axis::{Axis, PlotSeries, SeriesHandle};
pub use legend::{LegendSource, dedup_entries, dedup_legend};
pub use types::{DEFAULT_LEGEND_MODE, LegendMode, RenderOptions, SeriesStyle};

use crate::error::Result as RpoResult;
use crate::models::{Domain, Representation, ThermogramData};
use crate::plot_dicts::{axis_labels, modeled_series, real_series};
use ahash::AHashSet;
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::LineSeries;
use plotters::style::FontFamily;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use legend::{draw_legend_panel, estimate_band_height_px};
use util::{Bounds, compute_left_label_area_px, data_bounds, finite_runs, tick_precision};

pub const OBSERVED_LABEL: &str = "Observed Data";
pub const MODELED_LABEL: &str = "Modeled Data";

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        if plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        )
        .is_err()
        {
            log::warn!("bundled sans-serif font could not be registered");
        }
    });
}

/// Plot a thermogram onto `axis` as `yaxis` versus `xaxis`.
///
/// Sets both axis titles, draws the observed curve (black) and, when the data
/// carries a modeled fit, the modeled curve (red).
pub fn plot_time_data(
    axis: &mut Axis,
    data: &dyn ThermogramData,
    xaxis: Domain,
    yaxis: Representation,
) -> RpoResult<()> {
    let labels = axis_labels();
    let labs = labels.get(xaxis, yaxis);
    axis.set_xlabel(*labs.x());
    axis.set_ylabel(*labs.y());

    let rd = real_series(data);
    let pair = rd.get(xaxis, yaxis);
    axis.plot(pair.x(), pair.y(), SeriesStyle::OBSERVED, Some(OBSERVED_LABEL))?;

    if data.modeled().is_some() {
        let md = modeled_series(data)?;
        let pair = md.get(xaxis, yaxis);
        axis.plot(pair.x(), pair.y(), SeriesStyle::MODELED, Some(MODELED_LABEL))?;
    }
    Ok(())
}

/// Render `axis` to `out_path`. `.svg` selects the SVG backend; anything else a bitmap.
pub fn render_axis<P: AsRef<Path>>(axis: &Axis, out_path: P, opts: &RenderOptions) -> Result<()> {
    let bounds = data_bounds(axis).ok_or_else(|| anyhow!("nothing to plot"))?;
    ensure_fonts_registered();

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    log::debug!(
        "rendering {} series to {} ({}x{})",
        axis.series().len(),
        path_string,
        opts.width,
        opts.height
    );

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (opts.width, opts.height))
            .into_drawing_area();
        draw_axis(root, axis, bounds, opts)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (opts.width, opts.height))
            .into_drawing_area();
        draw_axis(root, axis, bounds, opts)?;
    }
    log::info!("wrote plot to {}", out_path.display());
    Ok(())
}

fn draw_axis<DB>(
    root: DrawingArea<DB, Shift>,
    axis: &Axis,
    bounds: Bounds,
    opts: &RenderOptions,
) -> Result<()>
where
    DB: DrawingBackend,
{
    const MARGIN: i32 = 16;
    const Y_TICKS: usize = 8;

    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let (handles, labels) = dedup_legend(axis).unwrap_or_else(|never| match never {});
    let legend_items: Vec<(String, RGBAColor)> = handles
        .iter()
        .zip(labels.iter())
        .filter_map(|(h, l)| axis.get(*h).map(|s| (l.clone(), series_color(s))))
        .collect();
    let legend_owners: AHashSet<usize> = handles.iter().map(|h| h.index()).collect();

    let left_label_px = compute_left_label_area_px(bounds.y.0, bounds.y.1, Y_TICKS, 12);
    let axis_x_start_px = MARGIN + left_label_px as i32;

    let (root_w_u32, root_h_u32) = root.dim_in_pixel();
    let (root_w, root_h) = (root_w_u32 as i32, root_h_u32 as i32);

    let (plot_area, legend_area) = match opts.legend {
        LegendMode::Right => {
            let (plot, legend) = root.split_horizontally((80).percent_width());
            (plot, Some(legend))
        }
        LegendMode::Top => {
            let h = estimate_band_height_px(&labels, axis_x_start_px, root_w).max(40);
            let (legend, plot) = root.split_vertically(h);
            (plot, Some(legend))
        }
        LegendMode::Bottom => {
            let h = estimate_band_height_px(&labels, axis_x_start_px, root_w).max(40);
            let (plot, legend) = root.split_vertically((root_h - h).max(40));
            (plot, Some(legend))
        }
        LegendMode::Inside => (root, None),
    };

    let mut builder = ChartBuilder::on(&plot_area);
    builder
        .margin(MARGIN as u32)
        .set_label_area_size(LabelAreaPosition::Left, left_label_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 48);
    let title = opts.title.trim();
    if !title.is_empty() {
        builder.caption(title, (FontFamily::SansSerif, 22));
    }
    let mut chart = builder
        .build_cartesian_2d(bounds.x.0..bounds.x.1, bounds.y.0..bounds.y.1)
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_prec = tick_precision(bounds.x.1 - bounds.x.0);
    let y_prec = tick_precision(bounds.y.1 - bounds.y.0);
    let x_label_fmt = |v: &f64| format!("{:.*}", x_prec, v);
    let y_label_fmt = |v: &f64| format!("{:.*}", y_prec, v);

    chart
        .configure_mesh()
        .x_desc(axis.xlabel().unwrap_or(""))
        .y_desc(axis.ylabel().unwrap_or(""))
        .x_labels(10)
        .y_labels(Y_TICKS)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let inside_mode = matches!(opts.legend, LegendMode::Inside);
    for (idx, series) in axis.series().iter().enumerate() {
        let color = series_color(series);
        let style = ShapeStyle {
            color,
            filled: false,
            stroke_width: series.style.stroke_width,
        };
        // Only the first run of a legend-owning series carries the inside label.
        let mut label = match (&series.label, inside_mode && legend_owners.contains(&idx)) {
            (Some(l), true) => Some(l.clone()),
            _ => None,
        };
        for run in finite_runs(&series.points) {
            let anno = chart
                .draw_series(LineSeries::new(run, style))
                .map_err(|e| anyhow!("{:?}", e))?;
            if let Some(text) = label.take() {
                anno.label(text)
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
            }
        }
    }

    if inside_mode {
        if !legend_items.is_empty() {
            chart
                .configure_series_labels()
                .border_style(BLACK)
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.85))
                .label_font((FontFamily::SansSerif, 14))
                .draw()
                .map_err(|e| anyhow!("{:?}", e))?;
        }
    } else if let Some(ref legend_area) = legend_area {
        draw_legend_panel(legend_area, &legend_items, opts.legend, axis_x_start_px)?;
    }

    plot_area.present().map_err(|e| anyhow!("{:?}", e))?;
    if let Some(ref legend_area) = legend_area {
        legend_area.present().map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}

fn series_color(series: &PlotSeries) -> RGBAColor {
    let (r, g, b) = series.style.rgb;
    RGBColor(r, g, b).to_rgba()
}
