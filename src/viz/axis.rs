//! In-memory plot axis: records series, axis titles and legend labels until rendered.

use std::convert::Infallible;

use super::legend::LegendSource;
use super::types::SeriesStyle;
use crate::error::{Result, RpoError};

/// Opaque reference to a series drawn on an [`Axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesHandle(pub(crate) usize);

impl SeriesHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axis {
    xlabel: Option<String>,
    ylabel: Option<String>,
    series: Vec<PlotSeries>,
}

impl Axis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line series. `xs` and `ys` must have the same length.
    pub fn plot(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        style: SeriesStyle,
        label: Option<&str>,
    ) -> Result<SeriesHandle> {
        if xs.len() != ys.len() {
            return Err(RpoError::LengthMismatch {
                name: "y",
                got: ys.len(),
                expected: xs.len(),
            });
        }
        let handle = SeriesHandle(self.series.len());
        self.series.push(PlotSeries {
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
            style,
            label: label.map(str::to_string),
        });
        Ok(handle)
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.xlabel = Some(label.into());
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.ylabel = Some(label.into());
    }

    pub fn xlabel(&self) -> Option<&str> {
        self.xlabel.as_deref()
    }

    pub fn ylabel(&self) -> Option<&str> {
        self.ylabel.as_deref()
    }

    pub fn series(&self) -> &[PlotSeries] {
        &self.series
    }

    pub fn get(&self, handle: SeriesHandle) -> Option<&PlotSeries> {
        self.series.get(handle.0)
    }
}

impl LegendSource for Axis {
    type Handle = SeriesHandle;
    type Error = Infallible;

    /// Labeled series in drawing order; unlabeled series have no legend entry.
    fn legend_handles_labels(&self) -> std::result::Result<Vec<(SeriesHandle, String)>, Infallible> {
        Ok(self
            .series
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.label.clone().map(|l| (SeriesHandle(i), l)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_rejects_ragged_series() {
        let mut ax = Axis::new();
        let err = ax
            .plot(&[0.0, 1.0], &[1.0], SeriesStyle::OBSERVED, None)
            .unwrap_err();
        assert_eq!(
            err,
            RpoError::LengthMismatch {
                name: "y",
                got: 1,
                expected: 2
            }
        );
        assert!(ax.series().is_empty());
    }

    #[test]
    fn unlabeled_series_have_no_legend_entry() {
        let mut ax = Axis::new();
        ax.plot(&[0.0], &[1.0], SeriesStyle::OBSERVED, None).unwrap();
        let h = ax
            .plot(&[0.0], &[2.0], SeriesStyle::MODELED, Some("fit"))
            .unwrap();
        let entries = ax.legend_handles_labels().unwrap();
        assert_eq!(entries, vec![(h, "fit".to_string())]);
        assert_eq!(h.index(), 1);
    }
}
