//! Plot dictionaries: which axis labels or which (x, y) series go with a
//! given (domain, representation) combination.
//!
//! Rates are always reported as the *negated* stored derivative, since the
//! fraction remaining decreases over time and temperature.

use crate::error::{Result, RpoError};
use crate::models::{Domain, Representation, ThermogramData};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which plot dictionary to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotCase {
    /// Axis-label pairs (`"rpo_labs"`).
    Labels,
    /// Modeled-data series pairs (`"rpo_md"`).
    Modeled,
    /// Real-data series pairs (`"rpo_rd"`).
    Real,
}

impl PlotCase {
    pub const ALL: [PlotCase; 3] = [PlotCase::Labels, PlotCase::Modeled, PlotCase::Real];

    pub fn token(&self) -> &'static str {
        match self {
            PlotCase::Labels => "rpo_labs",
            PlotCase::Modeled => "rpo_md",
            PlotCase::Real => "rpo_rd",
        }
    }

    /// Build this case's dictionary. Series cases need `data`.
    pub fn build(&self, data: Option<&dyn ThermogramData>) -> Result<PlotSelection> {
        match self {
            PlotCase::Labels => Ok(PlotSelection::Labels(axis_labels())),
            PlotCase::Modeled => {
                let data = data.ok_or(RpoError::MissingData { case: self.token() })?;
                modeled_series(data).map(PlotSelection::Series)
            }
            PlotCase::Real => {
                let data = data.ok_or(RpoError::MissingData { case: self.token() })?;
                Ok(PlotSelection::Series(real_series(data)))
            }
        }
    }
}

impl FromStr for PlotCase {
    type Err = RpoError;

    fn from_str(s: &str) -> Result<Self> {
        PlotCase::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| RpoError::UnrecognizedCase(s.to_string()))
    }
}

impl fmt::Display for PlotCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Ordered `(x, y)` pair; serializes as a two-element array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pair<T>(pub T, pub T);

impl<T> Pair<T> {
    pub fn x(&self) -> &T {
        &self.0
    }

    pub fn y(&self) -> &T {
        &self.1
    }
}

pub type LabelPair = Pair<&'static str>;
pub type SeriesPair = Pair<Vec<f64>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Representations<P> {
    pub fraction: P,
    pub rate: P,
}

/// `{time: {fraction, rate}, temp: {fraction, rate}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotDict<P> {
    pub time: Representations<P>,
    pub temp: Representations<P>,
}

impl<P> PlotDict<P> {
    pub fn get(&self, domain: Domain, repr: Representation) -> &P {
        let reps = match domain {
            Domain::Time => &self.time,
            Domain::Temp => &self.temp,
        };
        match repr {
            Representation::Fraction => &reps.fraction,
            Representation::Rate => &reps.rate,
        }
    }
}

/// Result of [`select_plot_dict`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlotSelection {
    Labels(PlotDict<LabelPair>),
    Series(PlotDict<SeriesPair>),
}

impl PlotSelection {
    pub fn as_labels(&self) -> Option<&PlotDict<LabelPair>> {
        match self {
            PlotSelection::Labels(d) => Some(d),
            PlotSelection::Series(_) => None,
        }
    }

    pub fn as_series(&self) -> Option<&PlotDict<SeriesPair>> {
        match self {
            PlotSelection::Series(d) => Some(d),
            PlotSelection::Labels(_) => None,
        }
    }
}

/// Select the plot dictionary named by `case` (`"rpo_labs"`, `"rpo_md"`, `"rpo_rd"`).
///
/// ### Errors
/// - `UnrecognizedCase` for any other token
/// - `MissingData` when a series case gets no data
/// - `MissingSeries("ghat")` for `"rpo_md"` on data without a modeled fit
pub fn select_plot_dict(case: &str, data: Option<&dyn ThermogramData>) -> Result<PlotSelection> {
    let case: PlotCase = case.parse()?;
    log::debug!("building plot dictionary for case {case}");
    case.build(data)
}

/// Axis labels for every (domain, representation) combination.
pub fn axis_labels() -> PlotDict<LabelPair> {
    PlotDict {
        time: Representations {
            fraction: Pair("time (s)", "g (unitless)"),
            rate: Pair("time (s)", "fraction/time (s^-1)"),
        },
        temp: Representations {
            fraction: Pair("temp (K)", "g (unitless)"),
            rate: Pair("temp (K)", "fraction/temp (K^-1)"),
        },
    }
}

/// Series pairs for the modeled fraction remaining.
pub fn modeled_series(data: &dyn ThermogramData) -> Result<PlotDict<SeriesPair>> {
    let md = data.modeled().ok_or(RpoError::MissingSeries("ghat"))?;
    Ok(series_dict(
        data.time(),
        data.temp(),
        &md.ghat,
        &md.dghatdt,
        &md.dghatd_temp,
    ))
}

/// Series pairs for the observed fraction remaining.
pub fn real_series(data: &dyn ThermogramData) -> PlotDict<SeriesPair> {
    series_dict(
        data.time(),
        data.temp(),
        data.fraction(),
        data.dfraction_dtime(),
        data.dfraction_dtemp(),
    )
}

fn series_dict(
    t: &[f64],
    temp: &[f64],
    g: &[f64],
    dgdt: &[f64],
    dgd_temp: &[f64],
) -> PlotDict<SeriesPair> {
    PlotDict {
        time: Representations {
            fraction: Pair(t.to_vec(), g.to_vec()),
            rate: Pair(t.to_vec(), negated(dgdt)),
        },
        temp: Representations {
            fraction: Pair(temp.to_vec(), g.to_vec()),
            rate: Pair(temp.to_vec(), negated(dgd_temp)),
        },
    }
}

fn negated(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| -v).collect()
}
