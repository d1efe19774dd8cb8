//! rpo_plot
//!
//! Plotting helpers for Ramped PyrOx (RPO) thermograms. Pairs with the `rpo` CLI.
//!
//! ### Features
//! - Typed plot dictionaries: axis labels, observed series and modeled series
//!   for every (time|temp) x (fraction|rate) combination
//! - Legend deduplication by label (first occurrence wins)
//! - Thermogram model with numerically derived `dg/dt` and `dg/dT`
//! - CSV/JSON storage and SVG/PNG rendering
//!
//! ### Example
//! ```no_run
//! use rpo_plot::{Domain, Representation, TimeData};
//! use rpo_plot::viz::{self, Axis, RenderOptions};
//!
//! let data = TimeData::new(
//!     vec![0.0, 60.0, 120.0],
//!     vec![373.0, 378.0, 383.0],
//!     vec![1.0, 0.6, 0.1],
//! )?;
//! let mut ax = Axis::new();
//! viz::plot_time_data(&mut ax, &data, Domain::Temp, Representation::Rate)?;
//! viz::render_axis(&ax, "rate.svg", &RenderOptions::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod models;
pub mod plot_dicts;
pub mod storage;
pub mod viz;

pub use error::RpoError;
pub use models::{Domain, ModeledFraction, Representation, ThermogramData, TimeData};
pub use plot_dicts::{PlotCase, PlotDict, PlotSelection, select_plot_dict};
pub use viz::{LegendSource, dedup_legend};
