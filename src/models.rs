use crate::error::{Result, RpoError};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Independent variable of a thermogram plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Seconds since the start of the ramp.
    Time,
    /// Temperature in Kelvin.
    Temp,
}

impl Domain {
    pub fn token(&self) -> &'static str {
        match self {
            Domain::Time => "time",
            Domain::Temp => "temp",
        }
    }
}

impl FromStr for Domain {
    type Err = RpoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "time" => Ok(Domain::Time),
            "temp" => Ok(Domain::Temp),
            other => Err(RpoError::UnrecognizedDomain(other.to_string())),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Dependent variable of a thermogram plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Fraction of carbon remaining, `g`.
    Fraction,
    /// Decay rate, the negated derivative of `g`.
    Rate,
}

impl Representation {
    pub fn token(&self) -> &'static str {
        match self {
            Representation::Fraction => "fraction",
            Representation::Rate => "rate",
        }
    }
}

impl FromStr for Representation {
    type Err = RpoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fraction" => Ok(Representation::Fraction),
            "rate" => Ok(Representation::Rate),
            other => Err(RpoError::UnrecognizedRepresentation(other.to_string())),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Read-only view of the series a plot dictionary is built from.
///
/// Real-data series are always present; the modeled counterpart only exists
/// once a fit has been attached.
pub trait ThermogramData {
    fn time(&self) -> &[f64];
    fn temp(&self) -> &[f64];
    /// Fraction remaining, `g`.
    fn fraction(&self) -> &[f64];
    /// `dg/dt`
    fn dfraction_dtime(&self) -> &[f64];
    /// `dg/dT`
    fn dfraction_dtemp(&self) -> &[f64];
    fn modeled(&self) -> Option<&ModeledFraction>;
}

/// Modeled fraction remaining (`ghat`) and its derivatives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeledFraction {
    pub ghat: Vec<f64>,
    pub dghatdt: Vec<f64>,
    #[serde(rename = "dghatdT")]
    pub dghatd_temp: Vec<f64>,
}

/// Time-resolved thermogram: time, temperature, fraction remaining and derivatives.
///
/// Always built through [`TimeData::new`], which validates the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeData {
    t: Vec<f64>,
    #[serde(rename = "T")]
    temp: Vec<f64>,
    g: Vec<f64>,
    dgdt: Vec<f64>,
    #[serde(rename = "dgdT")]
    dgd_temp: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    modeled: Option<ModeledFraction>,
}

impl TimeData {
    /// Build from time (s), temperature (K) and fraction remaining.
    ///
    /// ### Errors
    /// - fewer than two observations
    /// - `temp` or `g` length differs from `t`
    /// - `t` not strictly increasing
    pub fn new(t: Vec<f64>, temp: Vec<f64>, g: Vec<f64>) -> Result<Self> {
        if t.len() < 2 {
            return Err(RpoError::TooFewPoints(t.len()));
        }
        check_len("temp", &temp, t.len())?;
        check_len("g", &g, t.len())?;
        for i in 1..t.len() {
            if t[i].partial_cmp(&t[i - 1]) != Some(Ordering::Greater) {
                return Err(RpoError::NonMonotonicTime(i));
            }
        }

        let dgdt = derivatize(&g, &t);
        let dgd_temp = derivatize(&g, &temp);
        Ok(Self {
            t,
            temp,
            g,
            dgdt,
            dgd_temp,
            modeled: None,
        })
    }

    /// Attach a modeled fraction remaining; derivatives are computed on the
    /// same time and temperature grid as the observations.
    pub fn with_modeled(mut self, ghat: Vec<f64>) -> Result<Self> {
        check_len("ghat", &ghat, self.t.len())?;
        let dghatdt = derivatize(&ghat, &self.t);
        let dghatd_temp = derivatize(&ghat, &self.temp);
        self.modeled = Some(ModeledFraction {
            ghat,
            dghatdt,
            dghatd_temp,
        });
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

impl ThermogramData for TimeData {
    fn time(&self) -> &[f64] {
        &self.t
    }

    fn temp(&self) -> &[f64] {
        &self.temp
    }

    fn fraction(&self) -> &[f64] {
        &self.g
    }

    fn dfraction_dtime(&self) -> &[f64] {
        &self.dgdt
    }

    fn dfraction_dtemp(&self) -> &[f64] {
        &self.dgd_temp
    }

    fn modeled(&self) -> Option<&ModeledFraction> {
        self.modeled.as_ref()
    }
}

fn check_len(name: &'static str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(RpoError::LengthMismatch {
            name,
            got: values.len(),
            expected,
        });
    }
    Ok(())
}

/// Unit-spacing gradient: central differences inside, one-sided at both ends.
pub fn gradient(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let mut out = Vec::with_capacity(n);
            out.push(values[1] - values[0]);
            for i in 1..n - 1 {
                out.push((values[i + 1] - values[i - 1]) / 2.0);
            }
            out.push(values[n - 1] - values[n - 2]);
            out
        }
    }
}

/// Pointwise `d(num)/d(denom)` as the ratio of the two gradients.
///
/// A zero step in `denom` yields a non-finite value at that index.
pub fn derivatize(num: &[f64], denom: &[f64]) -> Vec<f64> {
    gradient(num)
        .into_iter()
        .zip(gradient(denom))
        .map(|(dn, dd)| dn / dd)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_matches_central_differences() {
        assert_eq!(gradient(&[0.0, 1.0, 4.0, 9.0]), vec![1.0, 2.0, 4.0, 5.0]);
        assert!(gradient(&[]).is_empty());
    }

    #[test]
    fn linear_decay_has_constant_derivative() {
        let td = TimeData::new(
            vec![0.0, 10.0, 20.0, 30.0],
            vec![300.0, 310.0, 320.0, 330.0],
            vec![1.0, 0.8, 0.6, 0.4],
        )
        .unwrap();
        for d in td.dfraction_dtime() {
            assert!((d + 0.02).abs() < 1e-12);
        }
        for d in td.dfraction_dtemp() {
            assert!((d + 0.02).abs() < 1e-12);
        }
        assert!(td.modeled().is_none());
    }

    #[test]
    fn rejects_bad_series() {
        assert_eq!(
            TimeData::new(vec![0.0], vec![300.0], vec![1.0]),
            Err(RpoError::TooFewPoints(1))
        );
        assert_eq!(
            TimeData::new(vec![0.0, 1.0], vec![300.0], vec![1.0, 0.5]),
            Err(RpoError::LengthMismatch {
                name: "temp",
                got: 1,
                expected: 2
            })
        );
        assert_eq!(
            TimeData::new(vec![0.0, 1.0, 1.0], vec![1.0; 3], vec![1.0; 3]),
            Err(RpoError::NonMonotonicTime(2))
        );
    }

    #[test]
    fn modeled_length_is_checked() {
        let td = TimeData::new(vec![0.0, 1.0], vec![300.0, 301.0], vec![1.0, 0.5]).unwrap();
        let err = td.with_modeled(vec![1.0]).unwrap_err();
        assert!(matches!(err, RpoError::LengthMismatch { name: "ghat", .. }));
    }

    #[test]
    fn tokens_parse() {
        assert_eq!("temp".parse::<Domain>(), Ok(Domain::Temp));
        assert_eq!("rate".parse::<Representation>(), Ok(Representation::Rate));
        assert!("Time".parse::<Domain>().is_err());
    }
}
