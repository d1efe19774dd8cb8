use crate::models::{ThermogramData, TimeData};
use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, WriterBuilder};
use serde::Deserialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One CSV row: `time,temp,g[,ghat]`.
#[derive(Debug, Deserialize)]
struct ThermogramRow {
    time: f64,
    temp: f64,
    g: f64,
    #[serde(default)]
    ghat: Option<f64>,
}

/// Load a thermogram from CSV with header `time,temp,g` and an optional `ghat` column.
///
/// `ghat` must be filled on every row or on none.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<TimeData> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let (mut t, mut temp, mut g, mut ghat) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
    for (i, row) in rdr.deserialize::<ThermogramRow>().enumerate() {
        let row = row.with_context(|| format!("{}: row {}", path.display(), i + 1))?;
        t.push(row.time);
        temp.push(row.temp);
        g.push(row.g);
        if let Some(v) = row.ghat {
            ghat.push(v);
        }
    }

    let td = TimeData::new(t, temp, g).with_context(|| format!("{}", path.display()))?;
    let td = if ghat.is_empty() {
        td
    } else if ghat.len() == td.len() {
        td.with_modeled(ghat)?
    } else {
        bail!(
            "{}: `ghat` present on {} of {} rows",
            path.display(),
            ghat.len(),
            td.len()
        );
    };
    log::info!("loaded {} observations from {}", td.len(), path.display());
    Ok(td)
}

/// Save the thermogram and its derivatives as CSV with header.
pub fn save_csv<P: AsRef<Path>>(data: &TimeData, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    match data.modeled() {
        None => {
            wtr.serialize(("time", "temp", "g", "dgdt", "dgdT"))?;
            for i in 0..data.len() {
                wtr.serialize((
                    data.time()[i],
                    data.temp()[i],
                    data.fraction()[i],
                    data.dfraction_dtime()[i],
                    data.dfraction_dtemp()[i],
                ))?;
            }
        }
        Some(md) => {
            wtr.serialize((
                "time", "temp", "g", "dgdt", "dgdT", "ghat", "dghatdt", "dghatdT",
            ))?;
            for i in 0..data.len() {
                wtr.serialize((
                    data.time()[i],
                    data.temp()[i],
                    data.fraction()[i],
                    data.dfraction_dtime()[i],
                    data.dfraction_dtemp()[i],
                    md.ghat[i],
                    md.dghatdt[i],
                    md.dghatd_temp[i],
                ))?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Save the thermogram as pretty JSON.
pub fn save_json<P: AsRef<Path>>(data: &TimeData, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(data)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn partial_ghat_column_is_rejected() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("partial.csv");
        fs::write(&p, "time,temp,g,ghat\n0,300,1.0,1.0\n1,301,0.5,\n").unwrap();
        let err = load_csv(&p).unwrap_err();
        assert!(err.to_string().contains("ghat"), "{err}");
    }

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let td = TimeData::new(vec![0.0, 1.0], vec![300.0, 301.0], vec![1.0, 0.5])
            .unwrap()
            .with_modeled(vec![1.0, 0.4])
            .unwrap();
        save_csv(&td, &csvp).unwrap();
        save_json(&td, &jsonp).unwrap();
        let header = fs::read_to_string(&csvp).unwrap();
        assert!(header.starts_with("time,temp,g,dgdt,dgdT,ghat,dghatdt,dghatdT"));
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&jsonp).unwrap()).unwrap();
        assert_eq!(json["T"][1], 301.0);
        assert_eq!(json["modeled"]["ghat"][1], 0.4);
    }
}
