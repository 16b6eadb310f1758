//! CSV and JSON output of simulation results
//!
//! CSV has one row per tick with the header
//! `tick,skill,weapon,toxic,dot,held`.

use anyhow::{Context, Result};
use poison_core::SimulationResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write every series as CSV rows
pub fn write_csv<W: Write>(result: &SimulationResult, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in result.rows() {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the full result as pretty JSON
pub fn write_json<W: Write>(result: &SimulationResult, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_csv_file(result: &SimulationResult, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(result, BufWriter::new(file))
        .with_context(|| format!("failed to write CSV to {}", path.display()))
}

pub fn write_json_file(result: &SimulationResult, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_json(result, &mut writer)
        .and_then(|_| writer.flush().map_err(Into::into))
        .with_context(|| format!("failed to write JSON to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use poison_core::{simulate, SimulationConfig, WeaponConfig};
    use tempfile::TempDir;

    fn weapon_result() -> SimulationResult {
        let config = SimulationConfig::disabled().with_weapon(WeaponConfig::new(19000.0));
        simulate(&config, 10)
    }

    #[test]
    fn csv_headers_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("series.csv");
        write_csv_file(&weapon_result(), &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "skill", "weapon", "toxic", "dot", "held"]);

        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 11);
        assert_eq!(&records[0][0], "0");
        let weapon: f64 = records[10][2].parse().unwrap();
        assert!((weapon - 955700.0).abs() < 1e-6);
    }

    #[test]
    fn json_round_trips() {
        let result = weapon_result();
        let mut buf = Vec::new();
        write_json(&result, &mut buf).unwrap();

        let parsed: SimulationResult = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.refresh_ticks, result.refresh_ticks);
        assert_eq!(parsed.weapon.len(), 11);
        assert!(parsed.explosion_damage.is_none());
    }

    #[test]
    fn json_file_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("result.json");
        write_json_file(&weapon_result(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"final_held_dot\""));
    }
}
