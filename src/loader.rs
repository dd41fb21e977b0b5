use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::models::{CaseRecord, Category, Dataset, RawRow, Thresholds};

/// Read the case-count table once at startup.
///
/// A missing file is the one tolerated failure: it degrades to an empty
/// [`Dataset`] (the dashboard route answers with a plain-text notice for
/// that). Anything else, including a malformed row, aborts startup with
/// context instead of serving half a table.
pub fn load_dataset(path: &Path, thresholds: &Thresholds) -> Result<Dataset> {
    let mut rdr = match ReaderBuilder::new().flexible(true).from_path(path) {
        Ok(rdr) => rdr,
        Err(err) if is_not_found(&err) => {
            tracing::warn!(
                path = %path.display(),
                "data file not found, starting with an empty dataset"
            );
            return Ok(Dataset::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to open {}", path.display()))
        }
    };

    let mut records = Vec::new();
    for row in rdr.deserialize::<RawRow>() {
        let row = row.with_context(|| format!("malformed row in {}", path.display()))?;
        let category = Category::classify(row.cases, thresholds);
        records.push(CaseRecord {
            region: row.region.trim().to_string(),
            year: row.year,
            cases: row.cases,
            category,
        });
    }

    Ok(Dataset { records })
}

fn is_not_found(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_csv(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_degrades_to_empty_dataset() {
        let path = std::env::temp_dir().join("definitely_not_here_dm.csv");
        let dataset = load_dataset(&path, &Thresholds::default()).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn rows_are_parsed_in_file_order_with_categories() {
        let path = temp_csv(
            "dm_loader_ok.csv",
            "nama_kabupaten_kota,tahun,jumlah_penderita_dm\n\
             Kota Bandung,2018,40000\n\
             Kota Bekasi,2018,120000\n\
             Kota Bandung,2019,60000\n",
        );
        let dataset = load_dataset(&path, &Thresholds::default()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records[0].region, "Kota Bandung");
        assert_eq!(dataset.records[0].category, Category::Rendah);
        assert_eq!(dataset.records[1].category, Category::Tinggi);
        assert_eq!(dataset.records[2].year, 2019);
        assert_eq!(dataset.records[2].category, Category::Sedang);
    }

    #[test]
    fn malformed_row_is_an_error() {
        let path = temp_csv(
            "dm_loader_bad.csv",
            "nama_kabupaten_kota,tahun,jumlah_penderita_dm\n\
             Kota Bandung,not-a-year,40000\n",
        );
        let result = load_dataset(&path, &Thresholds::default());
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
