//! CSV output for the aggregated records.

use std::path::Path;

use anyhow::Context;

use super::record::{HotelRecord, COLUMNS};

/// Write the run's records unless there are none.  Returns whether a file
/// was written; an empty batch leaves both the file and its directory alone.
pub fn write_report(path: &Path, records: &[HotelRecord]) -> anyhow::Result<bool> {
    if records.is_empty() {
        return Ok(false);
    }
    write_csv(path, records)?;
    Ok(true)
}

/// Write `records` as UTF-8 CSV with a header row, creating the parent
/// directory when it does not exist yet.
fn write_csv(path: &Path, records: &[HotelRecord]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
            tracing::info!("Created directory: {}", parent.display());
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    writer
        .write_record(COLUMNS)
        .with_context(|| format!("writing {}", path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::MISSING;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("hotel-scraper-test-{}-{name}", std::process::id()))
            .join("nested")
            .join("hotels.csv")
    }

    fn record(name: &str) -> HotelRecord {
        HotelRecord {
            name: name.to_string(),
            description: "Sea view, rooftop".to_string(),
            rating: "4.2".to_string(),
            rating_text: "Very good".to_string(),
            price: "120.05".to_string(),
            phone: "0612345678".to_string(),
            distance: MISSING.to_string(),
            facilities: "Wifi, Spa".to_string(),
            image_url: MISSING.to_string(),
            city: "Agadir".to_string(),
            scraped_on: "2026-10-17".to_string(),
        }
    }

    #[test]
    fn writes_header_and_rows_creating_directories() {
        let path = temp_path("rows");
        write_csv(&path, &[record("Hotel \"Ocean\""), record("Kasbah")]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(COLUMNS.join(",").as_str()));
        assert_eq!(
            lines.next(),
            Some(
                "\"Hotel \"\"Ocean\"\"\",\"Sea view, rooftop\",4.2,Very good,120.05,\
                 0612345678,N/A,\"Wifi, Spa\",N/A,Agadir,2026-10-17"
            )
        );
        assert!(lines.next().unwrap().starts_with("Kasbah,"));
        assert_eq!(lines.next(), None);

        let _ = std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn report_with_rows_is_written() {
        let path = temp_path("report");
        assert!(write_report(&path, &[record("Kasbah")]).unwrap());
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        let _ = std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn empty_report_writes_nothing() {
        let path = temp_path("empty");
        assert!(!write_report(&path, &[]).unwrap());
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
    }
}
