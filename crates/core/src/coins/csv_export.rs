//! CSV rendering of the board, shared by the snapshot file and the download.

use std::path::PathBuf;

use async_trait::async_trait;
use csv::{Terminator, WriterBuilder};
use log::debug;

use crate::constants::CSV_HEADERS;
use crate::errors::{Error, Result};

use super::coins_model::CoinRecord;
use super::coins_traits::SnapshotWriterTrait;

/// Renders the header row and one row per record, in the given order.
pub fn render_csv(records: &[CoinRecord]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for record in records {
        let price = record.price_display();
        let change = record.change_display();
        writer.write_record([
            record.name.as_str(),
            record.symbol.as_str(),
            price.as_str(),
            change.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Snapshot(e.to_string()))
}

/// Writes the snapshot to a fixed path, truncating whatever was there.
pub struct CsvFileSnapshotWriter {
    path: PathBuf,
}

impl CsvFileSnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotWriterTrait for CsvFileSnapshotWriter {
    async fn write_snapshot(&self, records: &[CoinRecord]) -> Result<()> {
        let bytes = render_csv(records)?;
        tokio::fs::write(&self.path, &bytes).await?;
        debug!(
            "Wrote {} rows ({} bytes) to {}",
            records.len(),
            bytes.len(),
            self.path.display()
        );
        Ok(())
    }
}
