//! CSV output backend.
//!
//! One row per (criteria, strategy) pair, so two runs of the same scenario
//! can be diffed line by line.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use mcr_network::RoadNetwork;
use mcr_search::Comparison;

use crate::{ComparisonRow, ReportResult};

/// Writes [`ComparisonRow`]s with a header line.
pub struct CsvReport<W: Write> {
    writer:   Writer<W>,
    finished: bool,
}

impl CsvReport<std::fs::File> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> ReportResult<Self> {
        Ok(Self::from_writer(std::fs::File::create(path)?))
    }
}

impl<W: Write> CsvReport<W> {
    pub fn from_writer(inner: W) -> Self {
        Self { writer: Writer::from_writer(inner), finished: false }
    }

    pub fn write_row(&mut self, row: &ComparisonRow) -> ReportResult<()> {
        self.writer.serialize(row)?;
        Ok(())
    }

    pub fn write_comparisons(&mut self, network: &RoadNetwork, runs: &[Comparison]) -> ReportResult<()> {
        for run in runs {
            self.write_row(&ComparisonRow::from_comparison(network, run))?;
        }
        Ok(())
    }

    /// Flush buffered rows.  Idempotent.
    pub fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> ReportResult<W> {
        self.finish()?;
        self.writer.into_inner().map_err(|e| e.into_error().into())
    }
}
