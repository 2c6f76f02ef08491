//! `mcr-report` — presentation of search results.
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`render`]  | Human-readable path and comparison blocks                   |
//! | [`row`]     | `ComparisonRow` (one strategy × criteria result)            |
//! | [`csv`]     | `CsvReport` writer for regression diffs                     |
//! | [`error`]   | `ReportError`, `ReportResult<T>`                            |
//!
//! # Usage
//!
//! ```rust,ignore
//! use mcr_report::{CsvReport, render_comparison};
//!
//! println!("{}", render_comparison(&net, d.as_ref(), a.as_ref(), "RM"));
//! let mut report = CsvReport::create(Path::new("runs.csv"))?;
//! report.write_comparisons(&net, &runs)?;
//! report.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod render;
pub mod row;


pub use crate::csv::CsvReport;
pub use error::{ReportError, ReportResult};
pub use render::{render_comparison, render_path};
pub use row::ComparisonRow;
