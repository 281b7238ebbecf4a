//! # hato-report
//!
//! Paginated plain-text reports over the Hato bitácora.
//!
//! Renders a date-bounded slice of the logbook into a printable document:
//! a title block, an aligned five-column table, fixed-height pages with
//! `Página N de M` footers, form feeds between pages. Generating a report
//! is itself a logged action.

pub mod document;
pub mod error;
pub mod logbook;

pub use document::{ReportOptions, TitleBlock};
pub use error::ReportError;
pub use logbook::{ReportSummary, default_file_name, generate_report};
