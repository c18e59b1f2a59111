//! Diagnostic summaries and plot output.
//!
//! `summaries` turns stored field snapshots into the time series the
//! plots consume; `plots` renders them to PNG; `reporter` owns the
//! output directory layout.

pub mod plots;
pub mod reporter;
pub mod summaries;
