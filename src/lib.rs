//! # Commit History Charting Library
//!
//! `commitplot` clones a Git repository over SSH (or reuses an existing
//! clone), reads its commit dates from `git log`, and renders a line chart
//! of commits per calendar month.
//!
//! ## Features
//!
//! - Clone over SSH with a chosen key, or point at an existing working copy
//! - Strict `YYYY-MM-DD` parsing of `git log` output
//! - Monthly aggregation in chronological order
//! - PNG rendering with plotters, optional interactive viewer
//!
//! ## Example
//!
//! ```no_run
//! use commitplot::utils::aggregate_by_month;
//! use std::path::Path;
//!
//! # fn run() -> commitplot::Result<()> {
//! let records = commitplot::git::extract_commit_dates(Path::new("my-repo"))?;
//! let series = aggregate_by_month(&records);
//! commitplot::plotting::render_chart(&series, Path::new("commits_over_time.png"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod plotting;
pub mod types;
pub mod utils;
pub mod viewer;

// Re-export main types for convenience
pub use error::{CommitplotError, Result};
pub use types::{CommitRecord, MonthBucket, MonthlySeries};
