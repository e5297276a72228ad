//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing commit history and its monthly aggregation.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A single commit as reported by the history log.
///
/// Only the author date survives extraction; nothing else about the commit is
/// needed to chart activity over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitRecord {
    /// Calendar date of the commit (no time-of-day)
    pub date: NaiveDate,
}

impl CommitRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The calendar month this commit falls into.
    pub fn month(&self) -> MonthBucket {
        MonthBucket::from_date(self.date)
    }
}

/// A calendar month used as an aggregation key.
///
/// This is deliberately a `(year, month)` pair rather than a date with the day
/// forced to 1, so a day-of-month can never leak into comparisons. The derived
/// ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
}

impl MonthBucket {
    /// Truncate a date to its month: the day is discarded.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Commit counts per month, sorted ascending by month with unique keys.
///
/// Built by `utils::aggregate_by_month`; the sum of the counts always equals
/// the number of records that went in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlySeries {
    /// Chronologically ordered `(month, count)` pairs
    pub points: Vec<(MonthBucket, usize)>,
}

impl MonthlySeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total number of commits across all months.
    pub fn total_commits(&self) -> usize {
        self.points.iter().map(|(_, count)| count).sum()
    }

    /// Largest single-month count, 0 for an empty series.
    pub fn max_count(&self) -> usize {
        self.points.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }
}
