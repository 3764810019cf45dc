//! Frequency counts and end-date distribution over parsed contracts.

use crate::domain::model::ContractRecord;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::fmt;

const RULE: &str = "================================================================================";

pub const DEFAULT_TOP_UNIVERSITIES: usize = 10;

/// Counts per category value, remembering first-seen order so that ties
/// sort the same way on every run.
#[derive(Debug, Clone, Default)]
pub struct CategoryCounts {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: &str) {
        match self.index.get(value) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
    }

    pub fn get(&self, value: &str) -> usize {
        self.index
            .get(value)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by descending count; equal counts keep first-seen order.
    pub fn sorted_desc(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl<'a> FromIterator<&'a str> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = CategoryCounts::new();
        for value in iter {
            counts.add(value);
        }
        counts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndDateBucket {
    Ended,
    FirstHalf2025,
    SecondHalf2025,
    From2026,
}

impl EndDateBucket {
    /// Limits are inclusive: 2024-12-31, 2025-06-30 and 2025-12-31.
    pub fn classify(date: NaiveDate) -> Self {
        match (date.year(), date.month()) {
            (year, _) if year <= 2024 => EndDateBucket::Ended,
            (2025, 1..=6) => EndDateBucket::FirstHalf2025,
            (2025, _) => EndDateBucket::SecondHalf2025,
            _ => EndDateBucket::From2026,
        }
    }

    /// Returns `None` for empty or unparseable dates. The year must be
    /// exactly four digits; chrono alone would accept `5-01-02`.
    pub fn from_end_date(end_date: &str) -> Option<Self> {
        let (year, _) = end_date.split_once('-')?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        NaiveDate::parse_from_str(end_date, "%Y-%m-%d")
            .ok()
            .map(Self::classify)
    }

    pub fn label(&self) -> &'static str {
        match self {
            EndDateBucket::Ended => "Ended or ending (before 2025)",
            EndDateBucket::FirstHalf2025 => "H1 2025",
            EndDateBucket::SecondHalf2025 => "H2 2025",
            EndDateBucket::From2026 => "2026+",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndDateDistribution {
    pub ended: usize,
    pub first_half_2025: usize,
    pub second_half_2025: usize,
    pub from_2026: usize,
}

impl EndDateDistribution {
    pub fn from_records(records: &[ContractRecord]) -> Self {
        let mut distribution = Self::default();
        for record in records {
            if let Some(bucket) = EndDateBucket::from_end_date(&record.end_date) {
                distribution.add(bucket);
            }
        }
        distribution
    }

    pub fn add(&mut self, bucket: EndDateBucket) {
        match bucket {
            EndDateBucket::Ended => self.ended += 1,
            EndDateBucket::FirstHalf2025 => self.first_half_2025 += 1,
            EndDateBucket::SecondHalf2025 => self.second_half_2025 += 1,
            EndDateBucket::From2026 => self.from_2026 += 1,
        }
    }

    pub fn count(&self, bucket: EndDateBucket) -> usize {
        match bucket {
            EndDateBucket::Ended => self.ended,
            EndDateBucket::FirstHalf2025 => self.first_half_2025,
            EndDateBucket::SecondHalf2025 => self.second_half_2025,
            EndDateBucket::From2026 => self.from_2026,
        }
    }

    pub fn total(&self) -> usize {
        self.ended + self.first_half_2025 + self.second_half_2025 + self.from_2026
    }
}

/// Summary statistics printed after a conversion.
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub total: usize,
    pub universities: CategoryCounts,
    pub departments: CategoryCounts,
    pub degrees: CategoryCounts,
    pub end_dates: EndDateDistribution,
    pub top_universities: usize,
}

impl StatsReport {
    pub fn build(records: &[ContractRecord], top_universities: usize) -> Self {
        Self {
            total: records.len(),
            universities: records.iter().map(|r| r.university.as_str()).collect(),
            departments: records.iter().map(|r| r.management.as_str()).collect(),
            degrees: records.iter().map(|r| r.degree.as_str()).collect(),
            end_dates: EndDateDistribution::from_records(records),
            top_universities,
        }
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "📊 Data statistics")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f)?;

        writeln!(f, "Total contracts: {}", self.total)?;
        writeln!(f)?;

        writeln!(f, "Universities: {}", self.universities.len())?;
        writeln!(f)?;
        writeln!(f, "Top {} universities:", self.top_universities)?;
        for (rank, (university, count)) in self
            .universities
            .sorted_desc()
            .into_iter()
            .take(self.top_universities)
            .enumerate()
        {
            writeln!(f, "  {}. {}: {} contracts", rank + 1, university, count)?;
        }
        writeln!(f)?;

        writeln!(f, "Departments: {}", self.departments.len())?;
        writeln!(f)?;
        writeln!(f, "Department distribution:")?;
        for (department, count) in self.departments.sorted_desc() {
            writeln!(f, "  • {}: {} contracts", department, count)?;
        }
        writeln!(f)?;

        writeln!(f, "Degree distribution:")?;
        for (degree, count) in self.degrees.sorted_desc() {
            writeln!(f, "  • {}: {} contracts", degree, count)?;
        }
        writeln!(f)?;

        writeln!(f, "End date distribution:")?;
        for bucket in [
            EndDateBucket::Ended,
            EndDateBucket::FirstHalf2025,
            EndDateBucket::SecondHalf2025,
            EndDateBucket::From2026,
        ] {
            writeln!(
                f,
                "  • {}: {} contracts",
                bucket.label(),
                self.end_dates.count(bucket)
            )?;
        }
        writeln!(f)
    }
}
