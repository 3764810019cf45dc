use crate::core::report::StatsReport;
use serde::{Deserialize, Serialize};

/// One contract row from the spreadsheet export.
///
/// Field order is the order of the keys in the generated JavaScript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub doc_received: String,
    pub doc_date: String,
    pub progress: String,
    pub updated_doc_received: String,
    pub updated_doc_date: String,
    pub visit_scheduled: String,
    pub visit_date: String,
    pub management: String,
    pub program: String,
    pub university: String,
    pub degree: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub source: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub records: Vec<ContractRecord>,
    /// 1-based line numbers of rows that could not be parsed.
    pub invalid_lines: Vec<usize>,
}

impl TransformResult {
    pub fn error_count(&self) -> usize {
        self.invalid_lines.len()
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    /// `None` when the run was a dry run.
    pub output_path: Option<String>,
    pub record_count: usize,
    pub invalid_lines: Vec<usize>,
    pub report: StatsReport,
}
