//! Aggregate statistics over the report registry.

use crate::report::format::ReportFormat;
use crate::report::GeneratedReport;
use std::collections::HashMap;

/// Aggregate statistics over a registry of generated reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryStats {
    /// Number of reports in the registry.
    pub count: usize,
    /// Total payload size in bytes.
    pub total_bytes: u64,
    /// Average payload size in bytes; `0.0` for an empty registry.
    pub average_bytes: f64,
    /// Number of reports per format.
    pub by_format: HashMap<ReportFormat, usize>,
}

pub(crate) fn registry_stats(reports: &[GeneratedReport]) -> RegistryStats {
    let count = reports.len();
    let total_bytes: u64 = reports.iter().map(|r| r.size).sum();
    let average_bytes = if count == 0 {
        0.0
    } else {
        total_bytes as f64 / count as f64
    };
    let mut by_format: HashMap<ReportFormat, usize> = HashMap::new();
    for report in reports {
        *by_format.entry(report.format).or_insert(0) += 1;
    }
    RegistryStats {
        count,
        total_bytes,
        average_bytes,
        by_format,
    }
}
