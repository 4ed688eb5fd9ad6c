//! Aggregated outcome of one reconciliation run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use uuid::Uuid;

use crate::services::matcher::{MatchOutcome, MatchResult};

use super::driver::ReconcileOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeCounts {
    pub already_mapped: usize,
    pub auto_matched: usize,
    pub needs_review: usize,
    pub not_found: usize,
    pub errors: usize,
    /// Combined figure for summaries that group everything needing a human.
    pub needs_review_or_not_found: usize,
}

impl OutcomeCounts {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut counts = Self::default();
        for result in results {
            counts.record(result.outcome);
        }
        counts
    }

    pub fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::AlreadyMapped => self.already_mapped += 1,
            MatchOutcome::Matched => self.auto_matched += 1,
            MatchOutcome::NeedsReview => self.needs_review += 1,
            MatchOutcome::NotFound => self.not_found += 1,
            MatchOutcome::Error => self.errors += 1,
        }
        self.needs_review_or_not_found = self.needs_review + self.not_found;
    }

    pub fn total(&self) -> usize {
        self.already_mapped + self.auto_matched + self.needs_review + self.not_found + self.errors
    }
}

/// Flat per-member row, the serialized shape of each result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub member_id: String,
    pub member_name: String,
    pub outcome: MatchOutcome,
    pub folder_id: Option<String>,
    pub folder_name: Option<String>,
    pub section: Option<String>,
    pub year: Option<String>,
    pub file_count: Option<u32>,
    pub score: Option<f64>,
}

impl From<&MatchResult> for ReportEntry {
    fn from(result: &MatchResult) -> Self {
        let folder = result.folder.as_ref();
        // Mapped members are not re-scored this run.
        let scored = folder.is_some() && result.outcome != MatchOutcome::AlreadyMapped;
        ReportEntry {
            member_id: result.member_id.clone(),
            member_name: result.member_name.clone(),
            outcome: result.outcome,
            folder_id: result.folder_id.clone(),
            folder_name: folder.map(|f| f.name.clone()),
            section: folder.map(|f| f.section_tag.clone()),
            year: folder.map(|f| f.year_tag.clone()),
            file_count: folder.map(|f| f.file_count),
            score: scored.then_some(result.raw_score),
        }
    }
}

/// A folder linked to or proposed for more than one member.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateFolder {
    pub folder_id: String,
    pub folder_name: String,
    pub member_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub dry_run: bool,
    pub force: bool,
    pub counts: OutcomeCounts,
    pub entries: Vec<ReportEntry>,
    pub warnings: Vec<String>,
    pub duplicate_folders: Vec<DuplicateFolder>,
    /// Full per-member results; `entries` is their serialized form.
    #[serde(skip)]
    pub results: Vec<MatchResult>,
}

impl ReconcileReport {
    pub fn new(results: Vec<MatchResult>, options: ReconcileOptions) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            dry_run: options.dry_run,
            force: options.force,
            counts: OutcomeCounts::from_results(&results),
            entries: results.iter().map(ReportEntry::from).collect(),
            duplicate_folders: find_duplicate_folders(&results),
            results,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn result_for(&self, member_id: &str) -> Option<&MatchResult> {
        self.results.iter().find(|r| r.member_id == member_id)
    }
}

/// Greedy matching lets several members land on one folder; surface those for review.
pub fn find_duplicate_folders(results: &[MatchResult]) -> Vec<DuplicateFolder> {
    let mut by_folder: BTreeMap<&str, (Option<&str>, Vec<String>)> = BTreeMap::new();

    for result in results {
        if result.outcome == MatchOutcome::NotFound {
            continue;
        }
        let Some(folder_id) = result.folder_id.as_deref() else {
            continue;
        };
        let slot = by_folder.entry(folder_id).or_default();
        if slot.0.is_none() {
            slot.0 = result.folder.as_ref().map(|f| f.name.as_str());
        }
        slot.1.push(result.member_id.clone());
    }

    by_folder
        .into_iter()
        .filter(|(_, (_, members))| members.len() > 1)
        .map(|(folder_id, (name, member_ids))| DuplicateFolder {
            folder_id: folder_id.to_string(),
            folder_name: name.unwrap_or(folder_id).to_string(),
            member_ids,
        })
        .collect()
}

/// Console rendering of a report.
pub fn render_text(report: &ReconcileReport) -> String {
    let mut out = String::new();
    let mode = if report.dry_run { " (dry run)" } else { "" };
    let _ = writeln!(out, "Reconciliation {}{mode}", report.run_id);

    for warning in &report.warnings {
        let _ = writeln!(out, "warning: {warning}");
    }

    let _ = writeln!(
        out,
        "{:<32} {:<15} {:<32} {:<10} {:<10} {:>5} {:>6}",
        "MEMBER", "OUTCOME", "FOLDER", "SECTION", "YEAR", "FILES", "SCORE"
    );
    for entry in &report.entries {
        let _ = writeln!(
            out,
            "{:<32} {:<15} {:<32} {:<10} {:<10} {:>5} {:>6}",
            entry.member_name,
            entry.outcome.to_string(),
            entry
                .folder_name
                .as_deref()
                .or(entry.folder_id.as_deref())
                .unwrap_or("-"),
            entry.section.as_deref().unwrap_or("-"),
            entry.year.as_deref().unwrap_or("-"),
            entry
                .file_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".into()),
            entry
                .score
                .map(|s| format!("{s:.2}"))
                .unwrap_or_else(|| "-".into()),
        );
    }

    for dup in &report.duplicate_folders {
        let _ = writeln!(
            out,
            "review: folder '{}' proposed for {} members ({})",
            dup.folder_name,
            dup.member_ids.len(),
            dup.member_ids.join(", ")
        );
    }

    let c = &report.counts;
    let _ = writeln!(
        out,
        "already mapped: {}  auto matched: {}  needs review: {}  not found: {}  errors: {}",
        c.already_mapped, c.auto_matched, c.needs_review, c.not_found, c.errors
    );
    let _ = writeln!(
        out,
        "needs review or not found: {}",
        c.needs_review_or_not_found
    );

    out
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
