//! Reconciliation driver: classify every member, then write back accepted matches.

use rayon::prelude::*;

use super::report::ReconcileReport;
use super::store::MemberFolderStore;
use crate::services::matcher::{match_member, CandidateFolder, MatchOutcome, MatchResult, Member};
use crate::types::errors::{CommandError, CommandResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Compute everything, write nothing.
    pub dry_run: bool,
    /// Re-evaluate members that already have a folder.
    pub force: bool,
}

/// Pure phase: classify every member against the candidate snapshot.
///
/// Members are independent, so this fans out across the rayon pool; output
/// order matches `members`.
pub fn classify_members(
    members: &[Member],
    candidates: &[CandidateFolder],
    force: bool,
) -> Vec<MatchResult> {
    members
        .par_iter()
        .map(|member| match_member(member, candidates, force))
        .collect()
}

/// Reconcile `members` (in document order) against `candidates`.
///
/// MATCHED results are written through `store` unless `dry_run`. A failed write
/// marks only that member as ERROR; the run always completes.
///
/// Classification runs on the blocking pool so the rayon fan-out never holds
/// an async worker. The only error is a lost classification worker.
pub async fn reconcile<S: MemberFolderStore>(
    members: &[Member],
    candidates: &[CandidateFolder],
    options: ReconcileOptions,
    store: &S,
) -> CommandResult<ReconcileReport> {
    log::info!(
        "Reconciling {} members against {} candidate folders (dry_run={}, force={})",
        members.len(),
        candidates.len(),
        options.dry_run,
        options.force
    );

    let owned_members = members.to_vec();
    let owned_candidates = candidates.to_vec();
    let force = options.force;
    let mut results = tokio::task::spawn_blocking(move || {
        classify_members(&owned_members, &owned_candidates, force)
    })
    .await
    .map_err(|e| CommandError::Internal(format!("Classification worker failed: {e}")))?;

    if options.dry_run {
        log::info!("Dry run: skipping write-back");
    } else {
        write_back(&mut results, store).await;
    }

    let report = ReconcileReport::new(results, options);
    log::info!(
        "Reconcile finished: already_mapped={} matched={} needs_review={} not_found={} errors={}",
        report.counts.already_mapped,
        report.counts.auto_matched,
        report.counts.needs_review,
        report.counts.not_found,
        report.counts.errors
    );
    Ok(report)
}

async fn write_back<S: MemberFolderStore>(results: &mut [MatchResult], store: &S) {
    for result in results.iter_mut().filter(|r| r.is_applicable()) {
        let Some(folder_id) = result.folder_id.clone() else {
            continue;
        };

        match store.upsert_member_folder(&result.member_id, &folder_id).await {
            Ok(()) => {
                log::debug!("Linked member {} → folder {}", result.member_id, folder_id);
            }
            Err(e) => {
                log::error!(
                    "Failed to link member {} → folder {}: {e}",
                    result.member_id,
                    folder_id
                );
                result.outcome = MatchOutcome::Error;
                result.error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
