//! Reconciliation shell: loads the roster and storage tree, runs the matcher,
//! and persists accepted links.
pub mod driver;
pub mod report;
pub mod store;

pub use driver::{classify_members, reconcile, ReconcileOptions};
pub use report::{
    find_duplicate_folders, render_text, DuplicateFolder, OutcomeCounts, ReconcileReport,
    ReportEntry,
};
pub use store::{MemberFolderStore, SqliteMemberStore};

use sqlx::SqlitePool;
use std::path::PathBuf;

use crate::database::member_repo;
use crate::services::config::SectionConfig;
use crate::services::matcher::Member;
use crate::services::storage::{self, TreeNode};
use crate::types::errors::CommandResult;

/// Where the storage tree listing comes from.
#[derive(Debug, Clone)]
pub enum TreeSource {
    /// Walk the section roots on the local filesystem.
    Local,
    /// Read a node listing exported by a storage provider.
    JsonFile(PathBuf),
}

impl TreeSource {
    pub fn load(&self, sections: &[SectionConfig]) -> CommandResult<Vec<TreeNode>> {
        match self {
            TreeSource::Local => storage::scan_local_tree(sections),
            TreeSource::JsonFile(path) => storage::load_tree_json(path),
        }
    }
}

/// Full run against the roster database.
///
/// Roster and tree retrieval happen before any member is processed; a failure
/// there aborts the run with nothing written.
pub async fn run_reconcile(
    pool: &SqlitePool,
    sections: &[SectionConfig],
    source: &TreeSource,
    options: ReconcileOptions,
) -> CommandResult<ReconcileReport> {
    let members: Vec<Member> = member_repo::list_members(pool)
        .await?
        .into_iter()
        .map(Member::from)
        .collect();

    let nodes = source.load(sections)?;
    let tree = storage::flatten_tree(&nodes, sections);

    let store = SqliteMemberStore::new(pool.clone());
    let report = reconcile(&members, &tree.candidates, options, &store).await?;
    Ok(report.with_warnings(tree.warnings))
}
