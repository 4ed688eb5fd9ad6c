//! Flattening of the `section → year → person` folder hierarchy into match candidates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::services::config::SectionConfig;
use crate::services::matcher::CandidateFolder;
use crate::types::errors::CommandResult;

/// One folder as listed by a storage provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub folder_id: String,
    pub name: String,
    pub parent_id: Option<String>,
    /// Direct non-folder children.
    #[serde(default)]
    pub file_count: u32,
}

/// Candidate snapshot for one run plus any configuration warnings.
#[derive(Debug, Clone, Default)]
pub struct CandidateTree {
    pub candidates: Vec<CandidateFolder>,
    pub warnings: Vec<String>,
}

/// Build candidates from a flat node listing.
///
/// Only nodes exactly two levels below a configured section root become
/// candidates; the intermediate level supplies the year tag. Sections without
/// a root contribute nothing and are reported as warnings.
pub fn flatten_tree(nodes: &[TreeNode], sections: &[SectionConfig]) -> CandidateTree {
    let mut children: HashMap<&str, Vec<&TreeNode>> = HashMap::new();
    for node in nodes {
        if let Some(parent) = node.parent_id.as_deref() {
            children.entry(parent).or_default().push(node);
        }
    }

    let mut tree = CandidateTree::default();

    for section in sections {
        let Some(root_id) = section.root_id.as_deref() else {
            let warning = format!(
                "Section '{}' has no storage root configured, skipped",
                section.tag
            );
            log::warn!("{warning}");
            tree.warnings.push(warning);
            continue;
        };

        let before = tree.candidates.len();
        for year in children.get(root_id).into_iter().flatten() {
            for person in children.get(year.folder_id.as_str()).into_iter().flatten() {
                tree.candidates.push(CandidateFolder {
                    id: person.folder_id.clone(),
                    name: person.name.clone(),
                    section_tag: section.tag.clone(),
                    year_tag: year.name.clone(),
                    file_count: person.file_count,
                });
            }
        }
        log::info!(
            "Section '{}': {} candidate folders",
            section.tag,
            tree.candidates.len() - before
        );
    }

    tree
}

/// Load a pre-materialized node listing exported by a storage provider.
pub fn load_tree_json(path: &Path) -> CommandResult<Vec<TreeNode>> {
    let raw = std::fs::read_to_string(path)?;
    let nodes: Vec<TreeNode> = serde_json::from_str(&raw)?;
    Ok(nodes)
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
