//! Local filesystem backend for the storage tree.
//! Walks each section root with `walkdir`, two levels deep (year, person).

use std::path::Path;
use walkdir::WalkDir;

use super::tree::TreeNode;
use crate::services::config::SectionConfig;
use crate::types::errors::{CommandError, CommandResult};

/// List every folder under the configured section roots.
///
/// Folder ids are paths; each section root keeps the identifier exactly as
/// configured so [`super::flatten_tree`] can find it. Sections without a root
/// are left to the flattener to report. A missing root is an error; anything
/// unreadable below it is logged and skipped.
pub fn scan_local_tree(sections: &[SectionConfig]) -> CommandResult<Vec<TreeNode>> {
    let mut nodes = Vec::new();

    for section in sections {
        let Some(root_id) = section.root_id.as_deref() else {
            continue;
        };
        let root = Path::new(root_id);
        if !root.is_dir() {
            return Err(CommandError::Storage(format!(
                "Root for section '{}' is not a directory: {}",
                section.tag,
                root.display()
            )));
        }

        nodes.push(TreeNode {
            folder_id: root_id.to_string(),
            name: section.tag.clone(),
            parent_id: None,
            file_count: 0,
        });

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(2)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable folder under {}: {e}", root.display());
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            let parent_id = if entry.depth() == 1 {
                root_id.to_string()
            } else {
                match path.parent() {
                    Some(p) => p.to_string_lossy().to_string(),
                    None => continue,
                }
            };
            let file_count = if entry.depth() == 2 {
                match count_direct_files(path) {
                    Ok(count) => count,
                    Err(e) => {
                        log::warn!("Skipping unreadable folder {}: {e}", path.display());
                        continue;
                    }
                }
            } else {
                0
            };

            nodes.push(TreeNode {
                folder_id: path.to_string_lossy().to_string(),
                name: entry.file_name().to_string_lossy().to_string(),
                parent_id: Some(parent_id),
                file_count,
            });
        }
    }

    log::debug!("Local storage scan listed {} folders", nodes.len());
    Ok(nodes)
}

fn count_direct_files(folder: &Path) -> CommandResult<u32> {
    let mut count = 0u32;
    for entry in std::fs::read_dir(folder)? {
        match entry {
            Ok(e) if e.file_type().map(|t| t.is_file()).unwrap_or(false) => {
                count = count.saturating_add(1);
            }
            Ok(_) => {}
            Err(e) => log::warn!("Skipping unreadable entry in {}: {e}", folder.display()),
        }
    }
    Ok(count)
}

#[cfg(test)]
#[path = "tests/walker_tests.rs"]
mod tests;
