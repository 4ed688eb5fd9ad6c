pub mod tree;
pub mod walker;

pub use tree::{flatten_tree, load_tree_json, CandidateTree, TreeNode};
pub use walker::scan_local_tree;
