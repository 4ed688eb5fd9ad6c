use super::*;
use crate::services::storage::flatten_tree;
use std::fs;
use tempfile::TempDir;

fn create_section_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = dir.path();

    fs::create_dir_all(root.join("2023/Ana Garcia/fotos")).unwrap();
    fs::write(root.join("2023/Ana Garcia/ficha.pdf"), "x").unwrap();
    fs::write(root.join("2023/Ana Garcia/autorizacion.pdf"), "x").unwrap();
    fs::write(root.join("2023/Ana Garcia/fotos/nested.jpg"), "x").unwrap();
    fs::create_dir_all(root.join("2024/Marta S")).unwrap();

    // Files at the year level are not candidates.
    fs::write(root.join("2024/listado.xlsx"), "x").unwrap();

    dir
}

fn section(tag: &str, root: &Path) -> SectionConfig {
    SectionConfig {
        tag: tag.to_string(),
        root_id: Some(root.to_string_lossy().to_string()),
    }
}

#[test]
fn test_scan_local_tree_counts_direct_files_only() {
    let dir = create_section_dir();
    let sections = vec![section("Troop", dir.path())];

    let nodes = scan_local_tree(&sections).unwrap();
    let tree = flatten_tree(&nodes, &sections);

    assert_eq!(tree.candidates.len(), 2);
    let ana = tree
        .candidates
        .iter()
        .find(|c| c.name == "Ana Garcia")
        .unwrap();
    assert_eq!(ana.year_tag, "2023");
    assert_eq!(ana.file_count, 2);

    let marta = tree.candidates.iter().find(|c| c.name == "Marta S").unwrap();
    assert_eq!(marta.file_count, 0);
    assert_eq!(marta.section_tag, "Troop");
}

#[test]
fn test_scan_local_tree_missing_root_is_error() {
    let sections = vec![section("Troop", Path::new("/nonexistent/scout/drive"))];
    let result = scan_local_tree(&sections);

    assert!(matches!(result, Err(CommandError::Storage(_))));
}

#[test]
fn test_scan_local_tree_skips_unconfigured_sections() {
    let sections = vec![SectionConfig {
        tag: "Crew".to_string(),
        root_id: None,
    }];

    assert!(scan_local_tree(&sections).unwrap().is_empty());
}

#[test]
fn test_count_direct_files_reports_unreadable_folder() {
    let dir = create_section_dir();

    assert_eq!(count_direct_files(&dir.path().join("2023/Ana Garcia")).unwrap(), 2);
    assert!(count_direct_files(&dir.path().join("2023/Gone")).is_err());
}

#[cfg(unix)]
#[test]
fn test_scan_local_tree_skips_unreadable_year() {
    use std::os::unix::fs::PermissionsExt;

    let dir = create_section_dir();
    let locked = dir.path().join("2023");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Permission bits do not bind a privileged user.
    let enforced = fs::read_dir(&locked).is_err();

    let sections = vec![section("Troop", dir.path())];
    let result = scan_local_tree(&sections);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let nodes = result.unwrap();
    let tree = flatten_tree(&nodes, &sections);
    assert!(tree.candidates.iter().any(|c| c.name == "Marta S"));
    if enforced {
        assert!(!tree.candidates.iter().any(|c| c.name == "Ana Garcia"));
    }
}
