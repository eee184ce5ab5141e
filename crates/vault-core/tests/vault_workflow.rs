//! Integration tests for the file toolset.
//!
//! Simulates the agent workflows the toolset serves: auditing a vault
//! layout, rewriting a note in place, and reorganizing folders one move at
//! a time.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vault_ops_core::{ErrorKind, FileToolset, ToolResponse};

fn s(path: &Path) -> &str {
    path.to_str().unwrap()
}

/// Builds `Vault/` with `Notes/a.md` and `.obsidian/config`.
fn scenario_vault(temp: &TempDir) -> PathBuf {
    let vault = temp.path().join("Vault");
    fs::create_dir_all(vault.join("Notes")).unwrap();
    fs::create_dir_all(vault.join(".obsidian")).unwrap();
    fs::write(vault.join("Notes/a.md"), "# A\n").unwrap();
    fs::write(vault.join(".obsidian/config"), "{}").unwrap();
    vault
}

#[test]
fn test_list_tree_scenario_vault() {
    let temp = TempDir::new().unwrap();
    let vault = scenario_vault(&temp);
    let tools = FileToolset::default();

    let rendered = tools.list_tree(s(&vault)).unwrap().to_string();

    assert_eq!(rendered, "Vault/\n    Notes/\n        a.md");
    assert!(!rendered.contains(".obsidian"));
}

#[test]
fn test_list_tree_hidden_git_subtree_never_listed() {
    let temp = TempDir::new().unwrap();
    let vault = scenario_vault(&temp);
    fs::create_dir_all(vault.join(".git/objects/ab")).unwrap();
    fs::write(vault.join(".git/objects/ab/cdef"), "").unwrap();
    fs::write(vault.join(".git/HEAD"), "ref").unwrap();
    let tools = FileToolset::default();

    let rendered = tools.list_tree(s(&vault)).unwrap().to_string();

    for hidden in [".git", "objects", "ab", "cdef", "HEAD"] {
        assert!(!rendered.contains(hidden), "{hidden} leaked into listing");
    }
}

#[test]
fn test_list_tree_hidden_file_keeps_siblings() {
    let temp = TempDir::new().unwrap();
    let vault = scenario_vault(&temp);
    fs::write(vault.join("Notes/.DS_Store"), "").unwrap();
    fs::write(vault.join("Notes/b.md"), "").unwrap();
    let tools = FileToolset::default();

    let rendered = tools.list_tree(s(&vault)).unwrap().to_string();

    assert!(!rendered.contains(".DS_Store"));
    assert_eq!(rendered, "Vault/\n    Notes/\n        a.md\n        b.md");
}

#[test]
fn test_list_tree_is_regenerated_each_call() {
    let temp = TempDir::new().unwrap();
    let vault = scenario_vault(&temp);
    let tools = FileToolset::default();

    let before = tools.list_tree(s(&vault)).unwrap();
    fs::write(vault.join("Notes/new.md"), "").unwrap();
    let after = tools.list_tree(s(&vault)).unwrap();

    assert_eq!(before.file_count(), 1);
    assert_eq!(after.file_count(), 2);
}

#[test]
fn test_move_file_scenario_archive() {
    let temp = TempDir::new().unwrap();
    let vault = temp.path().join("Vault");
    fs::create_dir_all(&vault).unwrap();
    fs::write(vault.join("a.md"), "original body").unwrap();
    let tools = FileToolset::default();

    let src = vault.join("a.md");
    let dest = vault.join("Archive/2024/a.md");
    let response = ToolResponse::from(tools.move_file(s(&src), s(&dest)));

    assert!(!response.is_error());
    assert_eq!(
        response.text(),
        format!("Success: Moved a.md -> {}", s(&dest))
    );
    assert!(vault.join("Archive").is_dir());
    assert!(vault.join("Archive/2024").is_dir());
    assert!(!src.exists());
    assert_eq!(tools.read_content(s(&dest)).unwrap(), "original body");
}

#[test]
fn test_move_file_conflict_leaves_source() {
    let temp = TempDir::new().unwrap();
    let vault = scenario_vault(&temp);
    fs::write(vault.join("a.md"), "root copy").unwrap();
    let tools = FileToolset::default();

    let src = vault.join("a.md");
    let dest = vault.join("Notes/a.md");
    let err = tools.move_file(s(&src), s(&dest)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(err.to_string().contains(s(&dest)));
    assert_eq!(fs::read_to_string(&src).unwrap(), "root copy");
    assert_eq!(fs::read_to_string(&dest).unwrap(), "# A\n");
}

#[test]
fn test_rewrite_note_round_trip() {
    let temp = TempDir::new().unwrap();
    let vault = scenario_vault(&temp);
    let note = vault.join("Notes/a.md");
    let tools = FileToolset::default();

    let original = tools.read_content(s(&note)).unwrap();
    let rewritten = format!("---\ntags:\n- type/note\n---\n{original}");
    let response = ToolResponse::from(tools.write_content(s(&note), &rewritten));

    assert_eq!(
        response.text(),
        format!(
            "Success: Updated the full content of a.md ({} bytes).",
            rewritten.len()
        )
    );
    assert_eq!(tools.read_content(s(&note)).unwrap(), rewritten);
}

#[test]
fn test_missing_paths_render_errors_with_path() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("ghost.md");
    let tools = FileToolset::default();

    let read = ToolResponse::from(tools.read_content(s(&missing)));
    let write = ToolResponse::from(tools.write_content(s(&missing), "boo"));
    let list = ToolResponse::from(tools.list_tree(s(&missing)));

    for response in [&read, &write, &list] {
        assert!(response.is_error());
        assert!(response.text().starts_with("Error: "));
        assert!(response.text().contains(s(&missing)));
    }
    assert!(!missing.exists());
}

#[test]
fn test_reorganize_many_files() {
    let temp = TempDir::new().unwrap();
    let vault = temp.path().join("Vault");
    fs::create_dir_all(&vault).unwrap();
    let names = ["rust.md", "tokio.md", "serde.md", "todo.md"];
    for name in names {
        fs::write(vault.join(name), name).unwrap();
    }
    let tools = FileToolset::default();

    for name in &names[..3] {
        let dest = vault.join("Areas/Programming").join(name);
        tools.move_file(s(&vault.join(name)), s(&dest)).unwrap();
    }
    tools
        .move_file(s(&vault.join("todo.md")), s(&vault.join("Inbox/ToSort/todo.md")))
        .unwrap();

    let rendered = tools.list_tree(s(&vault)).unwrap().to_string();
    let expected = [
        "Vault/",
        "    Areas/",
        "        Programming/",
        "            rust.md",
        "            serde.md",
        "            tokio.md",
        "    Inbox/",
        "        ToSort/",
        "            todo.md",
    ]
    .join("\n");
    assert_eq!(rendered, expected);
}
