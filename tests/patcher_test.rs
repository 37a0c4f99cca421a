use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use jac_chatbot_tools::setup::patcher::{
    backup_path, patch_server_config, PatchOutcome, NEW_MODEL_LINE,
};

const OLD_MODEL_LINE: &str = "glob llm = Model(model_name='gpt-4o-mini', verbose=True);";

/// Write a server.jac with the given content into a fresh temp dir
fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("server.jac");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_patches_canonical_declaration() {
    let (_dir, path) = write_config(&format!("{}\n", OLD_MODEL_LINE));

    let outcome = patch_server_config(&path).unwrap();

    let backup = match outcome {
        PatchOutcome::Patched { backup } => backup,
        other => panic!("Expected Patched, got {:?}", other),
    };
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{}\n", NEW_MODEL_LINE)
    );
    // Backup holds the pre-patch snapshot
    assert_eq!(
        fs::read_to_string(&backup).unwrap(),
        format!("{}\n", OLD_MODEL_LINE)
    );
}

#[test]
fn test_other_lines_stay_byte_identical() {
    let content = format!(
        "import from mtllm.llm {{ Model }}\n\n{}\n\nwalker interact {{\n    can chat with `root entry;\n}}\n",
        OLD_MODEL_LINE
    );
    let (_dir, path) = write_config(&content);

    patch_server_config(&path).unwrap();

    let expected = format!(
        "import from mtllm.llm {{ Model }}\n\n{}\n\nwalker interact {{\n    can chat with `root entry;\n}}\n",
        NEW_MODEL_LINE
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_already_configured_is_a_no_op() {
    let content = format!("{}\n", NEW_MODEL_LINE);
    let (_dir, path) = write_config(&content);

    let outcome = patch_server_config(&path).unwrap();

    assert_eq!(outcome, PatchOutcome::AlreadyConfigured);
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
    assert!(!backup_path(&path).exists());
}

#[test]
fn test_rerun_after_patch_is_idempotent() {
    let (_dir, path) = write_config(&format!("{}\n", OLD_MODEL_LINE));

    assert!(matches!(
        patch_server_config(&path).unwrap(),
        PatchOutcome::Patched { .. }
    ));
    // Second run hits the marker guard and leaves the backup untouched
    assert_eq!(
        patch_server_config(&path).unwrap(),
        PatchOutcome::AlreadyConfigured
    );
    assert_eq!(
        fs::read_to_string(backup_path(&path)).unwrap(),
        format!("{}\n", OLD_MODEL_LINE)
    );
}

#[test]
fn test_missing_file_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("server.jac");

    let outcome = patch_server_config(&path).unwrap();

    assert_eq!(outcome, PatchOutcome::MissingFile);
    assert!(!path.exists());
    assert!(!backup_path(&path).exists());
}

#[test]
fn test_unrecognized_content_writes_nothing() {
    let content = "import streamlit;\n\nwalker interact {}\n";
    let (_dir, path) = write_config(content);

    let outcome = patch_server_config(&path).unwrap();

    assert_eq!(outcome, PatchOutcome::NoMatch);
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
    assert!(!backup_path(&path).exists());
}

#[test]
fn test_quote_and_spacing_variants_are_patched() {
    let content = "glob llm = Model( model_name = \"gpt-4o-mini\", verbose=True );\n";
    let (_dir, path) = write_config(content);

    let outcome = patch_server_config(&path).unwrap();

    assert!(matches!(outcome, PatchOutcome::Patched { .. }));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{}\n", NEW_MODEL_LINE)
    );
}
