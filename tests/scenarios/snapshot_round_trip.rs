//! Scenario: Saving and reopening a taxonomy
//!
//! Journey: An editor opens the sample site, restructures it, saves, and
//! opens the file again later.
//!
//! Success Criteria:
//! - What was on screen before saving is what comes back
//! - Broken files are refused with the file named in the error

use std::fs;

use taxon::domain::ports::TaxonomyRepository;
use taxon::editor::EditorEvent;
use taxon::infrastructure::{sample_taxonomy, JsonTaxonomyRepository};
use taxon::{TaxonError, TreeEditor};

use crate::common::*;

/// SCENARIO: Edit the sample, save, reload, same tree
#[test]
fn scenario_edit_save_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site").join("taxonomy.json");
    let repo = JsonTaxonomyRepository::new();

    let mut editor = TreeEditor::new(sample_taxonomy().unwrap());
    editor.expand_all();
    let staff = row_of(&editor, "Staff");
    let contact = row_of(&editor, "Contact");
    drive(
        &mut editor,
        [EditorEvent::DragStart(contact), EditorEvent::DragEnd(staff)],
    );
    assert_eq!(
        editor.taxonomy().categories.children_of(Some("About")),
        vec!["Contact", "Staff", "History"]
    );

    repo.save(editor.taxonomy(), &path).unwrap();
    let reloaded = repo.load(&path).unwrap();

    let mut reopened = TreeEditor::new(reloaded);
    reopened.expand_all();
    assert_eq!(keys(&reopened), keys(&editor));
    assert_eq!(reopened.taxonomy().contents, editor.taxonomy().contents);
}

/// SCENARIO: Opening a file that does not exist yet starts empty
#[test]
fn scenario_missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let taxonomy = JsonTaxonomyRepository::new()
        .load(&dir.path().join("new.json"))
        .unwrap();
    assert!(taxonomy.is_empty());
}

/// SCENARIO: A hand-edited file with a parent loop is refused
#[test]
fn scenario_cyclic_file_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{
            "categories": [
                {"name": "A", "parent": "B", "sort_order_index": 0},
                {"name": "B", "parent": "A", "sort_order_index": 0}
            ],
            "contents": []
        }"#,
    )
    .unwrap();

    let err = JsonTaxonomyRepository::new().load(&path).unwrap_err();
    assert!(matches!(err, TaxonError::InvalidSnapshot { .. }));
    assert!(err.to_string().contains("broken.json"));
}

/// SCENARIO: Content filed under a category that is not in the file
#[test]
fn scenario_dangling_content_link_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dangling.json");
    fs::write(
        &path,
        r#"{"categories": [{"name": "Home"}], "contents": [{"name": "news", "categories": ["Gone"]}]}"#,
    )
    .unwrap();

    let err = JsonTaxonomyRepository::new().load(&path).unwrap_err();
    assert!(matches!(err, TaxonError::InvalidSnapshot { .. }));
}
