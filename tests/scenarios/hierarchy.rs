//! Scenario: Restructuring the hierarchy
//!
//! Journey: An editor moves categories around: reparenting through the
//! choice prompt, reordering siblings by dragging, and deleting a branch.
//!
//! Success Criteria:
//! - Cycles are refused with an error the user can see
//! - Drags never change a parent
//! - Deleting promotes children instead of losing them

use taxon::editor::{EditorEvent, ModeKind, ParentChoice};
use taxon::error::ErrorKind;
use taxon::infrastructure::ScriptedPrompter;
use taxon::TreeEditor;

use crate::common::*;

/// SCENARIO: A > B > C, moving A under C is a cycle; moving B to the root works
#[test]
fn scenario_reparent_refuses_cycles() {
    let mut store = abc_store();

    let err = store.reparent("A", Some("C")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WouldCreateCycle);

    store.reparent("B", None).unwrap();
    assert!(store.children_of(Some("A")).is_empty());
    assert_eq!(store.children_of(None), vec!["A", "B"]);
    assert_eq!(store.children_of(Some("B")), vec!["C"]);
}

/// SCENARIO: The reparent prompt never offers the node or its descendants
#[test]
fn scenario_reparent_prompt_excludes_subtree() {
    let taxonomy = taxonomy_of(
        &[("A", None), ("B", Some("A")), ("C", Some("B")), ("D", None)],
        &[],
    );
    let mut editor = TreeEditor::new(taxonomy);
    let mut prompter = ScriptedPrompter::answering(["D"]);

    let frame = editor.handle_event_with(EditorEvent::StartReparentDialog, &mut prompter);

    assert_eq!(prompter.asked(), ["Move 'A' under"]);
    assert_eq!(prompter.offered(), [vec!["".to_string(), "D".to_string()]]);
    assert_eq!(frame.mode, ModeKind::Browsing);
    assert_eq!(editor.taxonomy().categories.parent_of("A"), Some("D"));
    // moved node is revealed and stays selected
    assert_eq!(keys(&editor), vec!["D", "A"]);
    assert_eq!(editor.selected_row().unwrap().key, "A");
}

/// SCENARIO: A reparent answer that would loop is reported, not applied
#[test]
fn scenario_reparent_answer_into_subtree_is_reported() {
    let mut editor = TreeEditor::new(taxonomy_of(
        &[("A", None), ("B", Some("A")), ("C", Some("B"))],
        &[],
    ));
    let before = editor.taxonomy().clone();

    let frame = drive(
        &mut editor,
        [
            EditorEvent::StartReparentDialog,
            EditorEvent::ReparentChosen(Some(ParentChoice::Category("C".into()))),
        ],
    );

    assert_eq!(editor.taxonomy(), &before);
    assert_eq!(frame.mode, ModeKind::Browsing);
    let status = frame.status.unwrap();
    assert_eq!(status.error, Some(ErrorKind::WouldCreateCycle));
}

/// SCENARIO: Cancelling the prompt changes nothing
#[test]
fn scenario_reparent_cancel_is_silent() {
    let mut editor = TreeEditor::new(abc_taxonomy());
    let before = editor.taxonomy().clone();
    let mut prompter = ScriptedPrompter::new([None::<String>]);

    let frame = editor.handle_event_with(EditorEvent::StartReparentDialog, &mut prompter);

    assert_eq!(editor.taxonomy(), &before);
    assert_eq!(frame.mode, ModeKind::Browsing);
    assert!(frame.status.is_none());
}

/// SCENARIO: X and Y under P; dragging X onto Y swaps them, dragging onto
/// another parent's child does nothing
#[test]
fn scenario_drag_reorders_within_parent_only() {
    let mut editor = TreeEditor::new(taxonomy_of(
        &[
            ("P", None),
            ("X", Some("P")),
            ("Y", Some("P")),
            ("Q", None),
            ("Z", Some("Q")),
        ],
        &[],
    ));
    editor.expand_all();
    assert_eq!(keys(&editor), vec!["P", "X", "Y", "Q", "Z"]);

    let x = row_of(&editor, "X");
    let y = row_of(&editor, "Y");
    drive(&mut editor, [EditorEvent::DragStart(x), EditorEvent::DragEnd(y)]);
    assert_eq!(editor.taxonomy().categories.children_of(Some("P")), vec!["Y", "X"]);
    assert_eq!(editor.selected_row().unwrap().key, "X");

    let before = editor.taxonomy().clone();
    let x = row_of(&editor, "X");
    let z = row_of(&editor, "Z");
    let frame = drive(&mut editor, [EditorEvent::DragStart(x), EditorEvent::DragEnd(z)]);
    assert_eq!(editor.taxonomy(), &before);
    assert_eq!(editor.taxonomy().categories.parent_of("X"), Some("P"));
    assert_eq!(frame.mode, ModeKind::Browsing);
}

/// SCENARIO: Deleting a branch promotes its children to the root
#[test]
fn scenario_delete_promotes_children() {
    let mut editor = TreeEditor::new(taxonomy_of(
        &[("A", None), ("B", Some("A")), ("C", Some("B"))],
        &[("notes", &["B"])],
    ));
    editor.expand_all();
    assert_eq!(row_of(&editor, "B"), 1);

    let frame = drive(&mut editor, [EditorEvent::NavigateDown, EditorEvent::Delete]);
    assert_eq!(frame.status.unwrap().message, "Deleted 'B'");
    assert_eq!(editor.taxonomy().categories.children_of(None), vec!["A", "C"]);
    assert!(editor.taxonomy().contents.get("notes").unwrap().categories.is_empty());
    assert!(editor.selected_index().unwrap() < editor.rows().len());
}

/// SCENARIO: Delete on an empty tree is a no-op
#[test]
fn scenario_delete_on_empty_tree() {
    let mut editor = TreeEditor::new(Default::default());
    let frame = drive(&mut editor, [EditorEvent::Delete, EditorEvent::NavigateDown]);
    assert_eq!(frame.mode, ModeKind::Browsing);
    assert!(frame.status.is_none());
    assert_eq!(editor.selected_index(), None);
    assert_eq!(frame.lines.len(), 1);
}

fn abc_taxonomy() -> taxon::Taxonomy {
    taxonomy_of(&[("A", None), ("B", Some("A")), ("C", Some("B"))], &[])
}
