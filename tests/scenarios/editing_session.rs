//! Scenario: An editing session
//!
//! Journey: An editor renames categories inline, fixes a content item
//! through the form, adds a category and finishes with quit.
//!
//! Success Criteria:
//! - Content links follow a renamed category
//! - Rejected edits report an error kind and change nothing
//! - Cancelling is never an error

use taxon::editor::{ActivationToken, EditMode, EditorEvent, MenuOption, ModeKind};
use taxon::error::ErrorKind;
use taxon::infrastructure::ScriptedPrompter;
use taxon::TreeEditor;

use crate::common::*;

fn home_and_about() -> TreeEditor {
    TreeEditor::new(taxonomy_of(
        &[("Home", None), ("About", None), ("Staff", Some("About"))],
        &[("news", &["Home"])],
    ))
}

/// SCENARIO: Renaming Home to Front moves the news link along
#[test]
fn scenario_rename_rewrites_content_links() {
    let mut editor = home_and_about();

    let mut events = vec![EditorEvent::StartRename];
    events.extend(std::iter::repeat(EditorEvent::Backspace).take(4));
    events.extend(typed("Front"));
    events.push(EditorEvent::Submit);
    let frame = drive(&mut editor, events);

    let contents = &editor.taxonomy().contents;
    assert_eq!(
        contents.linked_to("Front").into_iter().collect::<Vec<_>>(),
        vec!["news"]
    );
    assert!(contents.linked_to("Home").is_empty());
    assert_eq!(frame.status.unwrap().message, "Renamed 'Home' to 'Front'");
    assert_eq!(editor.selected_row().unwrap().key, "Front");
}

/// SCENARIO: Renaming onto an existing name is refused
#[test]
fn scenario_rename_duplicate_is_reported() {
    let mut editor = home_and_about();
    let before = editor.taxonomy().clone();

    let frame = drive(
        &mut editor,
        [
            EditorEvent::StartRename,
            EditorEvent::CommitText("About".into()),
        ],
    );

    assert_eq!(editor.taxonomy(), &before);
    assert_eq!(frame.mode, ModeKind::Browsing);
    assert_eq!(frame.status.unwrap().error, Some(ErrorKind::DuplicateName));
}

/// SCENARIO: Moving away while renaming discards the buffer
#[test]
fn scenario_rename_cancelled_by_navigation() {
    let mut editor = home_and_about();
    let before = editor.taxonomy().clone();

    let mut events = vec![EditorEvent::StartRename];
    events.extend(typed("x"));
    events.push(EditorEvent::NavigateDown);
    let frame = drive(&mut editor, events);

    assert_eq!(editor.taxonomy(), &before);
    assert_eq!(frame.mode, ModeKind::Browsing);
    assert!(frame.status.is_none());
}

/// SCENARIO: A content commit naming an unknown category is rejected whole
#[test]
fn scenario_content_commit_with_unknown_category() {
    let mut editor = home_and_about();
    let before = editor.taxonomy().clone();

    let mut events = vec![
        EditorEvent::StartContentEdit("news".into()),
        EditorEvent::AdvanceField,
    ];
    events.extend(typed(",Nowhere"));
    let frame = drive(&mut editor, events);
    assert_eq!(frame.mode, ModeKind::EditingContentField);

    let frame = editor.handle_event(EditorEvent::Submit);
    assert_eq!(editor.taxonomy(), &before);
    assert_eq!(frame.mode, ModeKind::Browsing);
    assert_eq!(frame.status.unwrap().error, Some(ErrorKind::UnknownCategory));
}

/// SCENARIO: Renaming and archiving a content item through the form
#[test]
fn scenario_content_form_saves_item() {
    let mut editor = home_and_about();

    let frame = drive(
        &mut editor,
        [
            EditorEvent::Activate(ActivationToken::ContentEdit("news".into())),
            EditorEvent::CommitContentField(0, "headlines".into()),
            EditorEvent::CommitContentField(1, "Home, About".into()),
            EditorEvent::CommitContentField(2, "TRUE".into()),
            EditorEvent::Submit,
        ],
    );

    let contents = &editor.taxonomy().contents;
    assert!(contents.get("news").is_none());
    let item = contents.get("headlines").unwrap();
    assert!(item.archived);
    assert_eq!(item.categories_label(), "About,Home");
    assert_eq!(frame.status.unwrap().message, "Saved 'headlines'");
}

/// SCENARIO: Adding a child through the text prompt
#[test]
fn scenario_add_category_under_selection() {
    let mut editor = home_and_about();
    let mut prompter = ScriptedPrompter::answering(["Events"]);

    let frame = editor.handle_event_with(EditorEvent::StartAddCategory, &mut prompter);

    assert_eq!(prompter.asked(), ["New category under 'Home'"]);
    assert_eq!(frame.status.unwrap().message, "Added 'Events'");
    assert_eq!(keys(&editor), vec!["Home", "Events", "About"]);
    assert_eq!(editor.selected_row().unwrap().key, "Events");
}

/// SCENARIO: Dismissing the add prompt with a blank answer
///
/// Journey: press `a`, leave the dialog empty and confirm.
/// Success Criteria: nothing is added and no error is shown.
#[test]
fn scenario_blank_add_answer_cancels_quietly() {
    let mut editor = home_and_about();
    let mut prompter = ScriptedPrompter::answering(["   "]);

    let frame = editor.handle_event_with(EditorEvent::StartAddCategory, &mut prompter);

    assert!(frame.status.is_none());
    assert_eq!(frame.mode, ModeKind::Browsing);
    assert_eq!(editor.taxonomy().categories.len(), 3);
}

/// SCENARIO: Committing a blank name typed into the editor is an error
#[test]
fn scenario_commit_blank_category_is_reported() {
    let mut editor = home_and_about();

    let frame = editor.handle_event(EditorEvent::StartAddCategory);
    assert!(frame.prompt.is_some());
    let frame = editor.handle_event(EditorEvent::CommitText("   ".into()));

    assert_eq!(frame.status.unwrap().error, Some(ErrorKind::EmptyName));
    assert_eq!(editor.taxonomy().categories.len(), 3);
}

/// SCENARIO: Context menu rename
#[test]
fn scenario_context_menu_rename() {
    let mut editor = home_and_about();

    let frame = editor.handle_event(EditorEvent::SecondaryClick(1));
    assert_eq!(frame.mode, ModeKind::MenuOpen);
    let rename = frame
        .lines
        .iter()
        .find_map(|line| match &line.token {
            Some(token @ ActivationToken::MenuItem {
                option: MenuOption::Rename,
                ..
            }) => Some(token.clone()),
            _ => None,
        })
        .unwrap();

    editor.handle_event(EditorEvent::Activate(rename));
    assert!(matches!(
        editor.mode(),
        EditMode::RenamingNode { target, .. } if target == "About"
    ));

    editor.handle_event(EditorEvent::CommitText("Parish".into()));
    assert_eq!(
        editor.taxonomy().categories.children_of(Some("Parish")),
        vec!["Staff"]
    );
}

/// SCENARIO: Quit ends the session; later input is ignored
#[test]
fn scenario_quit_is_final() {
    let mut editor = home_and_about();
    let before = editor.taxonomy().clone();

    let frame = drive(&mut editor, [EditorEvent::StartRename, EditorEvent::Quit]);
    assert!(frame.done);
    assert!(editor.is_done());

    let frame = editor.handle_event(EditorEvent::Delete);
    assert!(frame.done);
    assert_eq!(editor.taxonomy(), &before);
}
