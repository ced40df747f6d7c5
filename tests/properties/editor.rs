//! Property tests for the editor state machine.
//!
//! Random event streams must never panic, never break the store and always
//! leave a selection that points at a visible row.

use proptest::prelude::*;

use taxon::domain::services::flatten::flatten;
use taxon::editor::{ActivationToken, EditorEvent, MenuOption, ParentChoice};
use taxon::infrastructure::sample_taxonomy;
use taxon::TreeEditor;

use crate::category_store::check_invariants;

const NAMES: &[&str] = &["Home", "About", "Staff", "Choir", "Baptism", "Nowhere", ""];
const CONTENT_NAMES: &[&str] = &["welcome", "bulletin", "missing"];

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(NAMES).prop_map(str::to_string),
        "[a-zA-Z ]{0,8}",
    ]
}

fn row() -> impl Strategy<Value = usize> {
    0usize..20
}

fn keyboard_event() -> impl Strategy<Value = EditorEvent> {
    prop_oneof![
        Just(EditorEvent::NavigateUp),
        Just(EditorEvent::NavigateDown),
        Just(EditorEvent::Expand),
        Just(EditorEvent::Collapse),
        Just(EditorEvent::StartRename),
        Just(EditorEvent::Backspace),
        Just(EditorEvent::Submit),
        Just(EditorEvent::CancelEdit),
        Just(EditorEvent::AdvanceField),
        Just(EditorEvent::Delete),
    ]
}

fn dialog_event() -> impl Strategy<Value = EditorEvent> {
    prop_oneof![
        Just(EditorEvent::StartReparentDialog),
        Just(EditorEvent::StartAddCategory),
        any::<char>().prop_map(EditorEvent::InsertChar),
        text().prop_map(EditorEvent::CommitText),
        proptest::option::of(text()).prop_map(|choice| {
            EditorEvent::ReparentChosen(choice.map(|key| ParentChoice::from_key(&key)))
        }),
        proptest::sample::select(CONTENT_NAMES)
            .prop_map(|name| EditorEvent::StartContentEdit(name.to_string())),
        (0usize..4, text()).prop_map(|(i, value)| EditorEvent::CommitContentField(i, value)),
    ]
}

fn mouse_event() -> impl Strategy<Value = EditorEvent> {
    prop_oneof![
        row().prop_map(EditorEvent::PrimaryClick),
        row().prop_map(EditorEvent::SecondaryClick),
        row().prop_map(EditorEvent::DragStart),
        row().prop_map(EditorEvent::DragEnd),
        (row(), proptest::sample::select(MenuOption::ALL.to_vec())).prop_map(|(row, option)| {
            EditorEvent::Activate(ActivationToken::MenuItem { row, option })
        }),
        row().prop_map(|i| EditorEvent::Activate(ActivationToken::Row(i))),
    ]
}

fn event() -> impl Strategy<Value = EditorEvent> {
    prop_oneof![
        3 => keyboard_event(),
        2 => dialog_event(),
        2 => mouse_event(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the editor survives any event stream with its invariants intact.
    #[test]
    fn property_event_streams_keep_editor_consistent(
        events in proptest::collection::vec(event(), 0..60)
    ) {
        let mut editor = TreeEditor::new(sample_taxonomy().unwrap());
        for event in events {
            let frame = editor.handle_event(event);

            let taxonomy = editor.taxonomy();
            check_invariants(&taxonomy.categories);
            for item in taxonomy.contents.iter() {
                for category in &item.categories {
                    prop_assert!(taxonomy.categories.contains(category));
                }
            }

            prop_assert_eq!(editor.rows(), &flatten(&taxonomy.categories, editor.expanded())[..]);
            match editor.selected_index() {
                Some(index) => prop_assert!(index < editor.rows().len()),
                None => prop_assert!(editor.rows().is_empty()),
            }
            prop_assert_eq!(frame.mode, editor.mode().kind());
            let highlighted = frame.lines.iter().filter(|l| l.highlighted).count();
            prop_assert!(highlighted <= 1);
        }
    }

    /// PROPERTY: cancelling right after starting any edit changes nothing.
    #[test]
    fn property_cancel_is_never_a_mutation(
        prefix in proptest::collection::vec(event(), 0..20),
        start in prop_oneof![
            Just(EditorEvent::StartRename),
            Just(EditorEvent::StartReparentDialog),
            Just(EditorEvent::StartAddCategory),
            Just(EditorEvent::StartContentEdit("welcome".to_string())),
            row().prop_map(EditorEvent::SecondaryClick),
            row().prop_map(EditorEvent::DragStart),
        ]
    ) {
        let mut editor = TreeEditor::new(sample_taxonomy().unwrap());
        for event in prefix {
            editor.handle_event(event);
        }
        editor.handle_event(EditorEvent::CancelEdit);

        let before = editor.taxonomy().clone();
        editor.handle_event(start);
        let frame = editor.handle_event(EditorEvent::CancelEdit);
        prop_assert_eq!(editor.taxonomy(), &before);
        prop_assert!(frame.status.is_none());
    }
}
