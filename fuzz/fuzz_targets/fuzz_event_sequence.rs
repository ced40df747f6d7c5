#![no_main]

use libfuzzer_sys::fuzz_target;
use taxon::editor::{EditorEvent, ParentChoice};
use taxon::infrastructure::sample_taxonomy;
use taxon::TreeEditor;

const NAMES: [&str; 4] = ["Home", "About", "Staff", ""];

fn decode(op: u8, arg: u8) -> EditorEvent {
    let row = (arg % 24) as usize;
    let name = NAMES[(arg as usize) % NAMES.len()].to_string();
    match op % 20 {
        0 => EditorEvent::NavigateUp,
        1 => EditorEvent::NavigateDown,
        2 => EditorEvent::Expand,
        3 => EditorEvent::Collapse,
        4 => EditorEvent::StartRename,
        5 => EditorEvent::InsertChar(arg as char),
        6 => EditorEvent::Backspace,
        7 => EditorEvent::Submit,
        8 => EditorEvent::CancelEdit,
        9 => EditorEvent::CommitText(name),
        10 => EditorEvent::StartReparentDialog,
        11 => EditorEvent::ReparentChosen(Some(ParentChoice::from_key(&name))),
        12 => EditorEvent::StartAddCategory,
        13 => EditorEvent::StartContentEdit("welcome".to_string()),
        14 => EditorEvent::AdvanceField,
        15 => EditorEvent::Delete,
        16 => EditorEvent::PrimaryClick(row),
        17 => EditorEvent::SecondaryClick(row),
        18 => EditorEvent::DragStart(row),
        _ => EditorEvent::DragEnd(row),
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(taxonomy) = sample_taxonomy() else {
        return;
    };
    let mut editor = TreeEditor::new(taxonomy);
    for pair in data.chunks_exact(2) {
        let frame = editor.handle_event(decode(pair[0], pair[1]));
        if let Some(index) = editor.selected_index() {
            assert!(index < editor.rows().len());
        }
        assert_eq!(frame.mode, editor.mode().kind());
    }
});
