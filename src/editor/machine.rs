//! Tree editor state machine
//!
//! `TreeEditor` owns the taxonomy, the set of expanded categories, the
//! flattened rows and the current mode. Every input goes through
//! [`TreeEditor::handle_event`], which applies at most one mutation through
//! the [`Taxonomy`], re-flattens and returns a fresh frame.
//!
//! Failed mutations never leave a mode half open: the error is published as
//! the status line and the editor is back in `Browsing`.

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::domain::entities::VisibleRow;
use crate::domain::ports::{ChoiceOption, PromptRequest, Prompter, ROOT_CHOICE_KEY};
use crate::domain::services::flatten::{flatten, position_of, visible_ancestor};
use crate::domain::services::Taxonomy;
use crate::editor::content_form::ContentForm;
use crate::editor::event::{ActivationToken, EditorEvent, MenuOption, ParentChoice};
use crate::editor::render::{project, EditorView, RenderOptions, RenderOutput};
use crate::editor::state::{EditMode, PendingPrompt, StatusLine};
use crate::error::TreeError;

/// Interactive editor over a [`Taxonomy`]
#[derive(Debug, Clone)]
pub struct TreeEditor {
    taxonomy: Taxonomy,
    expanded: BTreeSet<String>,
    /// Cached output of `flatten`, rebuilt after every mutation attempt
    rows: Vec<VisibleRow>,
    /// Index into `rows`; meaningless while `rows` is empty
    selected: usize,
    mode: EditMode,
    status: Option<StatusLine>,
    done: bool,
    options: RenderOptions,
}

impl TreeEditor {
    /// Create an editor with every category collapsed and the first row selected
    pub fn new(taxonomy: Taxonomy) -> Self {
        let mut editor = Self {
            taxonomy,
            expanded: BTreeSet::new(),
            rows: Vec::new(),
            selected: 0,
            mode: EditMode::Browsing,
            status: None,
            done: false,
            options: RenderOptions::default(),
        };
        editor.refresh();
        editor
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn into_taxonomy(self) -> Taxonomy {
        self.taxonomy
    }

    pub fn rows(&self) -> &[VisibleRow] {
        &self.rows
    }

    /// Selected row index, `None` on an empty tree
    pub fn selected_index(&self) -> Option<usize> {
        (self.selected < self.rows.len()).then_some(self.selected)
    }

    pub fn selected_row(&self) -> Option<&VisibleRow> {
        self.rows.get(self.selected)
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn expanded(&self) -> &BTreeSet<String> {
        &self.expanded
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    /// True once `Quit` was handled
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Expand every category that has children
    pub fn expand_all(&mut self) {
        self.expanded = self
            .taxonomy
            .categories
            .names()
            .filter(|name| self.taxonomy.categories.has_children(name))
            .map(str::to_string)
            .collect();
        self.refresh();
    }

    /// Project the current state without handling an event
    pub fn render(&self) -> RenderOutput {
        let view = EditorView {
            taxonomy: &self.taxonomy,
            rows: &self.rows,
            selected: self.selected_index(),
            mode: &self.mode,
            status: self.status.as_ref(),
            done: self.done,
        };
        project(view, self.pending_request(), &self.options)
    }

    /// Apply one event and return the resulting frame
    pub fn handle_event(&mut self, event: EditorEvent) -> RenderOutput {
        self.status = None;
        if self.done {
            return self.render();
        }

        let event = match event {
            EditorEvent::Activate(token) => resolve_token(token),
            other => other,
        };
        debug!(
            "event=editor_input mode={:?} input={:?}",
            self.mode.kind(),
            event
        );

        if event == EditorEvent::Quit {
            info!("event=editor_quit mode={:?}", self.mode.kind());
            self.mode = EditMode::Browsing;
            self.done = true;
            return self.render();
        }

        let mode = std::mem::take(&mut self.mode);
        self.mode = match mode {
            EditMode::Browsing => self.on_browsing(event),
            EditMode::RenamingNode { target, buffer } => self.on_renaming(target, buffer, event),
            EditMode::EditingContentField(form) => self.on_content_form(form, event),
            EditMode::MenuOpen { row } => self.on_menu(row, event),
            EditMode::Dragging { source } => self.on_dragging(source, event),
            EditMode::Prompting(pending) => self.on_prompting(pending, event),
        };
        self.render()
    }

    /// Answer the pending prompt, if any, through `prompter`.
    ///
    /// A cancelled prompt is handled like `CancelEdit`, and so is a blank
    /// answer to a text prompt. `CommitText` with a blank name still
    /// reports `EmptyName`.
    pub fn answer_prompt(&mut self, prompter: &mut dyn Prompter) -> RenderOutput {
        let Some(request) = self.pending_request() else {
            return self.render();
        };
        let answer = request.ask(prompter);
        let event = match (&self.mode, answer) {
            (EditMode::Prompting(PendingPrompt::Reparent { .. }), Some(key)) => {
                EditorEvent::ReparentChosen(Some(ParentChoice::from_key(&key)))
            }
            (EditMode::Prompting(PendingPrompt::Reparent { .. }), None) => {
                EditorEvent::ReparentChosen(None)
            }
            (_, Some(text)) if text.trim().is_empty() => EditorEvent::CancelEdit,
            (_, Some(text)) => EditorEvent::CommitText(text),
            (_, None) => EditorEvent::CancelEdit,
        };
        self.handle_event(event)
    }

    /// Handle `event`, answering a prompt it opens right away
    pub fn handle_event_with(
        &mut self,
        event: EditorEvent,
        prompter: &mut dyn Prompter,
    ) -> RenderOutput {
        let output = self.handle_event(event);
        if output.prompt.is_some() {
            self.answer_prompt(prompter)
        } else {
            output
        }
    }

    /// Request describing the value the editor is suspended on
    pub fn pending_request(&self) -> Option<PromptRequest> {
        let EditMode::Prompting(pending) = &self.mode else {
            return None;
        };
        let store = &self.taxonomy.categories;
        let request = match pending {
            PendingPrompt::Reparent { target } => {
                let mut options = vec![ChoiceOption::new(ROOT_CHOICE_KEY, "(top level)")];
                options.extend(store.names().map(|name| ChoiceOption::new(name, name)));
                let mut excluding = store.descendants_of(target);
                excluding.insert(target.clone());
                PromptRequest::Choice {
                    title: format!("Move '{}' under", target),
                    options,
                    excluding,
                }
            }
            PendingPrompt::AddCategory { parent } => PromptRequest::Text {
                title: match parent {
                    Some(parent) => format!("New category under '{}'", parent),
                    None => "New top-level category".to_string(),
                },
                default: String::new(),
            },
        };
        Some(request)
    }

    // ------------------------------------------------------------------------
    // Mode handlers. Each consumes the current mode and returns the next one.
    // ------------------------------------------------------------------------

    fn on_browsing(&mut self, event: EditorEvent) -> EditMode {
        match event {
            EditorEvent::NavigateUp => self.move_selection(false),
            EditorEvent::NavigateDown => self.move_selection(true),
            EditorEvent::Expand => self.expand_selected(),
            EditorEvent::Collapse => self.collapse_selected(),
            EditorEvent::StartRename => {
                if let Some(row) = self.selected_row() {
                    let target = row.key.clone();
                    return EditMode::RenamingNode {
                        buffer: target.clone(),
                        target,
                    };
                }
            }
            EditorEvent::StartReparentDialog => {
                if let Some(row) = self.selected_row() {
                    return EditMode::Prompting(PendingPrompt::Reparent {
                        target: row.key.clone(),
                    });
                }
            }
            EditorEvent::StartAddCategory => {
                let parent = self.selected_row().map(|row| row.key.clone());
                return EditMode::Prompting(PendingPrompt::AddCategory { parent });
            }
            EditorEvent::StartContentEdit(name) => match self.taxonomy.contents.get(&name) {
                Some(item) => return EditMode::EditingContentField(ContentForm::from_item(item)),
                None => self.reject(TreeError::not_found(&name)),
            },
            EditorEvent::Delete => self.delete_selected(),
            EditorEvent::PrimaryClick(index) => self.click_row(index),
            EditorEvent::SecondaryClick(index) => {
                if index < self.rows.len() {
                    self.selected = index;
                    return EditMode::MenuOpen { row: index };
                }
            }
            EditorEvent::DragStart(index) => {
                if index < self.rows.len() {
                    self.selected = index;
                    return EditMode::Dragging { source: index };
                }
            }
            other => debug!("event=input_ignored mode=browsing input={:?}", other),
        }
        EditMode::Browsing
    }

    fn on_renaming(&mut self, target: String, mut buffer: String, event: EditorEvent) -> EditMode {
        match event {
            EditorEvent::InsertChar(c) => buffer.push(c),
            EditorEvent::Backspace => {
                buffer.pop();
            }
            EditorEvent::Submit => {
                self.commit_rename(&target, &buffer);
                return EditMode::Browsing;
            }
            EditorEvent::CommitText(text) => {
                self.commit_rename(&target, &text);
                return EditMode::Browsing;
            }
            EditorEvent::PrimaryClick(index)
                if self.rows.get(index).is_some_and(|row| row.key == target) => {}
            EditorEvent::CancelEdit
            | EditorEvent::PrimaryClick(_)
            | EditorEvent::SecondaryClick(_)
            | EditorEvent::DragStart(_)
            | EditorEvent::NavigateUp
            | EditorEvent::NavigateDown
            | EditorEvent::Expand
            | EditorEvent::Collapse => {
                debug!("event=rename_cancelled target={}", target);
                return EditMode::Browsing;
            }
            other => debug!("event=input_ignored mode=renaming input={:?}", other),
        }
        EditMode::RenamingNode { target, buffer }
    }

    fn on_content_form(&mut self, mut form: ContentForm, event: EditorEvent) -> EditMode {
        match event {
            EditorEvent::InsertChar(c) => form.insert_char(c),
            EditorEvent::Backspace => form.backspace(),
            EditorEvent::AdvanceField => form.advance(),
            EditorEvent::FocusField(index) => {
                form.focus(index);
            }
            EditorEvent::CommitContentField(index, value) => {
                if !form.set_field(index, value) {
                    debug!("event=content_field_ignored index={}", index);
                }
            }
            EditorEvent::Submit => {
                self.commit_content(&form);
                return EditMode::Browsing;
            }
            EditorEvent::CancelEdit => {
                debug!("event=content_edit_cancelled name={}", form.original);
                return EditMode::Browsing;
            }
            other => debug!("event=input_ignored mode=content_form input={:?}", other),
        }
        EditMode::EditingContentField(form)
    }

    fn on_menu(&mut self, row: usize, event: EditorEvent) -> EditMode {
        match event {
            EditorEvent::MenuSelect(MenuOption::Rename) => {
                if let Some(target) = self.rows.get(row).map(|r| r.key.clone()) {
                    self.selected = row;
                    return EditMode::RenamingNode {
                        buffer: target.clone(),
                        target,
                    };
                }
            }
            EditorEvent::MenuSelect(MenuOption::Delete) => {
                if row < self.rows.len() {
                    self.selected = row;
                    self.delete_selected();
                }
            }
            EditorEvent::SecondaryClick(index) if index < self.rows.len() => {
                self.selected = index;
                return EditMode::MenuOpen { row: index };
            }
            other => debug!("event=menu_closed row={} input={:?}", row, other),
        }
        EditMode::Browsing
    }

    fn on_dragging(&mut self, source: usize, event: EditorEvent) -> EditMode {
        match event {
            EditorEvent::DragEnd(dest) => self.finish_drag(source, dest),
            EditorEvent::DragStart(index) if index < self.rows.len() => {
                self.selected = index;
                return EditMode::Dragging { source: index };
            }
            other => debug!("event=drag_cancelled source={} input={:?}", source, other),
        }
        EditMode::Browsing
    }

    fn on_prompting(&mut self, pending: PendingPrompt, event: EditorEvent) -> EditMode {
        match (pending, event) {
            (_, EditorEvent::CancelEdit) | (PendingPrompt::Reparent { .. }, EditorEvent::ReparentChosen(None)) => {
                debug!("event=prompt_cancelled");
                EditMode::Browsing
            }
            (PendingPrompt::Reparent { target }, EditorEvent::ReparentChosen(Some(choice))) => {
                self.apply_reparent(&target, &choice);
                EditMode::Browsing
            }
            (PendingPrompt::Reparent { target }, EditorEvent::CommitText(key)) => {
                self.apply_reparent(&target, &ParentChoice::from_key(&key));
                EditMode::Browsing
            }
            (PendingPrompt::AddCategory { parent }, EditorEvent::CommitText(name)) => {
                self.add_category(parent.as_deref(), &name);
                EditMode::Browsing
            }
            (pending, other) => {
                debug!("event=input_ignored mode=prompting input={:?}", other);
                EditMode::Prompting(pending)
            }
        }
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    fn move_selection(&mut self, down: bool) {
        if self.rows.is_empty() {
            return;
        }
        if down {
            if self.selected + 1 < self.rows.len() {
                self.selected += 1;
            }
        } else {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    fn expand_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if row.has_children && !row.is_expanded {
            let key = row.key.clone();
            self.expanded.insert(key);
            self.refresh();
        }
    }

    fn collapse_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if row.has_children && row.is_expanded {
            let key = row.key.clone();
            self.expanded.remove(&key);
            self.refresh();
        } else if let Some(parent) = visible_ancestor(&self.rows, self.selected) {
            self.selected = parent;
        }
    }

    fn click_row(&mut self, index: usize) {
        let Some(row) = self.rows.get(index) else {
            return;
        };
        self.selected = index;
        if row.has_children {
            let key = row.key.clone();
            if !self.expanded.remove(&key) {
                self.expanded.insert(key);
            }
            self.refresh();
        }
    }

    // ------------------------------------------------------------------------
    // Mutations. Each one reports its outcome and re-flattens.
    // ------------------------------------------------------------------------

    fn commit_rename(&mut self, target: &str, text: &str) {
        if text == target {
            debug!("event=rename_unchanged target={}", target);
            return;
        }
        match self.taxonomy.rename_category(target, text) {
            Ok(stored) if stored == target => {}
            Ok(stored) => {
                if self.expanded.remove(target) {
                    self.expanded.insert(stored.clone());
                }
                self.refresh();
                self.select_name(&stored);
                info!("event=rename_committed from={} to={}", target, stored);
                self.status = Some(StatusLine::info(format!(
                    "Renamed '{}' to '{}'",
                    target, stored
                )));
            }
            Err(err) => self.reject(err),
        }
    }

    fn commit_content(&mut self, form: &ContentForm) {
        let item = form.to_item();
        let name = item.name.clone();
        match self.taxonomy.replace_content(&form.original, item) {
            Ok(()) => {
                info!(
                    "event=content_committed previous={} name={}",
                    form.original, name
                );
                self.status = Some(StatusLine::info(format!("Saved '{}'", name)));
            }
            Err(err) => self.reject(err),
        }
    }

    fn apply_reparent(&mut self, target: &str, choice: &ParentChoice) {
        let parent = choice.as_parent();
        match self.taxonomy.reparent_category(target, parent) {
            Ok(()) => {
                self.reveal(target);
                self.select_name(target);
                info!(
                    "event=reparent_committed name={} parent={:?}",
                    target, parent
                );
                let message = match parent {
                    Some(parent) => format!("Moved '{}' under '{}'", target, parent),
                    None => format!("Moved '{}' to the top level", target),
                };
                self.status = Some(StatusLine::info(message));
            }
            Err(err) => self.reject(err),
        }
    }

    fn add_category(&mut self, parent: Option<&str>, name: &str) {
        match self.taxonomy.add_category(name, parent) {
            Ok(stored) => {
                self.reveal(&stored);
                self.select_name(&stored);
                info!("event=category_created name={} parent={:?}", stored, parent);
                self.status = Some(StatusLine::info(format!("Added '{}'", stored)));
            }
            Err(err) => self.reject(err),
        }
    }

    fn finish_drag(&mut self, source: usize, dest: usize) {
        if source == dest {
            return;
        }
        let (Some(source_row), Some(dest_row)) = (self.rows.get(source), self.rows.get(dest))
        else {
            return;
        };
        let store = &self.taxonomy.categories;
        let parent = store.parent_of(&source_row.key);
        if parent != store.parent_of(&dest_row.key) {
            debug!(
                "event=drag_discarded source={} dest={} reason=different_parent",
                source_row.key, dest_row.key
            );
            return;
        }

        let name = source_row.key.clone();
        let parent = parent.map(str::to_string);
        let Some(position) = store
            .children_of(parent.as_deref())
            .iter()
            .position(|sibling| *sibling == dest_row.key)
        else {
            return;
        };
        match self
            .taxonomy
            .reorder_category(&name, position, parent.as_deref())
        {
            Ok(()) => {
                self.refresh();
                self.select_name(&name);
                info!("event=reorder_committed name={} position={}", name, position);
            }
            Err(err) => self.reject(err),
        }
    }

    fn delete_selected(&mut self) {
        let Some(key) = self.selected_row().map(|row| row.key.clone()) else {
            debug!("event=delete_ignored reason=empty_tree");
            return;
        };
        match self.taxonomy.remove_category(&key) {
            Ok(()) => {
                self.expanded.remove(&key);
                self.refresh();
                info!("event=delete_committed name={}", key);
                self.status = Some(StatusLine::info(format!("Deleted '{}'", key)));
            }
            Err(err) => self.reject(err),
        }
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn reject(&mut self, err: TreeError) {
        warn!("event=edit_rejected kind={:?} error={}", err.kind(), err);
        self.refresh();
        self.status = Some(StatusLine::error(&err));
    }

    /// Expand every ancestor of `name` and re-flatten
    fn reveal(&mut self, name: &str) {
        let ancestors = self.taxonomy.categories.ancestors_of(name);
        self.expanded.extend(ancestors);
        self.refresh();
    }

    fn select_name(&mut self, name: &str) {
        if let Some(index) = position_of(&self.rows, name) {
            self.selected = index;
        }
    }

    /// Rebuild the rows and clamp the selection
    fn refresh(&mut self) {
        self.expanded
            .retain(|name| self.taxonomy.categories.contains(name));
        self.rows = flatten(&self.taxonomy.categories, &self.expanded);
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
    }
}

fn resolve_token(token: ActivationToken) -> EditorEvent {
    match token {
        ActivationToken::Row(index) => EditorEvent::PrimaryClick(index),
        ActivationToken::MenuItem { option, .. } => EditorEvent::MenuSelect(option),
        ActivationToken::ContentEdit(name) => EditorEvent::StartContentEdit(name),
        ActivationToken::ContentField(index) => EditorEvent::FocusField(index),
    }
}
