use log::{debug, info};

use crate::{is_blank, Config, EditorTarget, Navigator, Note, NoteStore, TitlePolicy};

/// Whether the editor is filling a placeholder or changing a saved note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Creating,
    Editing,
}

/// Text editor for a single note.
///
/// The edited note always exists in the store: opening the editor for a new
/// note creates its placeholder first. Nothing reaches the store until
/// `save`, except the clean-up done by `back` and `delete`.
#[derive(Debug, Clone)]
pub struct NoteEditor {
    folder_id: String,
    note_id: String,
    mode: EditorMode,
    buffer: String,
    is_checked: bool,
    policy: TitlePolicy,
    purge_blank_on_abandon: bool,
}

impl NoteEditor {
    /// Opens the editor inside a folder. Returns `None` when the folder does
    /// not exist.
    pub fn open(
        store: &mut NoteStore,
        config: &Config,
        folder_id: &str,
        target: &EditorTarget,
    ) -> Option<Self> {
        store.folder(folder_id)?;

        let existing = match target {
            EditorTarget::Existing(id) => store.note(folder_id, id).cloned(),
            EditorTarget::Create => None,
        };

        let note = match existing {
            Some(note) => note,
            None => {
                if let EditorTarget::Existing(id) = target {
                    debug!("Note {} not found, starting a new one", id);
                }
                store.create_note(folder_id)?
            }
        };

        let (mode, buffer) = if note.is_blank() {
            (EditorMode::Creating, String::new())
        } else {
            (
                EditorMode::Editing,
                config.title_policy.editor_text(&note.title, &note.content),
            )
        };
        debug!("Editor opened on note {} ({:?})", note.id, mode);

        Some(Self {
            folder_id: folder_id.to_string(),
            note_id: note.id,
            mode,
            buffer,
            is_checked: note.is_checked,
            policy: config.title_policy,
            purge_blank_on_abandon: config.purge_blank_on_abandon,
        })
    }

    pub fn folder_id(&self) -> &str {
        &self.folder_id
    }

    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    /// Adds a line at the end of the buffer
    pub fn append_line(&mut self, line: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Save is enabled only for non-blank text
    pub fn can_save(&self) -> bool {
        !is_blank(&self.buffer)
    }

    /// Delete is offered for saved notes whose text is still there
    pub fn can_delete(&self) -> bool {
        self.mode == EditorMode::Editing && self.can_save()
    }

    /// "New Note" while the text is blank, otherwise the note's date
    pub fn header(&self, store: &NoteStore) -> String {
        if !self.can_save() {
            return "New Note".to_string();
        }

        match self.mode {
            EditorMode::Editing => store
                .note(&self.folder_id, &self.note_id)
                .map(|n| n.date.clone())
                .unwrap_or_else(|| store.today()),
            EditorMode::Creating => store.today(),
        }
    }

    /// Commits the text and leaves the editor. Blank text is refused and the
    /// editor stays open.
    pub fn save(&mut self, store: &mut NoteStore, nav: &mut dyn Navigator) -> bool {
        if !self.can_save() {
            debug!("Save refused for blank note {}", self.note_id);
            return false;
        }

        let (title, content) = self.policy.compose(&self.buffer);
        let note = Note {
            id: self.note_id.clone(),
            title,
            content,
            date: String::new(),
            is_checked: self.is_checked,
        };

        if !store.save_note(&self.folder_id, note) {
            return false;
        }
        info!("Saved note {}", self.note_id);
        self.mode = EditorMode::Editing;
        nav.pop();
        true
    }

    /// Leaves without saving. Returns whether the note was removed from the
    /// store on the way out.
    pub fn back(&mut self, store: &mut NoteStore, nav: &mut dyn Navigator) -> bool {
        let abandoned = !self.can_save() || self.mode == EditorMode::Creating;
        let purge = self.policy == TitlePolicy::SingleField || self.purge_blank_on_abandon;

        let removed = if abandoned && purge {
            store.delete_note(&self.folder_id, &self.note_id)
        } else {
            false
        };
        if removed {
            debug!("Dropped abandoned note {}", self.note_id);
        }

        nav.pop();
        removed
    }

    /// Deletes the saved note and leaves the editor
    pub fn delete(&mut self, store: &mut NoteStore, nav: &mut dyn Navigator) -> bool {
        if !self.can_delete() {
            return false;
        }

        let removed = store.delete_note(&self.folder_id, &self.note_id);
        nav.pop();
        removed
    }
}
