use std::collections::HashMap;

use chrono::{DateTime, Local};
use log::{debug, info, trace, warn};

use crate::{Config, DateStyle, Folder, FolderListing, Note};

/// Source of "now" for note dates
pub type Clock = fn() -> DateTime<Local>;

/// Holds every folder and note for the lifetime of the process.
///
/// Folders keep insertion order, and so does each folder's note list. All
/// mutation goes through the methods below; blank input and unknown ids are
/// reported through the return value and never treated as errors.
#[derive(Debug, Clone)]
pub struct NoteStore {
    /// Folders in display order
    folders: Vec<Folder>,

    /// Notes of each folder, keyed by folder id
    notes: HashMap<String, Vec<Note>>,

    /// Rendering of note dates
    date_style: DateStyle,

    clock: Clock,
}

impl NoteStore {
    /// Creates an empty store, seeded with the default folder when the
    /// configuration asks for one.
    pub fn new(config: &Config) -> Self {
        let mut store = Self {
            folders: Vec::new(),
            notes: HashMap::new(),
            date_style: config.date_style,
            clock: Local::now,
        };

        if config.seed_default_folder {
            let seed = Folder::seed(config.default_folder_name.clone());
            debug!("Seeding default folder {} ({})", seed.name, seed.id);
            store.notes.insert(seed.id.clone(), Vec::new());
            store.folders.push(seed);
        }

        store
    }

    /// Replaces the clock used for note dates
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Current date, formatted the way notes store it
    pub fn today(&self) -> String {
        self.date_style.format(&(self.clock)())
    }

    /// Appends a new folder. Returns `None` without touching the store when
    /// the name is blank.
    pub fn create_folder(&mut self, name: &str) -> Option<Folder> {
        if name.trim().is_empty() {
            debug!("Ignoring folder creation with a blank name");
            return None;
        }

        let folder = Folder::new(name.to_string());
        info!("Created folder {} ({})", folder.name, folder.id);
        self.notes.insert(folder.id.clone(), Vec::new());
        self.folders.push(folder.clone());
        Some(folder)
    }

    /// Removes a folder together with all of its notes. Default folders and
    /// unknown ids are left alone.
    pub fn delete_folder(&mut self, folder_id: &str) -> bool {
        let Some(pos) = self.folders.iter().position(|f| f.id == folder_id) else {
            debug!("Folder {} not found, nothing to delete", folder_id);
            return false;
        };

        if self.folders[pos].is_default {
            warn!("Refusing to delete default folder {}", folder_id);
            return false;
        }

        let folder = self.folders.remove(pos);
        let dropped = self.notes.remove(folder_id).map_or(0, |n| n.len());
        info!(
            "Deleted folder {} ({}) and {} note(s)",
            folder.name, folder.id, dropped
        );
        true
    }

    pub fn folder(&self, folder_id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == folder_id)
    }

    /// Folders in display order with their live note counts
    pub fn list_folders(&self) -> Vec<FolderListing> {
        self.folders
            .iter()
            .map(|folder| FolderListing {
                folder: folder.clone(),
                count: self.note_count(&folder.id),
            })
            .collect()
    }

    /// Number of non-blank notes in the folder
    pub fn note_count(&self, folder_id: &str) -> usize {
        self.notes
            .get(folder_id)
            .map_or(0, |notes| notes.iter().filter(|n| !n.is_blank()).count())
    }

    /// Non-blank notes of a folder in creation order
    pub fn list_notes(&self, folder_id: &str) -> Vec<Note> {
        self.notes
            .get(folder_id)
            .map(|notes| notes.iter().filter(|n| !n.is_blank()).cloned().collect())
            .unwrap_or_default()
    }

    /// Looks up a note, placeholders included
    pub fn note(&self, folder_id: &str, note_id: &str) -> Option<&Note> {
        self.notes
            .get(folder_id)
            .and_then(|notes| notes.iter().find(|n| n.id == note_id))
    }

    /// Appends an empty placeholder note so the editor can open before any
    /// text exists. Returns `None` for unknown folders.
    pub fn create_note(&mut self, folder_id: &str) -> Option<Note> {
        let date = self.today();
        let Some(notes) = self.notes.get_mut(folder_id) else {
            debug!("Folder {} not found, no placeholder created", folder_id);
            return None;
        };

        let note = Note::placeholder(date);
        trace!("Created placeholder {} in folder {}", note.id, folder_id);
        notes.push(note.clone());
        Some(note)
    }

    /// Inserts or replaces a note by id, keeping its position on replace.
    /// The note's date is always reset to now.
    pub fn save_note(&mut self, folder_id: &str, mut note: Note) -> bool {
        note.date = self.today();
        let Some(notes) = self.notes.get_mut(folder_id) else {
            warn!("Folder {} not found, note {} not saved", folder_id, note.id);
            return false;
        };

        match notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => {
                debug!("Updating note {} in folder {}", note.id, folder_id);
                *existing = note;
            }
            None => {
                debug!("Appending note {} to folder {}", note.id, folder_id);
                notes.push(note);
            }
        }
        true
    }

    pub fn delete_note(&mut self, folder_id: &str, note_id: &str) -> bool {
        let Some(notes) = self.notes.get_mut(folder_id) else {
            return false;
        };

        let before = notes.len();
        notes.retain(|n| n.id != note_id);
        let removed = notes.len() != before;
        if removed {
            info!("Deleted note {} from folder {}", note_id, folder_id);
        }
        removed
    }

    /// Sets the checked flag without touching the note's date
    pub fn set_checked(&mut self, folder_id: &str, note_id: &str, checked: bool) -> bool {
        let note = self
            .notes
            .get_mut(folder_id)
            .and_then(|notes| notes.iter_mut().find(|n| n.id == note_id));

        match note {
            Some(note) => {
                note.is_checked = checked;
                true
            }
            None => false,
        }
    }

    /// Drops every blank note of a folder, returning how many were removed
    pub fn purge_blank_notes(&mut self, folder_id: &str) -> usize {
        let Some(notes) = self.notes.get_mut(folder_id) else {
            return 0;
        };

        let before = notes.len();
        notes.retain(|n| !n.is_blank());
        let purged = before - notes.len();
        if purged > 0 {
            debug!("Purged {} blank note(s) from folder {}", purged, folder_id);
        }
        purged
    }

    /// All notes of a folder, placeholders included
    #[cfg(test)]
    pub(crate) fn raw_notes(&self, folder_id: &str) -> &[Note] {
        self.notes.get(folder_id).map(Vec::as_slice).unwrap_or(&[])
    }
}
