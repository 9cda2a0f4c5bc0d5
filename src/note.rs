//! Core data structures for the pocketnotes application.
//!
//! A `Folder` groups notes; a `Note` belongs to whichever folder's list holds
//! it and carries no folder id of its own.
use uuid::Uuid;

use crate::is_blank;

/// A named container of notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    /// Unique identifier, fixed at creation
    pub id: String,
    /// Display name
    pub name: String,
    /// The seed folder; cannot be deleted
    pub is_default: bool,
}

impl Folder {
    /// Creates a regular, deletable folder with a fresh id
    pub fn new(name: String) -> Self {
        Folder {
            id: Uuid::new_v4().to_string(),
            name,
            is_default: false,
        }
    }

    /// Creates the undeletable seed folder
    pub fn seed(name: String) -> Self {
        Folder {
            is_default: true,
            ..Folder::new(name)
        }
    }
}

/// A folder as displayed, with the live count of its visible notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderListing {
    pub folder: Folder,
    pub count: usize,
}

/// Represents a single note in our system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Unique identifier for the note
    pub id: String,
    /// Derived from the editor text by the active title policy
    pub title: String,
    /// Note body
    pub content: String,
    /// Formatted snapshot of the last save
    pub date: String,
    /// Checked notes are listed without emphasis
    pub is_checked: bool,
}

impl Note {
    /// Creates an empty note that only exists so the editor has something to open
    pub fn placeholder(date: String) -> Self {
        Note {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            content: String::new(),
            date,
            is_checked: false,
        }
    }

    /// A blank note has nothing worth listing
    pub fn is_blank(&self) -> bool {
        is_blank(&self.title) && is_blank(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_blank_and_unique() {
        let a = Note::placeholder("Oct 16, 2026".to_string());
        let b = Note::placeholder("Oct 16, 2026".to_string());
        assert!(a.is_blank());
        assert!(!a.is_checked);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn title_only_note_is_not_blank() {
        let mut note = Note::placeholder(String::new());
        note.title = "Groceries".to_string();
        assert!(!note.is_blank());
    }

    #[test]
    fn seed_folder_is_default() {
        assert!(Folder::seed("Notes".to_string()).is_default);
        assert!(!Folder::new("Work".to_string()).is_default);
    }
}
