use log::{debug, info};

use crate::{is_blank, Folder, Navigator, NoteStore, Route};

/// A folder row as the folders screen shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRow {
    pub id: String,
    pub name: String,
    pub count: usize,
    /// Whether a delete control is offered
    pub deletable: bool,
}

/// Folder list with its add and delete dialogs.
///
/// Both dialogs are modal gates in front of a store mutation: cancelling them
/// changes nothing.
#[derive(Debug, Clone, Default)]
pub struct FoldersScreen {
    /// Name being typed in the add-folder dialog, when it is open
    add_dialog: Option<String>,

    /// Folder awaiting delete confirmation
    pending_delete: Option<Folder>,
}

impl FoldersScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, store: &NoteStore) -> Vec<FolderRow> {
        store
            .list_folders()
            .into_iter()
            .map(|listing| FolderRow {
                deletable: !listing.folder.is_default,
                id: listing.folder.id,
                name: listing.folder.name,
                count: listing.count,
            })
            .collect()
    }

    /// Opens the notes screen of a folder
    pub fn select(&self, nav: &mut dyn Navigator, folder_id: &str) {
        nav.push(Route::Notes {
            folder_id: folder_id.to_string(),
        });
    }

    pub fn open_add_dialog(&mut self) {
        self.add_dialog = Some(String::new());
    }

    pub fn is_add_dialog_open(&self) -> bool {
        self.add_dialog.is_some()
    }

    pub fn set_new_folder_name(&mut self, name: &str) {
        if let Some(buffer) = self.add_dialog.as_mut() {
            *buffer = name.to_string();
        }
    }

    /// The add button is enabled only for a non-blank name
    pub fn can_confirm_add(&self) -> bool {
        self.add_dialog.as_deref().is_some_and(|name| !is_blank(name))
    }

    /// Creates the folder typed in the dialog. A blank name leaves the dialog
    /// open and the store untouched.
    pub fn confirm_add(&mut self, store: &mut NoteStore) -> Option<Folder> {
        if !self.can_confirm_add() {
            debug!("Add folder confirmed without a usable name");
            return None;
        }

        let name = self.add_dialog.take()?;
        store.create_folder(&name)
    }

    pub fn cancel_add(&mut self) {
        self.add_dialog = None;
    }

    /// Asks for confirmation before deleting a folder. Default and unknown
    /// folders are refused.
    pub fn request_delete(&mut self, store: &NoteStore, folder_id: &str) -> bool {
        match store.folder(folder_id) {
            Some(folder) if !folder.is_default => {
                self.pending_delete = Some(folder.clone());
                true
            }
            _ => false,
        }
    }

    pub fn pending_delete(&self) -> Option<&Folder> {
        self.pending_delete.as_ref()
    }

    /// Confirmation prompt for the pending delete, if any
    pub fn delete_prompt(&self) -> Option<String> {
        self.pending_delete.as_ref().map(|folder| {
            format!(
                "Are you sure you want to delete '{}' and all its notes?",
                folder.name
            )
        })
    }

    pub fn confirm_delete(&mut self, store: &mut NoteStore) -> bool {
        match self.pending_delete.take() {
            Some(folder) => {
                info!("Deleting folder {} after confirmation", folder.name);
                store.delete_folder(&folder.id)
            }
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}
