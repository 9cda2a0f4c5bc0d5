use log::debug;

use crate::{
    content_preview, first_line, Config, EditorTarget, Navigator, Note, NoteStore, Route, TitlePolicy,
};

const PREVIEW_LEN: usize = 60;

/// A note row as the notes screen shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: String,
    pub title: String,
    /// Body preview; only shown by the title+body layout
    pub preview: Option<String>,
    pub date: String,
    pub is_checked: bool,
    /// Rendered bold
    pub emphasized: bool,
}

/// The notes of one folder
#[derive(Debug, Clone)]
pub struct NotesScreen {
    folder_id: String,
    /// Layout of the rows, fixed for the life of the screen
    policy: TitlePolicy,
}

impl NotesScreen {
    /// Opens the screen for a folder, or `None` when the folder is gone
    pub fn open(store: &NoteStore, config: &Config, folder_id: &str) -> Option<Self> {
        store.folder(folder_id)?;
        Some(Self {
            folder_id: folder_id.to_string(),
            policy: config.title_policy,
        })
    }

    pub fn folder_id(&self) -> &str {
        &self.folder_id
    }

    /// Folder name for the screen header
    pub fn title(&self, store: &NoteStore) -> String {
        store
            .folder(&self.folder_id)
            .map(|f| f.name.clone())
            .unwrap_or_default()
    }

    pub fn policy(&self) -> TitlePolicy {
        self.policy
    }

    pub fn rows(&self, store: &NoteStore) -> Vec<NoteRow> {
        store
            .list_notes(&self.folder_id)
            .into_iter()
            .map(|note| match self.policy {
                TitlePolicy::SingleField => NoteRow {
                    title: first_line(&note.content).to_string(),
                    preview: None,
                    emphasized: false,
                    id: note.id,
                    date: note.date,
                    is_checked: note.is_checked,
                },
                TitlePolicy::TitleBody => NoteRow {
                    preview: Some(content_preview(&note.content, PREVIEW_LEN)),
                    emphasized: !note.is_checked,
                    id: note.id,
                    title: note.title,
                    date: note.date,
                    is_checked: note.is_checked,
                },
            })
            .collect()
    }

    /// Creates a placeholder note and opens the editor on it in one step
    pub fn new_note(&self, store: &mut NoteStore, nav: &mut dyn Navigator) -> Option<Note> {
        let note = store.create_note(&self.folder_id)?;
        debug!("Opening editor on new placeholder {}", note.id);
        nav.push(Route::NoteEditor {
            folder_id: self.folder_id.clone(),
            target: EditorTarget::Existing(note.id.clone()),
        });
        Some(note)
    }

    pub fn select(&self, nav: &mut dyn Navigator, note_id: &str) {
        nav.push(Route::NoteEditor {
            folder_id: self.folder_id.clone(),
            target: EditorTarget::Existing(note_id.to_string()),
        });
    }

    /// Flips the checked flag of a listed note
    pub fn toggle_checked(&self, store: &mut NoteStore, note_id: &str) -> bool {
        let Some(checked) = store.note(&self.folder_id, note_id).map(|n| n.is_checked) else {
            return false;
        };
        store.set_checked(&self.folder_id, note_id, !checked)
    }

    pub fn back(&self, nav: &mut dyn Navigator) {
        nav.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteStack;

    fn setup() -> (NoteStore, String) {
        let mut store = NoteStore::new(&Config::default());
        let folder = store.create_folder("Work").unwrap();
        (store, folder.id)
    }

    fn save(store: &mut NoteStore, folder_id: &str, policy: TitlePolicy, text: &str) -> Note {
        let placeholder = store.create_note(folder_id).unwrap();
        let (title, content) = policy.compose(text);
        let note = Note {
            title,
            content,
            ..placeholder
        };
        store.save_note(folder_id, note.clone());
        note
    }

    fn open(store: &NoteStore, policy: TitlePolicy, folder_id: &str) -> Option<NotesScreen> {
        let config = Config {
            title_policy: policy,
            ..Config::default()
        };
        NotesScreen::open(store, &config, folder_id)
    }

    #[test]
    fn unknown_folder_does_not_open() {
        let (store, _) = setup();
        assert!(open(&store, TitlePolicy::SingleField, "missing").is_none());
    }

    #[test]
    fn new_note_creates_placeholder_and_navigates() {
        let (mut store, folder_id) = setup();
        let screen = open(&store, TitlePolicy::SingleField, &folder_id).unwrap();
        let mut nav = RouteStack::new();

        let note = screen.new_note(&mut store, &mut nav).unwrap();
        assert_eq!(
            nav.current(),
            &Route::NoteEditor {
                folder_id: folder_id.clone(),
                target: EditorTarget::Existing(note.id.clone()),
            }
        );
        assert!(store.note(&folder_id, &note.id).is_some());
        assert!(screen.rows(&store).is_empty());
    }

    #[test]
    fn single_field_rows_show_first_line() {
        let (mut store, folder_id) = setup();
        save(&mut store, &folder_id, TitlePolicy::SingleField, "Buy milk\nand bread");
        let screen = open(&store, TitlePolicy::SingleField, &folder_id).unwrap();

        let rows = screen.rows(&store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Buy milk");
        assert!(rows[0].preview.is_none());
        assert!(!rows[0].emphasized);
    }

    #[test]
    fn title_body_rows_emphasize_unchecked() {
        let (mut store, folder_id) = setup();
        let first = save(&mut store, &folder_id, TitlePolicy::TitleBody, "Trip\npack bags");
        save(&mut store, &folder_id, TitlePolicy::TitleBody, "Call mom");
        let screen = open(&store, TitlePolicy::TitleBody, &folder_id).unwrap();
        assert_eq!(screen.policy(), TitlePolicy::TitleBody);

        assert!(screen.toggle_checked(&mut store, &first.id));
        let rows = screen.rows(&store);
        assert_eq!(rows[0].title, "Trip");
        assert_eq!(rows[0].preview.as_deref(), Some("pack bags"));
        assert!(rows[0].is_checked);
        assert!(!rows[0].emphasized);
        assert_eq!(rows[1].title, "Call mom");
        assert_eq!(rows[1].preview.as_deref(), Some(""));
        assert!(rows[1].emphasized);

        assert!(!screen.toggle_checked(&mut store, "missing"));
    }

    #[test]
    fn rows_follow_the_policy_the_screen_was_opened_with() {
        let (mut store, folder_id) = setup();
        save(&mut store, &folder_id, TitlePolicy::TitleBody, "Trip\npack bags");

        let body = open(&store, TitlePolicy::TitleBody, &folder_id).unwrap().rows(&store);
        assert_eq!(body[0].title, "Trip");
        assert_eq!(body[0].preview.as_deref(), Some("pack bags"));
        assert!(body[0].emphasized);

        let single = open(&store, TitlePolicy::SingleField, &folder_id).unwrap().rows(&store);
        assert_eq!(single[0].title, "pack bags");
        assert!(single[0].preview.is_none());
        assert!(!single[0].emphasized);
    }
}
