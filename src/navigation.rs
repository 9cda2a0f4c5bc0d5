//! Screen routes and the navigation stack.
//!
//! Routes have a string form (`folders`, `notes/{folderId}`,
//! `note_editor/{folderId}/{noteId}`) where the note id `new` stands for a
//! note that does not exist yet.
use std::{fmt, str::FromStr};

use log::debug;

use crate::{EditorTarget, NoteError};

/// Note id used in route strings for a note that is about to be created
pub const NEW_NOTE_SENTINEL: &str = "new";

/// A screen together with the parameters it was opened with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Folders,
    Notes {
        folder_id: String,
    },
    NoteEditor {
        folder_id: String,
        target: EditorTarget,
    },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Folders => write!(f, "folders"),
            Route::Notes { folder_id } => write!(f, "notes/{}", folder_id),
            Route::NoteEditor { folder_id, target } => {
                let note_id = match target {
                    EditorTarget::Create => NEW_NOTE_SENTINEL,
                    EditorTarget::Existing(id) => id.as_str(),
                };
                write!(f, "note_editor/{}/{}", folder_id, note_id)
            }
        }
    }
}

impl FromStr for Route {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NoteError::InvalidRoute {
            route: s.to_string(),
        };
        let parts: Vec<&str> = s.split('/').collect();
        if parts.iter().skip(1).any(|p| p.is_empty()) {
            return Err(invalid());
        }

        match parts.as_slice() {
            ["folders"] => Ok(Route::Folders),
            ["notes", folder_id] => Ok(Route::Notes {
                folder_id: folder_id.to_string(),
            }),
            ["note_editor", folder_id, note_id] => Ok(Route::NoteEditor {
                folder_id: folder_id.to_string(),
                target: if *note_id == NEW_NOTE_SENTINEL {
                    EditorTarget::Create
                } else {
                    EditorTarget::Existing(note_id.to_string())
                },
            }),
            _ => Err(invalid()),
        }
    }
}

/// Push/pop navigation as seen by the screens
pub trait Navigator {
    fn push(&mut self, route: Route);

    /// Leaves the current screen. The root screen is never popped.
    fn pop(&mut self) -> Option<Route>;

    fn current(&self) -> &Route;
}

/// Stack of routes whose bottom is always the folders screen
#[derive(Debug, Clone)]
pub struct RouteStack {
    stack: Vec<Route>,
}

impl Default for RouteStack {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteStack {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Folders],
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Navigator for RouteStack {
    fn push(&mut self, route: Route) {
        debug!("Navigating to {}", route);
        self.stack.push(route);
    }

    fn pop(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        debug!("Back to {}", self.current());
        popped
    }

    fn current(&self) -> &Route {
        // the root is never popped
        &self.stack[self.stack.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_strings_round_trip() {
        for raw in ["folders", "notes/abc", "note_editor/abc/def", "note_editor/abc/new"] {
            let route: Route = raw.parse().unwrap();
            assert_eq!(route.to_string(), raw);
        }
    }

    #[test]
    fn new_sentinel_maps_to_create() {
        let route: Route = "note_editor/f1/new".parse().unwrap();
        assert_eq!(
            route,
            Route::NoteEditor {
                folder_id: "f1".to_string(),
                target: EditorTarget::Create,
            }
        );
    }

    #[test]
    fn malformed_routes_are_rejected() {
        for raw in ["", "notes", "notes/", "note_editor/f1", "settings", "notes/a/b"] {
            assert!(
                matches!(raw.parse::<Route>(), Err(NoteError::InvalidRoute { .. })),
                "{raw} should not parse"
            );
        }
    }

    #[test]
    fn root_is_never_popped() {
        let mut nav = RouteStack::new();
        assert!(nav.pop().is_none());
        nav.push(Route::Notes {
            folder_id: "f1".to_string(),
        });
        assert_eq!(nav.depth(), 2);
        assert!(nav.pop().is_some());
        assert_eq!(nav.current(), &Route::Folders);
    }
}
