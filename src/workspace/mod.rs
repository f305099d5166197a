//! The editing workspace the append operation targets: which note is
//! currently open, and how its content is read and written.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::TangonoteError;

/// Handle to the currently open note. A view without a file is a scratch
/// note: it can be active, but it cannot be appended to.
#[derive(Debug, Clone)]
pub struct NoteView {
    pub title: String,
    pub file: Option<PathBuf>,
}

impl NoteView {
    pub fn is_file_backed(&self) -> bool {
        self.file.is_some()
    }
}

/// Tracks the single active view. Opening a note or a scratch view replaces
/// whatever was active before.
#[derive(Default)]
pub struct Workspace {
    active: Option<NoteView>,
}

impl Workspace {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn open_note(&mut self, path: PathBuf) {
        let title =
            path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("Untitled").to_string();
        self.active = Some(NoteView { title, file: Some(path) });
    }

    pub fn open_scratch(&mut self) {
        self.active = Some(NoteView { title: "Scratch".to_string(), file: None });
    }

    pub fn close_active(&mut self) {
        self.active = None;
    }

    pub fn active_view(&self) -> Option<&NoteView> {
        self.active.as_ref()
    }
}

/// Whole-document storage: one read and one write, both over the full
/// content. The two calls are not a transaction.
pub trait DocumentStore {
    fn read(&self, path: &Path) -> Result<String, TangonoteError>;
    fn write(&mut self, path: &Path, content: &str) -> Result<(), TangonoteError>;
}

/// Filesystem-backed store used by the running app.
#[derive(Default)]
pub struct FsStore;

impl DocumentStore for FsStore {
    fn read(&self, path: &Path) -> Result<String, TangonoteError> {
        Ok(fs::read_to_string(path)?)
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<(), TangonoteError> {
        Ok(fs::write(path, content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_active_view() {
        assert!(Workspace::new().active_view().is_none());
    }

    #[test]
    fn opening_a_note_activates_it() {
        let mut workspace = Workspace::new();
        workspace.open_note(PathBuf::from("/notes/daily.md"));

        let view = workspace.active_view().unwrap();
        assert_eq!(view.title, "daily");
        assert!(view.is_file_backed());
    }

    #[test]
    fn a_scratch_view_is_not_file_backed() {
        let mut workspace = Workspace::new();
        workspace.open_scratch();

        let view = workspace.active_view().unwrap();
        assert_eq!(view.title, "Scratch");
        assert!(!view.is_file_backed());
    }

    #[test]
    fn opening_replaces_the_active_view() {
        let mut workspace = Workspace::new();
        workspace.open_scratch();
        workspace.open_note(PathBuf::from("vocab.md"));

        assert!(workspace.active_view().unwrap().is_file_backed());
    }

    #[test]
    fn closing_clears_the_active_view() {
        let mut workspace = Workspace::new();
        workspace.open_note(PathBuf::from("vocab.md"));
        workspace.close_active();

        assert!(workspace.active_view().is_none());
    }

    #[test]
    fn fs_store_replaces_whole_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.md");
        let mut store = FsStore;

        store.write(&path, "Notes:\n").unwrap();
        assert_eq!(store.read(&path).unwrap(), "Notes:\n");

        store.write(&path, "replaced").unwrap();
        assert_eq!(store.read(&path).unwrap(), "replaced");
    }
}
