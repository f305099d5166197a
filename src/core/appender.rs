use super::errors::TangonoteError;
use crate::workspace::{DocumentStore, Workspace};

/// Append `text` to the note behind the workspace's active view.
///
/// The active view is resolved from the workspace on every call, never
/// cached. The write replaces the whole document with `current + "\n" +
/// text`; nothing guards against the file changing between the read and the
/// write, so a concurrent external edit is lost (last writer wins).
pub fn append_to_active_note(
    workspace: &Workspace,
    store: &mut impl DocumentStore,
    text: &str,
) -> Result<(), TangonoteError> {
    let view = workspace.active_view().ok_or(TangonoteError::NoActiveView)?;
    let file = view.file.as_ref().ok_or(TangonoteError::ViewNotFileBacked)?;

    let current = store.read(file)?;
    store.write(file, &format!("{}\n{}", current, text))
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        path::{Path, PathBuf},
    };

    use super::*;
    use crate::core::{format::format_word_record, models::WordRecord};

    #[derive(Default)]
    struct MemoryStore {
        documents: HashMap<PathBuf, String>,
        writes: usize,
    }

    impl DocumentStore for MemoryStore {
        fn read(&self, path: &Path) -> Result<String, TangonoteError> {
            self.documents.get(path).cloned().ok_or_else(|| {
                TangonoteError::Io(Box::new(std::io::Error::from(std::io::ErrorKind::NotFound)))
            })
        }

        fn write(&mut self, path: &Path, content: &str) -> Result<(), TangonoteError> {
            self.writes += 1;
            self.documents.insert(path.to_path_buf(), content.to_string());
            Ok(())
        }
    }

    fn workspace_with_note(store: &mut MemoryStore, path: &str, content: &str) -> Workspace {
        store.documents.insert(PathBuf::from(path), content.to_string());
        let mut workspace = Workspace::new();
        workspace.open_note(PathBuf::from(path));
        workspace
    }

    #[test]
    fn fails_without_an_active_view() {
        let mut store = MemoryStore::default();
        let workspace = Workspace::new();

        let result = append_to_active_note(&workspace, &mut store, "text");

        assert!(matches!(result, Err(TangonoteError::NoActiveView)));
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn fails_when_the_view_has_no_file() {
        let mut store = MemoryStore::default();
        let mut workspace = Workspace::new();
        workspace.open_scratch();

        let result = append_to_active_note(&workspace, &mut store, "text");

        assert!(matches!(result, Err(TangonoteError::ViewNotFileBacked)));
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn appends_with_a_single_separating_newline() {
        let mut store = MemoryStore::default();
        let workspace = workspace_with_note(&mut store, "notes.md", "existing");

        append_to_active_note(&workspace, &mut store, "added").unwrap();

        assert_eq!(store.documents[Path::new("notes.md")], "existing\nadded");
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn appends_a_formatted_record_to_a_note() {
        let mut store = MemoryStore::default();
        let workspace = workspace_with_note(&mut store, "notes.md", "Notes:\n");

        let record = WordRecord {
            word: "run".to_string(),
            meaning: "走る".to_string(),
            example: "I run every day.".to_string(),
            example_translation: "私は毎日走ります。".to_string(),
        };
        append_to_active_note(&workspace, &mut store, &format_word_record(&record)).unwrap();

        assert_eq!(
            store.documents[Path::new("notes.md")],
            "Notes:\n\n\n## run\n走る\n\n---\n\nI run every day.\n私は毎日走ります。\n"
        );
    }

    #[test]
    fn all_empty_fields_still_append_the_skeleton() {
        let mut store = MemoryStore::default();
        let workspace = workspace_with_note(&mut store, "notes.md", "");

        let block = format_word_record(&WordRecord::default());
        append_to_active_note(&workspace, &mut store, &block).unwrap();

        assert_eq!(store.documents[Path::new("notes.md")], "\n\n## \n\n\n---\n\n\n\n");
        assert_eq!(store.writes, 1);
    }
}
