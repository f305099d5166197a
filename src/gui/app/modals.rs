use crate::gui::{
    settings_modal::SettingsModal,
    word_entry_modal::WordEntryModal,
};

pub struct Modals {
    pub word_entry: WordEntryModal,
    pub settings: SettingsModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { word_entry: WordEntryModal::new(), settings: SettingsModal::new() }
    }
}
