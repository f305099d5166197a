mod modals;

use eframe::egui;
use modals::Modals;

use super::{
    notices::Notices,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
    word_entry_modal::FormOutcome,
};
use crate::{
    core::{
        appender::append_to_active_note,
        format::format_word_record,
        WordRecord,
    },
    workspace::{
        DocumentStore,
        FsStore,
        Workspace,
    },
};

const ADD_WORD_SHORTCUT: egui::KeyboardShortcut = egui::KeyboardShortcut::new(
    egui::Modifiers::COMMAND.plus(egui::Modifiers::SHIFT),
    egui::Key::A,
);

pub struct TangonoteApp {
    // Host state
    workspace: Workspace,
    store: FsStore,
    preview: Option<String>,

    // UI State
    theme: Theme,
    notices: Notices,

    // Modals
    modals: Modals,
}

impl TangonoteApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self {
            workspace: Workspace::new(),
            store: FsStore,
            preview: None,
            theme: Theme::default(),
            notices: Notices::default(),
            modals: Modals::default(),
        };

        set_theme(&cc.egui_ctx, app.theme.clone());

        app
    }
}

impl eframe::App for TangonoteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| i.consume_shortcut(&ADD_WORD_SHORTCUT)) {
            self.open_word_entry();
        }

        let active_title = self.workspace.active_view().map(|view| view.title.clone());
        if let Some(action) = TopBar::show(
            ctx,
            &mut self.modals.settings,
            &ADD_WORD_SHORTCUT,
            active_title.as_deref(),
        ) {
            match action {
                TopBarAction::AddWord => self.open_word_entry(),
                TopBarAction::OpenNote => self.open_note_dialog(),
                TopBarAction::NewScratchNote => {
                    self.workspace.open_scratch();
                    self.preview = None;
                }
                TopBarAction::CloseNote => {
                    self.workspace.close_active();
                    self.preview = None;
                }
            }
        }

        self.central_panel(ctx);

        if let Some(outcome) = self.modals.word_entry.show(ctx) {
            match outcome {
                FormOutcome::Submitted(record) => self.add_word(&record),
                // Dismissal ends the sequence silently.
                FormOutcome::Cancelled => {}
            }
        }

        self.modals.settings.show(ctx);
        self.notices.show(ctx, &self.theme);
    }
}

impl TangonoteApp {
    fn open_word_entry(&mut self) {
        // There is a single dialog instance; a second trigger while it is up
        // is a no-op.
        if !self.modals.word_entry.is_open() {
            self.modals.word_entry.open();
        }
    }

    fn add_word(&mut self, record: &WordRecord) {
        let block = format_word_record(record);

        match append_to_active_note(&self.workspace, &mut self.store, &block) {
            Ok(()) => {
                self.notices.info("Word has been added");
                self.refresh_preview();
            }
            Err(e) => self.notices.error(e.to_string()),
        }
    }

    fn open_note_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Markdown", &["md", "markdown", "txt"])
            .pick_file();

        if let Some(path) = picked {
            self.workspace.open_note(path);
            self.refresh_preview();
        }
    }

    fn refresh_preview(&mut self) {
        self.preview = self.workspace.active_view().and_then(|view| {
            let file = view.file.as_ref()?;
            match self.store.read(file) {
                Ok(content) => Some(content),
                Err(e) => {
                    log::warn!("Failed to read note for preview: {}", e);
                    None
                }
            }
        });
    }

    fn central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.workspace.active_view() {
                Some(view) => {
                    ui.horizontal(|ui| {
                        ui.label(self.theme.heading(ctx, &view.title));
                        match &view.file {
                            Some(path) => ui.small(path.display().to_string()),
                            None => ui.small("scratch note, not saved to a file"),
                        };
                    });
                    ui.separator();

                    match &self.preview {
                        Some(content) if !content.is_empty() => {
                            egui::ScrollArea::vertical().auto_shrink([false, false]).show(
                                ui,
                                |ui| {
                                    ui.label(egui::RichText::new(content.as_str()).monospace());
                                },
                            );
                        }
                        _ => {
                            ui.weak("The note is empty.");
                        }
                    }
                }
                None => {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.label("No note is open.");
                        ui.small(format!(
                            "Open a note, then press 📖 or {} to add a word.",
                            ctx.format_shortcut(&ADD_WORD_SHORTCUT)
                        ));
                    });
                }
            }
        });
    }
}
