use eframe::egui;

use crate::core::WordRecord;

/// Outcome of one opening of the form, produced at most once per opening:
/// either the submitted record, or an explicit cancellation when the dialog
/// is dismissed without submitting.
#[derive(Debug, Clone)]
pub enum FormOutcome {
    Submitted(WordRecord),
    Cancelled,
}

pub struct WordEntryModal {
    open: bool,
    record: WordRecord,
}

impl WordEntryModal {
    pub fn new() -> Self {
        Self { open: false, record: WordRecord::default() }
    }

    /// Open the dialog with a fresh, empty record.
    pub fn open(&mut self) {
        self.record = WordRecord::default();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<FormOutcome> {
        if !self.open {
            return None;
        }

        let mut outcome = None;

        let modal = egui::Modal::new(egui::Id::new("word_entry_modal")).show(ctx, |ui| {
            ui.set_width(380.0);
            ui.heading("Add Word");
            ui.add_space(10.0);

            ui_text_field(ui, "Word", "Enter the word", &mut self.record.word);
            ui_text_field(ui, "Meaning", "Enter the meaning", &mut self.record.meaning);
            ui_text_field(ui, "Example", "Enter an example sentence", &mut self.record.example);
            ui_text_field(
                ui,
                "Example Translation",
                "Enter the example translation",
                &mut self.record.example_translation,
            );

            ui.add_space(15.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Add").clicked() {
                    outcome = Some(FormOutcome::Submitted(self.record.clone()));
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.record = WordRecord::default();
            if outcome.is_none() {
                outcome = Some(FormOutcome::Cancelled);
            }
        }

        outcome
    }
}

impl Default for WordEntryModal {
    fn default() -> Self {
        Self::new()
    }
}

fn ui_text_field(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(format!("{}:", label));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(220.0));
        });
    });
    ui.add_space(4.0);
}
