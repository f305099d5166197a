use eframe::egui::{self, containers};

use crate::gui::settings_modal::SettingsModal;

pub enum TopBarAction {
    AddWord,
    OpenNote,
    NewScratchNote,
    CloseNote,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        settings_modal: &mut SettingsModal,
        add_word_shortcut: &egui::KeyboardShortcut,
        active_title: Option<&str>,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Open Note…").clicked() {
                        action = Some(TopBarAction::OpenNote);
                    }
                    if ui.button("New Scratch Note").clicked() {
                        action = Some(TopBarAction::NewScratchNote);
                    }
                    if ui.button("Close Note").clicked() {
                        action = Some(TopBarAction::CloseNote);
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Tangonote Settings").clicked() {
                        settings_modal.open_settings();
                    }
                });

                // Icon trigger for the same operation as the keyboard command.
                let icon = ui.button(egui::RichText::new("📖").size(16.0)).on_hover_text(
                    format!("Add Word ({})", ctx.format_shortcut(add_word_shortcut)),
                );
                if icon.clicked() {
                    action = Some(TopBarAction::AddWord);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match active_title {
                        Some(title) => ui.small(title),
                        None => ui.small("no note open"),
                    };
                });
            });
        });

        action
    }
}
