use eframe::egui;

use crate::persistence::save_json;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Default, Clone, serde::Serialize, serde::Deserialize)]
pub struct SettingsData {
    // Key kept as stored by earlier builds.
    #[serde(rename = "exampleSetting")]
    pub example_setting: String,
}

pub struct SettingsModal {
    open: bool,
    data: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, data: SettingsData::default() }
    }

    /// The field always starts empty; the stored value is never read back.
    pub fn open_settings(&mut self) {
        self.data = SettingsData::default();
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(360.0);
            ui.heading("Tangonote Settings");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Example Setting:");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.data.example_setting)
                            .hint_text("Enter your setting")
                            .desired_width(200.0),
                    );

                    // Every change replaces the stored settings object.
                    if response.changed() {
                        if let Err(e) = save_json(&self.data, SETTINGS_FILE) {
                            log::warn!("Failed to save settings: {}", e);
                        }
                    }
                });
            });
            ui.small("This is an example setting.");

            ui.add_space(10.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SettingsData;

    #[test]
    fn settings_serialize_under_the_stored_key() {
        let data = SettingsData { example_setting: "value".to_string() };

        assert_eq!(serde_json::to_string(&data).unwrap(), r#"{"exampleSetting":"value"}"#);
    }

    #[test]
    fn settings_deserialize_from_the_stored_key() {
        let data: SettingsData = serde_json::from_str(r#"{"exampleSetting":"stored"}"#).unwrap();

        assert_eq!(data.example_setting, "stored");
    }
}
