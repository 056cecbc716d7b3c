use eframe::egui;

use super::data::SettingsData;
use crate::gemini::KNOWN_MODELS;

pub struct ApiSettingsModal {
    open: bool,
    draft: SettingsData,
    original: SettingsData,
    reveal_key: bool,
}

impl ApiSettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            draft: SettingsData::default(),
            original: SettingsData::default(),
            reveal_key: false,
        }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.draft = current_settings.clone();
        self.original = current_settings;
        self.reveal_key = false;
        self.open = true;
    }

    fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Returns the new settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;
        let mut close_requested = false;

        let modal = egui::Modal::new(egui::Id::new("api_settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("API Settings");
            ui.add_space(8.0);

            egui::Grid::new("api_settings_grid").num_columns(2).spacing([10.0, 6.0]).show(
                ui,
                |ui| {
                    ui.label("API key:");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.draft.api_key)
                                .password(!self.reveal_key)
                                .desired_width(240.0),
                        );
                        ui.checkbox(&mut self.reveal_key, "Show");
                    });
                    ui.end_row();

                    ui.label("Model:");
                    egui::ComboBox::from_id_salt("model_combo")
                        .selected_text(&self.draft.model)
                        .show_ui(ui, |ui| {
                            for model in KNOWN_MODELS {
                                ui.selectable_value(
                                    &mut self.draft.model,
                                    model.to_string(),
                                    *model,
                                );
                            }
                        });
                    ui.end_row();
                },
            );

            ui.add_space(4.0);
            ui.small("The key is stored locally in settings.json and only sent to Google.");
            ui.add_space(10.0);

            if self.is_dirty() {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::YELLOW, "⚠");
                    ui.label("Settings have been modified");
                });
                ui.add_space(5.0);
            }

            ui.separator();

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save").clicked() {
                    result = Some(self.draft.clone());
                    close_requested = true;
                }
                if ui.button("Cancel").clicked() {
                    close_requested = true;
                }
            });
        });

        if close_requested || modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for ApiSettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
