use eframe::egui::{
    self,
    containers,
};

use crate::gui::{
    app::DeckData,
    settings::{
        ApiSettingsModal,
        SettingsData,
    },
};

pub enum TopBarAction {
    ExportDeck,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        settings_modal: &mut ApiSettingsModal,
        current_settings: &SettingsData,
        deck: Option<&DeckData>,
    ) -> Option<TopBarAction> {
        let mut action = None;
        let can_export = deck.is_some_and(|d| !d.cards.is_empty());

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.add_enabled(can_export, egui::Button::new("Export Deck…")).clicked() {
                        action = Some(TopBarAction::ExportDeck);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("API Settings").clicked() {
                        settings_modal.open_settings(current_settings.clone());
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicators(ui, current_settings, deck);
                });
            });
        });

        action
    }

    fn show_status_indicators(
        ui: &mut egui::Ui,
        current_settings: &SettingsData,
        deck: Option<&DeckData>,
    ) {
        let key_configured = current_settings.has_api_key();

        let key_color = if key_configured {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let key_tooltip = if key_configured {
            "Gemini API key configured"
        } else {
            "No Gemini API key set (Settings → API Settings)"
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Gemini").on_hover_text(key_tooltip);
            ui.small(egui::RichText::new("●").color(key_color)).on_hover_text(key_tooltip);
        });

        if let Some(deck) = deck {
            ui.add_space(3.0);
            ui.small(format!("{} · {} cards", deck.topic, deck.cards.len()));
        }
    }
}
