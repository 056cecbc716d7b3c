mod deck_data;
mod modals;

use eframe::egui;

pub use deck_data::DeckData;
use modals::Modals;

use super::{
    card_grid::{
        card_grid,
        CardGridState,
    },
    deck_table::deck_table,
    message_overlay::MessageOverlay,
    settings::SettingsData,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
    topic_panel::{
        DeckView,
        TopicAction,
        TopicPanel,
    },
};
use crate::{
    core::{
        export,
        tasks::{
            TaskManager,
            TaskResult,
        },
        CardSet,
    },
    gemini::GeminiClient,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct CardForgeApp {
    // Deck state
    pub deck: Option<DeckData>,
    pub topic_input: String,

    // Configuration
    pub settings_data: SettingsData,

    // UI state
    pub view: DeckView,
    pub card_grid: CardGridState,
    pub theme: Theme,
    pub message_overlay: MessageOverlay,

    // Modals
    pub modals: Modals,

    // In-flight request state
    generating: bool,
    pending_topic: Option<String>,

    task_manager: TaskManager,
}

impl CardForgeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>("settings.json");
        let theme = Theme::default();

        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        Self {
            deck: None,
            topic_input: String::new(),

            settings_data,

            view: DeckView::default(),
            card_grid: CardGridState::default(),
            theme,
            message_overlay: MessageOverlay::new(),

            modals: Modals::default(),

            generating: false,
            pending_topic: None,

            task_manager: TaskManager::new(),
        }
    }
}

impl eframe::App for CardForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();

        for result in task_results {
            self.handle_task_result(result);
        }

        self.sync_theme_preference(ctx);

        if let Some(action) = TopBar::show(
            ctx,
            &mut self.modals.settings,
            &self.settings_data,
            self.deck.as_ref(),
        ) {
            match action {
                TopBarAction::ExportDeck => self.export_deck(),
            }
        }

        let has_deck = self.deck.as_ref().is_some_and(|deck| !deck.cards.is_empty());

        if let Some(action) = TopicPanel::show(
            ctx,
            &mut self.topic_input,
            &mut self.view,
            self.generating,
            has_deck,
            self.settings_data.has_api_key(),
        ) {
            match action {
                TopicAction::Generate => self.start_generation(),
                TopicAction::AddMore => self.request_more_cards(),
            }
        }

        self.show_deck(ctx);

        self.message_overlay.show(ctx, &self.theme);
        self.modals.error.show(ctx);

        if let Some(settings) = self.modals.settings.show(ctx) {
            self.settings_data = settings;
            self.save_settings();
        }
    }
}

impl CardForgeApp {
    fn start_generation(&mut self) {
        let topic = self.topic_input.trim().to_string();

        match self.build_client() {
            Ok(client) => {
                self.generating = true;
                self.pending_topic = Some(topic.clone());
                self.message_overlay.set_message("Generating flashcards...".to_string());
                self.task_manager.generate_deck(topic, client);
            }
            Err(message) => {
                self.modals.error.show_error(
                    "Request Error",
                    "Could not start the generation request.",
                    Some(&message),
                );
            }
        }
    }

    fn request_more_cards(&mut self) {
        let Some(deck) = &self.deck else {
            return;
        };
        let existing = deck.cards.clone();
        let topic = self.topic_input.trim().to_string();

        match self.build_client() {
            Ok(client) => {
                self.generating = true;
                self.message_overlay.set_message("Generating more flashcards...".to_string());
                self.task_manager.extend_deck(topic, existing, client);
            }
            Err(message) => {
                self.modals.error.show_error(
                    "Request Error",
                    "Could not start the generation request.",
                    Some(&message),
                );
            }
        }
    }

    fn build_client(&self) -> Result<GeminiClient, String> {
        GeminiClient::new(
            self.settings_data.api_key.trim().to_string(),
            self.settings_data.model.clone(),
        )
        .map_err(|e| e.to_string())
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::DeckGenerated(result) => {
                self.generating = false;
                self.message_overlay.clear_message();

                match result {
                    Ok(cards) => {
                        let topic = self
                            .pending_topic
                            .take()
                            .unwrap_or_else(|| self.topic_input.trim().to_string());

                        let mut deck = DeckData { topic, cards: CardSet::new() };
                        deck.cards.replace(cards);

                        self.card_grid.reset();
                        self.deck = Some(deck);
                    }
                    Err(message) => {
                        self.pending_topic = None;
                        self.modals.error.show_error(
                            "Generation Error",
                            "Could not generate a new deck.",
                            Some(&message),
                        );
                    }
                }
            }

            TaskResult::DeckExtended(result) => {
                self.generating = false;
                self.message_overlay.clear_message();

                match result {
                    Ok(cards) => {
                        if let Some(deck) = &mut self.deck {
                            let added = deck.cards.append_unique(cards);
                            println!("Added {} new cards to '{}'", added, deck.topic);
                        }
                    }
                    Err(message) => {
                        self.modals.error.show_error(
                            "Generation Error",
                            "Could not fetch more cards for this deck.",
                            Some(&message),
                        );
                    }
                }
            }
        }
    }

    fn show_deck(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(deck) = &self.deck else {
                if !self.message_overlay.active {
                    show_empty_state(ui, &self.theme);
                }
                return;
            };

            match self.view {
                DeckView::Cards => {
                    card_grid(ui, &self.theme, deck.cards.cards(), &mut self.card_grid)
                }
                DeckView::List => deck_table(ui, &self.theme, deck.cards.cards()),
            }
        });
    }

    fn export_deck(&mut self) {
        let Some(deck) = &self.deck else {
            return;
        };

        let default_name = format!("{}.tsv", deck.topic.to_lowercase().replace(char::is_whitespace, "_"));

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&default_name)
            .add_filter("Tab-separated values", &["tsv", "txt"])
            .save_file()
        else {
            return;
        };

        match export::write_tsv(&path, deck.cards.cards()) {
            Ok(()) => println!("Deck exported to {}", path.display()),
            Err(e) => {
                self.modals.error.show_error(
                    "Export Error",
                    "Could not write the deck file.",
                    Some(&e.to_string()),
                );
            }
        }
    }

    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

fn show_empty_state(ui: &mut egui::Ui, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);

        ui.label(egui::RichText::new("No Deck Loaded").size(32.0).color(theme.cyan(ui.ctx())));

        ui.add_space(4.0);
        ui.label("Enter a topic above and press Generate to build a deck of flashcards.");
    });
}
