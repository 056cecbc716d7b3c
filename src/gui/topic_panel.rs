use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeckView {
    #[default]
    Cards,
    List,
}

pub enum TopicAction {
    Generate,
    AddMore,
}

pub struct TopicPanel;

impl TopicPanel {
    /// Topic input plus the two generation triggers. Both triggers are
    /// disabled while a request is in flight so the deck cannot be
    /// replaced and extended at the same time.
    pub fn show(
        ctx: &egui::Context,
        topic: &mut String,
        view: &mut DeckView,
        busy: bool,
        has_deck: bool,
        has_api_key: bool,
    ) -> Option<TopicAction> {
        let mut action = None;

        egui::TopBottomPanel::top("topic_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label("Topic:");

                let response = ui.add(
                    egui::TextEdit::singleline(topic)
                        .desired_width(280.0)
                        .hint_text("e.g. Photosynthesis"),
                );

                let can_generate = !busy && has_api_key && !topic.trim().is_empty();
                let can_extend = can_generate && has_deck;

                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let generate = ui
                    .add_enabled(can_generate, egui::Button::new("Generate"))
                    .on_disabled_hover_text(disabled_hint(busy, has_api_key));
                if generate.clicked() || (submitted && can_generate) {
                    action = Some(TopicAction::Generate);
                }

                let add_more = ui
                    .add_enabled(can_extend, egui::Button::new("Add More"))
                    .on_disabled_hover_text(if has_deck {
                        disabled_hint(busy, has_api_key)
                    } else {
                        "Generate a deck first"
                    });
                if add_more.clicked() {
                    action = Some(TopicAction::AddMore);
                }

                if busy {
                    ui.spinner();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.selectable_value(view, DeckView::List, "List");
                    ui.selectable_value(view, DeckView::Cards, "Cards");
                    ui.label("View:");
                });
            });
            ui.add_space(6.0);
        });

        action
    }
}

fn disabled_hint(busy: bool, has_api_key: bool) -> &'static str {
    if busy {
        "A request is already running"
    } else if !has_api_key {
        "Set your Gemini API key under Settings → API Settings"
    } else {
        "Enter a topic first"
    }
}
