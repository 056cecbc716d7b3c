use eframe::egui;

use crate::{
    core::Flashcard,
    gui::theme::Theme,
};

const CARD_SIZE: egui::Vec2 = egui::vec2(230.0, 140.0);
const GRID_SPACING: f32 = 12.0;

/// Which card is currently showing its definition. Flip state is pure
/// presentation, keyed by position index: flipping one card unflips every
/// other, and a fresh deck starts with nothing flipped.
#[derive(Default)]
pub struct CardGridState {
    flipped: Option<usize>,
}

impl CardGridState {
    pub fn reset(&mut self) {
        self.flipped = None;
    }

    fn flip(&mut self, index: usize) {
        self.flipped = if self.flipped == Some(index) { None } else { Some(index) };
    }
}

pub fn card_grid(
    ui: &mut egui::Ui,
    theme: &Theme,
    cards: &[Flashcard],
    state: &mut CardGridState,
) {
    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.spacing_mut().item_spacing = egui::vec2(GRID_SPACING, GRID_SPACING);

        let columns = ((ui.available_width() + GRID_SPACING) / (CARD_SIZE.x + GRID_SPACING))
            .floor()
            .max(1.0) as usize;

        for (row_index, row) in cards.chunks(columns).enumerate() {
            ui.horizontal(|ui| {
                for (col_index, card) in row.iter().enumerate() {
                    let index = row_index * columns + col_index;
                    let flipped = state.flipped == Some(index);

                    if flip_card(ui, theme, card, flipped) {
                        state.flip(index);
                    }
                }
            });
        }
    });
}

/// Draw one fixed-size flip-card. Returns true when it was clicked.
fn flip_card(ui: &mut egui::Ui, theme: &Theme, card: &Flashcard, flipped: bool) -> bool {
    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, egui::Sense::click());

    if !ui.is_rect_visible(rect) {
        return response.clicked();
    }

    let fill = if flipped { theme.card_back(ui.ctx()) } else { theme.card_face(ui.ctx()) };
    let stroke = if response.hovered() {
        egui::Stroke::new(2.0, theme.accent(ui.ctx()))
    } else {
        ui.style().visuals.widgets.noninteractive.bg_stroke
    };

    ui.painter().rect(rect, egui::CornerRadius::same(8), fill, stroke, egui::StrokeKind::Inside);

    let mut content_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect.shrink(14.0))
            .layout(egui::Layout::centered_and_justified(egui::Direction::TopDown)),
    );

    if flipped {
        content_ui.label(egui::RichText::new(&card.definition).size(14.0));
    } else {
        content_ui.label(theme.bold(ui.ctx(), &card.term).size(17.0).strong());
    }

    response.clicked()
}
