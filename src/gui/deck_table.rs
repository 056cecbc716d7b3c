use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::Flashcard,
    gui::theme::Theme,
};

/// Read-only table view of the deck: position, term, definition. Rows
/// follow deck order; sorting or filtering would break the position
/// numbering, so there is none.
pub fn deck_table(ui: &mut egui::Ui, theme: &Theme, cards: &[Flashcard]) {
    let text_height =
        egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(36.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::remainder())
        .header(25.0, |mut header| {
            header.col(|ui| {
                ui.label(theme.heading(ui.ctx(), "#"));
            });
            header.col(|ui| {
                ui.label(theme.heading(ui.ctx(), "Term"));
            });
            header.col(|ui| {
                ui.label(theme.heading(ui.ctx(), "Definition"));
            });
        })
        .body(|mut body| {
            body.rows(text_height, cards.len(), |mut row| {
                let index = row.index();
                let card = &cards[index];

                row.col(|ui| {
                    ui.label((index + 1).to_string());
                });
                row.col(|ui| {
                    ui.strong(theme.bold(ui.ctx(), &card.term));
                });
                row.col(|ui| {
                    ui.label(&card.definition);
                });
            });
        });
}
