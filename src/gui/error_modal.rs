use eframe::egui;

#[derive(Clone)]
struct ErrorData {
    title: String,
    message: String,
    details: Option<String>,
}

/// Modal used for every terminal error: validation problems, empty
/// results, and failed generation requests alike.
#[derive(Default)]
pub struct ErrorModal {
    data: Option<ErrorData>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { data: None }
    }

    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: Option<impl Into<String>>,
    ) {
        self.data = Some(ErrorData {
            title: title.into(),
            message: message.into(),
            details: details.map(|d| d.into()),
        });
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(data) = self.data.clone() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(egui::Color32::RED));
                ui.label(egui::RichText::new(&data.title).size(18.0).strong());
            });

            ui.add_space(10.0);
            ui.label(&data.message);

            if let Some(details) = &data.details {
                ui.add_space(10.0);
                ui.collapsing("Technical Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(4)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(15.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.data = None;
        }
    }
}
