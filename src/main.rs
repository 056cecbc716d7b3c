#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use cardforge::gui::CardForgeApp;
use eframe::egui;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CardForge")
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native("CardForge", options, Box::new(|cc| Ok(Box::new(CardForgeApp::new(cc)))))
}
