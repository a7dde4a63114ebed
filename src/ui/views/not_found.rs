use crate::ui::layout::content_panel;
use egui::{Context, RichText};

pub fn ui_not_found(ctx: &Context) {
    content_panel(ctx, 600.0, |ui| {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Página no encontrada").size(20.0));
        });
    });
}
