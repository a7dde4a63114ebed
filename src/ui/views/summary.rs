use crate::LexicoApp;
use crate::ui::helpers::{AZUL, COURSE_URL, VERDE, big_button, cta_button};
use crate::ui::layout::{card_frame, content_panel};
use egui::{Context, RichText};

/// Pantalla final del test: puntuación, mensaje y reinicio.
pub fn ui_quiz_result(app: &mut LexicoApp, ctx: &Context) {
    let Some(result) = app.quiz_result() else {
        return;
    };

    content_panel(ctx, 650.0, |ui| {
        ui.add_space(16.0);
        card_frame(ui, VERDE, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Test Completado").size(28.0).strong().color(VERDE));
                ui.add_space(16.0);
                ui.label(RichText::new("Tu puntuación:").size(20.0));
                ui.label(
                    RichText::new(format!("{}/{}", result.score, result.total))
                        .size(56.0)
                        .strong()
                        .color(AZUL),
                );
                ui.label(RichText::new(format!("({}%)", result.percent)).size(18.0).weak());
                ui.add_space(16.0);
                ui.label(RichText::new(result.feedback()).size(18.0).strong());

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(12.0);
                ui.label(
                    RichText::new("¿Quieres hablar portugués con fluidez?")
                        .size(20.0)
                        .strong()
                        .color(VERDE),
                );
                ui.add_space(8.0);
                if cta_button(ui, "📖 Iniciar Curso Digital", ui.available_width()) {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(COURSE_URL));
                }
                ui.add_space(16.0);
                if big_button(ui, "⟲ Reiniciar Test", 200.0, 36.0) {
                    app.reiniciar_test();
                }
            });
        });
    });
}
