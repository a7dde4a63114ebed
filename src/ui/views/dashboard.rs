use crate::LexicoApp;
use crate::ui::helpers::{AMARILLO, AZUL, COURSE_URL, VERDE, big_button, cta_button};
use crate::ui::layout::{card_frame, content_panel};
use egui::{Context, ProgressBar, RichText, Ui};

pub fn ui_dashboard(app: &mut LexicoApp, ctx: &Context) {
    content_panel(ctx, 900.0, |ui| {
        ui.add_space(16.0);
        ui.label(
            RichText::new("Bem-vindo! Bienvenido.")
                .size(32.0)
                .strong()
                .color(VERDE),
        );
        ui.label(
            "Esta aplicación interactiva está diseñada para ayudarte a dominar el vocabulario portugués esencial.",
        );
        ui.label(RichText::new("¡Vamos a falar português!").strong().color(AZUL));
        ui.add_space(20.0);

        ui.columns(2, |cols| {
            how_to_card(app, &mut cols[0]);
            composition_card(app, &mut cols[1]);
        });

        ui.add_space(20.0);
        community_card(ui);
    });
}

fn how_to_card(app: &mut LexicoApp, ui: &mut Ui) {
    card_frame(ui, AMARILLO, |ui| {
        ui.label(
            RichText::new("📖 Cómo usar esta app")
                .size(20.0)
                .strong()
                .color(VERDE),
        );
        ui.add_space(10.0);
        for step in [
            "Paso 1: Navega por los temas en el menú lateral.",
            "Haz clic en las tarjetas para girarlas y ver ejemplos.",
            "Practica los sonidos nasales (ão, õe) con la guía fonética.",
        ] {
            ui.label(format!("➤ {step}"));
        }
        ui.label(
            RichText::new("➤ ¡Haz el Teste de Vocabulário para medir tu progreso!")
                .strong()
                .color(AZUL),
        );
        ui.add_space(16.0);
        if big_button(ui, "Empezar Lección ➡", ui.available_width(), 40.0) {
            app.empezar_leccion();
        }
    });
}

fn composition_card(app: &LexicoApp, ui: &mut Ui) {
    card_frame(ui, VERDE, |ui| {
        ui.label(
            RichText::new("Composición del Vocabulario")
                .size(18.0)
                .strong()
                .color(VERDE),
        );
        ui.add_space(10.0);
        for slice in app.composition() {
            ui.horizontal(|ui| {
                ui.add_sized([90.0, 18.0], egui::Label::new(&slice.name).truncate());
                ui.add(
                    ProgressBar::new(slice.fraction)
                        .fill(VERDE)
                        .text(format!("{} palabras", slice.count)),
                );
            });
        }
    });
}

fn community_card(ui: &mut Ui) {
    card_frame(ui, AZUL, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("¡Únete a la Comunidad y Sigue Aprendiendo!")
                    .size(20.0)
                    .strong()
                    .color(VERDE),
            );
            ui.label("Síguenos en redes para más tips y contenido gratuito, o da el siguiente paso en tu aprendizaje.");
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.hyperlink_to("📷 Instagram", "https://www.instagram.com/lexigo2.0/");
                ui.add_space(16.0);
                ui.hyperlink_to(
                    "📘 Facebook",
                    "https://www.facebook.com/profile.php?id=61583705050960",
                );
                ui.add_space(16.0);
                ui.hyperlink_to("🎬 TikTok", "https://www.tiktok.com/@lexigo2.0");
            });
            ui.add_space(12.0);
            if cta_button(ui, "📖 Iniciar Curso Digital", 260.0) {
                ui.ctx().open_url(egui::OpenUrl::new_tab(COURSE_URL));
            }
        });
    });
}
