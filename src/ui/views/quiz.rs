use crate::LexicoApp;
use crate::ui::helpers::{VERDE, option_colors};
use crate::ui::layout::{card_frame, content_panel};
use crate::view_models::{OptionState, option_letter};
use egui::{Button, Color32, Context, RichText, Vec2};

pub fn ui_quiz(app: &mut LexicoApp, ctx: &Context, now: f64) {
    let Some(session) = app.session() else {
        content_panel(ctx, 650.0, |ui| {
            ui.label("Cargando test...");
        });
        return;
    };

    if session.finished {
        super::summary::ui_quiz_result(app, ctx);
        return;
    }

    let Some(question) = session.current_question().cloned() else {
        content_panel(ctx, 650.0, |ui| {
            ui.label("No hay vocabulario suficiente para generar el test.");
        });
        return;
    };
    let counter = format!("{} / {}", session.current_index + 1, session.total());
    let answered = session.answered_current;
    let verdict = session.last_answer_correct();
    let options = app.option_states();

    let mut picked: Option<String> = None;

    content_panel(ctx, 650.0, |ui| {
        ui.add_space(16.0);
        card_frame(ui, VERDE, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("🧠 Teste de Vocabulário")
                        .size(22.0)
                        .strong()
                        .color(VERDE),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(&counter).strong().weak());
                });
            });
            ui.add_space(16.0);
            ui.label(RichText::new(&question.prompt).size(19.0));
            ui.add_space(20.0);

            let width = ui.available_width();
            for (idx, (option, state)) in options.iter().enumerate() {
                let (fill, text) = option_colors(*state, ui);
                let label = RichText::new(format!("{}   {}", option_letter(idx), option))
                    .size(17.0)
                    .color(text);
                let mut button = Button::new(label)
                    .fill(fill)
                    .min_size(Vec2::new(width, 48.0));
                if *state == OptionState::Correct {
                    button = button.stroke(egui::Stroke::new(2.0, VERDE));
                } else if *state == OptionState::Wrong {
                    button = button.stroke(egui::Stroke::new(2.0, Color32::RED));
                }

                if ui.add_enabled(!answered, button).clicked() {
                    picked = Some(option.clone());
                }
                ui.add_space(6.0);
            }

            ui.add_space(8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                match verdict {
                    Some(true) => {
                        ui.label(RichText::new("¡Correcto!").strong().color(VERDE));
                    }
                    Some(false) => {
                        ui.label(RichText::new("Incorrecto").strong().color(Color32::RED));
                    }
                    None => {}
                }
            });
        });
    });

    if let Some(option) = picked {
        app.elegir_opcion(&option, now);
        ctx.request_repaint();
    }
}
