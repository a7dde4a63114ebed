use crate::LexicoApp;
use crate::model::View;
use crate::ui::helpers::{AMARILLO, VERDE, category_icon, cta_button};
use egui::{CentralPanel, Context, Frame, ProgressBar, RichText, ScrollArea, Ui, Visuals};

/// Por debajo de este ancho el menú lateral se oculta tras el botón ☰.
pub const NARROW_WIDTH: f32 = 768.0;

pub fn apply_theme(app: &LexicoApp, ctx: &Context) {
    if app.prefs.dark_mode {
        ctx.set_visuals(Visuals::dark());
    } else {
        ctx.set_visuals(Visuals::light());
    }
}

/// Cabecera para pantallas estrechas.
pub fn mobile_header(app: &mut LexicoApp, ctx: &Context) {
    egui::TopBottomPanel::top("mobile_header")
        .frame(Frame::default().fill(VERDE).inner_margin(egui::Margin::symmetric(12, 8)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("☰").size(20.0)).clicked() {
                    app.toggle_sidebar();
                }
                ui.label(
                    RichText::new("🇧🇷 Léxico Portugués")
                        .color(egui::Color32::WHITE)
                        .strong()
                        .size(18.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if cta_button(ui, "▶ EMPEZAR", 100.0) {
                        app.empezar_leccion();
                    }
                });
            });
        });
}

pub fn sidebar(app: &mut LexicoApp, ctx: &Context, narrow: bool) {
    egui::SidePanel::left("sidebar")
        .exact_width(240.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading(RichText::new("🇧🇷 Portugués").color(VERDE).strong());
                    ui.label(RichText::new("para o Dia a Dia").weak());
                });
                if narrow && ui.button("✖").clicked() {
                    app.cerrar_sidebar();
                }
            });
            ui.separator();

            if cta_button(ui, "▶ ¡Empecemos!", ui.available_width()) {
                app.empezar_leccion();
            }
            ui.add_space(8.0);

            ScrollArea::vertical()
                .max_height(ui.available_height() - 80.0)
                .show(ui, |ui| nav_items(app, ui));

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.add_space(8.0);
                let progress = app.session_progress();
                ui.label(RichText::new(progress.label()).small().monospace());
                ui.add(
                    ProgressBar::new(progress.percent as f32 / 100.0)
                        .fill(AMARILLO)
                        .desired_height(8.0),
                );
                ui.label(RichText::new("PROGRESO DE SESIÓN").small().weak());
            });
        });
}

fn nav_items(app: &mut LexicoApp, ui: &mut Ui) {
    let on_home = app.view == View::Home;
    if ui
        .selectable_label(on_home, RichText::new("🏠 Inicio / Dashboard").strong())
        .clicked()
    {
        app.ir_inicio();
    }

    for info in app.category_infos() {
        let text = format!("{} {}", category_icon(&info.id), info.label());
        if ui.selectable_label(info.active, text).clicked() {
            app.abrir_categoria(&info.id);
        }
    }

    let on_quiz = app.view == View::Quiz;
    if ui
        .selectable_label(on_quiz, RichText::new("🧠 Test de Vocabulario").strong())
        .clicked()
    {
        app.ir_test();
    }
}

pub fn bottom_panel(app: &mut LexicoApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTÓN DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if app.prefs.dark_mode {
                "☀ Modo claro"
            } else {
                "🌙 Modo oscuro"
            };
            if ui.button(label).clicked() {
                app.toggle_theme();
                apply_theme(app, ctx);
            }
        });
    });
}

/// Panel central con scroll y ancho máximo, centrado horizontalmente.
pub fn content_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                let side = ((ui.available_width() - w) / 2.0).max(0.0);
                ui.horizontal(|ui| {
                    ui.add_space(side);
                    ui.vertical(|ui| {
                        ui.set_width(w);
                        inner(ui);
                    });
                });
            });
    });
}

const CARD_MARGIN: i8 = 20;

/// Marco de tarjeta con la franja superior de color.
pub fn card_frame(ui: &mut Ui, accent: egui::Color32, inner: impl FnOnce(&mut Ui)) {
    Frame::default()
        .fill(ui.visuals().window_fill())
        .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(CARD_MARGIN))
        .show(ui, |ui| {
            // La franja cubre también el margen interior
            let margin = f32::from(CARD_MARGIN);
            let top = ui.max_rect().top() - margin;
            let rect = egui::Rect::from_min_max(
                egui::pos2(ui.max_rect().left() - margin, top),
                egui::pos2(ui.max_rect().right() + margin, top + 4.0),
            );
            ui.painter().rect_filled(rect, 2.0, accent);
            ui.set_width(ui.available_width());
            inner(ui);
        });
}
