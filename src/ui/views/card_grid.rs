use crate::LexicoApp;
use crate::model::{Category, VocabularyEntry};
use crate::ui::helpers::{AZUL, VERDE, card_colors};
use crate::ui::layout::content_panel;
use egui::{Align, Color32, Context, Frame, Layout, RichText, Sense, Ui};

const CARD_WIDTH: f32 = 260.0;
const CARD_HEIGHT: f32 = 210.0;

pub fn ui_card_grid(app: &mut LexicoApp, ctx: &Context, category: &Category) {
    content_panel(ctx, 1000.0, |ui| {
        ui.add_space(16.0);
        ui.label(
            RichText::new(&category.title)
                .size(28.0)
                .strong()
                .color(VERDE),
        );
        ui.label(RichText::new(&category.description).size(16.0));
        ui.separator();
        ui.add_space(12.0);

        let per_row = ((ui.available_width() / CARD_WIDTH) as usize).clamp(1, 3);
        let mut clicked = None;
        for (row, chunk) in category.entries.chunks(per_row).enumerate() {
            ui.columns(per_row, |cols| {
                for (col, entry) in chunk.iter().enumerate() {
                    let idx = row * per_row + col;
                    if flashcard(&mut cols[col], entry, app.is_card_flipped(idx)) {
                        clicked = Some(idx);
                    }
                }
            });
            ui.add_space(16.0);
        }

        if let Some(idx) = clicked {
            app.toggle_card(idx);
        }
    });
}

/// Dibuja una tarjeta. Devuelve `true` si se ha pulsado.
fn flashcard(ui: &mut Ui, entry: &VocabularyEntry, flipped: bool) -> bool {
    let (fill, text, sub) = if flipped {
        (VERDE, Color32::WHITE, Color32::from_white_alpha(210))
    } else {
        card_colors(entry, ui)
    };
    let stroke_color = if entry.border {
        Color32::from_gray(200)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke.color
    };

    let response = Frame::default()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, stroke_color))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_height(CARD_HEIGHT);
            ui.set_width(ui.available_width());
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                if flipped {
                    card_back(ui, entry, text, sub);
                } else {
                    card_front(ui, entry, text, sub);
                }
            });
        })
        .response
        .interact(Sense::click());

    response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}

fn card_front(ui: &mut Ui, entry: &VocabularyEntry, text: Color32, sub: Color32) {
    ui.add_space(12.0);
    if let Some(icon) = &entry.icon {
        ui.label(RichText::new(icon).size(40.0));
    }
    ui.label(
        RichText::new(&entry.word_source)
            .size(24.0)
            .strong()
            .color(text),
    );
    ui.label(RichText::new(&entry.word_translation).size(16.0).color(sub));
    if !entry.pronunciation.is_empty() {
        ui.label(
            RichText::new(format!("[ {} ]", entry.pronunciation.to_uppercase()))
                .monospace()
                .small()
                .color(AZUL),
        );
    }
    ui.add_space(10.0);
    ui.label(RichText::new("Ver Frase").small().color(sub));
}

fn card_back(ui: &mut Ui, entry: &VocabularyEntry, text: Color32, sub: Color32) {
    let context = entry.context.as_deref().unwrap_or_default();
    let source = entry
        .example_source
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(context);
    let translation = entry.example_translation().unwrap_or(context);
    let pron = entry
        .example_pronunciation
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("...");

    ui.label(RichText::new("FRASE DE EXEMPLO").small().color(sub));
    ui.add_space(4.0);
    ui.label(
        RichText::new(format!("\"{source}\""))
            .italics()
            .size(17.0)
            .color(text),
    );
    ui.label(
        RichText::new(format!("[ {} ]", pron.to_uppercase()))
            .monospace()
            .small()
            .background_color(Color32::WHITE)
            .color(AZUL),
    );
    ui.add_space(8.0);
    ui.label(RichText::new("(ESPANHOL)").small().color(sub));
    ui.label(
        RichText::new(format!("\"{translation}\""))
            .strong()
            .color(text),
    );
}
