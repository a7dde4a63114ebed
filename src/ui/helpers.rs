// src/ui/helpers.rs
use crate::model::{TextTone, VocabularyEntry};
use crate::view_models::OptionState;
use egui::{Button, Color32, Ui, Vec2};

// Colores de la bandera
pub const VERDE: Color32 = Color32::from_rgb(0x00, 0x9C, 0x3B);
pub const AMARILLO: Color32 = Color32::from_rgb(0xFF, 0xDF, 0x00);
pub const AZUL: Color32 = Color32::from_rgb(0x00, 0x27, 0x76);

pub const COURSE_URL: &str = "https://go.hotmart.com/U103170151V";

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Botón amarillo de llamada a la acción.
pub fn cta_button(ui: &mut Ui, label: &str, width: f32) -> bool {
    let text = egui::RichText::new(label).color(AZUL).strong();
    ui.add(
        Button::new(text)
            .fill(AMARILLO)
            .min_size(Vec2::new(width, 40.0)),
    )
    .clicked()
}

/// (fondo, texto principal, texto secundario) de la cara frontal de una tarjeta.
pub fn card_colors(entry: &VocabularyEntry, ui: &Ui) -> (Color32, Color32, Color32) {
    let custom = entry
        .color
        .as_deref()
        .and_then(|hex| Color32::from_hex(hex).ok());

    match custom {
        Some(fill) => match entry.text {
            Some(TextTone::White) => (fill, Color32::WHITE, Color32::from_white_alpha(200)),
            _ => (fill, Color32::from_gray(20), Color32::from_gray(80)),
        },
        None => (
            ui.visuals().window_fill(),
            VERDE,
            ui.visuals().weak_text_color(),
        ),
    }
}

/// (fondo, texto) de una opción del test según su estado.
pub fn option_colors(state: OptionState, ui: &Ui) -> (Color32, Color32) {
    match state {
        OptionState::Neutral => (ui.visuals().widgets.inactive.bg_fill, ui.visuals().text_color()),
        OptionState::Correct => (Color32::from_rgb(0xD1, 0xFA, 0xE5), Color32::from_rgb(0x06, 0x4E, 0x3B)),
        OptionState::Wrong => (Color32::from_rgb(0xFE, 0xE2, 0xE2), Color32::from_rgb(0x7F, 0x1D, 0x1D)),
        OptionState::Dimmed => (ui.visuals().faint_bg_color, ui.visuals().weak_text_color()),
    }
}

/// Icono del menú lateral para cada categoría conocida.
pub fn category_icon(id: &str) -> &'static str {
    match id {
        "saludos" => "😊",
        "presentacion" => "🤝",
        "numeros" => "#",
        "colores" => "🎨",
        "animales" => "🐶",
        "viajes" => "✈",
        "clima" => "⛅",
        _ => "🏠",
    }
}
