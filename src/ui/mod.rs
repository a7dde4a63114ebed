mod helpers;
pub mod layout;
pub mod views;

use crate::app::{LexicoApp, UiPrefs};
use crate::data::{DataError, read_vocabulary_embedded};
use crate::model::View;
use eframe::{APP_KEY, App, CreationContext, Frame, get_value, set_value};
use egui::Context;
use layout::{NARROW_WIDTH, bottom_panel, mobile_header, sidebar};

impl LexicoApp {
    /// Construye la app al arrancar eframe: vocabulario embebido + tema guardado.
    pub fn from_creation_context(cc: &CreationContext<'_>) -> Result<Self, DataError> {
        let (store, config) = read_vocabulary_embedded().inspect_err(|e| {
            log::error!("No se pudo cargar el vocabulario: {e}");
        })?;

        let mut app = LexicoApp::new(store, config);
        if let Some(prefs) = cc.storage.and_then(|s| get_value::<UiPrefs>(s, APP_KEY)) {
            app.prefs = prefs;
        }
        layout::apply_theme(&app, &cc.egui_ctx);
        Ok(app)
    }
}

impl App for LexicoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Avance diferido del test tras mostrar el feedback
        let now = ctx.input(|i| i.time);
        if self.tick(now) {
            ctx.request_repaint();
        }
        if let Some(wait) = self.quiz.time_until_due(now) {
            ctx.request_repaint_after(wait);
        }

        // CABECERA MÓVIL y MENÚ LATERAL
        let narrow = ctx.screen_rect().width() < NARROW_WIDTH;
        if narrow {
            mobile_header(self, ctx);
        }
        bottom_panel(self, ctx);
        if !narrow || self.sidebar_open {
            sidebar(self, ctx, narrow);
        }

        // Dispatch por vista
        match self.view.clone() {
            View::Home => views::dashboard::ui_dashboard(self, ctx),
            View::Quiz => views::quiz::ui_quiz(self, ctx, now),
            View::Category(_) => match self.current_category().cloned() {
                Some(category) => views::card_grid::ui_card_grid(self, ctx, &category),
                None => views::not_found::ui_not_found(ctx),
            },
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        // Solo preferencias; el test nunca se guarda
        set_value(storage, APP_KEY, &self.prefs);
    }
}
