use super::*;

impl LexicoApp {
    /// Cambia de vista. Las categorías que existen cuentan como visitadas.
    pub fn navegar(&mut self, view: View) {
        if let View::Category(id) = &view {
            if self.store.category(id).is_some() {
                self.visited.insert(id.clone());
            } else {
                log::warn!("Categoría desconocida: '{id}'");
            }
        }

        // Las tarjetas vuelven a la cara frontal al salir de la categoría
        if self.view != view {
            self.flipped.clear();
        }

        // Salir del test descarta el avance programado
        if self.view == View::Quiz && view != View::Quiz {
            self.quiz.cancel_pending();
        }

        // Cada entrada al test desde otra vista arranca una sesión nueva;
        // el cambio de generación descarta cualquier avance pendiente
        if view == View::Quiz && self.view != View::Quiz {
            self.reiniciar_test();
        }

        self.view = view;
        self.sidebar_open = false;
    }

    pub fn ir_inicio(&mut self) {
        self.navegar(View::Home);
    }

    pub fn ir_test(&mut self) {
        self.navegar(View::Quiz);
    }

    pub fn abrir_categoria(&mut self, id: &str) {
        self.navegar(View::Category(id.to_string()));
    }

    /// Botón "¡Empecemos!": primera categoría del vocabulario.
    pub fn empezar_leccion(&mut self) {
        match self.first_category_id().map(str::to_string) {
            Some(id) => self.abrir_categoria(&id),
            None => self.ir_inicio(),
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn cerrar_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
