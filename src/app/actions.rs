use super::*;

impl LexicoApp {
    /// Genera un test nuevo y descarta el anterior por completo.
    pub fn reiniciar_test(&mut self) {
        self.quiz
            .start_session(&self.store, &self.config, self.rng.as_mut());
    }

    /// Clic en una opción. `now` es el reloj de la interfaz en segundos.
    pub fn elegir_opcion(&mut self, option: &str, now: f64) -> bool {
        self.quiz
            .select(option, now, self.config.feedback_delay())
    }

    /// Avanza el test si el feedback ya se ha mostrado el tiempo suficiente.
    pub fn tick(&mut self, now: f64) -> bool {
        self.quiz.poll(now)
    }

    pub fn toggle_card(&mut self, idx: usize) {
        if !self.flipped.remove(&idx) {
            self.flipped.insert(idx);
        }
    }

    pub fn toggle_theme(&mut self) {
        self.prefs.dark_mode = !self.prefs.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::app;

    #[test]
    fn full_run_with_delayed_advances() {
        let mut a = app();
        a.ir_test();

        let mut now = 0.0;
        let total = a.session().map(|s| s.total()).unwrap_or_default();
        for i in 0..total {
            let correct = a
                .session()
                .and_then(|s| s.current_question())
                .map(|q| q.correct_answer.clone())
                .expect("pregunta actual");
            // Fallamos las impares
            let pick = if i % 2 == 0 { correct } else { "nada".to_string() };
            assert!(a.elegir_opcion(&pick, now));
            assert!(!a.tick(now + 0.5));
            now += 1.5;
            assert!(a.tick(now));
        }

        let s = a.session().expect("sesión");
        assert!(s.finished);
        assert_eq!(s.score, 3);
        assert_eq!(a.quiz_result().map(|r| r.percent), Some(60));
    }

    #[test]
    fn restart_before_timer_fires_keeps_new_session_intact() {
        let mut a = app();
        a.ir_test();
        let correct = a
            .session()
            .and_then(|s| s.current_question())
            .map(|q| q.correct_answer.clone())
            .expect("pregunta actual");
        a.elegir_opcion(&correct, 0.0);

        a.reiniciar_test();
        assert!(!a.tick(5.0));
        let s = a.session().expect("sesión");
        assert_eq!(s.current_index, 0);
        assert_eq!(s.score, 0);
        assert!(!s.answered_current);
    }

    #[test]
    fn cards_flip_back_and_forth() {
        let mut a = app();
        a.toggle_card(2);
        assert!(a.is_card_flipped(2));
        a.toggle_card(2);
        assert!(!a.is_card_flipped(2));
    }
}
