use super::QuizSession;
use super::random::RandomSource;
use crate::config::QuizConfig;
use crate::model::VocabularyStore;
use std::time::Duration;

/// Avance programado tras responder. Guarda la generación de la sesión que
/// lo programó; si la sesión ha cambiado cuando vence, se descarta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingAdvance {
    pub generation: u64,
    pub question_index: usize,
    /// Segundos en el reloj del llamante (en la UI, `egui::InputState::time`).
    pub due_at: f64,
}

/// Sesión activa más el temporizador de feedback.
#[derive(Debug, Default)]
pub struct QuizEngine {
    session: Option<QuizSession>,
    generation: u64,
    pending: Option<PendingAdvance>,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending(&self) -> Option<&PendingAdvance> {
        self.pending.as_ref()
    }

    /// Sustituye la sesión entera. Cualquier avance pendiente queda obsoleto.
    pub fn start_session(
        &mut self,
        store: &VocabularyStore,
        cfg: &QuizConfig,
        rng: &mut dyn RandomSource,
    ) {
        self.replace_session(QuizSession::start(store, cfg, rng));
    }

    pub fn replace_session(&mut self, session: QuizSession) {
        self.generation += 1;
        self.pending = None;
        self.session = Some(session);
    }

    /// Olvida el avance programado sin tocar la sesión.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Responde la pregunta actual y programa el avance `delay` segundos después.
    pub fn select(&mut self, option: &str, now: f64, delay: Duration) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.submit_answer(option) {
            return false;
        }
        self.pending = Some(PendingAdvance {
            generation: self.generation,
            question_index: session.current_index,
            due_at: now + delay.as_secs_f64(),
        });
        true
    }

    /// Dispara el avance pendiente si ya ha vencido. Devuelve `true` si la sesión cambió.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.pending {
            Some(p) if now >= p.due_at => {
                self.pending = None;
                self.fire(p)
            }
            _ => false,
        }
    }

    /// Ejecuta un avance concreto comprobando que siga siendo válido.
    pub fn fire(&mut self, token: PendingAdvance) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if token.generation != self.generation || token.question_index != session.current_index {
            log::debug!(
                "Avance obsoleto descartado (generación {} != {})",
                token.generation,
                self.generation
            );
            return false;
        }
        session.advance()
    }

    /// Tiempo que falta para el avance pendiente, para pedir un repintado.
    pub fn time_until_due(&self, now: f64) -> Option<Duration> {
        self.pending
            .map(|p| Duration::from_secs_f64((p.due_at - now).max(0.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionKind, QuizQuestion};

    const DELAY: Duration = Duration::from_millis(1200);

    fn session(n: usize) -> QuizSession {
        QuizSession::from_questions(
            (0..n)
                .map(|i| QuizQuestion {
                    prompt: format!("p{i}"),
                    correct_answer: format!("ok{i}"),
                    options: vec![format!("ok{i}"), "mal".into()],
                    kind: QuestionKind::Word,
                    entry: i,
                })
                .collect(),
        )
    }

    fn engine(n: usize) -> QuizEngine {
        let mut e = QuizEngine::new();
        e.replace_session(session(n));
        e
    }

    #[test]
    fn advance_waits_for_the_delay() {
        let mut e = engine(3);
        assert!(e.select("ok0", 10.0, DELAY));
        assert!(!e.poll(10.5));
        assert_eq!(e.session().map(|s| s.current_index), Some(0));

        assert!(e.poll(11.3));
        let s = e.session().expect("sesión");
        assert_eq!(s.current_index, 1);
        assert!(!s.answered_current);
        assert!(e.pending().is_none());
    }

    #[test]
    fn restart_discards_pending_advance() {
        let mut e = engine(3);
        e.select("ok0", 0.0, DELAY);
        let stale = *e.pending().expect("pendiente");

        e.replace_session(session(3));
        assert!(e.pending().is_none());
        assert!(!e.poll(5.0));

        // Aunque alguien conserve el token, no toca la sesión nueva
        e.select("ok0", 5.0, DELAY);
        assert!(!e.fire(stale));
        assert_eq!(e.session().map(|s| s.current_index), Some(0));
        assert_eq!(e.generation(), stale.generation + 1);
    }

    #[test]
    fn token_for_an_old_question_is_ignored() {
        let mut e = engine(3);
        e.select("ok0", 0.0, DELAY);
        let token = *e.pending().expect("pendiente");
        assert!(e.poll(2.0));

        e.select("ok1", 2.0, DELAY);
        assert!(!e.fire(token));
        assert_eq!(e.session().map(|s| s.current_index), Some(1));
    }

    #[test]
    fn ignored_submission_does_not_reschedule() {
        let mut e = engine(2);
        e.select("mal", 0.0, DELAY);
        assert!(!e.select("ok0", 1.0, DELAY));
        assert_eq!(e.pending().map(|p| p.due_at), Some(1.2));
        assert_eq!(e.session().map(|s| s.score), Some(0));
    }

    #[test]
    fn last_question_finishes_after_delay() {
        let mut e = engine(1);
        e.select("ok0", 0.0, DELAY);
        let left = e.time_until_due(0.7).expect("pendiente");
        assert!((left.as_secs_f64() - 0.5).abs() < 1e-9);
        assert!(e.poll(1.3));
        let s = e.session().expect("sesión");
        assert!(s.finished);
        assert_eq!(s.current_index, 0);
        assert_eq!(e.time_until_due(2.0), None);
    }

    #[test]
    fn cancelled_advance_never_fires() {
        let mut e = engine(2);
        assert!(e.select("ok0", 0.0, DELAY));
        e.cancel_pending();
        assert!(!e.poll(10.0));
        assert_eq!(e.session().map(|s| s.current_index), Some(0));
    }

    #[test]
    fn select_without_session_is_noop() {
        let mut e = QuizEngine::new();
        assert!(!e.select("x", 0.0, DELAY));
        assert!(!e.poll(10.0));
    }
}
