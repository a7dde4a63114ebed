use crate::config::QuizConfig;
use crate::model::{QuizQuestion, VocabularyStore};

// Submódulos
pub mod feedback;
pub mod generator;
pub mod random;

pub use feedback::{PendingAdvance, QuizEngine};
pub use random::{RandomSource, RngSource};

/// Estado de un intento del test.
///
/// Se crea con [`QuizSession::start`] y nunca se reinicia a medias: un test
/// nuevo es siempre una sesión nueva.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    pub questions: Vec<QuizQuestion>,
    pub current_index: usize,
    pub score: usize,
    pub answered_current: bool,
    pub selected_option: Option<String>,
    pub finished: bool,
}

impl QuizSession {
    pub fn start(store: &VocabularyStore, cfg: &QuizConfig, rng: &mut dyn RandomSource) -> Self {
        let questions = generator::generate_questions(store, cfg, rng);
        log::debug!(
            "Nueva sesión de test con {} preguntas (pool de {})",
            questions.len(),
            store.entry_count()
        );
        Self::from_questions(questions)
    }

    pub fn from_questions(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            answered_current: false,
            selected_option: None,
            finished: false,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Registra la respuesta de la pregunta actual. Solo cuenta la primera.
    /// Devuelve `true` si la respuesta se ha aceptado.
    pub fn submit_answer(&mut self, option: &str) -> bool {
        if self.answered_current || self.finished {
            return false;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return false;
        };

        let correct = option == question.correct_answer;
        self.selected_option = Some(option.to_string());
        self.answered_current = true;
        if correct {
            self.score += 1;
        }
        true
    }

    /// Pasa a la siguiente pregunta o termina el test. Sin respuesta previa no hace nada.
    pub fn advance(&mut self) -> bool {
        if !self.answered_current || self.finished {
            return false;
        }
        if self.current_index + 1 >= self.questions.len() {
            self.finished = true;
        } else {
            self.current_index += 1;
            self.answered_current = false;
            self.selected_option = None;
        }
        true
    }

    /// ¿La opción elegida en la pregunta actual es la correcta?
    pub fn last_answer_correct(&self) -> Option<bool> {
        let selected = self.selected_option.as_ref()?;
        self.current_question()
            .map(|q| *selected == q.correct_answer)
    }
}
