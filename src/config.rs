use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ajustes del test. Se pueden sobrescribir desde la sección `quiz:` del YAML.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
    pub question_count: usize,
    /// Opciones por pregunta, contando la correcta.
    pub option_count: usize,
    pub phrase_probability: f64,
    pub feedback_delay_secs: f64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: 10,
            option_count: 4,
            phrase_probability: 0.5,
            feedback_delay_secs: 1.2,
        }
    }
}

impl QuizConfig {
    pub fn distractor_count(&self) -> usize {
        self.option_count.saturating_sub(1)
    }

    /// Valores negativos o NaN cuentan como 0; infinito se satura.
    pub fn feedback_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.feedback_delay_secs.max(0.0)).unwrap_or(Duration::MAX)
    }
}
