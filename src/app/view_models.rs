use super::*;

impl LexicoApp {
    pub fn category_infos(&self) -> Vec<CategoryInfo> {
        let active = match &self.view {
            View::Category(id) => Some(id.as_str()),
            _ => None,
        };
        self.store
            .categories
            .iter()
            .map(|cat| CategoryInfo {
                id: cat.id.clone(),
                short_label: cat.short_label(),
                active: active == Some(cat.id.as_str()),
                visited: self.is_visited(&cat.id),
                entry_count: cat.entries.len(),
            })
            .collect()
    }

    /// Datos del gráfico del dashboard: una porción por categoría.
    pub fn composition(&self) -> Vec<CompositionSlice> {
        let total = self.store.entry_count().max(1) as f32;
        self.store
            .categories
            .iter()
            .map(|cat| CompositionSlice {
                name: cat.title.split_whitespace().next().unwrap_or_default().to_string(),
                count: cat.entries.len(),
                fraction: cat.entries.len() as f32 / total,
            })
            .collect()
    }

    pub fn session_progress(&self) -> SessionProgress {
        let visited = self
            .visited
            .iter()
            .filter(|id| self.store.category(id).is_some())
            .count();
        SessionProgress::new(visited, self.store.categories.len())
    }

    /// Resultado final, solo cuando el test ha terminado.
    pub fn quiz_result(&self) -> Option<QuizResult> {
        let session = self.session()?;
        session
            .finished
            .then(|| QuizResult::new(session.score, session.total()))
    }

    /// Cómo pintar cada opción de la pregunta actual.
    pub fn option_states(&self) -> Vec<(String, OptionState)> {
        let Some(session) = self.session() else {
            return Vec::new();
        };
        let Some(question) = session.current_question() else {
            return Vec::new();
        };
        question
            .options
            .iter()
            .map(|opt| {
                let state = if !session.answered_current {
                    OptionState::Neutral
                } else if *opt == question.correct_answer {
                    OptionState::Correct
                } else if session.selected_option.as_ref() == Some(opt) {
                    OptionState::Wrong
                } else {
                    OptionState::Dimmed
                };
                (opt.clone(), state)
            })
            .collect()
    }
}
