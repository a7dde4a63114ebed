use super::*;
use crate::model::Category;
use crate::quiz::QuizSession;

impl LexicoApp {
    /// Categoría abierta, si la vista actual es una categoría que existe.
    pub fn current_category(&self) -> Option<&Category> {
        match &self.view {
            View::Category(id) => self.store.category(id),
            _ => None,
        }
    }

    pub fn first_category_id(&self) -> Option<&str> {
        self.store.categories.first().map(|c| c.id.as_str())
    }

    pub fn is_visited(&self, id: &str) -> bool {
        self.visited.contains(id)
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.quiz.session()
    }

    pub fn is_card_flipped(&self, idx: usize) -> bool {
        self.flipped.contains(&idx)
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::app;
    use super::*;

    #[test]
    fn current_category_only_for_known_ids() {
        let mut a = app();
        assert!(a.current_category().is_none());

        a.view = View::Category("numeros".into());
        assert_eq!(a.current_category().map(|c| c.entries.len()), Some(3));

        a.view = View::Category("no-existe".into());
        assert!(a.current_category().is_none());
    }

    #[test]
    fn first_category_follows_store_order() {
        assert_eq!(app().first_category_id(), Some("saludos"));
    }
}
