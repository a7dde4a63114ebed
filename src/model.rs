use serde::{Deserialize, Serialize};

/// Color del texto sobre una tarjeta coloreada.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextTone {
    White,
    Black,
}

/// Una palabra o frase en portugués con su traducción al español.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct VocabularyEntry {
    #[serde(rename = "pt")]
    pub word_source: String, // Palabra en portugués
    #[serde(rename = "es")]
    pub word_translation: String, // Traducción
    #[serde(rename = "pron", default)]
    pub pronunciation: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(rename = "frase_pt", default)]
    pub example_source: Option<String>,
    #[serde(rename = "frase_es", default)]
    pub example_translation: Option<String>,
    #[serde(rename = "frase_pron", default)]
    pub example_pronunciation: Option<String>,

    // Solo para la tarjeta, el quiz no los mira
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub text: Option<TextTone>,
    #[serde(default)]
    pub border: bool,
}

impl VocabularyEntry {
    /// Frase de ejemplo (pt, es) si ambas partes tienen contenido.
    pub fn example_pair(&self) -> Option<(&str, &str)> {
        let source = non_empty(self.example_source.as_deref())?;
        let translation = non_empty(self.example_translation.as_deref())?;
        Some((source, translation))
    }

    pub fn example_translation(&self) -> Option<&str> {
        non_empty(self.example_translation.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub title: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(rename = "items", default)]
    pub entries: Vec<VocabularyEntry>,
}

impl Category {
    /// Primera palabra del título ("Saludos e Despedidas" -> "Saludos ...").
    pub fn short_label(&self) -> String {
        let mut words = self.title.split_whitespace();
        let first = words.next().unwrap_or_default();
        if words.next() == Some("e") {
            format!("{first} ...")
        } else {
            first.to_string()
        }
    }
}

/// Banco de vocabulario completo, en el orden en que se muestra.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabularyStore {
    pub categories: Vec<Category>,
}

impl VocabularyStore {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Todas las entradas de todas las categorías, aplanadas.
    pub fn pool(&self) -> Vec<&VocabularyEntry> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter())
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    Word,
    Phrase,
}

/// Pregunta ya generada; inmutable durante la sesión.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub correct_answer: String,
    pub options: Vec<String>,
    pub kind: QuestionKind,
    /// Índice de la entrada de origen dentro del pool.
    pub entry: usize,
}

/// Vista actual de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Quiz,
    Category(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(title: &str) -> Category {
        Category {
            id: "x".into(),
            title: title.into(),
            description: String::new(),
            entries: vec![],
        }
    }

    #[test]
    fn short_label_keeps_first_word() {
        assert_eq!(category("Números Básicos").short_label(), "Números");
        assert_eq!(category("Clima").short_label(), "Clima");
    }

    #[test]
    fn short_label_marks_titles_joined_with_e() {
        assert_eq!(category("Saludos e Despedidas").short_label(), "Saludos ...");
    }

    #[test]
    fn example_pair_requires_both_sides() {
        let mut entry = VocabularyEntry {
            word_source: "Oi".into(),
            word_translation: "Hola".into(),
            example_source: Some("Oi, tudo bem?".into()),
            ..Default::default()
        };
        assert!(entry.example_pair().is_none());

        entry.example_translation = Some("   ".into());
        assert!(entry.example_pair().is_none());

        entry.example_translation = Some("Hola, ¿todo bien?".into());
        assert_eq!(
            entry.example_pair(),
            Some(("Oi, tudo bem?", "Hola, ¿todo bien?"))
        );
    }
}
