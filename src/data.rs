// src/data.rs

use crate::config::QuizConfig;
use crate::model::{Category, VocabularyStore};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug)]
pub enum DataError {
    Yaml(serde_yaml::Error),
    NoCategories,
    DuplicateCategory(String),
    EmptyField {
        category: String,
        index: usize,
        field: &'static str,
    },
    InvalidConfig {
        field: &'static str,
        value: f64,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Yaml(e) => write!(f, "YAML de vocabulario inválido: {e}"),
            DataError::NoCategories => write!(f, "El vocabulario no tiene categorías"),
            DataError::DuplicateCategory(id) => write!(f, "Categoría duplicada: '{id}'"),
            DataError::EmptyField {
                category,
                index,
                field,
            } => write!(
                f,
                "Entrada {} de '{category}' sin campo obligatorio '{field}'",
                index + 1
            ),
            DataError::InvalidConfig { field, value } => {
                write!(f, "Valor inválido en quiz.{field}: {value}")
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Yaml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for DataError {
    fn from(e: serde_yaml::Error) -> Self {
        DataError::Yaml(e)
    }
}

/// Contenido del fichero YAML tal cual.
#[derive(Deserialize)]
struct VocabularyFile {
    #[serde(default)]
    quiz: QuizConfig,
    categories: Vec<Category>,
}

/// Carga el vocabulario embebido en el binario
pub fn read_vocabulary_embedded() -> Result<(VocabularyStore, QuizConfig), DataError> {
    parse_vocabulary(include_str!("data/vocabulario.yaml"))
}

pub fn parse_vocabulary(yaml: &str) -> Result<(VocabularyStore, QuizConfig), DataError> {
    let file: VocabularyFile = serde_yaml::from_str(yaml)?;
    validate(&file.categories)?;
    validate_config(&file.quiz)?;

    let store = VocabularyStore::new(file.categories);
    log::info!(
        "Vocabulario cargado: {} categorías, {} entradas",
        store.categories.len(),
        store.entry_count()
    );
    Ok((store, file.quiz))
}

fn validate(categories: &[Category]) -> Result<(), DataError> {
    if categories.is_empty() {
        return Err(DataError::NoCategories);
    }

    let mut ids = HashSet::new();
    for cat in categories {
        if !ids.insert(cat.id.as_str()) {
            return Err(DataError::DuplicateCategory(cat.id.clone()));
        }
        for (index, entry) in cat.entries.iter().enumerate() {
            let missing = if entry.word_source.trim().is_empty() {
                Some("pt")
            } else if entry.word_translation.trim().is_empty() {
                Some("es")
            } else {
                None
            };
            if let Some(field) = missing {
                return Err(DataError::EmptyField {
                    category: cat.id.clone(),
                    index,
                    field,
                });
            }
        }
    }
    Ok(())
}

fn validate_config(cfg: &QuizConfig) -> Result<(), DataError> {
    let p = cfg.phrase_probability;
    if !(0.0..=1.0).contains(&p) {
        return Err(DataError::InvalidConfig {
            field: "phrase_probability",
            value: p,
        });
    }
    let delay = cfg.feedback_delay_secs;
    if !delay.is_finite() || delay < 0.0 {
        return Err(DataError::InvalidConfig {
            field: "feedback_delay_secs",
            value: delay,
        });
    }
    Ok(())
}
