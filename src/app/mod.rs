use crate::config::QuizConfig;
use crate::model::{View, VocabularyStore};
use crate::quiz::{QuizEngine, RandomSource, RngSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{
    CategoryInfo, CompositionSlice, OptionState, QuizResult, SessionProgress,
};

/// Lo único que se guarda entre ejecuciones: preferencias de la interfaz.
/// El progreso del test vive solo en memoria.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

pub struct LexicoApp {
    pub store: VocabularyStore,
    pub config: QuizConfig,
    pub view: View,
    pub visited: BTreeSet<String>,
    pub sidebar_open: bool,
    /// Tarjetas giradas en la categoría abierta (índice dentro de la categoría).
    pub flipped: HashSet<usize>,
    pub quiz: QuizEngine,
    pub prefs: UiPrefs,
    rng: Box<dyn RandomSource>,
}

impl LexicoApp {
    pub fn new(store: VocabularyStore, config: QuizConfig) -> Self {
        Self::with_rng(store, config, Box::new(RngSource(StdRng::from_entropy())))
    }

    /// Igual que `new` pero con la fuente de aleatoriedad inyectada (tests).
    pub fn with_rng(
        store: VocabularyStore,
        config: QuizConfig,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            store,
            config,
            view: View::Home,
            visited: BTreeSet::new(),
            sidebar_open: false,
            flipped: HashSet::new(),
            quiz: QuizEngine::new(),
            prefs: UiPrefs::default(),
            rng,
        }
    }
}
