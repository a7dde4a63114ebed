use super::random::{RandomSource, sample, shuffle};
use crate::config::QuizConfig;
use crate::model::{QuestionKind, QuizQuestion, VocabularyEntry, VocabularyStore};

/// Genera las preguntas de un test: entradas distintas, tipo elegido por entrada.
pub fn generate_questions(
    store: &VocabularyStore,
    cfg: &QuizConfig,
    rng: &mut dyn RandomSource,
) -> Vec<QuizQuestion> {
    let pool = store.pool();
    let indices: Vec<usize> = (0..pool.len()).collect();
    let chosen = sample(&indices, cfg.question_count.min(pool.len()), rng);

    chosen
        .into_iter()
        .map(|idx| {
            let entry = pool[idx];
            // Se tira la moneda siempre, aunque la entrada no tenga frase
            let wants_phrase = rng.chance(cfg.phrase_probability);
            match entry.example_pair() {
                Some((source, translation)) if wants_phrase => {
                    phrase_question(idx, source, translation, &pool, cfg, rng)
                }
                _ => word_question(idx, entry, &pool, cfg, rng),
            }
        })
        .collect()
}

fn word_question(
    idx: usize,
    entry: &VocabularyEntry,
    pool: &[&VocabularyEntry],
    cfg: &QuizConfig,
    rng: &mut dyn RandomSource,
) -> QuizQuestion {
    let correct = entry.word_translation.clone();
    let candidates: Vec<String> = pool
        .iter()
        .filter(|e| e.word_translation != correct)
        .map(|e| e.word_translation.clone())
        .collect();

    build_question(
        format!("Traduce al español: \"{}\"", entry.word_source),
        correct,
        candidates,
        QuestionKind::Word,
        idx,
        cfg,
        rng,
    )
}

fn phrase_question(
    idx: usize,
    source: &str,
    translation: &str,
    pool: &[&VocabularyEntry],
    cfg: &QuizConfig,
    rng: &mut dyn RandomSource,
) -> QuizQuestion {
    let candidates: Vec<String> = pool
        .iter()
        .filter_map(|e| e.example_translation())
        .filter(|t| *t != translation)
        .map(str::to_string)
        .collect();

    build_question(
        format!("Si alguien dice: \"{source}\", ¿qué significa?"),
        translation.to_string(),
        candidates,
        QuestionKind::Phrase,
        idx,
        cfg,
        rng,
    )
}

fn build_question(
    prompt: String,
    correct: String,
    candidates: Vec<String>,
    kind: QuestionKind,
    entry: usize,
    cfg: &QuizConfig,
    rng: &mut dyn RandomSource,
) -> QuizQuestion {
    // Si no hay suficientes candidatos salen menos opciones, nunca un error
    let distractors = sample(&candidates, cfg.distractor_count(), rng);
    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(correct.clone());
    options.extend(distractors);

    QuizQuestion {
        prompt,
        correct_answer: correct,
        options: shuffle(&options, rng),
        kind,
        entry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::quiz::random::RngSource;
    use crate::quiz::random::testing::{AlwaysPhrase, Identity};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn word(pt: &str, es: &str) -> VocabularyEntry {
        VocabularyEntry {
            word_source: pt.into(),
            word_translation: es.into(),
            ..Default::default()
        }
    }

    fn phrase(pt: &str, es: &str, fpt: &str, fes: &str) -> VocabularyEntry {
        VocabularyEntry {
            example_source: Some(fpt.into()),
            example_translation: Some(fes.into()),
            ..word(pt, es)
        }
    }

    fn store(entries: Vec<VocabularyEntry>) -> VocabularyStore {
        VocabularyStore::new(vec![Category {
            id: "test".into(),
            title: "Test".into(),
            description: String::new(),
            entries,
        }])
    }

    fn four_words() -> VocabularyStore {
        store(vec![
            word("Um", "Uno"),
            word("Dois", "Dos"),
            word("Três", "Tres"),
            word("Quatro", "Cuatro"),
        ])
    }

    #[test]
    fn four_entries_without_phrases_give_four_word_questions() {
        let questions = generate_questions(&four_words(), &QuizConfig::default(), &mut AlwaysPhrase);
        assert_eq!(questions.len(), 4);
        for q in &questions {
            assert_eq!(q.kind, QuestionKind::Word);
            assert_eq!(q.options.len(), 4);
            assert_eq!(q.options.iter().filter(|o| **o == q.correct_answer).count(), 1);
        }
    }

    #[test]
    fn identity_source_gives_exact_prompts_and_order() {
        let questions = generate_questions(&four_words(), &QuizConfig::default(), &mut Identity);
        assert_eq!(questions[0].prompt, "Traduce al español: \"Um\"");
        assert_eq!(questions[0].correct_answer, "Uno");
        assert_eq!(questions[0].options, vec!["Uno", "Dos", "Tres", "Cuatro"]);
        assert_eq!(questions[2].options, vec!["Tres", "Uno", "Dos", "Cuatro"]);
        assert_eq!(
            questions.iter().map(|q| q.entry).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn phrase_question_uses_example_fields() {
        let s = store(vec![
            phrase("Chuva", "Lluvia", "Vai chover.", "Va a llover."),
            phrase("Calor", "Calor", "Faz calor.", "Hace calor."),
            word("Frio", "Frío"),
        ]);
        let questions = generate_questions(&s, &QuizConfig::default(), &mut AlwaysPhrase);
        assert_eq!(questions[0].kind, QuestionKind::Phrase);
        assert_eq!(
            questions[0].prompt,
            "Si alguien dice: \"Vai chover.\", ¿qué significa?"
        );
        // Solo las entradas con frase sirven de distractor
        assert_eq!(questions[0].options, vec!["Va a llover.", "Hace calor."]);
        assert_eq!(questions[2].kind, QuestionKind::Word);
        assert_eq!(questions[2].options, vec!["Frío", "Lluvia", "Calor"]);
    }

    #[test]
    fn small_pool_degrades_to_fewer_options() {
        let s = store(vec![word("Oi", "Hola"), word("Tchau", "Adiós")]);
        let questions = generate_questions(&s, &QuizConfig::default(), &mut Identity);
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.options.len() == 2));

        let single = store(vec![word("Oi", "Hola")]);
        let questions = generate_questions(&single, &QuizConfig::default(), &mut Identity);
        assert_eq!(questions[0].options, vec!["Hola"]);
    }

    #[test]
    fn shared_translations_may_repeat_as_distractors() {
        let s = store(vec![
            word("Um", "Uno"),
            word("Dois", "Dos"),
            word("Duas", "Dos"),
            word("Três", "Tres"),
        ]);
        let questions = generate_questions(&s, &QuizConfig::default(), &mut Identity);

        let first = &questions[0];
        assert_eq!(first.options.len(), 4);
        assert_eq!(first.options.iter().filter(|o| *o == "Dos").count(), 2);
        assert_eq!(first.options.iter().filter(|o| *o == "Uno").count(), 1);

        // La respuesta correcta nunca se cuela como distractor
        let second = &questions[1];
        assert_eq!(second.correct_answer, "Dos");
        assert_eq!(second.options.iter().filter(|o| *o == "Dos").count(), 1);
        assert_eq!(second.options.len(), 3);
    }

    #[test]
    fn empty_store_gives_no_questions() {
        let questions = generate_questions(&store(vec![]), &QuizConfig::default(), &mut Identity);
        assert!(questions.is_empty());
    }

    #[test]
    fn random_sessions_respect_invariants() {
        let (vocab, cfg) = crate::data::read_vocabulary_embedded().expect("vocabulario");
        for seed in 0..50 {
            let mut rng = RngSource(StdRng::seed_from_u64(seed));
            let questions = generate_questions(&vocab, &cfg, &mut rng);
            assert_eq!(questions.len(), cfg.question_count.min(vocab.entry_count()));

            let entries: HashSet<usize> = questions.iter().map(|q| q.entry).collect();
            assert_eq!(entries.len(), questions.len());

            for q in &questions {
                assert!((1..=4).contains(&q.options.len()));
                assert_eq!(q.options.iter().filter(|o| **o == q.correct_answer).count(), 1);
            }
        }
    }

    #[test]
    fn question_count_caps_the_sample() {
        let cfg = QuizConfig {
            question_count: 2,
            ..Default::default()
        };
        let questions = generate_questions(&four_words(), &cfg, &mut Identity);
        assert_eq!(questions.len(), 2);
    }
}
