// src/view_models.rs

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryInfo {
    pub id: String,
    pub short_label: String, // lo que cabe en el menú lateral
    pub active: bool,
    pub visited: bool,
    pub entry_count: usize,
}

/// Porción del gráfico de composición del vocabulario.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositionSlice {
    pub name: String,
    pub count: usize,
    pub fraction: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionProgress {
    pub visited: usize,
    pub total: usize,
    pub percent: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Neutral, // todavía sin responder
    Correct,
    Wrong,
    Dimmed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub percent: u8,
}

impl CategoryInfo {
    pub fn label(&self) -> String {
        if self.visited && !self.active {
            format!("{} ✔", self.short_label)
        } else {
            self.short_label.clone()
        }
    }
}

impl SessionProgress {
    pub fn new(visited: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            ((visited as f64 / total as f64) * 100.0).round().min(100.0) as u8
        };
        Self {
            visited,
            total,
            percent,
        }
    }

    pub fn label(&self) -> String {
        format!("{}/{} Temas explorados", self.visited, self.total)
    }
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            ((score as f64 / total as f64) * 100.0).round() as u8
        };
        Self {
            score,
            total,
            percent,
        }
    }

    pub fn feedback(&self) -> &'static str {
        if self.percent >= 80 {
            "¡Excelente! ¡Ya hablas como un nativo!"
        } else if self.percent >= 50 {
            "¡Muy bien! Sigue practicando."
        } else {
            "¡No te desanimes! La práctica hace al maestro."
        }
    }
}

/// Letra de la opción: 0 -> "A", 1 -> "B"...
pub fn option_letter(idx: usize) -> char {
    (b'A' + (idx % 26) as u8) as char
}
