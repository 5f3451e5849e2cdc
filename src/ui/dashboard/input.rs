//! Prediction form editing
//!
//! Key handling for the form overlay: four feature fields followed by the
//! model selector.

use crate::dashboard::form::{FEATURE_NAMES, PredictionForm};
use crossterm::event::{KeyCode, KeyEvent};

/// Index of the model selector among the focusable fields.
pub const MODEL_FIELD: usize = FEATURE_NAMES.len();

/// What the host should do after a key press in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit(PredictionForm),
    Cancel,
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub form: PredictionForm,
    pub models: Vec<String>,
    pub model_index: usize,
    pub focus: usize,
}

impl FormState {
    pub fn new(models: Vec<String>, default_model: &str) -> Self {
        let model_index = models.iter().position(|m| m == default_model).unwrap_or(0);
        let model = models.get(model_index).cloned().unwrap_or_default();
        Self {
            form: PredictionForm::new(model),
            models,
            model_index,
            focus: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return FormAction::Submit(self.form.clone()),
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % (MODEL_FIELD + 1),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + MODEL_FIELD) % (MODEL_FIELD + 1)
            }
            KeyCode::Left if self.focus == MODEL_FIELD => self.cycle_model(false),
            KeyCode::Right if self.focus == MODEL_FIELD => self.cycle_model(true),
            KeyCode::Backspace if self.focus < MODEL_FIELD => {
                self.form.features[self.focus].pop();
            }
            KeyCode::Char(c) if self.focus < MODEL_FIELD && is_numeric_char(c) => {
                self.form.features[self.focus].push(c);
            }
            _ => {}
        }
        FormAction::None
    }

    fn cycle_model(&mut self, forward: bool) {
        if self.models.is_empty() {
            return;
        }
        let len = self.models.len();
        self.model_index = if forward {
            (self.model_index + 1) % len
        } else {
            (self.model_index + len - 1) % len
        };
        self.form.model = self.models[self.model_index].clone();
    }
}

/// Characters a number field accepts while typing.
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn models() -> Vec<String> {
        vec!["random_forest".to_string(), "svm".to_string()]
    }

    fn type_text(state: &mut FormState, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut state = FormState::new(models(), "svm");
        type_text(&mut state, "5.1");
        state.handle_key(key(KeyCode::Tab));
        type_text(&mut state, "3x5");
        state.handle_key(key(KeyCode::Backspace));

        assert_eq!(state.form.features[0], "5.1");
        assert_eq!(state.form.features[1], "3");
        assert_eq!(state.form.model, "svm");
    }

    #[test]
    fn test_model_cycles_only_on_model_field() {
        let mut state = FormState::new(models(), "random_forest");
        state.handle_key(key(KeyCode::Right));
        assert_eq!(state.form.model, "random_forest");

        state.handle_key(key(KeyCode::BackTab));
        assert_eq!(state.focus, MODEL_FIELD);
        state.handle_key(key(KeyCode::Right));
        assert_eq!(state.form.model, "svm");
        state.handle_key(key(KeyCode::Right));
        assert_eq!(state.form.model, "random_forest");
        state.handle_key(key(KeyCode::Left));
        assert_eq!(state.form.model, "svm");
    }

    #[test]
    fn test_enter_submits_and_esc_cancels() {
        let mut state = FormState::new(models(), "svm");
        type_text(&mut state, "4.9");
        match state.handle_key(key(KeyCode::Enter)) {
            FormAction::Submit(form) => assert_eq!(form.features[0], "4.9"),
            other => panic!("unexpected action {:?}", other),
        }
        assert_eq!(state.handle_key(key(KeyCode::Esc)), FormAction::Cancel);
    }

    #[test]
    fn test_unknown_default_model_picks_first() {
        let state = FormState::new(models(), "knn");
        assert_eq!(state.form.model, "random_forest");
    }
}
