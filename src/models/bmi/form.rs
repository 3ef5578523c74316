//! A pure reducer for the calculator form.
//!
//! The calculator surface is modeled as an explicit, immutable [`FormState`]
//! advanced by [`update`]: every user interaction is a [`FormEvent`], and
//! the reducer returns the next state without touching any hidden globals.
//! Submission is synchronous, so validation is simply the interior of the
//! [`FormEvent::Submitted`] arm; there is no pending state to represent.
//!
//! Rendering is split out into [`View`]: given a state, [`FormState::view`]
//! produces the localized payload to display (nothing, an error message, or
//! a formatted result).

mod view;

pub use view::{ResultView, View};

use crate::support::locale::Language;

use super::core::{Bmi, Classification, UnitSystem, ValidationError, evaluate, validate};

/// The complete state of the calculator form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Raw text of the weight field.
    pub weight_input: String,
    /// Raw text of the height field.
    pub height_input: String,
    /// The selected unit system.
    pub unit_system: UnitSystem,
    /// The selected display language.
    pub language: Language,
    /// What the last interaction produced.
    pub phase: Phase,
}

/// The outcome of the most recent interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Phase {
    /// Nothing to show yet, or stale output was cleared by an edit.
    #[default]
    Idle,
    /// The last submission failed validation.
    Error(ValidationError),
    /// The last submission produced a result.
    Result(BmiResult),
}

/// A computed BMI together with its band.
///
/// Computed fresh on each submission and replaced or discarded by the next
/// event; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub bmi: Bmi,
    pub classification: Classification,
}

/// A user interaction with the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The weight field was edited.
    WeightEdited(String),
    /// The height field was edited.
    HeightEdited(String),
    /// A unit system was selected.
    UnitSelected(UnitSystem),
    /// A display language was selected.
    LanguageSelected(Language),
    /// The calculate button was pressed.
    Submitted,
    /// The form was explicitly reset (the result dialog was dismissed).
    Reset,
}

/// Advances the form by one event.
///
/// Editing either field returns the form to idle, clearing any stale error
/// or result. Switching the language or unit system never touches a
/// computed result; only the labels change with the language. Reset clears
/// the fields and the phase but keeps the selected unit system and
/// language.
#[must_use]
pub fn update(state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::WeightEdited(text) => FormState {
            weight_input: text,
            phase: Phase::Idle,
            ..state
        },
        FormEvent::HeightEdited(text) => FormState {
            height_input: text,
            phase: Phase::Idle,
            ..state
        },
        FormEvent::UnitSelected(unit_system) => FormState {
            unit_system,
            ..state
        },
        FormEvent::LanguageSelected(language) => FormState { language, ..state },
        FormEvent::Submitted => submit(state),
        FormEvent::Reset => FormState {
            weight_input: String::new(),
            height_input: String::new(),
            phase: Phase::Idle,
            ..state
        },
    }
}

fn submit(state: FormState) -> FormState {
    let phase = match validate(&state.weight_input, &state.height_input, state.unit_system) {
        Ok(measurement) => {
            let bmi = evaluate(&measurement);
            Phase::Result(BmiResult {
                bmi,
                classification: bmi.classify(),
            })
        }
        Err(error) => Phase::Error(error),
    };

    FormState { phase, ..state }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(weight: &str, height: &str, unit_system: UnitSystem) -> FormState {
        FormState {
            weight_input: weight.to_owned(),
            height_input: height.to_owned(),
            unit_system,
            ..FormState::default()
        }
    }

    fn submitted(weight: &str, height: &str, unit_system: UnitSystem) -> FormState {
        update(filled(weight, height, unit_system), FormEvent::Submitted)
    }

    #[test]
    fn submit_produces_a_classified_result() {
        let state = submitted("70", "175", UnitSystem::Metric);
        let Phase::Result(result) = state.phase else {
            panic!("expected a result, got {:?}", state.phase);
        };
        assert_eq!(result.classification, Classification::Normal);
    }

    #[test]
    fn submit_with_invalid_input_reports_an_error() {
        let state = submitted("abc", "175", UnitSystem::Metric);
        assert!(matches!(state.phase, Phase::Error(_)));
    }

    #[test]
    fn failed_submission_clears_a_displayed_result() {
        let state = submitted("70", "175", UnitSystem::Metric);
        let state = update(state, FormEvent::WeightEdited("-5".into()));
        let state = update(state, FormEvent::Submitted);
        assert!(matches!(state.phase, Phase::Error(_)));
    }

    #[test]
    fn editing_a_field_returns_to_idle() {
        let state = submitted("70", "175", UnitSystem::Metric);
        let state = update(state, FormEvent::HeightEdited("180".into()));
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.height_input, "180");
        assert_eq!(state.weight_input, "70");
    }

    #[test]
    fn language_switch_keeps_the_numeric_result() {
        let before = submitted("70", "175", UnitSystem::Metric);
        let after = update(before.clone(), FormEvent::LanguageSelected(Language::En));
        assert_eq!(after.phase, before.phase);
        assert_eq!(after.language, Language::En);
    }

    #[test]
    fn unit_switch_keeps_the_phase() {
        let before = submitted("70", "175", UnitSystem::Metric);
        let after = update(before.clone(), FormEvent::UnitSelected(UnitSystem::Imperial));
        assert_eq!(after.phase, before.phase);
    }

    #[test]
    fn reset_clears_fields_but_keeps_selectors() {
        let state = submitted("70", "175", UnitSystem::Metric);
        let state = update(state, FormEvent::LanguageSelected(Language::En));
        let state = update(state, FormEvent::Reset);

        assert_eq!(state.weight_input, "");
        assert_eq!(state.height_input, "");
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.unit_system, UnitSystem::Metric);
        assert_eq!(state.language, Language::En);
    }

    #[test]
    fn submissions_are_independent() {
        let first = submitted("70", "175", UnitSystem::Metric);
        let second = update(first.clone(), FormEvent::Submitted);
        assert_eq!(first.phase, second.phase);
    }
}
