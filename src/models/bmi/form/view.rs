use crate::models::bmi::Classification;

use super::{FormState, Phase};

/// What the form should present after the latest event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Nothing beyond the input fields.
    Quiet,
    /// A localized validation message.
    Error(&'static str),
    /// A localized result payload.
    Result(ResultView),
}

/// Presentation payload for a computed result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// The BMI rendered as two-decimal fixed point.
    pub value: String,
    /// The band the BMI fell in.
    pub classification: Classification,
    /// The band's label in the selected language.
    pub classification_label: &'static str,
    /// The estimate disclaimer, always shown.
    pub disclaimer: &'static str,
    /// The congratulation or see-a-professional note, depending on whether
    /// the BMI falls in the advisory ideal band.
    pub advisory: &'static str,
}

impl FormState {
    /// Renders the current phase with the selected language's strings.
    ///
    /// Rendering is where rounding happens: the stored [`Bmi`] keeps full
    /// precision and only the displayed value is fixed to two decimals.
    /// Calling this after a language switch re-resolves every label without
    /// touching the numbers.
    ///
    /// [`Bmi`]: crate::models::bmi::Bmi
    #[must_use]
    pub fn view(&self) -> View {
        let texts = self.language.texts();

        match &self.phase {
            Phase::Idle => View::Quiet,
            Phase::Error(_) => View::Error(texts.error),
            Phase::Result(result) => View::Result(ResultView {
                value: format!("{:.2}", result.bmi.value()),
                classification: result.classification,
                classification_label: result.classification.label(self.language),
                disclaimer: texts.advisory_base,
                advisory: if result.bmi.within_ideal_range() {
                    texts.advisory_success
                } else {
                    texts.advisory_warning
                },
            }),
        }
    }

    /// The weight field label with its unit hint, e.g. `Peso (kg)`.
    #[must_use]
    pub fn weight_field_label(&self) -> String {
        format!(
            "{} {}",
            self.language.texts().weight_label,
            self.unit_system.weight_suffix()
        )
    }

    /// The height field label with its unit hint, e.g. `Altura (cm)`.
    #[must_use]
    pub fn height_field_label(&self) -> String {
        format!(
            "{} {}",
            self.language.texts().height_label,
            self.unit_system.height_suffix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::bmi::UnitSystem;
    use crate::models::bmi::form::{FormEvent, update};
    use crate::support::locale::Language;

    fn submitted(weight: &str, height: &str, unit_system: UnitSystem) -> FormState {
        let state = FormState {
            weight_input: weight.to_owned(),
            height_input: height.to_owned(),
            unit_system,
            ..FormState::default()
        };
        update(state, FormEvent::Submitted)
    }

    fn result_view(state: &FormState) -> ResultView {
        match state.view() {
            View::Result(view) => view,
            other => panic!("expected a result view, got {other:?}"),
        }
    }

    #[test]
    fn idle_form_shows_nothing() {
        assert_eq!(FormState::default().view(), View::Quiet);
    }

    #[test]
    fn error_message_is_localized() {
        let state = submitted("abc", "175", UnitSystem::Metric);
        assert_eq!(
            state.view(),
            View::Error("Por favor, insira valores válidos.")
        );

        let state = update(state, FormEvent::LanguageSelected(Language::En));
        let state = update(state, FormEvent::Submitted);
        assert_eq!(state.view(), View::Error("Please enter valid values."));
    }

    #[test]
    fn metric_result_is_rendered_to_two_decimals() {
        let view = result_view(&submitted("70", "175", UnitSystem::Metric));
        assert_eq!(view.value, "22.86");
        assert_eq!(view.classification, Classification::Normal);
        assert_eq!(view.classification_label, "Peso normal");
    }

    #[test]
    fn imperial_result_is_rendered_to_two_decimals() {
        let view = result_view(&submitted("150", "70", UnitSystem::Imperial));
        assert_eq!(view.value, "21.52");
        assert_eq!(view.classification, Classification::Normal);
    }

    #[test]
    fn language_switch_changes_labels_but_not_the_value() {
        let state = submitted("45", "170", UnitSystem::Metric);
        let pt = result_view(&state);
        assert_eq!(pt.value, "15.57");
        assert_eq!(pt.classification_label, "Abaixo do peso");

        let state = update(state, FormEvent::LanguageSelected(Language::En));
        let en = result_view(&state);
        assert_eq!(en.value, "15.57");
        assert_eq!(en.classification_label, "Underweight");
    }

    #[test]
    fn advisory_follows_the_ideal_band() {
        let normal = result_view(&submitted("70", "175", UnitSystem::Metric));
        assert_eq!(
            normal.advisory,
            Language::Pt.texts().advisory_success
        );

        let underweight = result_view(&submitted("45", "170", UnitSystem::Metric));
        assert_eq!(
            underweight.advisory,
            Language::Pt.texts().advisory_warning
        );
    }

    #[test]
    fn field_labels_follow_unit_system_and_language() {
        let state = FormState::default();
        assert_eq!(state.weight_field_label(), "Peso (kg)");
        assert_eq!(state.height_field_label(), "Altura (cm)");

        let state = FormState {
            unit_system: UnitSystem::Imperial,
            language: Language::En,
            ..state
        };
        assert_eq!(state.weight_field_label(), "Weight (lbs)");
        assert_eq!(state.height_field_label(), "Height (in)");
    }
}
