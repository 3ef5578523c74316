//! Static localization tables.
//!
//! All user-facing strings live in per-language [`StringTable`]s embedded at
//! compile time. [`Language`] is a closed enum, so every lookup is total:
//! there is no runtime fallback chain and no missing-key path.

/// A supported display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// Portuguese.
    #[default]
    Pt,
    /// English.
    En,
}

impl Language {
    /// Returns the string table for this language.
    #[must_use]
    pub fn texts(self) -> &'static StringTable {
        match self {
            Language::Pt => &PT,
            Language::En => &EN,
        }
    }
}

/// The complete set of user-facing strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringTable {
    pub title: &'static str,
    pub weight_label: &'static str,
    pub height_label: &'static str,
    pub calculate_button: &'static str,
    pub metric: &'static str,
    pub imperial: &'static str,
    pub language: &'static str,
    pub result_title: &'static str,
    pub bmi: &'static str,
    pub status: &'static str,
    pub statuses: ClassificationLabels,
    pub error: &'static str,
    pub advisory_ideal: &'static str,
    pub advisory_warning: &'static str,
    pub advisory_success: &'static str,
    pub advisory_base: &'static str,
    pub ok_button: &'static str,
}

/// Localized labels for the four classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationLabels {
    pub underweight: &'static str,
    pub normal: &'static str,
    pub overweight: &'static str,
    pub obese: &'static str,
}

static PT: StringTable = StringTable {
    title: "Calculadora de IMC",
    weight_label: "Peso",
    height_label: "Altura",
    calculate_button: "Calcular",
    metric: "Métrico",
    imperial: "Imperial",
    language: "Idioma",
    result_title: "Seu Resultado",
    bmi: "Seu IMC é",
    status: "Classificação",
    statuses: ClassificationLabels {
        underweight: "Abaixo do peso",
        normal: "Peso normal",
        overweight: "Sobrepeso",
        obese: "Obesidade",
    },
    error: "Por favor, insira valores válidos.",
    advisory_ideal: "O IMC ideal está na faixa de",
    advisory_warning: "Como seu resultado está fora da faixa ideal, recomendamos procurar \
                       um profissional de saúde para maiores esclarecimentos.",
    advisory_success: "Seu resultado está na faixa ideal. Parabéns!",
    advisory_base: "Lembre-se que o IMC é apenas uma estimativa.",
    ok_button: "OK, Entendi",
};

static EN: StringTable = StringTable {
    title: "BMI Calculator",
    weight_label: "Weight",
    height_label: "Height",
    calculate_button: "Calculate",
    metric: "Metric",
    imperial: "Imperial",
    language: "Language",
    result_title: "Your Result",
    bmi: "Your BMI is",
    status: "Classification",
    statuses: ClassificationLabels {
        underweight: "Underweight",
        normal: "Normal weight",
        overweight: "Overweight",
        obese: "Obese",
    },
    error: "Please enter valid values.",
    advisory_ideal: "The ideal BMI is in the range of",
    advisory_warning: "As your result is outside the ideal range, we recommend consulting \
                       a health professional for further clarification.",
    advisory_success: "Your result is in the ideal range. Congratulations!",
    advisory_base: "Remember that BMI is only an estimate.",
    ok_button: "OK, Got it",
};
