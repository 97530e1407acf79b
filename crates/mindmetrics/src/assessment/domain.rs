use serde::{Deserialize, Serialize};

use super::intake::InvalidCategoryError;

/// How often mental stress interferes with work. Ordinals are the encoding
/// the clustering pipeline was fitted on and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WorkInterference {
    Never,
    Rarely,
    Sometimes,
    Often,
}

impl WorkInterference {
    pub const ALL: [Self; 4] = [Self::Never, Self::Rarely, Self::Sometimes, Self::Often];
    pub const LABELS: [&'static str; 4] = ["Never", "Rarely", "Sometimes", "Often"];

    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Never => 0,
            Self::Rarely => 1,
            Self::Sometimes => 2,
            Self::Often => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        Self::LABELS[self.ordinal() as usize]
    }

    pub fn from_label(value: &str) -> Result<Self, InvalidCategoryError> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == value)
            .ok_or_else(|| InvalidCategoryError {
                value: value.to_string(),
                allowed: &Self::LABELS,
            })
    }
}

impl TryFrom<String> for WorkInterference {
    type Error = InvalidCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value)
    }
}

impl From<WorkInterference> for String {
    fn from(value: WorkInterference) -> Self {
        value.label().to_string()
    }
}

/// Binary survey answer. `No` encodes to 0 and `Yes` to 1, matching the
/// fitted encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    pub const ALL: [Self; 2] = [Self::No, Self::Yes];
    pub const LABELS: [&'static str; 2] = ["No", "Yes"];

    pub const fn ordinal(self) -> u8 {
        match self {
            Self::No => 0,
            Self::Yes => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        Self::LABELS[self.ordinal() as usize]
    }

    pub fn from_label(value: &str) -> Result<Self, InvalidCategoryError> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == value)
            .ok_or_else(|| InvalidCategoryError {
                value: value.to_string(),
                allowed: &Self::LABELS,
            })
    }
}

impl TryFrom<String> for YesNo {
    type Error = InvalidCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value)
    }
}

impl From<YesNo> for String {
    fn from(value: YesNo) -> Self {
        value.label().to_string()
    }
}

/// One completed self-assessment form. Built fresh per analysis run and
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub work_interfere: WorkInterference,
    pub mental_health_consequence: YesNo,
    pub treatment: YesNo,
    pub benefits: YesNo,
    pub care_options: YesNo,
    pub daily_screen_time_min: u16,
    pub sleep_hours: u8,
    pub focus_score: u8,
    pub mood_score: u8,
    pub anxiety_level: u8,
    pub digital_wellbeing_score: u8,
}

impl SurveyResponse {
    pub const SCREEN_TIME_BOUNDS: (u16, u16) = (30, 900);
    pub const SLEEP_BOUNDS: (u8, u8) = (3, 10);
    pub const SCALE_BOUNDS: (u8, u8) = (1, 10);

    /// Initial values the assessment form presents before the user touches
    /// anything.
    pub fn form_defaults() -> Self {
        Self {
            work_interfere: WorkInterference::Never,
            mental_health_consequence: YesNo::No,
            treatment: YesNo::No,
            benefits: YesNo::No,
            care_options: YesNo::No,
            daily_screen_time_min: 300,
            sleep_hours: 7,
            focus_score: 6,
            mood_score: 6,
            anxiety_level: 4,
            digital_wellbeing_score: 6,
        }
    }
}

/// Outcome of one analysis run. The cognitive profile comes from the closed
/// cluster-label table (or its fallback); the decision style is whatever the
/// classifier emitted, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub readiness_score: u8,
    pub cluster_id: u32,
    pub cognitive_profile: String,
    pub decision_style: String,
}
