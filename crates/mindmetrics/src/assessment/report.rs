//! Presentation-ready view of one analysis run: the result itself, the score
//! trail, a coarse readiness band, the metric series the summary chart plots,
//! and plain-language observations about what moved the number.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{AnalysisResult, SurveyResponse, YesNo};
use super::scoring::{ScoreBreakdown, ScoreComponent};

/// Coarse reading of the readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessBand {
    Strong,
    Steady,
    Strained,
}

impl ReadinessBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            Self::Strong
        } else if score >= 60 {
            Self::Steady
        } else {
            Self::Strained
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ReadinessBand::Strong => "strong",
            ReadinessBand::Steady => "steady",
            ReadinessBand::Strained => "strained",
        }
    }
}

/// One bar of the self-analysis summary chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricPoint {
    pub metric: &'static str,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub result: AnalysisResult,
    pub readiness_band: ReadinessBand,
    pub score_components: Vec<ScoreComponent>,
    pub chart: Vec<MetricPoint>,
    pub observations: Vec<String>,
}

impl AnalysisReport {
    pub(crate) fn assemble(
        survey: &SurveyResponse,
        result: AnalysisResult,
        breakdown: ScoreBreakdown,
    ) -> Self {
        let readiness_band = ReadinessBand::for_score(result.readiness_score);
        let chart = chart_series(survey);
        let observations = observations(survey, &result, readiness_band);

        Self {
            generated_at: Utc::now(),
            result,
            readiness_band,
            score_components: breakdown.components,
            chart,
            observations,
        }
    }
}

fn chart_series(survey: &SurveyResponse) -> Vec<MetricPoint> {
    vec![
        MetricPoint {
            metric: "Focus",
            value: survey.focus_score,
        },
        MetricPoint {
            metric: "Mood",
            value: survey.mood_score,
        },
        MetricPoint {
            metric: "Sleep",
            value: survey.sleep_hours,
        },
        MetricPoint {
            metric: "Anxiety",
            value: survey.anxiety_level,
        },
        MetricPoint {
            metric: "Wellbeing",
            value: survey.digital_wellbeing_score,
        },
    ]
}

fn observations(
    survey: &SurveyResponse,
    result: &AnalysisResult,
    band: ReadinessBand,
) -> Vec<String> {
    let mut notes = vec![format!(
        "Readiness {} of 100 places this profile in the {} band",
        result.readiness_score,
        band.label()
    )];

    if survey.anxiety_level >= 7 {
        notes.push(format!(
            "Elevated anxiety ({} of 10) is the largest drag on readiness",
            survey.anxiety_level
        ));
    }
    if survey.sleep_hours <= 5 {
        notes.push(format!(
            "{} hours of sleep is below the restorative range",
            survey.sleep_hours
        ));
    }
    if survey.focus_score >= 7 && survey.digital_wellbeing_score >= 7 {
        notes.push("Strong focus and digital wellbeing lifted the score".to_string());
    }
    if survey.daily_screen_time_min >= 600 {
        notes.push(format!(
            "{} minutes of daily screen time points to digital fatigue risk",
            survey.daily_screen_time_min
        ));
    }
    if survey.treatment == YesNo::Yes {
        notes.push("Seeking treatment is factored into the cognitive profile".to_string());
    }

    notes.push(format!(
        "Clustering matched this profile to '{}'",
        result.cognitive_profile
    ));
    notes.push(format!(
        "Classified decision-making style: '{}'",
        result.decision_style
    ));

    notes
}
