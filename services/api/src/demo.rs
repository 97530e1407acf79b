use chrono::Local;
use clap::Args;
use mindmetrics::assessment::features::COGNITIVE_FIELDS;
use mindmetrics::assessment::{
    AnalysisReport, CentroidClusters, DecisionTree, ModelBundle, StandardScaler, SurveyResponse,
    TreeEnsemble, TreeNode, WorkInterference, YesNo,
};
use mindmetrics::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Directory holding the four pre-trained model artifacts
    #[arg(long)]
    pub(crate) models_dir: PathBuf,
    #[command(flatten)]
    pub(crate) survey: SurveyArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[command(flatten)]
    pub(crate) survey: SurveyArgs,
}

/// Survey answers as CLI flags. Defaults mirror the assessment form's
/// initial values.
#[derive(Args, Debug)]
pub(crate) struct SurveyArgs {
    /// How often mental stress interferes with work
    #[arg(long, default_value = "Never", value_parser = WorkInterference::from_label)]
    work_interfere: WorkInterference,
    /// Worried about mental health consequences at work
    #[arg(long, default_value = "No", value_parser = YesNo::from_label)]
    mental_health_consequence: YesNo,
    /// Sought mental health treatment
    #[arg(long, default_value = "No", value_parser = YesNo::from_label)]
    treatment: YesNo,
    /// Workplace provides mental health benefits
    #[arg(long, default_value = "No", value_parser = YesNo::from_label)]
    benefits: YesNo,
    /// Aware of mental health care options
    #[arg(long, default_value = "No", value_parser = YesNo::from_label)]
    care_options: YesNo,
    /// Daily screen time in minutes
    #[arg(long, default_value_t = 300)]
    daily_screen_time_min: u16,
    /// Average hours of sleep
    #[arg(long, default_value_t = 7)]
    sleep_hours: u8,
    /// Focus score, 1 (low) to 10 (high)
    #[arg(long, default_value_t = 6)]
    focus_score: u8,
    /// Mood score, 1 (low) to 10 (high)
    #[arg(long, default_value_t = 6)]
    mood_score: u8,
    /// Anxiety level, 1 (low) to 10 (high)
    #[arg(long, default_value_t = 4)]
    anxiety_level: u8,
    /// Digital wellbeing score, 1 (low) to 10 (high)
    #[arg(long, default_value_t = 6)]
    digital_wellbeing_score: u8,
}

impl Default for SurveyArgs {
    fn default() -> Self {
        let defaults = SurveyResponse::form_defaults();
        Self {
            work_interfere: defaults.work_interfere,
            mental_health_consequence: defaults.mental_health_consequence,
            treatment: defaults.treatment,
            benefits: defaults.benefits,
            care_options: defaults.care_options,
            daily_screen_time_min: defaults.daily_screen_time_min,
            sleep_hours: defaults.sleep_hours,
            focus_score: defaults.focus_score,
            mood_score: defaults.mood_score,
            anxiety_level: defaults.anxiety_level,
            digital_wellbeing_score: defaults.digital_wellbeing_score,
        }
    }
}

impl SurveyArgs {
    fn into_survey(self) -> SurveyResponse {
        SurveyResponse {
            work_interfere: self.work_interfere,
            mental_health_consequence: self.mental_health_consequence,
            treatment: self.treatment,
            benefits: self.benefits,
            care_options: self.care_options,
            daily_screen_time_min: self.daily_screen_time_min,
            sleep_hours: self.sleep_hours,
            focus_score: self.focus_score,
            mood_score: self.mood_score,
            anxiety_level: self.anxiety_level,
            digital_wellbeing_score: self.digital_wellbeing_score,
        }
    }
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let bundle = ModelBundle::load(&args.models_dir)?;
    let engine = bundle.engine();
    let survey = args.survey.into_survey();

    let report = engine.analyze(&survey)?;
    render_report(&report);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Demo mode: predictions below come from a synthetic model bundle,");
    println!("not from fitted artifacts.\n");

    let engine = synthetic_bundle().engine();
    let survey = args.survey.into_survey();

    let report = engine.analyze(&survey)?;
    render_report(&report);
    Ok(())
}

fn render_report(report: &AnalysisReport) {
    let local = report.generated_at.with_timezone(&Local);
    println!(
        "Cognitive self-assessment — {}",
        local.format("%Y-%m-%d %H:%M")
    );
    println!();
    println!(
        "Readiness score    {:>3} / 100  [{}]  ({})",
        report.result.readiness_score,
        meter(report.result.readiness_score, 25),
        report.readiness_band.label()
    );
    println!("Cognitive profile  {}", report.result.cognitive_profile);
    println!("Decision style     {}", report.result.decision_style);

    println!("\nSelf-analysis summary");
    for point in &report.chart {
        println!(
            "  {:<10} {}  {:>2}",
            point.metric,
            bar(point.value),
            point.value
        );
    }

    println!("\nScore trail");
    for component in &report.score_components {
        println!(
            "  {:<18} {:>4}  {}",
            component.factor.label(),
            format!("{:+}", component.points),
            component.note
        );
    }

    println!("\nObservations");
    for note in &report.observations {
        println!("  - {note}");
    }
}

fn meter(score: u8, width: usize) -> String {
    let filled = usize::from(score).min(100) * width / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

fn bar(value: u8) -> String {
    let filled = usize::from(value.min(10));
    format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled))
}

/// Hand-written stand-in for the fitted artifacts so the demo runs without
/// any files on disk. The shapes match the real bundle; the numbers are
/// illustrative only.
pub(crate) fn synthetic_bundle() -> ModelBundle {
    let scaler = StandardScaler {
        feature_names: COGNITIVE_FIELDS
            .iter()
            .map(|name| name.to_string())
            .collect(),
        means: vec![0.9, 0.4, 0.5, 0.5, 0.5, 310.0, 6.8, 5.9, 6.1, 4.6, 6.2],
        scales: vec![0.9, 0.5, 0.5, 0.5, 0.5, 150.0, 1.5, 2.1, 2.0, 2.4, 2.1],
    };

    // Centroids live in scaled space: roughly neutral, anxious/overloaded,
    // and fatigued/unfocused profiles.
    let clusters = CentroidClusters {
        centroids: vec![
            vec![0.0; 11],
            vec![0.5, 0.4, 0.3, 0.0, 0.0, 0.8, -0.7, -0.5, -0.9, 1.5, -0.4],
            vec![0.2, 0.0, 0.0, 0.0, 0.0, 1.2, -0.3, -1.5, -0.5, 0.4, -1.3],
        ],
    };

    let stump = |feature: usize, threshold: f64, low: usize, high: usize| DecisionTree {
        nodes: vec![
            TreeNode::Branch {
                feature,
                threshold,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf { class: low },
            TreeNode::Leaf { class: high },
        ],
    };

    let classifier = TreeEnsemble {
        classes: vec![
            "Analytical & Deliberate".to_string(),
            "Intuitive & Adaptive".to_string(),
            "Impulsive Under Fatigue".to_string(),
        ],
        n_features: 6,
        trees: vec![
            stump(0, 480.0, 0, 2),
            stump(4, 6.0, 0, 1),
            stump(2, 4.0, 2, 0),
        ],
    };

    ModelBundle {
        scaler: Arc::new(scaler),
        clusters: Arc::new(clusters),
        classifier: Arc::new(classifier),
        decision_feature_count: 6,
    }
}
