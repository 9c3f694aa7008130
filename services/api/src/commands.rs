use crate::infra::{load_answers, resolve_language};
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use vawa_screener::config::AppConfig;
use vawa_screener::error::AppError;
use vawa_screener::telemetry::{self, LogSink};
use vawa_screener::workflows::self_petition::{
    render_report, scenario_library, ScreeningService, SelfTestReport,
};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Path to a JSON answer record
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Report language (en or es). Defaults to APP_REPORT_LANGUAGE.
    #[arg(long)]
    pub(crate) language: Option<String>,
    /// Print the raw result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
    /// Evaluate even when required answers are missing
    #[arg(long)]
    pub(crate) skip_intake_check: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SelfTestArgs {
    /// Print every scenario, not only regressions
    #[arg(long)]
    pub(crate) verbose: bool,
}

fn prepare() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;
    Ok(config)
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = prepare()?;
    let language = resolve_language(&config, args.language.as_deref())?;

    let mut options = config.screening.options();
    if args.skip_intake_check {
        options.require_complete_intake = false;
    }

    let answers = load_answers(&args.answers)?;
    let service = ScreeningService::new(options);
    let result = service.screen(&answers)?;

    info!(path = %args.answers.display(), overall = result.overall.key(), "answer record evaluated");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result, language));
    }
    Ok(())
}

pub(crate) fn run_scenarios() -> Result<(), AppError> {
    println!("{}", scenario_listing());
    Ok(())
}

fn scenario_listing() -> String {
    let scenarios = scenario_library();
    let mut lines = vec![format!("Built-in scenarios ({}):", scenarios.len())];
    lines.extend(scenarios.iter().map(|scenario| {
        format!(
            "  {:<36} expect {:<13} {}",
            scenario.key,
            scenario.expected.key(),
            scenario.title
        )
    }));
    lines.join("\n")
}

pub(crate) fn run_self_test(args: SelfTestArgs) -> Result<(), AppError> {
    let config = prepare()?;
    let service = ScreeningService::new(config.screening.options());

    let report = service.self_test();
    println!("{}", self_test_summary(&report, args.verbose));

    if report.all_passed() {
        Ok(())
    } else {
        Err(AppError::SelfTest {
            failed: report.failed(),
        })
    }
}

fn self_test_summary(report: &SelfTestReport, verbose: bool) -> String {
    let mut lines = Vec::new();
    for outcome in &report.outcomes {
        if !verbose && outcome.passed {
            continue;
        }
        let marker = if outcome.passed { "PASS" } else { "FAIL" };
        lines.push(format!(
            "{marker} {} (expected {}, got {})",
            outcome.key,
            outcome.expected.key(),
            outcome.actual.key()
        ));
    }
    lines.push(format!(
        "{} passed, {} failed",
        report.passed(),
        report.failed()
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vawa_screener::workflows::self_petition::{EligibilityStatus, ScenarioOutcome};

    #[test]
    fn listing_names_every_scenario() {
        let listing = scenario_listing();
        for scenario in scenario_library() {
            assert!(listing.contains(scenario.key), "{} missing", scenario.key);
        }
    }

    #[test]
    fn quiet_summary_only_shows_regressions() {
        let report = SelfTestReport {
            outcomes: vec![
                ScenarioOutcome {
                    key: "passing",
                    title: "passing scenario",
                    expected: EligibilityStatus::Eligible,
                    actual: EligibilityStatus::Eligible,
                    passed: true,
                },
                ScenarioOutcome {
                    key: "regressed",
                    title: "regressed scenario",
                    expected: EligibilityStatus::NotEligible,
                    actual: EligibilityStatus::NeedsReview,
                    passed: false,
                },
            ],
        };

        let quiet = self_test_summary(&report, false);
        assert!(!quiet.contains("PASS passing"));
        assert!(quiet.contains("FAIL regressed (expected not_eligible, got needs_review)"));
        assert!(quiet.ends_with("1 passed, 1 failed"));

        let verbose = self_test_summary(&report, true);
        assert!(verbose.contains("PASS passing"));
    }
}
