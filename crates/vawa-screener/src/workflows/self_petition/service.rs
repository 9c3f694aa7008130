use tracing::{info, warn};

use super::domain::AnswerRecord;
use super::evaluation::{EligibilityEngine, EligibilityResult};
use super::intake::{IntakeGuard, IntakeViolation};
use super::scenarios::{run_self_test, SelfTestReport};

/// Knobs applied by the service around the stateless engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreeningOptions {
    pub require_complete_intake: bool,
}

impl Default for ScreeningOptions {
    fn default() -> Self {
        Self {
            require_complete_intake: true,
        }
    }
}

/// Service composing the intake guard and the eligibility engine.
#[derive(Debug, Clone, Default)]
pub struct ScreeningService {
    guard: IntakeGuard,
    engine: EligibilityEngine,
    options: ScreeningOptions,
}

impl ScreeningService {
    pub fn new(options: ScreeningOptions) -> Self {
        Self {
            guard: IntakeGuard::new(),
            engine: EligibilityEngine::new(),
            options,
        }
    }

    pub fn options(&self) -> ScreeningOptions {
        self.options
    }

    /// Screen one answer record, rejecting incomplete intake when configured to.
    pub fn screen(
        &self,
        answers: &AnswerRecord,
    ) -> Result<EligibilityResult, ScreeningServiceError> {
        let petitioner_type = answers
            .petitioner_type
            .map(|kind| kind.label())
            .unwrap_or("unset");

        if self.options.require_complete_intake {
            if let Err(violation) = self.guard.validate(answers) {
                warn!(
                    petitioner_type,
                    missing = violation.missing_fields().len(),
                    "screening rejected: incomplete intake"
                );
                return Err(violation.into());
            }
        }

        let result = self.engine.evaluate(answers);
        if result.incomplete {
            warn!(
                petitioner_type,
                criteria = result.criteria.len(),
                "screening result is incomplete"
            );
        }
        info!(
            petitioner_type,
            verdict = result.overall.key(),
            criteria = result.criteria.len(),
            "self-petition screening completed"
        );
        Ok(result)
    }

    pub fn self_test(&self) -> SelfTestReport {
        let report = run_self_test(&self.engine);
        info!(
            passed = report.passed(),
            failed = report.failed(),
            "self-test completed"
        );
        report
    }
}

/// Error raised by the screening service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
}
