use std::sync::Arc;

use crate::workflows::self_petition::domain::AnswerRecord;
use crate::workflows::self_petition::evaluation::{
    CriterionKind, EligibilityEngine, EligibilityResult, EligibilityStatus,
};
use crate::workflows::self_petition::service::{ScreeningOptions, ScreeningService};

pub(super) use crate::workflows::self_petition::scenarios::{
    child_of_citizen, parent_of_citizen, spouse_of_citizen,
};

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new()
}

pub(super) fn evaluate(answers: &AnswerRecord) -> EligibilityResult {
    engine().evaluate(answers)
}

pub(super) fn strict_service() -> Arc<ScreeningService> {
    Arc::new(ScreeningService::new(ScreeningOptions::default()))
}

pub(super) fn lenient_service() -> Arc<ScreeningService> {
    Arc::new(ScreeningService::new(ScreeningOptions {
        require_complete_intake: false,
    }))
}

pub(super) fn status_of(result: &EligibilityResult, kind: CriterionKind) -> Option<EligibilityStatus> {
    result.criterion(kind).map(|criterion| criterion.status)
}

pub(super) fn kinds(result: &EligibilityResult) -> Vec<CriterionKind> {
    result
        .criteria
        .iter()
        .map(|criterion| criterion.criterion)
        .collect()
}
