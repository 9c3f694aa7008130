//! Eligibility screening for abused-relative self-petitions.
//!
//! The [`EligibilityEngine`] is a pure function of an [`AnswerRecord`]: it runs
//! the abuser-status, relationship, abuse, residence, good-moral-character and
//! presence evaluators, then reduces their criteria into a single verdict.
//! Intake completeness, the scenario self-test, text rendering and the HTTP
//! surface sit around it.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod report;
pub mod router;
pub mod scenarios;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AbuseAnswers, AbuserStatus, AbuserStatusAnswers, AnswerRecord, ChildAnswers,
    ChildRelationship, ConditionalBar, Language, LocalizedText, MaritalStatus,
    MoralCharacterAnswers, ParentAnswers, PetitionerIdentity, PetitionerType, PresenceAnswers,
    PresenceException, ResidenceAnswers, SpouseAnswers, TriState,
};
pub use evaluation::{
    overall_verdict, Classification, CriterionKind, CriterionResult, EligibilityEngine,
    EligibilityResult, EligibilityStatus,
};
pub use intake::{expected_minimum_criteria, IntakeGuard, IntakeViolation};
pub use report::render_report;
pub use router::screening_router;
pub use scenarios::{
    find_scenario, run_self_test, scenario_library, Scenario, ScenarioOutcome, ScenarioSummary,
    SelfTestReport,
};
pub use service::{ScreeningOptions, ScreeningService, ScreeningServiceError};
