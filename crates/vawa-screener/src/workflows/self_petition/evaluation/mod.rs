mod abuse;
mod abuser;
mod aggregate;
pub(crate) mod citations;
mod moral_character;
mod presence;
mod relationship;
mod residence;
mod verdict;

pub use verdict::overall_verdict;

use super::domain::{AbuserStatus, AnswerRecord, Language, LocalizedText, PetitionerType};
use serde::{Deserialize, Serialize};

/// Stateless rule engine mapping one answer record to one eligibility result.
///
/// Every call builds a fresh result; the engine holds no data between calls and
/// can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityEngine;

impl EligibilityEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, answers: &AnswerRecord) -> EligibilityResult {
        aggregate::assemble(answers)
    }
}

/// Tri-state outcome shared by individual criteria and the overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Eligible,
    NeedsReview,
    NotEligible,
}

impl EligibilityStatus {
    /// Rank used when reducing many statuses to one; higher wins.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Eligible => 0,
            Self::NeedsReview => 1,
            Self::NotEligible => 2,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Eligible => "eligible",
            Self::NeedsReview => "needs_review",
            Self::NotEligible => "not_eligible",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Eligible, Language::English) => "Eligible",
            (Self::Eligible, Language::Spanish) => "Elegible",
            (Self::NeedsReview, Language::English) => "Needs review",
            (Self::NeedsReview, Language::Spanish) => "Requiere revisión",
            (Self::NotEligible, Language::English) => "Not eligible",
            (Self::NotEligible, Language::Spanish) => "No elegible",
        }
    }
}

/// Rule that produced a criterion result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    AbuserStatus,
    MaritalStatus,
    Remarriage,
    MarriageValidity,
    BonaFideMarriage,
    ChildAge,
    ChildMaritalStatus,
    ParentChildRelationship,
    AbuserCitizenship,
    AbuserAge,
    QualifyingAbuse,
    SharedResidence,
    GoodMoralCharacter,
    PhysicalPresence,
}

impl CriterionKind {
    pub fn label(self) -> LocalizedText {
        match self {
            Self::AbuserStatus => {
                LocalizedText::new("Abuser's immigration status", "Estatus migratorio del abusador")
            }
            Self::MaritalStatus => {
                LocalizedText::new("Qualifying marriage", "Matrimonio calificado")
            }
            Self::Remarriage => LocalizedText::new("Remarriage", "Nuevo matrimonio"),
            Self::MarriageValidity => {
                LocalizedText::new("Legal validity of marriage", "Validez legal del matrimonio")
            }
            Self::BonaFideMarriage => {
                LocalizedText::new("Good-faith marriage", "Matrimonio de buena fe")
            }
            Self::ChildAge => LocalizedText::new("Age at filing", "Edad al presentar"),
            Self::ChildMaritalStatus => {
                LocalizedText::new("Unmarried child", "Hijo soltero")
            }
            Self::ParentChildRelationship => {
                LocalizedText::new("Parent-child relationship", "Relación de padre e hijo")
            }
            Self::AbuserCitizenship => LocalizedText::new(
                "Abusive son or daughter is a U.S. citizen",
                "El hijo o hija abusador es ciudadano estadounidense",
            ),
            Self::AbuserAge => LocalizedText::new(
                "Abusive son or daughter is at least 21",
                "El hijo o hija abusador tiene al menos 21 años",
            ),
            Self::QualifyingAbuse => LocalizedText::new(
                "Battery or extreme cruelty",
                "Agresión física o crueldad extrema",
            ),
            Self::SharedResidence => {
                LocalizedText::new("Residence with the abuser", "Residencia con el abusador")
            }
            Self::GoodMoralCharacter => {
                LocalizedText::new("Good moral character", "Buen carácter moral")
            }
            Self::PhysicalPresence => {
                LocalizedText::new("Current location", "Ubicación actual")
            }
        }
    }
}

/// Outcome of a single rule, immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub criterion: CriterionKind,
    pub label: LocalizedText,
    pub status: EligibilityStatus,
    pub explanation: LocalizedText,
    pub citation: String,
}

impl CriterionResult {
    pub(crate) fn new(
        criterion: CriterionKind,
        status: EligibilityStatus,
        explanation: LocalizedText,
        citation: &str,
    ) -> Self {
        Self {
            criterion,
            label: criterion.label(),
            status,
            explanation,
            citation: citation.to_string(),
        }
    }
}

/// Descriptive immigration category the petitioner would fall into if approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    ImmediateRelative,
    FamilyPreference,
    ImmediateRelativeParent,
}

impl Classification {
    pub fn derive(
        petitioner_type: Option<PetitionerType>,
        abuser_status: Option<AbuserStatus>,
    ) -> Option<Self> {
        match petitioner_type? {
            PetitionerType::Parent => Some(Self::ImmediateRelativeParent),
            PetitionerType::Spouse | PetitionerType::Child => {
                if abuser_status == Some(AbuserStatus::Citizen) {
                    Some(Self::ImmediateRelative)
                } else {
                    Some(Self::FamilyPreference)
                }
            }
        }
    }

    pub const fn is_immediate_relative(self) -> bool {
        matches!(self, Self::ImmediateRelative | Self::ImmediateRelativeParent)
    }

    pub fn label(self) -> LocalizedText {
        match self {
            Self::ImmediateRelative => {
                LocalizedText::new("Immediate relative", "Familiar inmediato")
            }
            Self::FamilyPreference => {
                LocalizedText::new("Family preference", "Preferencia familiar")
            }
            Self::ImmediateRelativeParent => LocalizedText::new(
                "Immediate relative (parent of U.S. citizen)",
                "Familiar inmediato (padre o madre de ciudadano estadounidense)",
            ),
        }
    }
}

/// Full screening outcome handed to report renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub overall: EligibilityStatus,
    pub classification: Option<Classification>,
    pub criteria: Vec<CriterionResult>,
    pub recommendations: Vec<String>,
    pub alternatives: Vec<String>,
    pub legal_basis: Vec<String>,
    /// Fewer criteria than a complete record of this petitioner type produces.
    #[serde(default)]
    pub incomplete: bool,
}

impl EligibilityResult {
    pub fn criterion(&self, kind: CriterionKind) -> Option<&CriterionResult> {
        self.criteria.iter().find(|result| result.criterion == kind)
    }

    pub fn count_with_status(&self, status: EligibilityStatus) -> usize {
        self.criteria
            .iter()
            .filter(|result| result.status == status)
            .count()
    }
}

/// Output of one evaluator, concatenated by the aggregator.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    pub criteria: Vec<CriterionResult>,
    pub recommendations: Vec<String>,
    pub alternatives: Vec<String>,
    pub legal_basis: Vec<String>,
}

impl Findings {
    pub fn single(result: CriterionResult) -> Self {
        Self {
            criteria: vec![result],
            ..Self::default()
        }
    }

    pub fn push(&mut self, result: CriterionResult) {
        self.criteria.push(result);
    }

    pub fn suggest(mut self, alternative: &str) -> Self {
        self.alternatives.push(alternative.to_string());
        self
    }

    pub fn recommend(mut self, recommendation: &str) -> Self {
        self.recommendations.push(recommendation.to_string());
        self
    }

    pub fn extend(&mut self, other: Findings) {
        self.criteria.extend(other.criteria);
        self.recommendations.extend(other.recommendations);
        self.alternatives.extend(other.alternatives);
        self.legal_basis.extend(other.legal_basis);
    }
}
