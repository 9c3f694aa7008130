mod child;
mod parent;
mod spouse;

use super::super::domain::{AnswerRecord, PetitionerType};
use super::Findings;

/// Validate the qualifying family relationship for the selected petitioner type.
pub(crate) fn evaluate(answers: &AnswerRecord) -> Findings {
    match answers.petitioner_type {
        Some(PetitionerType::Spouse) => spouse::evaluate(&answers.spouse),
        Some(PetitionerType::Child) => child::evaluate(&answers.child),
        Some(PetitionerType::Parent) => parent::evaluate(&answers.parent),
        None => Findings::default(),
    }
}
