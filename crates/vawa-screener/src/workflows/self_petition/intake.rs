use super::domain::{AbuserStatus, AnswerRecord, MaritalStatus, PetitionerType, TriState};

/// Validation errors raised by the intake guard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("intake incomplete; unanswered: {}", .fields.join(", "))]
    MissingAnswers { fields: Vec<&'static str> },
}

impl IntakeViolation {
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            IntakeViolation::MissingAnswers { fields } => fields,
        }
    }
}

/// Minimum number of criteria a complete record produces for each petitioner type.
pub const fn expected_minimum_criteria(petitioner_type: PetitionerType) -> usize {
    match petitioner_type {
        PetitionerType::Spouse => 7,
        PetitionerType::Child => 8,
        PetitionerType::Parent => 6,
    }
}

/// Rejects answer records that would leave required criteria unevaluated.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn new() -> Self {
        Self
    }

    /// Report every unanswered required field, in intake order.
    pub fn validate(&self, answers: &AnswerRecord) -> Result<(), IntakeViolation> {
        let mut missing = Missing::default();

        let Some(petitioner_type) = answers.petitioner_type else {
            missing.push("petitioner_type");
            return missing.into_result();
        };

        if petitioner_type != PetitionerType::Parent {
            match answers.abuser.status {
                None => missing.push("abuser.status"),
                Some(AbuserStatus::LostStatus) => {
                    missing.require("abuser.loss_related_to_abuse", answers.abuser.loss_related_to_abuse);
                    missing.require("abuser.loss_within_two_years", answers.abuser.loss_within_two_years);
                }
                Some(_) => {}
            }
        }

        match petitioner_type {
            PetitionerType::Spouse => spouse(answers, &mut missing),
            PetitionerType::Child => child(answers, &mut missing),
            PetitionerType::Parent => {
                missing.require("parent.abuser_is_citizen", answers.parent.abuser_is_citizen);
                missing.require("parent.abuser_over_21", answers.parent.abuser_over_21);
            }
        }

        missing.require("abuse.occurred", answers.abuse.occurred);
        if answers.abuse.occurred.is_yes() {
            missing.require("abuse.during_relationship", answers.abuse.during_relationship);
        }

        missing.require("residence.resided_with_abuser", answers.residence.resided_with_abuser);
        if petitioner_type == PetitionerType::Child && answers.residence.resided_with_abuser.is_no() {
            missing.require(
                "residence.child_abused_during_visitation",
                answers.residence.child_abused_during_visitation,
            );
        }

        missing.require(
            "moral_character.aggravated_felony",
            answers.moral_character.aggravated_felony,
        );
        missing.require(
            "moral_character.persecution_genocide_torture",
            answers.moral_character.persecution_genocide_torture,
        );
        moral_character(answers, &mut missing);

        missing.require("presence.currently_in_country", answers.presence.currently_in_country);
        if answers.presence.currently_in_country.is_no() && answers.presence.exception.is_none() {
            missing.push("presence.exception");
        }

        missing.into_result()
    }
}

fn spouse(answers: &AnswerRecord, missing: &mut Missing) {
    let spouse = &answers.spouse;
    match spouse.marital_status {
        None => missing.push("spouse.marital_status"),
        Some(MaritalStatus::Married) => {}
        Some(MaritalStatus::Divorced) => {
            missing.require("spouse.divorce_within_two_years", spouse.divorce_within_two_years);
            missing.require("spouse.divorce_related_to_abuse", spouse.divorce_related_to_abuse);
        }
        Some(MaritalStatus::Widowed) => {
            missing.require("spouse.death_within_two_years", spouse.death_within_two_years);
        }
    }
    missing.require("spouse.remarried", spouse.remarried);
    missing.require("spouse.marriage_legally_valid", spouse.marriage_legally_valid);
    if spouse.marriage_legally_valid.is_no() {
        missing.require("spouse.intended_spouse_exception", spouse.intended_spouse_exception);
    }
    missing.require("spouse.marriage_bona_fide", spouse.marriage_bona_fide);
}

fn child(answers: &AnswerRecord, missing: &mut Missing) {
    let child = &answers.child;
    missing.require("child.can_file_before_21", child.can_file_before_21);
    if child.can_file_before_21.is_no() {
        missing.require(
            "child.can_file_21_to_25_with_abuse_delay",
            child.can_file_21_to_25_with_abuse_delay,
        );
    }
    missing.require("child.is_unmarried", child.is_unmarried);
    missing.require(
        "child.relationship_currently_exists",
        child.relationship_currently_exists,
    );
    if child.relationship.is_none() && !child.relationship_currently_exists.is_no() {
        missing.push("child.relationship");
    }
}

fn moral_character(answers: &AnswerRecord, missing: &mut Missing) {
    let character = &answers.moral_character;
    missing.require("moral_character.moral_turpitude_crime", character.moral_turpitude_crime);
    missing.require(
        "moral_character.controlled_substance_violation",
        character.controlled_substance_violation,
    );
    missing.require("moral_character.incarceration_180_days", character.incarceration_180_days);
    missing.require("moral_character.false_testimony", character.false_testimony);
    if !character.conditional_bars().is_empty() {
        missing.require("moral_character.bar_connected_to_abuse", character.bar_connected_to_abuse);
    }
}

#[derive(Default)]
struct Missing {
    fields: Vec<&'static str>,
}

impl Missing {
    fn push(&mut self, field: &'static str) {
        self.fields.push(field);
    }

    fn require(&mut self, field: &'static str, answer: TriState) {
        if answer.is_unknown() {
            self.fields.push(field);
        }
    }

    fn into_result(self) -> Result<(), IntakeViolation> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(IntakeViolation::MissingAnswers {
                fields: self.fields,
            })
        }
    }
}
