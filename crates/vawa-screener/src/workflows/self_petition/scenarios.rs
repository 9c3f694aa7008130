//! Canonical scenario library used to self-test the eligibility engine.
//!
//! Each scenario pairs a complete answer record with the overall verdict an
//! attorney expects. The library doubles as the regression suite: a change to
//! any rule that flips one of these verdicts is a behavioural change and must
//! be reviewed as such.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use super::domain::{
    AbuseAnswers, AbuserStatus, AbuserStatusAnswers, AnswerRecord, ChildAnswers,
    ChildRelationship, MaritalStatus, MoralCharacterAnswers, ParentAnswers, PetitionerIdentity,
    PetitionerType, PresenceAnswers, PresenceException, ResidenceAnswers, SpouseAnswers, TriState,
};
use super::evaluation::{EligibilityEngine, EligibilityStatus};

/// Named answer record with its expected overall verdict.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub key: &'static str,
    pub title: &'static str,
    pub answers: AnswerRecord,
    pub expected: EligibilityStatus,
}

/// Listing entry without the answer payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioSummary {
    pub key: &'static str,
    pub title: &'static str,
    pub expected: EligibilityStatus,
}

impl Scenario {
    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            key: self.key,
            title: self.title,
            expected: self.expected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    pub key: &'static str,
    pub title: &'static str,
    pub expected: EligibilityStatus,
    pub actual: EligibilityStatus,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfTestReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl SelfTestReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }
}

/// Evaluate every scenario in the library and compare verdicts.
pub fn run_self_test(engine: &EligibilityEngine) -> SelfTestReport {
    let outcomes = scenario_library()
        .into_iter()
        .map(|scenario| {
            let actual = engine.evaluate(&scenario.answers).overall;
            let passed = actual == scenario.expected;
            if !passed {
                warn!(
                    scenario = scenario.key,
                    expected = scenario.expected.key(),
                    actual = actual.key(),
                    "self-test scenario regressed"
                );
            }
            ScenarioOutcome {
                key: scenario.key,
                title: scenario.title,
                expected: scenario.expected,
                actual,
                passed,
            }
        })
        .collect();

    SelfTestReport { outcomes }
}

pub fn scenario_library() -> Vec<Scenario> {
    vec![
        Scenario {
            key: "spouse_of_citizen_married",
            title: "Married spouse of a U.S. citizen, all facts favorable",
            answers: spouse_of_citizen(),
            expected: EligibilityStatus::Eligible,
        },
        Scenario {
            key: "abuser_never_qualified",
            title: "Abuser never held qualifying status",
            answers: {
                let mut answers = spouse_of_citizen();
                answers.abuser.status = Some(AbuserStatus::NeverQualified);
                answers
            },
            expected: EligibilityStatus::NotEligible,
        },
        Scenario {
            key: "spouse_of_resident_mitigated_bar",
            title: "Spouse of a permanent resident with an abuse-connected conditional bar",
            answers: {
                let mut answers = spouse_of_citizen();
                answers.abuser.status = Some(AbuserStatus::PermanentResident);
                answers.moral_character.controlled_substance_violation = TriState::Yes;
                answers.moral_character.bar_connected_to_abuse = TriState::Yes;
                answers
            },
            expected: EligibilityStatus::NeedsReview,
        },
        Scenario {
            key: "child_filing_delayed_by_abuse",
            title: "Child aged 23 relying on the abuse-delay filing extension",
            answers: {
                let mut answers = child_of_citizen();
                answers.child.current_age = Some(23);
                answers.child.can_file_before_21 = TriState::No;
                answers.child.can_file_21_to_25_with_abuse_delay = TriState::Yes;
                answers
            },
            expected: EligibilityStatus::NeedsReview,
        },
        Scenario {
            key: "parent_of_resident_child",
            title: "Parent abused by a son who is a permanent resident",
            answers: {
                let mut answers = parent_of_citizen();
                answers.abuser.status = Some(AbuserStatus::PermanentResident);
                answers.parent.abuser_is_citizen = TriState::No;
                answers
            },
            expected: EligibilityStatus::NotEligible,
        },
        Scenario {
            key: "divorced_within_two_years",
            title: "Spouse divorced within two years because of the abuse",
            answers: {
                let mut answers = spouse_of_citizen();
                answers.spouse.marital_status = Some(MaritalStatus::Divorced);
                answers.spouse.divorce_within_two_years = TriState::Yes;
                answers.spouse.divorce_related_to_abuse = TriState::Yes;
                answers
            },
            expected: EligibilityStatus::Eligible,
        },
        Scenario {
            key: "widowed_beyond_two_years",
            title: "Widowed spouse whose abuser died more than two years ago",
            answers: {
                let mut answers = spouse_of_citizen();
                answers.spouse.marital_status = Some(MaritalStatus::Widowed);
                answers.spouse.death_within_two_years = TriState::No;
                answers
            },
            expected: EligibilityStatus::NotEligible,
        },
        Scenario {
            key: "remarried_before_approval",
            title: "Spouse who remarried before the petition was approved",
            answers: {
                let mut answers = spouse_of_citizen();
                answers.spouse.marital_status = Some(MaritalStatus::Divorced);
                answers.spouse.divorce_within_two_years = TriState::Yes;
                answers.spouse.divorce_related_to_abuse = TriState::Yes;
                answers.spouse.remarried = TriState::Yes;
                answers
            },
            expected: EligibilityStatus::NotEligible,
        },
        Scenario {
            key: "intended_spouse_of_bigamist",
            title: "Invalid marriage because of the abuser's bigamy",
            answers: {
                let mut answers = spouse_of_citizen();
                answers.spouse.marriage_legally_valid = TriState::No;
                answers.spouse.intended_spouse_exception = TriState::Yes;
                answers
            },
            expected: EligibilityStatus::Eligible,
        },
        Scenario {
            key: "child_abused_during_visitation",
            title: "Child who never lived with the abuser but was abused during visits",
            answers: {
                let mut answers = child_of_citizen();
                answers.residence.resided_with_abuser = TriState::No;
                answers.residence.child_abused_during_visitation = TriState::Yes;
                answers
            },
            expected: EligibilityStatus::Eligible,
        },
        Scenario {
            key: "aggravated_felony_bar",
            title: "Aggravated felony conviction with abuse-connected conditional bars",
            answers: {
                let mut answers = spouse_of_citizen();
                answers.moral_character.aggravated_felony = TriState::Yes;
                answers.moral_character.moral_turpitude_crime = TriState::Yes;
                answers.moral_character.bar_connected_to_abuse = TriState::Yes;
                answers
            },
            expected: EligibilityStatus::NotEligible,
        },
        Scenario {
            key: "abroad_military_exception",
            title: "Spouse living abroad with a U.S. service member abuser",
            answers: {
                let mut answers = spouse_of_citizen();
                answers.presence = PresenceAnswers {
                    currently_in_country: TriState::No,
                    exception: Some(PresenceException::MilitaryAbroad),
                };
                answers
            },
            expected: EligibilityStatus::Eligible,
        },
        Scenario {
            key: "abroad_without_exception",
            title: "Spouse living abroad with no statutory exception",
            answers: {
                let mut answers = spouse_of_citizen();
                answers.presence = PresenceAnswers {
                    currently_in_country: TriState::No,
                    exception: Some(PresenceException::NoException),
                };
                answers
            },
            expected: EligibilityStatus::NotEligible,
        },
        Scenario {
            key: "abuser_lost_status_recently",
            title: "Abuser lost status through domestic violence within two years",
            answers: {
                let mut answers = spouse_of_citizen();
                answers.abuser = AbuserStatusAnswers {
                    status: Some(AbuserStatus::LostStatus),
                    loss_related_to_abuse: TriState::Yes,
                    loss_within_two_years: TriState::Yes,
                };
                answers
            },
            expected: EligibilityStatus::Eligible,
        },
        Scenario {
            key: "parent_of_adult_citizen",
            title: "Parent abused by an adult U.S. citizen son",
            answers: parent_of_citizen(),
            expected: EligibilityStatus::Eligible,
        },
        Scenario {
            key: "abuse_outside_relationship",
            title: "Abuse reported only before the marriage",
            answers: {
                let mut answers = spouse_of_citizen();
                answers.abuse.during_relationship = TriState::No;
                answers
            },
            expected: EligibilityStatus::NeedsReview,
        },
    ]
}

pub fn find_scenario(key: &str) -> Option<Scenario> {
    scenario_library()
        .into_iter()
        .find(|scenario| scenario.key == key)
}

fn favorable_shared_answers(petitioner_type: PetitionerType) -> AnswerRecord {
    AnswerRecord {
        petitioner_type: Some(petitioner_type),
        abuser: AbuserStatusAnswers {
            status: Some(AbuserStatus::Citizen),
            ..AbuserStatusAnswers::default()
        },
        abuse: AbuseAnswers {
            occurred: TriState::Yes,
            types: ["physical", "emotional"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            during_relationship: TriState::Yes,
        },
        residence: ResidenceAnswers {
            resided_with_abuser: TriState::Yes,
            child_abused_during_visitation: TriState::Unknown,
        },
        moral_character: MoralCharacterAnswers {
            aggravated_felony: TriState::No,
            persecution_genocide_torture: TriState::No,
            moral_turpitude_crime: TriState::No,
            controlled_substance_violation: TriState::No,
            incarceration_180_days: TriState::No,
            false_testimony: TriState::No,
            bar_connected_to_abuse: TriState::Unknown,
        },
        presence: PresenceAnswers {
            currently_in_country: TriState::Yes,
            exception: None,
        },
        ..AnswerRecord::default()
    }
}

fn identity(full_name: &str, year: i32, country_of_birth: &str) -> PetitionerIdentity {
    PetitionerIdentity {
        full_name: full_name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(year, 3, 14),
        country_of_birth: country_of_birth.to_string(),
    }
}

pub(crate) fn spouse_of_citizen() -> AnswerRecord {
    AnswerRecord {
        identity: identity("Maria Example", 1990, "Mexico"),
        spouse: SpouseAnswers {
            marital_status: Some(MaritalStatus::Married),
            remarried: TriState::No,
            marriage_legally_valid: TriState::Yes,
            marriage_bona_fide: TriState::Yes,
            ..SpouseAnswers::default()
        },
        ..favorable_shared_answers(PetitionerType::Spouse)
    }
}

pub(crate) fn child_of_citizen() -> AnswerRecord {
    AnswerRecord {
        identity: identity("Lucia Example", 2009, "Guatemala"),
        child: ChildAnswers {
            current_age: Some(16),
            can_file_before_21: TriState::Yes,
            can_file_21_to_25_with_abuse_delay: TriState::Unknown,
            is_unmarried: TriState::Yes,
            relationship: Some(ChildRelationship::BiologicalInWedlock),
            relationship_currently_exists: TriState::Yes,
        },
        ..favorable_shared_answers(PetitionerType::Child)
    }
}

pub(crate) fn parent_of_citizen() -> AnswerRecord {
    AnswerRecord {
        identity: identity("Rosa Example", 1962, "Honduras"),
        parent: ParentAnswers {
            abuser_is_citizen: TriState::Yes,
            abuser_over_21: TriState::Yes,
            petitioner_qualifies_as_parent: TriState::Yes,
        },
        ..favorable_shared_answers(PetitionerType::Parent)
    }
}
