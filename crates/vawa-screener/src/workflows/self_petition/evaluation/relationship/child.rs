use crate::workflows::self_petition::domain::{ChildAnswers, LocalizedText, TriState};
use crate::workflows::self_petition::evaluation::{
    citations, CriterionKind, CriterionResult, EligibilityStatus, Findings,
};

pub(super) fn evaluate(answers: &ChildAnswers) -> Findings {
    let mut findings = age(answers);

    match answers.is_unmarried {
        TriState::Yes => findings.push(CriterionResult::new(
            CriterionKind::ChildMaritalStatus,
            EligibilityStatus::Eligible,
            LocalizedText::new("The petitioner is unmarried.", "La persona peticionaria es soltera."),
            citations::CHILD_UNMARRIED,
        )),
        TriState::No => findings.push(CriterionResult::new(
            CriterionKind::ChildMaritalStatus,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "A child self-petitioner must be unmarried.",
                "Un hijo que presenta su propia petición debe ser soltero.",
            ),
            citations::CHILD_UNMARRIED,
        )),
        TriState::Unknown => {}
    }

    findings.extend(relationship(answers));
    findings
}

fn age_phrase(age: Option<u8>) -> (String, String) {
    match age {
        Some(age) => (
            format!("The petitioner is {age} years old. "),
            format!("La persona peticionaria tiene {age} años. "),
        ),
        None => (String::new(), String::new()),
    }
}

fn age(answers: &ChildAnswers) -> Findings {
    let (en_age, es_age) = age_phrase(answers.current_age);

    if answers.can_file_before_21.is_yes() {
        return Findings::single(CriterionResult::new(
            CriterionKind::ChildAge,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                format!("{en_age}The petition can be filed before age 21."),
                format!("{es_age}La petición puede presentarse antes de los 21 años."),
            ),
            citations::CHILD_AGE,
        ));
    }

    // Whether abuse was the central reason for the delay is left to an attorney.
    if answers.can_file_21_to_25_with_abuse_delay.is_yes() {
        return Findings::single(CriterionResult::new(
            CriterionKind::ChildAge,
            EligibilityStatus::NeedsReview,
            LocalizedText::new(
                format!("{en_age}Filing between ages 21 and 25 is allowed only if the abuse was the central reason for the delay; this must be substantiated."),
                format!("{es_age}Presentar entre los 21 y 25 años solo se permite si el abuso fue la razón principal del retraso; esto debe demostrarse."),
            ),
            citations::CHILD_AGE,
        ))
        .recommend(citations::DOCUMENT_FILING_DELAY);
    }

    if answers.can_file_before_21.is_no() && answers.can_file_21_to_25_with_abuse_delay.is_no() {
        return Findings::single(CriterionResult::new(
            CriterionKind::ChildAge,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                format!("{en_age}The petition cannot be filed before 21, and the abuse-delay extension to 25 does not apply."),
                format!("{es_age}La petición no puede presentarse antes de los 21 años y no aplica la extensión hasta los 25 por retraso debido al abuso."),
            ),
            citations::CHILD_AGE,
        ))
        .suggest(citations::ALTERNATIVE_SIJS);
    }

    Findings::default()
}

fn relationship(answers: &ChildAnswers) -> Findings {
    match (answers.relationship, answers.relationship_currently_exists) {
        (_, TriState::No) => Findings::single(CriterionResult::new(
            CriterionKind::ParentChildRelationship,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "The qualifying parent-child relationship with the abuser no longer exists.",
                "La relación de padre e hijo con el abusador ya no existe.",
            ),
            citations::PARENT_CHILD_RELATIONSHIP,
        )),
        (Some(kind), TriState::Yes) => {
            let label = kind.label();
            Findings::single(CriterionResult::new(
                CriterionKind::ParentChildRelationship,
                EligibilityStatus::Eligible,
                LocalizedText::new(
                    format!("The petitioner is the abuser's {}, and the relationship still exists.", label.en),
                    format!("La persona peticionaria es {} del abusador y la relación sigue existiendo.", label.es),
                ),
                citations::PARENT_CHILD_RELATIONSHIP,
            ))
        }
        _ => Findings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::self_petition::domain::ChildRelationship;

    fn minor_child() -> ChildAnswers {
        ChildAnswers {
            current_age: Some(16),
            can_file_before_21: TriState::Yes,
            can_file_21_to_25_with_abuse_delay: TriState::Unknown,
            is_unmarried: TriState::Yes,
            relationship: Some(ChildRelationship::BiologicalInWedlock),
            relationship_currently_exists: TriState::Yes,
        }
    }

    fn status_of(findings: &Findings, kind: CriterionKind) -> Option<EligibilityStatus> {
        findings
            .criteria
            .iter()
            .find(|result| result.criterion == kind)
            .map(|result| result.status)
    }

    #[test]
    fn minor_unmarried_child_passes_every_check() {
        let findings = evaluate(&minor_child());
        assert_eq!(findings.criteria.len(), 3);
        assert!(findings
            .criteria
            .iter()
            .all(|result| result.status == EligibilityStatus::Eligible));
    }

    #[test]
    fn abuse_delay_window_needs_review_and_mentions_age() {
        let mut answers = minor_child();
        answers.current_age = Some(23);
        answers.can_file_before_21 = TriState::No;
        answers.can_file_21_to_25_with_abuse_delay = TriState::Yes;

        let findings = evaluate(&answers);
        let age = findings
            .criteria
            .iter()
            .find(|result| result.criterion == CriterionKind::ChildAge)
            .expect("age criterion");
        assert_eq!(age.status, EligibilityStatus::NeedsReview);
        assert!(age.explanation.en.contains("23 years old"));
        assert_eq!(findings.recommendations.len(), 1);
    }

    #[test]
    fn aged_out_child_is_not_eligible() {
        let mut answers = minor_child();
        answers.can_file_before_21 = TriState::No;
        answers.can_file_21_to_25_with_abuse_delay = TriState::No;

        assert_eq!(
            status_of(&evaluate(&answers), CriterionKind::ChildAge),
            Some(EligibilityStatus::NotEligible)
        );
    }

    #[test]
    fn unanswered_age_flags_emit_no_age_criterion() {
        let mut answers = minor_child();
        answers.can_file_before_21 = TriState::No;
        answers.can_file_21_to_25_with_abuse_delay = TriState::Unknown;

        assert_eq!(status_of(&evaluate(&answers), CriterionKind::ChildAge), None);
    }

    #[test]
    fn ended_relationship_fails_even_without_subtype() {
        let mut answers = minor_child();
        answers.relationship = None;
        answers.relationship_currently_exists = TriState::No;

        assert_eq!(
            status_of(&evaluate(&answers), CriterionKind::ParentChildRelationship),
            Some(EligibilityStatus::NotEligible)
        );
    }

    #[test]
    fn relationship_without_subtype_is_omitted() {
        let mut answers = minor_child();
        answers.relationship = None;

        assert_eq!(
            status_of(&evaluate(&answers), CriterionKind::ParentChildRelationship),
            None
        );
    }

    #[test]
    fn married_child_is_not_eligible() {
        let mut answers = minor_child();
        answers.is_unmarried = TriState::No;

        assert_eq!(
            status_of(&evaluate(&answers), CriterionKind::ChildMaritalStatus),
            Some(EligibilityStatus::NotEligible)
        );
    }
}
