use crate::workflows::self_petition::domain::{LocalizedText, ParentAnswers, TriState};
use crate::workflows::self_petition::evaluation::{
    citations, CriterionKind, CriterionResult, EligibilityStatus, Findings,
};

pub(super) fn evaluate(answers: &ParentAnswers) -> Findings {
    let mut findings = Findings::default();

    match answers.abuser_is_citizen {
        TriState::Yes => findings.push(CriterionResult::new(
            CriterionKind::AbuserCitizenship,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "The abusive son or daughter is a U.S. citizen.",
                "El hijo o hija abusador es ciudadano estadounidense.",
            ),
            citations::PARENT_OF_CITIZEN,
        )),
        TriState::No => {
            findings.push(CriterionResult::new(
                CriterionKind::AbuserCitizenship,
                EligibilityStatus::NotEligible,
                LocalizedText::new(
                    "Parents may self-petition only against a U.S. citizen son or daughter; children who are permanent residents do not qualify.",
                    "Los padres solo pueden presentar su propia petición contra un hijo o hija ciudadano estadounidense; los hijos residentes permanentes no califican.",
                ),
                citations::PARENT_OF_CITIZEN,
            ));
            findings.alternatives.push(citations::ALTERNATIVE_U_VISA.to_string());
        }
        TriState::Unknown => {}
    }

    match answers.abuser_over_21 {
        TriState::Yes => findings.push(CriterionResult::new(
            CriterionKind::AbuserAge,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "The abusive son or daughter is at least 21 years old.",
                "El hijo o hija abusador tiene al menos 21 años.",
            ),
            citations::ABUSER_OVER_21,
        )),
        TriState::No => findings.push(CriterionResult::new(
            CriterionKind::AbuserAge,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "The abusive son or daughter must be at least 21 years old.",
                "El hijo o hija abusador debe tener al menos 21 años.",
            ),
            citations::ABUSER_OVER_21,
        )),
        TriState::Unknown => {}
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permanent_resident_child_disqualifies_parent() {
        let findings = evaluate(&ParentAnswers {
            abuser_is_citizen: TriState::No,
            abuser_over_21: TriState::Yes,
            petitioner_qualifies_as_parent: TriState::Yes,
        });

        assert_eq!(findings.criteria[0].criterion, CriterionKind::AbuserCitizenship);
        assert_eq!(findings.criteria[0].status, EligibilityStatus::NotEligible);
        assert_eq!(findings.criteria[1].status, EligibilityStatus::Eligible);
        assert!(!findings.alternatives.is_empty());
    }

    #[test]
    fn parent_qualification_flag_is_not_scored() {
        let findings = evaluate(&ParentAnswers {
            abuser_is_citizen: TriState::Unknown,
            abuser_over_21: TriState::Unknown,
            petitioner_qualifies_as_parent: TriState::No,
        });

        assert!(findings.criteria.is_empty());
    }

    #[test]
    fn minor_abuser_is_not_eligible() {
        let findings = evaluate(&ParentAnswers {
            abuser_is_citizen: TriState::Yes,
            abuser_over_21: TriState::No,
            petitioner_qualifies_as_parent: TriState::Yes,
        });

        assert_eq!(findings.criteria[1].criterion, CriterionKind::AbuserAge);
        assert_eq!(findings.criteria[1].status, EligibilityStatus::NotEligible);
    }
}
