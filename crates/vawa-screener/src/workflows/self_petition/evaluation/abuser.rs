use super::super::domain::{AbuserStatus, AbuserStatusAnswers, LocalizedText, TriState};
use super::citations;
use super::{CriterionKind, CriterionResult, EligibilityStatus, Findings};

pub(crate) fn evaluate(answers: &AbuserStatusAnswers) -> Findings {
    let Some(status) = answers.status else {
        return Findings::default();
    };

    match status {
        AbuserStatus::Citizen => Findings::single(CriterionResult::new(
            CriterionKind::AbuserStatus,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "The abuser is a U.S. citizen.",
                "El abusador es ciudadano estadounidense.",
            ),
            citations::ABUSER_STATUS,
        )),
        AbuserStatus::PermanentResident => Findings::single(CriterionResult::new(
            CriterionKind::AbuserStatus,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "The abuser is a lawful permanent resident.",
                "El abusador es residente permanente legal.",
            ),
            citations::ABUSER_STATUS,
        )),
        AbuserStatus::LostStatus => {
            lost_status(answers.loss_related_to_abuse, answers.loss_within_two_years)
        }
        AbuserStatus::NeverQualified => Findings::single(CriterionResult::new(
            CriterionKind::AbuserStatus,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "The abuser was never a U.S. citizen or lawful permanent resident, so the statutory status requirement is not met.",
                "El abusador nunca fue ciudadano estadounidense ni residente permanente legal, por lo que no se cumple el requisito de estatus.",
            ),
            citations::ABUSER_STATUS,
        ))
        .suggest(citations::ALTERNATIVE_U_VISA),
    }
}

fn lost_status(related_to_abuse: TriState, within_two_years: TriState) -> Findings {
    if related_to_abuse.is_no() || within_two_years.is_no() {
        return Findings::single(CriterionResult::new(
            CriterionKind::AbuserStatus,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "The abuser lost status, and the loss was not related to domestic violence or happened more than two years before filing.",
                "El abusador perdió su estatus, y la pérdida no estuvo relacionada con violencia doméstica o ocurrió más de dos años antes de la solicitud.",
            ),
            citations::ABUSER_LOST_STATUS,
        ))
        .suggest(citations::ALTERNATIVE_U_VISA);
    }

    if related_to_abuse.is_yes() && within_two_years.is_yes() {
        return Findings::single(CriterionResult::new(
            CriterionKind::AbuserStatus,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "The abuser lost status because of an incident of domestic violence, and the petition is filed within two years of that loss.",
                "El abusador perdió su estatus por un incidente de violencia doméstica y la petición se presenta dentro de los dos años siguientes.",
            ),
            citations::ABUSER_LOST_STATUS,
        ));
    }

    Findings::single(CriterionResult::new(
        CriterionKind::AbuserStatus,
        EligibilityStatus::NeedsReview,
        LocalizedText::new(
            "The abuser lost status, but it is not yet known whether the loss was abuse-related and within the last two years.",
            "El abusador perdió su estatus, pero aún no se sabe si la pérdida se relacionó con el abuso y ocurrió en los últimos dos años.",
        ),
        citations::ABUSER_LOST_STATUS,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(status: AbuserStatus, related: TriState, within: TriState) -> AbuserStatusAnswers {
        AbuserStatusAnswers {
            status: Some(status),
            loss_related_to_abuse: related,
            loss_within_two_years: within,
        }
    }

    #[test]
    fn unset_status_emits_nothing() {
        let findings = evaluate(&AbuserStatusAnswers::default());
        assert!(findings.criteria.is_empty());
        assert!(findings.alternatives.is_empty());
    }

    #[test]
    fn citizen_and_resident_abusers_qualify() {
        for status in [AbuserStatus::Citizen, AbuserStatus::PermanentResident] {
            let findings = evaluate(&answers(status, TriState::Unknown, TriState::Unknown));
            assert_eq!(findings.criteria.len(), 1);
            assert_eq!(findings.criteria[0].status, EligibilityStatus::Eligible);
        }
    }

    #[test]
    fn never_qualified_abuser_suggests_alternative() {
        let findings = evaluate(&answers(
            AbuserStatus::NeverQualified,
            TriState::Unknown,
            TriState::Unknown,
        ));
        assert_eq!(findings.criteria[0].status, EligibilityStatus::NotEligible);
        assert!(!findings.alternatives.is_empty());
    }

    #[test]
    fn lost_status_requires_both_conditions() {
        let ok = evaluate(&answers(AbuserStatus::LostStatus, TriState::Yes, TriState::Yes));
        assert_eq!(ok.criteria[0].status, EligibilityStatus::Eligible);

        let stale = evaluate(&answers(AbuserStatus::LostStatus, TriState::Yes, TriState::No));
        assert_eq!(stale.criteria[0].status, EligibilityStatus::NotEligible);

        let unrelated = evaluate(&answers(AbuserStatus::LostStatus, TriState::No, TriState::Yes));
        assert_eq!(unrelated.criteria[0].status, EligibilityStatus::NotEligible);
    }

    #[test]
    fn lost_status_with_unanswered_flag_needs_review() {
        let findings = evaluate(&answers(
            AbuserStatus::LostStatus,
            TriState::Yes,
            TriState::Unknown,
        ));
        assert_eq!(findings.criteria[0].status, EligibilityStatus::NeedsReview);
        assert!(findings.alternatives.is_empty());
    }
}
