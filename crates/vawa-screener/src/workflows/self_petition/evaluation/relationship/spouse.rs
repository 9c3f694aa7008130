use crate::workflows::self_petition::domain::{LocalizedText, MaritalStatus, SpouseAnswers, TriState};
use crate::workflows::self_petition::evaluation::{
    citations, CriterionKind, CriterionResult, EligibilityStatus, Findings,
};

/// Each spousal check stands alone and appends its own criterion.
pub(super) fn evaluate(answers: &SpouseAnswers) -> Findings {
    let mut findings = Findings::default();

    if let Some(status) = answers.marital_status {
        findings.extend(marital_status(status, answers));
    }

    if answers.remarried.is_yes() {
        findings.push(CriterionResult::new(
            CriterionKind::Remarriage,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "The petitioner remarried; remarriage before the petition is approved ends eligibility.",
                "La persona peticionaria se volvió a casar; un nuevo matrimonio antes de la aprobación termina la elegibilidad.",
            ),
            citations::REMARRIAGE,
        ));
    }

    if answers.marriage_legally_valid.is_no() {
        findings.extend(invalid_marriage(answers.intended_spouse_exception));
    }

    match answers.marriage_bona_fide {
        TriState::Yes => findings.push(CriterionResult::new(
            CriterionKind::BonaFideMarriage,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "The marriage was entered in good faith.",
                "El matrimonio se contrajo de buena fe.",
            ),
            citations::BONA_FIDE_MARRIAGE,
        )),
        TriState::No => findings.push(CriterionResult::new(
            CriterionKind::BonaFideMarriage,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "The marriage was not entered in good faith.",
                "El matrimonio no se contrajo de buena fe.",
            ),
            citations::BONA_FIDE_MARRIAGE,
        )),
        TriState::Unknown => {}
    }

    findings
}

fn marital_status(status: MaritalStatus, answers: &SpouseAnswers) -> Findings {
    match status {
        MaritalStatus::Married => Findings::single(CriterionResult::new(
            CriterionKind::MaritalStatus,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "The petitioner is currently married to the abuser.",
                "La persona peticionaria está casada actualmente con el abusador.",
            ),
            citations::MARITAL_STATUS,
        )),
        MaritalStatus::Divorced => divorced(
            answers.divorce_within_two_years,
            answers.divorce_related_to_abuse,
        ),
        MaritalStatus::Widowed => widowed(answers.death_within_two_years),
    }
}

fn divorced(within_two_years: TriState, related_to_abuse: TriState) -> Findings {
    if within_two_years.is_yes() && related_to_abuse.is_yes() {
        return Findings::single(CriterionResult::new(
            CriterionKind::MaritalStatus,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "The divorce was connected to the abuse and occurred within the last two years.",
                "El divorcio estuvo relacionado con el abuso y ocurrió en los últimos dos años.",
            ),
            citations::MARITAL_STATUS,
        ));
    }

    if within_two_years.is_no() || related_to_abuse.is_no() {
        return Findings::single(CriterionResult::new(
            CriterionKind::MaritalStatus,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "A divorced spouse qualifies only when the divorce was connected to the abuse and occurred within two years of filing.",
                "Un cónyuge divorciado califica solo si el divorcio se relacionó con el abuso y ocurrió dentro de los dos años previos a la solicitud.",
            ),
            citations::MARITAL_STATUS,
        ))
        .suggest(citations::ALTERNATIVE_CANCELLATION);
    }

    Findings::single(CriterionResult::new(
        CriterionKind::MaritalStatus,
        EligibilityStatus::NeedsReview,
        LocalizedText::new(
            "The timing of the divorce or its connection to the abuse still needs to be confirmed.",
            "Aún falta confirmar la fecha del divorcio o su relación con el abuso.",
        ),
        citations::MARITAL_STATUS,
    ))
}

fn widowed(death_within_two_years: TriState) -> Findings {
    match death_within_two_years {
        TriState::Yes => Findings::single(CriterionResult::new(
            CriterionKind::MaritalStatus,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "The abusive spouse died within the last two years.",
                "El cónyuge abusador falleció en los últimos dos años.",
            ),
            citations::MARITAL_STATUS,
        )),
        TriState::No => Findings::single(CriterionResult::new(
            CriterionKind::MaritalStatus,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "The abusive spouse died more than two years ago.",
                "El cónyuge abusador falleció hace más de dos años.",
            ),
            citations::MARITAL_STATUS,
        )),
        TriState::Unknown => Findings::single(CriterionResult::new(
            CriterionKind::MaritalStatus,
            EligibilityStatus::NeedsReview,
            LocalizedText::new(
                "The date of the abusive spouse's death still needs to be confirmed.",
                "Aún falta confirmar la fecha del fallecimiento del cónyuge abusador.",
            ),
            citations::MARITAL_STATUS,
        )),
    }
}

fn invalid_marriage(intended_spouse_exception: TriState) -> Findings {
    match intended_spouse_exception {
        TriState::Yes => Findings::single(CriterionResult::new(
            CriterionKind::MarriageValidity,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "The marriage is not legally valid because of the abuser's bigamy, but the intended spouse exception applies.",
                "El matrimonio no es legalmente válido por la bigamia del abusador, pero aplica la excepción de cónyuge de buena fe.",
            ),
            citations::MARRIAGE_VALIDITY,
        )),
        TriState::No => Findings::single(CriterionResult::new(
            CriterionKind::MarriageValidity,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "The marriage is not legally valid and the intended spouse exception does not apply.",
                "El matrimonio no es legalmente válido y no aplica la excepción de cónyuge de buena fe.",
            ),
            citations::MARRIAGE_VALIDITY,
        )),
        TriState::Unknown => Findings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn married() -> SpouseAnswers {
        SpouseAnswers {
            marital_status: Some(MaritalStatus::Married),
            remarried: TriState::No,
            marriage_legally_valid: TriState::Yes,
            marriage_bona_fide: TriState::Yes,
            ..SpouseAnswers::default()
        }
    }

    fn statuses(findings: &Findings) -> Vec<(CriterionKind, EligibilityStatus)> {
        findings
            .criteria
            .iter()
            .map(|result| (result.criterion, result.status))
            .collect()
    }

    #[test]
    fn valid_current_marriage_yields_two_eligible_criteria() {
        let findings = evaluate(&married());
        assert_eq!(
            statuses(&findings),
            vec![
                (CriterionKind::MaritalStatus, EligibilityStatus::Eligible),
                (CriterionKind::BonaFideMarriage, EligibilityStatus::Eligible),
            ]
        );
    }

    #[test]
    fn divorce_needs_both_window_and_abuse_connection() {
        let mut answers = married();
        answers.marital_status = Some(MaritalStatus::Divorced);
        answers.divorce_within_two_years = TriState::Yes;
        answers.divorce_related_to_abuse = TriState::Yes;
        assert_eq!(
            evaluate(&answers).criteria[0].status,
            EligibilityStatus::Eligible
        );

        answers.divorce_related_to_abuse = TriState::No;
        let findings = evaluate(&answers);
        assert_eq!(findings.criteria[0].status, EligibilityStatus::NotEligible);
        assert!(!findings.alternatives.is_empty());
    }

    #[test]
    fn widowed_outside_window_is_not_eligible() {
        let mut answers = married();
        answers.marital_status = Some(MaritalStatus::Widowed);
        answers.death_within_two_years = TriState::No;

        assert_eq!(
            evaluate(&answers).criteria[0].status,
            EligibilityStatus::NotEligible
        );
    }

    #[test]
    fn remarriage_fails_independently_of_marital_status() {
        let mut answers = married();
        answers.remarried = TriState::Yes;

        let findings = evaluate(&answers);
        assert!(findings.criteria.iter().any(|result| {
            result.criterion == CriterionKind::Remarriage
                && result.status == EligibilityStatus::NotEligible
        }));
        assert!(findings.criteria.iter().any(|result| {
            result.criterion == CriterionKind::MaritalStatus
                && result.status == EligibilityStatus::Eligible
        }));
    }

    #[test]
    fn bigamy_victim_is_covered_by_intended_spouse_exception() {
        let mut answers = married();
        answers.marriage_legally_valid = TriState::No;
        answers.intended_spouse_exception = TriState::Yes;

        let findings = evaluate(&answers);
        let validity = findings
            .criteria
            .iter()
            .find(|result| result.criterion == CriterionKind::MarriageValidity)
            .expect("validity criterion emitted");
        assert_eq!(validity.status, EligibilityStatus::Eligible);

        answers.intended_spouse_exception = TriState::No;
        let findings = evaluate(&answers);
        assert!(findings.criteria.iter().any(|result| {
            result.criterion == CriterionKind::MarriageValidity
                && result.status == EligibilityStatus::NotEligible
        }));
    }

    #[test]
    fn unanswered_bona_fide_question_is_omitted() {
        let mut answers = married();
        answers.marriage_bona_fide = TriState::Unknown;

        let findings = evaluate(&answers);
        assert!(findings
            .criteria
            .iter()
            .all(|result| result.criterion != CriterionKind::BonaFideMarriage));
    }
}
