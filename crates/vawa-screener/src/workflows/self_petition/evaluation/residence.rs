use super::super::domain::{LocalizedText, PetitionerType, ResidenceAnswers, TriState};
use super::citations;
use super::{CriterionKind, CriterionResult, EligibilityStatus, Findings};

/// Any period of shared residence suffices; duration is not modelled.
pub(crate) fn evaluate(
    answers: &ResidenceAnswers,
    petitioner_type: Option<PetitionerType>,
) -> Findings {
    match answers.resided_with_abuser {
        TriState::Yes => Findings::single(CriterionResult::new(
            CriterionKind::SharedResidence,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "The petitioner has lived with the abuser.",
                "La persona peticionaria ha vivido con el abusador.",
            ),
            citations::SHARED_RESIDENCE,
        )),
        TriState::No
            if petitioner_type == Some(PetitionerType::Child)
                && answers.child_abused_during_visitation.is_yes() =>
        {
            Findings::single(CriterionResult::new(
                CriterionKind::SharedResidence,
                EligibilityStatus::Eligible,
                LocalizedText::new(
                    "The child did not live with the abuser but was abused during visitation, which satisfies the residence requirement.",
                    "El hijo no vivió con el abusador, pero sufrió abuso durante las visitas, lo cual cumple el requisito de residencia.",
                ),
                citations::CHILD_VISITATION,
            ))
        }
        TriState::No => Findings::single(CriterionResult::new(
            CriterionKind::SharedResidence,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "The petitioner never lived with the abuser.",
                "La persona peticionaria nunca vivió con el abusador.",
            ),
            citations::SHARED_RESIDENCE,
        )),
        TriState::Unknown => Findings::default(),
    }
}
