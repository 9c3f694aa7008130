use super::super::domain::{LocalizedText, PresenceAnswers, PresenceException, TriState};
use super::citations;
use super::{CriterionKind, CriterionResult, EligibilityStatus, Findings};

pub(crate) fn evaluate(answers: &PresenceAnswers) -> Findings {
    match answers.currently_in_country {
        TriState::Yes => Findings::single(CriterionResult::new(
            CriterionKind::PhysicalPresence,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "The petitioner currently lives in the United States.",
                "La persona peticionaria vive actualmente en los Estados Unidos.",
            ),
            citations::PHYSICAL_PRESENCE,
        )),
        TriState::No => abroad(answers.exception),
        TriState::Unknown => Findings::default(),
    }
}

fn abroad(exception: Option<PresenceException>) -> Findings {
    let applied = match exception {
        Some(PresenceException::GovernmentEmploymentAbroad) => LocalizedText::new(
            "the abuser is a U.S. government employee working abroad",
            "el abusador es empleado del gobierno de los EE. UU. en el extranjero",
        ),
        Some(PresenceException::MilitaryAbroad) => LocalizedText::new(
            "the abuser is a member of the U.S. armed forces stationed abroad",
            "el abusador es miembro de las fuerzas armadas de los EE. UU. destinado en el extranjero",
        ),
        Some(PresenceException::AbuseOccurredInCountry) => LocalizedText::new(
            "the abuse occurred in the United States",
            "el abuso ocurrió en los Estados Unidos",
        ),
        Some(PresenceException::NoException) | None => {
            return Findings::single(CriterionResult::new(
                CriterionKind::PhysicalPresence,
                EligibilityStatus::NotEligible,
                LocalizedText::new(
                    "The petitioner lives outside the United States and no statutory exception applies.",
                    "La persona peticionaria vive fuera de los Estados Unidos y no aplica ninguna excepción legal.",
                ),
                citations::PHYSICAL_PRESENCE,
            ));
        }
    };

    Findings::single(CriterionResult::new(
        CriterionKind::PhysicalPresence,
        EligibilityStatus::Eligible,
        LocalizedText::new(
            format!("The petitioner lives abroad, but an exception applies: {}.", applied.en),
            format!("La persona peticionaria vive en el extranjero, pero aplica una excepción: {}.", applied.es),
        ),
        citations::PHYSICAL_PRESENCE,
    ))
}
