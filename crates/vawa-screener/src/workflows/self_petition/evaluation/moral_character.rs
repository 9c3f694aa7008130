//! Good moral character bars.
//!
//! Permanent bars are checked first and end the analysis: once one applies,
//! conditional bars cannot change the outcome and no further criterion is
//! emitted. Conditional bars never disqualify on their own; they route the case
//! to an attorney, with a documentation step when the conduct is tied to the
//! abuse.

use super::super::domain::{LocalizedText, MoralCharacterAnswers, TriState};
use super::citations;
use super::{CriterionKind, CriterionResult, EligibilityStatus, Findings};

pub(crate) fn evaluate(answers: &MoralCharacterAnswers) -> Findings {
    if answers.aggravated_felony.is_yes() {
        return Findings::single(CriterionResult::new(
            CriterionKind::GoodMoralCharacter,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "An aggravated felony conviction is a permanent bar to good moral character.",
                "Una condena por delito grave agravado es un impedimento permanente para el buen carácter moral.",
            ),
            citations::AGGRAVATED_FELONY,
        ));
    }

    if answers.persecution_genocide_torture.is_yes() {
        return Findings::single(CriterionResult::new(
            CriterionKind::GoodMoralCharacter,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "Participation in persecution, genocide, or torture is a permanent bar to good moral character.",
                "La participación en persecución, genocidio o tortura es un impedimento permanente para el buen carácter moral.",
            ),
            citations::PERSECUTION,
        ));
    }

    let bars = answers.conditional_bars();
    if !bars.is_empty() {
        let en = bars
            .iter()
            .map(|bar| bar.label().en)
            .collect::<Vec<_>>()
            .join(", ");
        let es = bars
            .iter()
            .map(|bar| bar.label().es)
            .collect::<Vec<_>>()
            .join(", ");

        return if answers.bar_connected_to_abuse == TriState::Yes {
            Findings::single(CriterionResult::new(
                CriterionKind::GoodMoralCharacter,
                EligibilityStatus::NeedsReview,
                LocalizedText::new(
                    format!("Conditional bar reported ({en}). The conduct is connected to the abuse, so a waiver may be available."),
                    format!("Se reportó un impedimento condicional ({es}). La conducta está relacionada con el abuso, por lo que podría haber una dispensa."),
                ),
                citations::CONDITIONAL_BARS,
            ))
            .recommend(citations::DOCUMENT_ABUSE_CONNECTION)
        } else {
            Findings::single(CriterionResult::new(
                CriterionKind::GoodMoralCharacter,
                EligibilityStatus::NeedsReview,
                LocalizedText::new(
                    format!("Conditional bar reported ({en}). An attorney must review whether good moral character can still be shown."),
                    format!("Se reportó un impedimento condicional ({es}). Un abogado debe revisar si aún se puede demostrar buen carácter moral."),
                ),
                citations::CONDITIONAL_BARS,
            ))
        };
    }

    if answers.aggravated_felony.is_no() && answers.persecution_genocide_torture.is_no() {
        return Findings::single(CriterionResult::new(
            CriterionKind::GoodMoralCharacter,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "No bars to good moral character were identified.",
                "No se identificaron impedimentos para el buen carácter moral.",
            ),
            citations::GOOD_MORAL_CHARACTER,
        ));
    }

    Findings::default()
}
