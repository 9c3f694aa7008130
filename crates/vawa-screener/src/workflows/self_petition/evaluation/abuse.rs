use super::super::domain::{AbuseAnswers, LocalizedText, TriState};
use super::citations;
use super::{CriterionKind, CriterionResult, EligibilityStatus, Findings};

pub(crate) fn evaluate(answers: &AbuseAnswers) -> Findings {
    let mut findings = match (answers.occurred, answers.during_relationship) {
        (TriState::No, _) => Findings::single(CriterionResult::new(
            CriterionKind::QualifyingAbuse,
            EligibilityStatus::NotEligible,
            LocalizedText::new(
                "No battery or extreme cruelty by the qualifying relative was reported.",
                "No se reportó agresión física ni crueldad extrema por parte del familiar calificado.",
            ),
            citations::QUALIFYING_ABUSE,
        )),
        (TriState::Yes, TriState::No) => Findings::single(CriterionResult::new(
            CriterionKind::QualifyingAbuse,
            EligibilityStatus::NeedsReview,
            LocalizedText::new(
                "Abuse occurred, but not during the qualifying relationship; the timing must be clarified.",
                "Hubo abuso, pero no durante la relación calificada; se debe aclarar cuándo ocurrió.",
            ),
            citations::QUALIFYING_ABUSE,
        )),
        (TriState::Yes, TriState::Yes) => Findings::single(CriterionResult::new(
            CriterionKind::QualifyingAbuse,
            EligibilityStatus::Eligible,
            LocalizedText::new(
                "Battery or extreme cruelty occurred during the qualifying relationship.",
                "Hubo agresión física o crueldad extrema durante la relación calificada.",
            ),
            citations::QUALIFYING_ABUSE,
        )),
        _ => Findings::default(),
    };

    if let Some(line) = abuse_type_basis(answers) {
        findings.legal_basis.push(line);
    }

    findings
}

/// Supplementary legal-basis line naming the reported forms of abuse.
fn abuse_type_basis(answers: &AbuseAnswers) -> Option<String> {
    let described: Vec<String> = answers
        .types
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(describe_abuse_type)
        .collect();

    if described.is_empty() {
        return None;
    }

    Some(format!(
        "Reported abuse ({}): {}",
        citations::QUALIFYING_ABUSE,
        described.join(", ")
    ))
}

fn describe_abuse_type(tag: &str) -> String {
    match tag.to_ascii_lowercase().as_str() {
        "physical" => "battery (physical violence)".to_string(),
        "sexual" => "sexual abuse or exploitation".to_string(),
        "emotional" | "psychological" => "extreme cruelty (psychological abuse)".to_string(),
        "economic" | "financial" => "economic control".to_string(),
        "threats" => "threats of violence".to_string(),
        "isolation" => "forced isolation".to_string(),
        "immigration" => "threats related to immigration status".to_string(),
        _ => tag.to_string(),
    }
}
