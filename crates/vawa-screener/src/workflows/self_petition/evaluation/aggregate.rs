use super::super::domain::AnswerRecord;
use super::super::intake::expected_minimum_criteria;
use super::{
    abuse, abuser, citations, moral_character, overall_verdict, presence, relationship, residence,
    Classification, EligibilityResult, EligibilityStatus, Findings,
};

pub(crate) fn assemble(answers: &AnswerRecord) -> EligibilityResult {
    let mut findings = Findings::default();
    findings.extend(abuser::evaluate(&answers.abuser));
    findings.extend(relationship::evaluate(answers));
    findings.extend(abuse::evaluate(&answers.abuse));
    findings.extend(residence::evaluate(&answers.residence, answers.petitioner_type));
    findings.extend(moral_character::evaluate(&answers.moral_character));
    findings.extend(presence::evaluate(&answers.presence));

    let overall = overall_verdict(findings.criteria.iter().map(|result| result.status));
    let incomplete = answers.petitioner_type.map_or(true, |petitioner_type| {
        findings.criteria.len() < expected_minimum_criteria(petitioner_type)
    });
    let classification = Classification::derive(answers.petitioner_type, answers.abuser.status);

    let mut recommendations = standard_recommendations(overall, classification);
    recommendations.extend(findings.recommendations);

    let mut alternatives = dedup(findings.alternatives);
    if overall == EligibilityStatus::NotEligible && alternatives.is_empty() {
        alternatives = citations::FALLBACK_ALTERNATIVES
            .iter()
            .map(|line| line.to_string())
            .collect();
    }

    let mut legal_basis: Vec<String> = citations::TOP_LEVEL_BASIS
        .iter()
        .map(|line| line.to_string())
        .collect();
    legal_basis.extend(findings.legal_basis);

    EligibilityResult {
        overall,
        classification,
        criteria: findings.criteria,
        recommendations,
        alternatives,
        legal_basis,
        incomplete,
    }
}

fn standard_recommendations(
    overall: EligibilityStatus,
    classification: Option<Classification>,
) -> Vec<String> {
    match overall {
        EligibilityStatus::Eligible => {
            let mut steps: Vec<String> = citations::ELIGIBLE_NEXT_STEPS
                .iter()
                .map(|line| line.to_string())
                .collect();
            if classification.is_some_and(Classification::is_immediate_relative) {
                steps.push(citations::CONCURRENT_ADJUSTMENT.to_string());
            }
            steps
        }
        EligibilityStatus::NeedsReview => vec![citations::ATTORNEY_REVIEW.to_string()],
        EligibilityStatus::NotEligible => Vec::new(),
    }
}

/// Drop repeated suggestions while keeping first-seen order.
fn dedup(lines: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if !unique.contains(&line) {
            unique.push(line);
        }
    }
    unique
}
