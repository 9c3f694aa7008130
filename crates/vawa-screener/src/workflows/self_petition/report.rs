use std::fmt::Write;

use super::domain::Language;
use super::evaluation::EligibilityResult;

struct Headings {
    title: &'static str,
    verdict: &'static str,
    classification: &'static str,
    criteria: &'static str,
    citation: &'static str,
    recommendations: &'static str,
    alternatives: &'static str,
    legal_basis: &'static str,
    none: &'static str,
    incomplete: &'static str,
}

const ENGLISH: Headings = Headings {
    title: "Self-petition eligibility screening",
    verdict: "Overall result",
    classification: "Classification",
    criteria: "Criteria",
    citation: "Citation",
    recommendations: "Recommended next steps",
    alternatives: "Alternative options",
    legal_basis: "Legal basis",
    none: "none",
    incomplete: "Incomplete: required answers are missing, so some criteria were not evaluated.",
};

const SPANISH: Headings = Headings {
    title: "Evaluación de elegibilidad para autopetición",
    verdict: "Resultado general",
    classification: "Clasificación",
    criteria: "Criterios",
    citation: "Cita legal",
    recommendations: "Próximos pasos recomendados",
    alternatives: "Opciones alternativas",
    legal_basis: "Fundamento legal",
    none: "ninguno",
    incomplete: "Incompleto: faltan respuestas requeridas, por lo que algunos criterios no se evaluaron.",
};

/// Render a result as plain text, keeping criteria in evaluation order.
pub fn render_report(result: &EligibilityResult, language: Language) -> String {
    let headings = match language {
        Language::English => &ENGLISH,
        Language::Spanish => &SPANISH,
    };

    let mut out = String::new();
    writeln!(out, "{}", headings.title).expect("write title");
    writeln!(
        out,
        "{}: {}",
        headings.verdict,
        result.overall.label(language)
    )
    .expect("write verdict");
    let classification = result
        .classification
        .map(|classification| classification.label().get(language).to_string())
        .unwrap_or_else(|| headings.none.to_string());
    writeln!(out, "{}: {}", headings.classification, classification)
        .expect("write classification");
    if result.incomplete {
        writeln!(out, "{}", headings.incomplete).expect("write incomplete notice");
    }

    writeln!(out, "\n{}", headings.criteria).expect("write criteria heading");
    if result.criteria.is_empty() {
        writeln!(out, "- {}", headings.none).expect("write empty criteria");
    }
    for criterion in &result.criteria {
        writeln!(
            out,
            "- [{}] {}: {}",
            criterion.status.label(language),
            criterion.label.get(language),
            criterion.explanation.get(language)
        )
        .expect("write criterion");
        writeln!(out, "  {}: {}", headings.citation, criterion.citation)
            .expect("write citation");
    }

    write_list(&mut out, headings.recommendations, &result.recommendations, headings.none);
    write_list(&mut out, headings.alternatives, &result.alternatives, headings.none);
    write_list(&mut out, headings.legal_basis, &result.legal_basis, headings.none);

    out
}

fn write_list(out: &mut String, heading: &str, lines: &[String], none: &str) {
    writeln!(out, "\n{heading}").expect("write list heading");
    if lines.is_empty() {
        writeln!(out, "- {none}").expect("write empty list");
        return;
    }
    for line in lines {
        writeln!(out, "- {line}").expect("write list entry");
    }
}
