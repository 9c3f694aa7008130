use vawa_screener::workflows::self_petition::{
    find_scenario, render_report, scenario_library, AnswerRecord, Classification,
    EligibilityEngine, EligibilityResult, EligibilityStatus, Language, ScreeningOptions,
    ScreeningService, ScreeningServiceError,
};

fn through_json(answers: &AnswerRecord) -> AnswerRecord {
    let raw = serde_json::to_string(answers).expect("answers serialize");
    serde_json::from_str(&raw).expect("answers deserialize")
}

#[test]
fn library_scenarios_survive_json_intake() {
    let service = ScreeningService::new(ScreeningOptions::default());

    for scenario in scenario_library() {
        let answers = through_json(&scenario.answers);
        let result = service
            .screen(&answers)
            .unwrap_or_else(|err| panic!("{} rejected: {err}", scenario.key));
        assert_eq!(result.overall, scenario.expected, "{}", scenario.key);
    }
}

#[test]
fn results_round_trip_for_downstream_renderers() {
    let scenario = find_scenario("spouse_of_resident_mitigated_bar").expect("scenario exists");
    let result = EligibilityEngine::new().evaluate(&scenario.answers);

    let raw = serde_json::to_value(&result).expect("result serializes");
    assert_eq!(raw["overall"], "needs_review");
    assert_eq!(raw["classification"], "family_preference");

    let decoded: EligibilityResult = serde_json::from_value(raw).expect("result decodes");
    assert_eq!(decoded, result);
}

#[test]
fn minimal_json_payload_is_screened_end_to_end() {
    let answers: AnswerRecord = serde_json::from_str(
        r#"{
            "petitioner_type": "spouse",
            "abuser": { "status": "citizen" },
            "spouse": {
                "marital_status": "married",
                "remarried": false,
                "marriage_legally_valid": true,
                "marriage_bona_fide": true
            },
            "abuse": { "occurred": true, "types": ["physical"], "during_relationship": true },
            "residence": { "resided_with_abuser": true },
            "moral_character": {
                "aggravated_felony": false,
                "persecution_genocide_torture": false,
                "moral_turpitude_crime": false,
                "controlled_substance_violation": false,
                "incarceration_180_days": false,
                "false_testimony": false
            },
            "presence": { "currently_in_country": true }
        }"#,
    )
    .expect("valid payload");

    let result = ScreeningService::default()
        .screen(&answers)
        .expect("intake complete");

    assert_eq!(result.overall, EligibilityStatus::Eligible);
    assert_eq!(result.classification, Some(Classification::ImmediateRelative));

    let report = render_report(&result, Language::Spanish);
    assert!(report.contains("Resultado general"));
    assert!(report.contains("Cita legal"));
}

#[test]
fn incomplete_payload_names_the_gaps() {
    let answers: AnswerRecord =
        serde_json::from_str(r#"{ "petitioner_type": "parent" }"#).expect("valid payload");

    let ScreeningServiceError::Intake(violation) = ScreeningService::default()
        .screen(&answers)
        .expect_err("incomplete intake");

    assert_eq!(
        violation.missing_fields().first(),
        Some(&"parent.abuser_is_citizen")
    );
    assert!(!violation.missing_fields().contains(&"abuser.status"));
}
