use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Three-valued intake answer. "Unknown" means the question has not been
/// answered and is never treated as "no".
///
/// Serialises as JSON `true`, `false`, or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unknown,
}

impl TriState {
    pub const fn is_yes(self) -> bool {
        matches!(self, TriState::Yes)
    }

    pub const fn is_no(self) -> bool {
        matches!(self, TriState::No)
    }

    pub const fn is_unknown(self) -> bool {
        matches!(self, TriState::Unknown)
    }

    pub const fn as_option(self) -> Option<bool> {
        match self {
            TriState::Yes => Some(true),
            TriState::No => Some(false),
            TriState::Unknown => None,
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::Yes,
            Some(false) => TriState::No,
            None => TriState::Unknown,
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::Yes
        } else {
            TriState::No
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        value.as_option()
    }
}

/// Languages every criterion label and explanation is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub fn from_code(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "es" | "spanish" | "espanol" | "español" => Some(Self::Spanish),
            _ => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }
}

/// English/Spanish text pair carried through to the report renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub es: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, es: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            es: es.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Spanish => &self.es,
        }
    }
}

/// Identity details carried through the evaluation but never scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetitionerIdentity {
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub country_of_birth: String,
}

/// Qualifying family relationship the petitioner files under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetitionerType {
    Spouse,
    Child,
    Parent,
}

impl PetitionerType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spouse => "spouse",
            Self::Child => "child",
            Self::Parent => "parent",
        }
    }
}

/// Immigration status of the abusive relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbuserStatus {
    Citizen,
    PermanentResident,
    LostStatus,
    NeverQualified,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbuserStatusAnswers {
    pub status: Option<AbuserStatus>,
    /// Only consulted for [`AbuserStatus::LostStatus`].
    pub loss_related_to_abuse: TriState,
    /// Only consulted for [`AbuserStatus::LostStatus`].
    pub loss_within_two_years: TriState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Married,
    Divorced,
    Widowed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpouseAnswers {
    pub marital_status: Option<MaritalStatus>,
    pub divorce_within_two_years: TriState,
    pub divorce_related_to_abuse: TriState,
    pub death_within_two_years: TriState,
    pub remarried: TriState,
    pub marriage_legally_valid: TriState,
    pub intended_spouse_exception: TriState,
    pub marriage_bona_fide: TriState,
}

/// How the parent-child relationship with the abuser was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildRelationship {
    BiologicalInWedlock,
    BiologicalOutOfWedlockMaternal,
    BiologicalOutOfWedlockPaternalLegitimated,
    BiologicalOutOfWedlockPaternalBonaFide,
    Stepchild,
    Adopted,
}

impl ChildRelationship {
    pub fn label(self) -> LocalizedText {
        match self {
            Self::BiologicalInWedlock => LocalizedText::new(
                "biological child born in wedlock",
                "hijo biológico nacido dentro del matrimonio",
            ),
            Self::BiologicalOutOfWedlockMaternal => LocalizedText::new(
                "child born out of wedlock (maternal relationship)",
                "hijo nacido fuera del matrimonio (relación materna)",
            ),
            Self::BiologicalOutOfWedlockPaternalLegitimated => LocalizedText::new(
                "child born out of wedlock, legitimated by the father",
                "hijo nacido fuera del matrimonio, legitimado por el padre",
            ),
            Self::BiologicalOutOfWedlockPaternalBonaFide => LocalizedText::new(
                "child born out of wedlock with a bona fide father-child relationship",
                "hijo nacido fuera del matrimonio con una relación padre-hijo genuina",
            ),
            Self::Stepchild => LocalizedText::new("stepchild", "hijastro"),
            Self::Adopted => LocalizedText::new("adopted child", "hijo adoptivo"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildAnswers {
    pub current_age: Option<u8>,
    pub can_file_before_21: TriState,
    pub can_file_21_to_25_with_abuse_delay: TriState,
    pub is_unmarried: TriState,
    pub relationship: Option<ChildRelationship>,
    pub relationship_currently_exists: TriState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentAnswers {
    pub abuser_is_citizen: TriState,
    pub abuser_over_21: TriState,
    /// Informational; no criterion is scored from it.
    pub petitioner_qualifies_as_parent: TriState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbuseAnswers {
    pub occurred: TriState,
    /// Free-form tags such as `physical` or `emotional`.
    pub types: BTreeSet<String>,
    pub during_relationship: TriState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidenceAnswers {
    pub resided_with_abuser: TriState,
    /// Child petitioners only.
    pub child_abused_during_visitation: TriState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoralCharacterAnswers {
    pub aggravated_felony: TriState,
    pub persecution_genocide_torture: TriState,
    pub moral_turpitude_crime: TriState,
    pub controlled_substance_violation: TriState,
    pub incarceration_180_days: TriState,
    pub false_testimony: TriState,
    pub bar_connected_to_abuse: TriState,
}

impl MoralCharacterAnswers {
    /// Conditional bars answered "yes", in statutory order.
    pub fn conditional_bars(&self) -> Vec<ConditionalBar> {
        [
            (ConditionalBar::MoralTurpitude, self.moral_turpitude_crime),
            (
                ConditionalBar::ControlledSubstance,
                self.controlled_substance_violation,
            ),
            (ConditionalBar::Incarceration, self.incarceration_180_days),
            (ConditionalBar::FalseTestimony, self.false_testimony),
        ]
        .into_iter()
        .filter(|(_, answer)| answer.is_yes())
        .map(|(bar, _)| bar)
        .collect()
    }
}

/// Conduct that blocks a good moral character finding unless connected to the abuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionalBar {
    MoralTurpitude,
    ControlledSubstance,
    Incarceration,
    FalseTestimony,
}

impl ConditionalBar {
    pub fn label(self) -> LocalizedText {
        match self {
            Self::MoralTurpitude => LocalizedText::new(
                "crime involving moral turpitude",
                "delito que implica vileza moral",
            ),
            Self::ControlledSubstance => LocalizedText::new(
                "controlled substance violation",
                "infracción relacionada con sustancias controladas",
            ),
            Self::Incarceration => LocalizedText::new(
                "incarceration of 180 days or more",
                "encarcelamiento de 180 días o más",
            ),
            Self::FalseTestimony => LocalizedText::new(
                "false testimony to obtain an immigration benefit",
                "testimonio falso para obtener un beneficio migratorio",
            ),
        }
    }
}

/// Statutory exceptions for petitioners currently outside the United States.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceException {
    GovernmentEmploymentAbroad,
    MilitaryAbroad,
    AbuseOccurredInCountry,
    #[serde(rename = "none")]
    NoException,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceAnswers {
    pub currently_in_country: TriState,
    pub exception: Option<PresenceException>,
}

/// Complete set of intake answers for one screening.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerRecord {
    pub identity: PetitionerIdentity,
    pub petitioner_type: Option<PetitionerType>,
    pub abuser: AbuserStatusAnswers,
    pub spouse: SpouseAnswers,
    pub child: ChildAnswers,
    pub parent: ParentAnswers,
    pub abuse: AbuseAnswers,
    pub residence: ResidenceAnswers,
    pub moral_character: MoralCharacterAnswers,
    pub presence: PresenceAnswers,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tri_state_round_trips_through_json_null() {
        let answers: AbuseAnswers = serde_json::from_value(json!({
            "occurred": true,
            "during_relationship": null,
        }))
        .expect("abuse answers parse");

        assert_eq!(answers.occurred, TriState::Yes);
        assert_eq!(answers.during_relationship, TriState::Unknown);
        assert!(answers.types.is_empty());

        let value = serde_json::to_value(&answers).expect("serialises");
        assert_eq!(value["occurred"], json!(true));
        assert_eq!(value["during_relationship"], serde_json::Value::Null);
    }

    #[test]
    fn missing_sections_default_to_unknown() {
        let record: AnswerRecord = serde_json::from_value(json!({
            "petitioner_type": "spouse",
            "presence": { "currently_in_country": false, "exception": "none" },
        }))
        .expect("record parses");

        assert_eq!(record.petitioner_type, Some(PetitionerType::Spouse));
        assert_eq!(record.abuser.status, None);
        assert!(record.spouse.remarried.is_unknown());
        assert_eq!(
            record.presence.exception,
            Some(PresenceException::NoException)
        );
    }

    #[test]
    fn conditional_bars_ignore_unanswered_flags() {
        let answers = MoralCharacterAnswers {
            controlled_substance_violation: TriState::Yes,
            false_testimony: TriState::Unknown,
            moral_turpitude_crime: TriState::No,
            ..MoralCharacterAnswers::default()
        };

        assert_eq!(
            answers.conditional_bars(),
            vec![ConditionalBar::ControlledSubstance]
        );
    }

    #[test]
    fn language_codes_are_case_insensitive() {
        assert_eq!(Language::from_code(" ES "), Some(Language::Spanish));
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code("fr"), None);
    }
}
