use liftplan_domain as domain;

use crate::snapshot::{ConversionError, TemplateDay};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub days_per_week: u8,
    #[serde(default = "default_focus")]
    pub focus: String,
    #[serde(default = "default_equipment")]
    pub equipment: String,
    #[serde(default = "default_session_length")]
    pub session_length: String,
    #[serde(default = "default_experience")]
    pub experience: String,
}

fn default_focus() -> String {
    domain::Focus::default().to_string()
}

fn default_equipment() -> String {
    domain::EquipmentProfile::default().to_string()
}

fn default_session_length() -> String {
    domain::SessionLength::default().to_string()
}

fn default_experience() -> String {
    domain::Experience::default().to_string()
}

impl From<&domain::ProgramDesignAnswers> for Answers {
    fn from(value: &domain::ProgramDesignAnswers) -> Self {
        Self {
            days_per_week: *value.days_per_week,
            focus: value.focus.to_string(),
            equipment: value.equipment.to_string(),
            session_length: value.session_length.to_string(),
            experience: value.experience.to_string(),
        }
    }
}

impl TryFrom<Answers> for domain::ProgramDesignAnswers {
    type Error = ConversionError;

    fn try_from(value: Answers) -> Result<Self, Self::Error> {
        Ok(Self {
            days_per_week: domain::DaysPerWeek::new(value.days_per_week)?,
            focus: value
                .focus
                .parse()
                .map_err(|_| ConversionError::InvalidFocus(value.focus.clone()))?,
            equipment: value
                .equipment
                .parse()
                .map_err(|_| ConversionError::InvalidEquipment(value.equipment.clone()))?,
            session_length: value
                .session_length
                .parse()
                .map_err(|_| ConversionError::InvalidSessionLength(value.session_length.clone()))?,
            experience: value
                .experience
                .parse()
                .map_err(|_| ConversionError::InvalidExperience(value.experience.clone()))?,
        })
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GuidedTemplate {
    pub source_id: String,
    pub name: String,
    pub description: String,
    pub days_per_week: u8,
    pub confidence: String,
    pub focus_muscles: Vec<String>,
    pub answers: Answers,
    pub days: Vec<TemplateDay>,
}

impl From<&domain::GuidedTemplate> for GuidedTemplate {
    fn from(value: &domain::GuidedTemplate) -> Self {
        Self {
            source_id: value.source_id.clone(),
            name: value.name.clone(),
            description: value.description.clone(),
            days_per_week: value.days_per_week,
            confidence: value.confidence.to_string(),
            focus_muscles: value.focus_muscles.iter().map(ToString::to_string).collect(),
            answers: Answers::from(&value.answers),
            days: value.days.iter().map(TemplateDay::from).collect(),
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    pub label: String,
    pub confidence: String,
    pub public_note: String,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub days_per_week: u8,
    pub confidence: String,
    pub focus_muscles: Vec<String>,
    pub evidence: Evidence,
    pub days: Vec<TemplateDay>,
}

impl From<&domain::CompiledTemplate> for CompiledTemplate {
    fn from(value: &domain::CompiledTemplate) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            description: value.description.clone(),
            days_per_week: value.days_per_week,
            confidence: value.confidence.to_string(),
            focus_muscles: value.focus_muscles.iter().map(ToString::to_string).collect(),
            evidence: Evidence {
                label: value.evidence.label.clone(),
                confidence: value.evidence.confidence.to_string(),
                public_note: value.evidence.public_note.clone(),
            },
            days: value.days.iter().map(TemplateDay::from).collect(),
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    pub total: i32,
    pub score: Score,
}

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub days: i32,
    pub exact_days: i32,
    pub evidence: i32,
    pub focus: i32,
    pub experience: i32,
    pub session: i32,
    pub equipment_fit: i32,
}

impl From<&domain::Recommendation<'_>> for Recommendation {
    fn from(value: &domain::Recommendation<'_>) -> Self {
        let score = value.score;
        Self {
            id: value.template.id.clone(),
            name: value.template.name.clone(),
            total: score.total(),
            score: Score {
                days: score.days,
                exact_days: score.exact_days,
                evidence: score.evidence,
                focus: score.focus,
                experience: score.experience,
                session: score.session,
                equipment_fit: score.equipment_fit,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{ANSWERS, BLUEPRINT, RULE};

    use super::*;

    #[test]
    fn test_answers_try_from() {
        assert_eq!(
            domain::ProgramDesignAnswers::try_from(Answers::from(&*ANSWERS)),
            Ok(*ANSWERS)
        );
    }

    #[test]
    fn test_answers_deserialize() {
        let answers: Answers = serde_json::from_value(json!({
            "days_per_week": 4,
            "focus": "upper",
            "equipment": "home_dumbbells",
            "session_length": "short",
            "experience": "Beginner"
        }))
        .unwrap();
        assert_eq!(domain::ProgramDesignAnswers::try_from(answers), Ok(*ANSWERS));
    }

    #[test]
    fn test_answers_deserialize_defaults() {
        let answers: Answers = serde_json::from_value(json!({"days_per_week": 3})).unwrap();
        assert_eq!(
            domain::ProgramDesignAnswers::try_from(answers),
            Ok(domain::ProgramDesignAnswers::default())
        );
    }

    #[rstest]
    #[case(json!({"days_per_week": 8}), ConversionError::InvalidDaysPerWeek(domain::DaysPerWeekError::OutOfRange(8)))]
    #[case(json!({"days_per_week": 3, "focus": "arms"}), ConversionError::InvalidFocus("arms".to_string()))]
    #[case(json!({"days_per_week": 3, "equipment": "barbell"}), ConversionError::InvalidEquipment("barbell".to_string()))]
    #[case(json!({"days_per_week": 3, "session_length": "endless"}), ConversionError::InvalidSessionLength("endless".to_string()))]
    #[case(json!({"days_per_week": 3, "experience": "elite"}), ConversionError::InvalidExperience("elite".to_string()))]
    fn test_answers_try_from_invalid(
        #[case] value: serde_json::Value,
        #[case] expected: ConversionError,
    ) {
        let answers: Answers = serde_json::from_value(value).unwrap();
        assert_eq!(domain::ProgramDesignAnswers::try_from(answers), Err(expected));
    }

    #[test]
    fn test_guided_template_serialize() {
        let registry = domain::ProfileRegistry::default();
        let guided = domain::guided::build(
            &BLUEPRINT,
            &domain::ProgramDesignAnswers::default(),
            &domain::Resolver::new(&registry),
        );
        assert_eq!(
            json!(GuidedTemplate::from(&guided)),
            json!({
                "source_id": "full_body_1",
                "name": "Full Body 1-Day (Guided)",
                "description": domain::guided::describe(&BLUEPRINT, &domain::ProgramDesignAnswers::default()),
                "days_per_week": 1,
                "confidence": "emerging",
                "focus_muscles": ["glutes"],
                "answers": {
                    "days_per_week": 3,
                    "focus": "none",
                    "equipment": "full_gym",
                    "session_length": "moderate",
                    "experience": "intermediate"
                },
                "days": [{
                    "name": "Full Body",
                    "target_muscles": ["quads", "chest"],
                    "exercises": [
                        {"name": "Barbell Back Squat", "sets": 3, "rep_min": 5, "rep_max": 8},
                        {"name": "Dumbbell Bench Press", "sets": 3, "rep_min": 8, "rep_max": 12}
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_compiled_template_serialize() {
        let registry = domain::ProfileRegistry::default();
        let compiled = domain::catalog::compile(&BLUEPRINT, &[RULE.clone()], &registry);
        let value = json!(CompiledTemplate::from(&compiled));
        assert_eq!(
            value["evidence"],
            json!({
                "label": "Emerging evidence",
                "confidence": "emerging",
                "public_note": RULE.statement
            })
        );
        assert_eq!(value["days"][0]["exercises"][0]["name"], "Barbell Back Squat");
    }

    #[test]
    fn test_recommendation_from() {
        let registry = domain::ProfileRegistry::default();
        let templates = [BLUEPRINT.clone()];
        let recommendation = domain::recommend(
            &templates,
            &domain::ProgramDesignAnswers::default(),
            &domain::Resolver::new(&registry),
        )
        .unwrap();
        let output = Recommendation::from(&recommendation);
        assert_eq!(output.id, "full_body_1");
        assert_eq!(output.total, recommendation.score.total());
        assert_eq!(output.score.equipment_fit, 24);
    }
}
