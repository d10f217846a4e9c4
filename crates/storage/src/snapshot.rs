use std::collections::HashSet;

use liftplan_domain as domain;
use log::warn;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(default)]
    pub rules: Vec<EvidenceRule>,
    #[serde(default)]
    pub exercise_profiles: Vec<ExerciseProfile>,
    #[serde(default)]
    pub template_blueprints: Vec<TemplateBlueprint>,
}

impl From<&domain::Snapshot> for Snapshot {
    fn from(value: &domain::Snapshot) -> Self {
        Self {
            rules: value.rules.iter().map(EvidenceRule::from).collect(),
            exercise_profiles: value
                .exercise_profiles
                .iter()
                .map(ExerciseProfile::from)
                .collect(),
            template_blueprints: value
                .template_blueprints
                .iter()
                .map(TemplateBlueprint::from)
                .collect(),
        }
    }
}

impl TryFrom<Snapshot> for domain::Snapshot {
    type Error = ConversionError;

    fn try_from(value: Snapshot) -> Result<Self, Self::Error> {
        Ok(Self {
            rules: value
                .rules
                .into_iter()
                .map(domain::EvidenceRule::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            exercise_profiles: value
                .exercise_profiles
                .into_iter()
                .map(domain::ExerciseProfile::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            template_blueprints: value
                .template_blueprints
                .into_iter()
                .map(domain::TemplateBlueprint::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid confidence \"{0}\"")]
    InvalidConfidence(String),
    #[error("invalid level \"{0}\"")]
    InvalidLevel(String),
    #[error("invalid focus \"{0}\"")]
    InvalidFocus(String),
    #[error("invalid equipment \"{0}\"")]
    InvalidEquipment(String),
    #[error("invalid session length \"{0}\"")]
    InvalidSessionLength(String),
    #[error("invalid experience \"{0}\"")]
    InvalidExperience(String),
    #[error(transparent)]
    InvalidDaysPerWeek(#[from] domain::DaysPerWeekError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&domain::Source> for Source {
    fn from(value: &domain::Source) -> Self {
        Self {
            title: value.title.clone(),
            url: value.url.clone(),
        }
    }
}

impl From<Source> for domain::Source {
    fn from(value: Source) -> Self {
        Self {
            title: value.title,
            url: value.url,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvidenceRule {
    pub id: String,
    pub statement: String,
    pub confidence: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl From<&domain::EvidenceRule> for EvidenceRule {
    fn from(value: &domain::EvidenceRule) -> Self {
        Self {
            id: value.id.clone(),
            statement: value.statement.clone(),
            confidence: value.confidence.to_string(),
            sources: value.sources.iter().map(Source::from).collect(),
        }
    }
}

impl TryFrom<EvidenceRule> for domain::EvidenceRule {
    type Error = ConversionError;

    fn try_from(value: EvidenceRule) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            statement: value.statement,
            confidence: confidence(&value.confidence)?,
            sources: value.sources.into_iter().map(domain::Source::from).collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseProfile {
    pub name: String,
    pub primary_muscle: String,
    #[serde(default)]
    pub secondary_muscle: Option<String>,
    pub skill_demand: String,
    pub stability_requirement: String,
    pub fatigue_cost: String,
    #[serde(default)]
    pub long_length_bias: bool,
    #[serde(default)]
    pub substitutions: Vec<String>,
}

impl From<&domain::ExerciseProfile> for ExerciseProfile {
    fn from(value: &domain::ExerciseProfile) -> Self {
        Self {
            name: value.name.clone(),
            primary_muscle: value.primary_muscle.to_string(),
            secondary_muscle: value.secondary_muscle.as_ref().map(ToString::to_string),
            skill_demand: value.skill_demand.to_string(),
            stability_requirement: value.stability_requirement.to_string(),
            fatigue_cost: value.fatigue_cost.to_string(),
            long_length_bias: value.long_length_bias,
            substitutions: value.substitutions.clone(),
        }
    }
}

impl TryFrom<ExerciseProfile> for domain::ExerciseProfile {
    type Error = ConversionError;

    fn try_from(value: ExerciseProfile) -> Result<Self, Self::Error> {
        Ok(Self {
            primary_muscle: domain::Muscle::new(&value.primary_muscle),
            secondary_muscle: value.secondary_muscle.as_deref().map(domain::Muscle::new),
            skill_demand: level(&value.skill_demand)?,
            stability_requirement: level(&value.stability_requirement)?,
            fatigue_cost: level(&value.fatigue_cost)?,
            long_length_bias: value.long_length_bias,
            substitutions: value.substitutions,
            name: value.name,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TemplateBlueprint {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub days_per_week: u8,
    pub confidence: String,
    #[serde(default)]
    pub focus_muscles: Vec<String>,
    #[serde(default)]
    pub rule_ids: Vec<String>,
    pub days: Vec<TemplateDay>,
}

impl From<&domain::TemplateBlueprint> for TemplateBlueprint {
    fn from(value: &domain::TemplateBlueprint) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            description: value.description.clone(),
            days_per_week: value.days_per_week,
            confidence: value.confidence.to_string(),
            focus_muscles: value.focus_muscles.iter().map(ToString::to_string).collect(),
            rule_ids: value.rule_ids.clone(),
            days: value.days.iter().map(TemplateDay::from).collect(),
        }
    }
}

impl TryFrom<TemplateBlueprint> for domain::TemplateBlueprint {
    type Error = ConversionError;

    fn try_from(value: TemplateBlueprint) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            name: value.name,
            description: value.description,
            days_per_week: value.days_per_week,
            confidence: confidence(&value.confidence)?,
            focus_muscles: value
                .focus_muscles
                .iter()
                .map(|m| domain::Muscle::new(m))
                .collect(),
            rule_ids: value.rule_ids,
            days: value.days.into_iter().map(domain::TemplateDay::from).collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TemplateDay {
    pub name: String,
    #[serde(default)]
    pub target_muscles: Vec<String>,
    pub exercises: Vec<TemplateExercise>,
}

impl From<&domain::TemplateDay> for TemplateDay {
    fn from(value: &domain::TemplateDay) -> Self {
        Self {
            name: value.name.clone(),
            target_muscles: value.target_muscles.iter().map(ToString::to_string).collect(),
            exercises: value.exercises.iter().map(TemplateExercise::from).collect(),
        }
    }
}

impl From<TemplateDay> for domain::TemplateDay {
    fn from(value: TemplateDay) -> Self {
        Self {
            name: value.name,
            target_muscles: value
                .target_muscles
                .iter()
                .map(|m| domain::Muscle::new(m))
                .collect(),
            exercises: value
                .exercises
                .into_iter()
                .map(domain::TemplateExercise::from)
                .collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TemplateExercise {
    pub name: String,
    pub sets: u8,
    pub rep_min: u8,
    pub rep_max: u8,
}

impl From<&domain::TemplateExercise> for TemplateExercise {
    fn from(value: &domain::TemplateExercise) -> Self {
        Self {
            name: value.name.clone(),
            sets: value.sets,
            rep_min: value.rep_min,
            rep_max: value.rep_max,
        }
    }
}

impl From<TemplateExercise> for domain::TemplateExercise {
    fn from(value: TemplateExercise) -> Self {
        Self {
            name: value.name,
            sets: value.sets,
            rep_min: value.rep_min,
            rep_max: value.rep_max,
        }
    }
}

fn confidence(value: &str) -> Result<domain::Confidence, ConversionError> {
    value
        .parse()
        .map_err(|_| ConversionError::InvalidConfidence(value.to_string()))
}

fn level(value: &str) -> Result<domain::Level, ConversionError> {
    value
        .parse()
        .map_err(|_| ConversionError::InvalidLevel(value.to_string()))
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("rule \"{0}\" has no source")]
    MissingSource(String),
    #[error("duplicate rule \"{0}\"")]
    DuplicateRule(String),
    #[error("no template blueprints")]
    NoBlueprints,
}

/// Checks the consistency the engine relies on. Blueprints whose day count differs from
/// `days_per_week` are accepted.
pub fn validate(snapshot: &domain::Snapshot) -> Result<(), SnapshotError> {
    let mut ids = HashSet::new();
    for rule in &snapshot.rules {
        if rule.sources.is_empty() {
            return Err(SnapshotError::MissingSource(rule.id.clone()));
        }
        if !ids.insert(rule.id.as_str()) {
            return Err(SnapshotError::DuplicateRule(rule.id.clone()));
        }
    }

    if snapshot.template_blueprints.is_empty() {
        return Err(SnapshotError::NoBlueprints);
    }

    for blueprint in &snapshot.template_blueprints {
        if usize::from(blueprint.days_per_week) != blueprint.days.len() {
            warn!(
                "template \"{}\" has {} days but {} days per week",
                blueprint.id,
                blueprint.days.len(),
                blueprint.days_per_week
            );
        }
        for id in &blueprint.rule_ids {
            if !ids.contains(id.as_str()) {
                warn!("template \"{}\" references unknown rule \"{id}\"", blueprint.id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{BLUEPRINT, PROFILE, RULE, SNAPSHOT};

    use super::*;

    #[test]
    fn test_snapshot_try_from() {
        assert_eq!(
            domain::Snapshot::try_from(Snapshot::from(&*SNAPSHOT)),
            Ok(SNAPSHOT.clone())
        );
    }

    #[test]
    fn test_default_snapshot_try_from() {
        let snapshot = domain::catalog::default_snapshot();
        assert_eq!(
            domain::Snapshot::try_from(Snapshot::from(snapshot)).as_ref(),
            Ok(snapshot)
        );
    }

    #[test]
    fn test_rule_deserialize() {
        let rule: EvidenceRule = serde_json::from_value(json!({
            "id": "weekly_volume",
            "statement": "Around 10 to 20 hard sets per muscle group each week support muscle growth.",
            "confidence": "solid",
            "sources": [{"title": "Schoenfeld, Ogborn & Krieger (2017)"}]
        }))
        .unwrap();
        assert_eq!(domain::EvidenceRule::try_from(rule), Ok(RULE.clone()));
    }

    #[test]
    fn test_profile_deserialize() {
        let profile: ExerciseProfile = serde_json::from_value(json!({
            "name": "Barbell Back Squat",
            "primary_muscle": "Quads",
            "secondary_muscle": "glutes",
            "skill_demand": "high",
            "stability_requirement": "LOW",
            "fatigue_cost": "high",
            "substitutions": ["Hack Squat", "Leg Press"]
        }))
        .unwrap();
        assert_eq!(domain::ExerciseProfile::try_from(profile), Ok(PROFILE.clone()));
    }

    #[test]
    fn test_blueprint_deserialize() {
        let blueprint: TemplateBlueprint = serde_json::from_value(json!({
            "id": "full_body_1",
            "name": "Full Body 1-Day",
            "days_per_week": 1,
            "confidence": "emerging",
            "focus_muscles": ["Glutes"],
            "rule_ids": ["weekly_volume"],
            "days": [{
                "name": "Full Body",
                "target_muscles": ["quads", "chest"],
                "exercises": [
                    {"name": "Barbell Back Squat", "sets": 3, "rep_min": 5, "rep_max": 8},
                    {"name": "Dumbbell Bench Press", "sets": 3, "rep_min": 8, "rep_max": 12}
                ]
            }]
        }))
        .unwrap();
        assert_eq!(
            domain::TemplateBlueprint::try_from(blueprint),
            Ok(BLUEPRINT.clone())
        );
    }

    #[rstest]
    #[case(json!({"confidence": "certain"}), ConversionError::InvalidConfidence("certain".to_string()))]
    #[case(json!({"skill_demand": "extreme"}), ConversionError::InvalidLevel("extreme".to_string()))]
    fn test_snapshot_try_from_invalid(
        #[case] patch: serde_json::Value,
        #[case] expected: ConversionError,
    ) {
        let mut snapshot = json!(Snapshot::from(&*SNAPSHOT));
        for (key, value) in patch.as_object().unwrap() {
            if key == "confidence" {
                snapshot["template_blueprints"][0][key] = value.clone();
            } else {
                snapshot["exercise_profiles"][0][key] = value.clone();
            }
        }
        let snapshot: Snapshot = serde_json::from_value(snapshot).unwrap();
        assert_eq!(domain::Snapshot::try_from(snapshot), Err(expected));
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate(&SNAPSHOT), Ok(()));
        assert_eq!(validate(domain::catalog::default_snapshot()), Ok(()));
    }

    #[test]
    fn test_validate_accepts_day_count_mismatch() {
        let mut snapshot = SNAPSHOT.clone();
        snapshot.template_blueprints[0].days_per_week = 3;
        assert_eq!(validate(&snapshot), Ok(()));
    }

    #[test]
    fn test_validate_missing_source() {
        let mut snapshot = SNAPSHOT.clone();
        snapshot.rules[0].sources.clear();
        assert_eq!(
            validate(&snapshot),
            Err(SnapshotError::MissingSource("weekly_volume".to_string()))
        );
    }

    #[test]
    fn test_validate_duplicate_rule() {
        let mut snapshot = SNAPSHOT.clone();
        snapshot.rules.push(RULE.clone());
        assert_eq!(
            validate(&snapshot),
            Err(SnapshotError::DuplicateRule("weekly_volume".to_string()))
        );
    }

    #[test]
    fn test_validate_no_blueprints() {
        let mut snapshot = SNAPSHOT.clone();
        snapshot.template_blueprints.clear();
        assert_eq!(validate(&snapshot), Err(SnapshotError::NoBlueprints));
    }
}
