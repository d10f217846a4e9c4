use crate::{Confidence, ExerciseProfile, TemplateBlueprint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub title: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceRule {
    pub id: String,
    pub statement: String,
    pub confidence: Confidence,
    pub sources: Vec<Source>,
}

/// Read-only input of the engine. Consistency of the rules and blueprints is ensured by the
/// provider that produces the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub rules: Vec<EvidenceRule>,
    pub exercise_profiles: Vec<ExerciseProfile>,
    pub template_blueprints: Vec<TemplateBlueprint>,
}

impl Snapshot {
    #[must_use]
    pub fn rule(&self, id: &str) -> Option<&EvidenceRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn blueprint(&self, id: &str) -> Option<&TemplateBlueprint> {
        self.template_blueprints.iter().find(|b| b.id == id)
    }
}

#[allow(clippy::module_name_repetitions)]
pub trait SnapshotRepository {
    fn read_snapshot(&self) -> Result<Snapshot, crate::ReadError>;
}
