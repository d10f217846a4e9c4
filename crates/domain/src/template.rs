use std::sync::LazyLock;

use regex::Regex;
use strum::{AsRefStr, Display, EnumString};

use crate::{Muscle, ProgramDesignAnswers, Region, normalize};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Confidence {
    Solid,
    Emerging,
    Speculative,
}

impl Confidence {
    #[must_use]
    pub fn is_evidence_backed(self) -> bool {
        self == Confidence::Solid
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateExercise {
    pub name: String,
    pub sets: u8,
    pub rep_min: u8,
    pub rep_max: u8,
}

impl TemplateExercise {
    #[must_use]
    pub fn new(name: &str, sets: u8, rep_min: u8, rep_max: u8) -> Self {
        Self {
            name: name.to_string(),
            sets,
            rep_min,
            rep_max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDay {
    pub name: String,
    pub target_muscles: Vec<Muscle>,
    pub exercises: Vec<TemplateExercise>,
}

impl TemplateDay {
    #[must_use]
    pub fn kind(&self) -> DayKind {
        DayKind::of(&self.name)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DayKind {
    Upper,
    Lower,
    Full,
}

static UPPER_DAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(upper|push|pull|chest|back|shoulders?|arms?)\b").expect("valid day pattern")
});

static LOWER_DAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(lower|legs?|glutes?|quads?|hamstrings?|posterior)\b")
        .expect("valid day pattern")
});

impl DayKind {
    #[must_use]
    pub fn of(day_name: &str) -> Self {
        let name = normalize(day_name);
        if UPPER_DAY_PATTERN.is_match(&name) {
            DayKind::Upper
        } else if LOWER_DAY_PATTERN.is_match(&name) {
            DayKind::Lower
        } else {
            DayKind::Full
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBlueprint {
    pub id: String,
    pub name: String,
    pub description: String,
    pub days_per_week: u8,
    pub confidence: Confidence,
    pub focus_muscles: Vec<Muscle>,
    pub rule_ids: Vec<String>,
    pub days: Vec<TemplateDay>,
}

impl TemplateBlueprint {
    /// Body region the blueprint specializes in, judged by the majority of its focus muscles.
    #[must_use]
    pub fn specialization(&self) -> Option<Region> {
        let (upper, lower) = self
            .focus_muscles
            .iter()
            .fold((0, 0), |(upper, lower), m| match m.region() {
                Some(Region::Upper) => (upper + 1, lower),
                Some(Region::Lower) => (upper, lower + 1),
                None => (upper, lower),
            });
        match upper.cmp(&lower) {
            std::cmp::Ordering::Greater => Some(Region::Upper),
            std::cmp::Ordering::Less => Some(Region::Lower),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn exercises(&self) -> impl Iterator<Item = &TemplateExercise> {
        self.days.iter().flat_map(|d| d.exercises.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    pub label: String,
    pub confidence: Confidence,
    pub public_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub days_per_week: u8,
    pub confidence: Confidence,
    pub focus_muscles: Vec<Muscle>,
    pub evidence: Evidence,
    pub days: Vec<TemplateDay>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidedTemplate {
    pub source_id: String,
    pub name: String,
    pub description: String,
    pub days_per_week: u8,
    pub confidence: Confidence,
    pub focus_muscles: Vec<Muscle>,
    pub answers: ProgramDesignAnswers,
    pub days: Vec<TemplateDay>,
}
