#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod guided;
pub mod weights;

mod answers;
mod equipment;
mod error;
mod evidence;
mod exercise;
mod name;
mod order;
mod recommend;
mod service;
mod substitution;
mod template;

pub use answers::{
    DaysPerWeek, DaysPerWeekError, Experience, Focus, ProgramDesignAnswers, SessionLength,
};
pub use equipment::{EquipmentProfile, EquipmentTier, infer_tier, is_compatible};
pub use error::{PersonalizeError, ReadError, StorageError};
pub use evidence::{EvidenceRule, Snapshot, SnapshotRepository, Source};
pub use exercise::{ExerciseProfile, Level, Muscle, ProfileRegistry, Region};
pub use name::{NormalizedName, normalize};
pub use order::{exercise_score, intensity_bucket, known_coverage, muscle_priority, optimize_order};
pub use recommend::{
    Recommendation, TemplateScore, equipment_fit_score, focus_score, rank, recommend, score,
};
pub use service::Service;
pub use substitution::{Resolver, fallbacks};
pub use template::{
    CompiledTemplate, Confidence, DayKind, Evidence, GuidedTemplate, TemplateBlueprint,
    TemplateDay, TemplateExercise,
};
