use std::sync::LazyLock;

use log::debug;

use crate::{
    CompiledTemplate, Confidence, Evidence, EvidenceRule, ExerciseProfile, Level, Muscle,
    ProfileRegistry, Snapshot, Source, TemplateBlueprint, TemplateDay, TemplateExercise,
    optimize_order,
};

/// Orders the days of a blueprint and attaches its evidence.
#[must_use]
pub fn compile(
    blueprint: &TemplateBlueprint,
    rules: &[EvidenceRule],
    registry: &ProfileRegistry,
) -> CompiledTemplate {
    CompiledTemplate {
        id: blueprint.id.clone(),
        name: blueprint.name.clone(),
        description: blueprint.description.clone(),
        days_per_week: blueprint.days_per_week,
        confidence: blueprint.confidence,
        focus_muscles: blueprint.focus_muscles.clone(),
        evidence: evidence(blueprint, rules),
        days: blueprint
            .days
            .iter()
            .map(|day| TemplateDay {
                name: day.name.clone(),
                target_muscles: day.target_muscles.clone(),
                exercises: optimize_order(day, &blueprint.focus_muscles, registry),
            })
            .collect(),
    }
}

#[must_use]
pub fn compile_catalog(snapshot: &Snapshot, registry: &ProfileRegistry) -> Vec<CompiledTemplate> {
    snapshot
        .template_blueprints
        .iter()
        .map(|blueprint| compile(blueprint, &snapshot.rules, registry))
        .collect()
}

#[must_use]
pub fn evidence(blueprint: &TemplateBlueprint, rules: &[EvidenceRule]) -> Evidence {
    let statements = blueprint
        .rule_ids
        .iter()
        .filter_map(|id| {
            let rule = rules.iter().find(|r| r.id == *id);
            if rule.is_none() {
                debug!("unknown rule \"{id}\" referenced by \"{}\"", blueprint.id);
            }
            rule
        })
        .map(|r| r.statement.as_str())
        .collect::<Vec<_>>();

    Evidence {
        label: label(blueprint.confidence).to_string(),
        confidence: blueprint.confidence,
        public_note: if statements.is_empty() {
            default_note(blueprint.confidence).to_string()
        } else {
            statements.join(" ")
        },
    }
}

#[must_use]
pub fn label(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::Solid => "Well supported",
        Confidence::Emerging => "Emerging evidence",
        Confidence::Speculative => "Experimental",
    }
}

fn default_note(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::Solid => "Built on consistent findings from controlled training studies.",
        Confidence::Emerging => {
            "Built on promising but limited research. Expect adjustments as evidence grows."
        }
        Confidence::Speculative => {
            "Built on coaching practice rather than direct research. Monitor progress closely."
        }
    }
}

/// Evidence snapshot shipped with the engine.
#[must_use]
pub fn default_snapshot() -> &'static Snapshot {
    &DEFAULT_SNAPSHOT
}

static DEFAULT_SNAPSHOT: LazyLock<Snapshot> = LazyLock::new(|| Snapshot {
    rules: RULES.iter().map(Into::into).collect(),
    exercise_profiles: PROFILES.iter().map(Into::into).collect(),
    template_blueprints: BLUEPRINTS.iter().map(Into::into).collect(),
});

struct RuleData {
    id: &'static str,
    statement: &'static str,
    confidence: Confidence,
    sources: &'static [&'static str],
}

impl From<&RuleData> for EvidenceRule {
    fn from(value: &RuleData) -> Self {
        EvidenceRule {
            id: value.id.to_string(),
            statement: value.statement.to_string(),
            confidence: value.confidence,
            sources: value
                .sources
                .iter()
                .map(|title| Source {
                    title: (*title).to_string(),
                    url: None,
                })
                .collect(),
        }
    }
}

struct ProfileData {
    name: &'static str,
    primary: &'static str,
    secondary: Option<&'static str>,
    skill: Level,
    stability: Level,
    fatigue: Level,
    long_length_bias: bool,
    substitutions: &'static [&'static str],
}

impl ProfileData {
    const fn default() -> Self {
        Self {
            name: "",
            primary: "",
            secondary: None,
            skill: Level::Low,
            stability: Level::High,
            fatigue: Level::Low,
            long_length_bias: false,
            substitutions: &[],
        }
    }
}

impl From<&ProfileData> for ExerciseProfile {
    fn from(value: &ProfileData) -> Self {
        ExerciseProfile {
            name: value.name.to_string(),
            primary_muscle: Muscle::new(value.primary),
            secondary_muscle: value.secondary.map(Muscle::new),
            skill_demand: value.skill,
            stability_requirement: value.stability,
            fatigue_cost: value.fatigue,
            long_length_bias: value.long_length_bias,
            substitutions: value
                .substitutions
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

struct BlueprintData {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    confidence: Confidence,
    focus_muscles: &'static [&'static str],
    rule_ids: &'static [&'static str],
    days: &'static [DayData],
}

struct DayData {
    name: &'static str,
    target_muscles: &'static [&'static str],
    exercises: &'static [(&'static str, u8, u8, u8)],
}

impl From<&BlueprintData> for TemplateBlueprint {
    fn from(value: &BlueprintData) -> Self {
        TemplateBlueprint {
            id: value.id.to_string(),
            name: value.name.to_string(),
            description: value.description.to_string(),
            days_per_week: u8::try_from(value.days.len()).unwrap_or(u8::MAX),
            confidence: value.confidence,
            focus_muscles: value.focus_muscles.iter().map(|m| Muscle::new(m)).collect(),
            rule_ids: value.rule_ids.iter().map(ToString::to_string).collect(),
            days: value
                .days
                .iter()
                .map(|day| TemplateDay {
                    name: day.name.to_string(),
                    target_muscles: day.target_muscles.iter().map(|m| Muscle::new(m)).collect(),
                    exercises: day
                        .exercises
                        .iter()
                        .map(|(name, sets, rep_min, rep_max)| {
                            TemplateExercise::new(name, *sets, *rep_min, *rep_max)
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

const RULES: [RuleData; 6] = [
    RuleData {
        id: "weekly_volume",
        statement: "Around 10 to 20 hard sets per muscle group each week support muscle growth.",
        confidence: Confidence::Solid,
        sources: &[
            "Schoenfeld, Ogborn & Krieger (2017). Dose-response relationship between weekly resistance training volume and increases in muscle mass.",
        ],
    },
    RuleData {
        id: "twice_weekly_frequency",
        statement: "Training each muscle group at least twice per week is at least as effective as once per week at equal volume.",
        confidence: Confidence::Solid,
        sources: &[
            "Schoenfeld, Ogborn & Krieger (2016). Effects of resistance training frequency on measures of muscle hypertrophy.",
        ],
    },
    RuleData {
        id: "compounds_first",
        statement: "Multi-joint lifts performed early in a session allow more load and repetitions.",
        confidence: Confidence::Solid,
        sources: &[
            "Simão et al. (2012). Exercise order in resistance training.",
        ],
    },
    RuleData {
        id: "long_muscle_length",
        statement: "Exercises that load muscles at long lengths may produce more growth.",
        confidence: Confidence::Emerging,
        sources: &[
            "Pedrosa et al. (2022). Partial range of motion training elicits favorable improvements in muscular adaptations when carried out at long muscle lengths.",
        ],
    },
    RuleData {
        id: "regional_specialization",
        statement: "Raising volume for a priority region while maintaining the rest can speed up its development.",
        confidence: Confidence::Emerging,
        sources: &[
            "Helms, Morgan & Valdez (2019). The Muscle and Strength Pyramid: Training.",
        ],
    },
    RuleData {
        id: "high_frequency_splits",
        statement: "Six training days per week offer little extra growth over four at equal weekly volume.",
        confidence: Confidence::Speculative,
        sources: &[
            "Colquhoun et al. (2018). Training volume, not frequency, indicative of maximal strength adaptations to resistance training.",
        ],
    },
];

const PROFILES: [ProfileData; 27] = [
    ProfileData {
        name: "Barbell Back Squat",
        primary: "quads",
        secondary: Some("glutes"),
        skill: Level::High,
        stability: Level::Low,
        fatigue: Level::High,
        substitutions: &["Hack Squat", "Leg Press"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Romanian Deadlift",
        primary: "hamstrings",
        secondary: Some("glutes"),
        skill: Level::Medium,
        stability: Level::Medium,
        fatigue: Level::High,
        long_length_bias: true,
        substitutions: &["Dumbbell Romanian Deadlift"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Leg Press",
        primary: "quads",
        secondary: Some("glutes"),
        fatigue: Level::Medium,
        substitutions: &["Hack Squat"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Hack Squat",
        primary: "quads",
        fatigue: Level::Medium,
        long_length_bias: true,
        substitutions: &["Leg Press"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Bulgarian Split Squat",
        primary: "quads",
        secondary: Some("glutes"),
        skill: Level::Medium,
        stability: Level::Low,
        fatigue: Level::Medium,
        long_length_bias: true,
        substitutions: &["Dumbbell Lunge"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Goblet Squat",
        primary: "quads",
        secondary: Some("glutes"),
        stability: Level::Medium,
        fatigue: Level::Medium,
        substitutions: &["Bulgarian Split Squat"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Leg Extension",
        primary: "quads",
        ..ProfileData::default()
    },
    ProfileData {
        name: "Seated Leg Curl",
        primary: "hamstrings",
        long_length_bias: true,
        substitutions: &["Lying Leg Curl"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Lying Leg Curl",
        primary: "hamstrings",
        substitutions: &["Seated Leg Curl"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Barbell Hip Thrust",
        primary: "glutes",
        secondary: Some("hamstrings"),
        skill: Level::Medium,
        stability: Level::Medium,
        fatigue: Level::Medium,
        substitutions: &["Dumbbell Hip Thrust"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Hip Abduction Machine",
        primary: "glutes",
        ..ProfileData::default()
    },
    ProfileData {
        name: "Standing Calf Raise",
        primary: "calves",
        long_length_bias: true,
        substitutions: &["Dumbbell Calf Raise"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Barbell Bench Press",
        primary: "chest",
        secondary: Some("triceps"),
        skill: Level::High,
        stability: Level::Medium,
        fatigue: Level::High,
        substitutions: &["Dumbbell Bench Press"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Dumbbell Bench Press",
        primary: "chest",
        secondary: Some("triceps"),
        skill: Level::Medium,
        stability: Level::Medium,
        fatigue: Level::Medium,
        substitutions: &["Push-Up"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Incline Dumbbell Press",
        primary: "chest",
        secondary: Some("front delts"),
        skill: Level::Medium,
        stability: Level::Medium,
        fatigue: Level::Medium,
        substitutions: &["Dumbbell Bench Press"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Cable Fly",
        primary: "chest",
        long_length_bias: true,
        substitutions: &["Pec Deck"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Barbell Row",
        primary: "upper back",
        secondary: Some("lats"),
        skill: Level::Medium,
        stability: Level::Medium,
        fatigue: Level::High,
        substitutions: &["Chest-Supported Dumbbell Row"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Seated Cable Row",
        primary: "upper back",
        secondary: Some("lats"),
        fatigue: Level::Medium,
        substitutions: &["Chest-Supported Dumbbell Row"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Lat Pulldown",
        primary: "lats",
        secondary: Some("biceps"),
        fatigue: Level::Medium,
        long_length_bias: true,
        substitutions: &["Pull-Up"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Pull-Up",
        primary: "lats",
        secondary: Some("biceps"),
        skill: Level::High,
        stability: Level::Low,
        fatigue: Level::Medium,
        substitutions: &["Lat Pulldown"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Overhead Press",
        primary: "front delts",
        secondary: Some("triceps"),
        skill: Level::High,
        stability: Level::Low,
        fatigue: Level::Medium,
        substitutions: &["Dumbbell Shoulder Press"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Dumbbell Lateral Raise",
        primary: "side delts",
        stability: Level::Medium,
        substitutions: &["Cable Lateral Raise"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Cable Face Pull",
        primary: "rear delts",
        secondary: Some("upper back"),
        substitutions: &["Dumbbell Rear Delt Fly"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Triceps Pushdown",
        primary: "triceps",
        substitutions: &["Overhead Cable Triceps Extension"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Overhead Cable Triceps Extension",
        primary: "triceps",
        long_length_bias: true,
        substitutions: &["Dumbbell Overhead Triceps Extension"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Dumbbell Curl",
        primary: "biceps",
        stability: Level::Medium,
        substitutions: &["Dumbbell Hammer Curl"],
        ..ProfileData::default()
    },
    ProfileData {
        name: "Hanging Leg Raise",
        primary: "abs",
        skill: Level::Medium,
        stability: Level::Low,
        ..ProfileData::default()
    },
];

const BLUEPRINTS: [BlueprintData; 6] = [
    BlueprintData {
        id: "full_body_2",
        name: "Full Body 2-Day",
        description: "Two full body sessions per week covering every major muscle group twice.",
        confidence: Confidence::Solid,
        focus_muscles: &[],
        rule_ids: &["twice_weekly_frequency", "compounds_first"],
        days: &[
            DayData {
                name: "Full Body A",
                target_muscles: &["quads", "chest", "lats", "hamstrings"],
                exercises: &[
                    ("Barbell Back Squat", 3, 5, 8),
                    ("Barbell Bench Press", 3, 6, 10),
                    ("Lat Pulldown", 3, 8, 12),
                    ("Romanian Deadlift", 3, 8, 10),
                    ("Dumbbell Lateral Raise", 2, 12, 15),
                ],
            },
            DayData {
                name: "Full Body B",
                target_muscles: &["glutes", "upper back", "quads", "front delts"],
                exercises: &[
                    ("Barbell Hip Thrust", 3, 8, 12),
                    ("Barbell Row", 3, 6, 10),
                    ("Leg Press", 3, 10, 15),
                    ("Overhead Press", 3, 6, 10),
                    ("Triceps Pushdown", 2, 10, 15),
                    ("Dumbbell Curl", 2, 10, 15),
                ],
            },
        ],
    },
    BlueprintData {
        id: "full_body_3",
        name: "Full Body 3-Day",
        description: "Three full body sessions per week with rotating main lifts.",
        confidence: Confidence::Solid,
        focus_muscles: &[],
        rule_ids: &["weekly_volume", "twice_weekly_frequency", "compounds_first"],
        days: &[
            DayData {
                name: "Full Body A",
                target_muscles: &["quads", "chest", "upper back", "hamstrings"],
                exercises: &[
                    ("Barbell Back Squat", 3, 5, 8),
                    ("Barbell Bench Press", 3, 6, 10),
                    ("Barbell Row", 3, 8, 10),
                    ("Seated Leg Curl", 2, 10, 15),
                    ("Dumbbell Lateral Raise", 2, 12, 20),
                ],
            },
            DayData {
                name: "Full Body B",
                target_muscles: &["hamstrings", "front delts", "lats", "quads"],
                exercises: &[
                    ("Romanian Deadlift", 3, 6, 10),
                    ("Overhead Press", 3, 6, 10),
                    ("Lat Pulldown", 3, 8, 12),
                    ("Bulgarian Split Squat", 2, 8, 12),
                    ("Cable Face Pull", 2, 12, 20),
                ],
            },
            DayData {
                name: "Full Body C",
                target_muscles: &["quads", "chest", "lats", "glutes"],
                exercises: &[
                    ("Leg Press", 3, 10, 15),
                    ("Incline Dumbbell Press", 3, 8, 12),
                    ("Pull-Up", 3, 6, 10),
                    ("Barbell Hip Thrust", 3, 8, 12),
                    ("Triceps Pushdown", 2, 10, 15),
                    ("Dumbbell Curl", 2, 10, 15),
                ],
            },
        ],
    },
    BlueprintData {
        id: "upper_lower_4",
        name: "Upper/Lower 4-Day",
        description: "Alternating upper and lower body sessions, each trained twice per week.",
        confidence: Confidence::Solid,
        focus_muscles: &[],
        rule_ids: &["weekly_volume", "twice_weekly_frequency", "compounds_first"],
        days: &[
            DayData {
                name: "Upper A",
                target_muscles: &["chest", "upper back", "front delts", "triceps"],
                exercises: &[
                    ("Barbell Bench Press", 4, 5, 8),
                    ("Barbell Row", 4, 6, 10),
                    ("Overhead Press", 3, 6, 10),
                    ("Lat Pulldown", 3, 8, 12),
                    ("Dumbbell Lateral Raise", 3, 12, 20),
                    ("Triceps Pushdown", 2, 10, 15),
                ],
            },
            DayData {
                name: "Lower A",
                target_muscles: &["quads", "hamstrings", "glutes", "calves"],
                exercises: &[
                    ("Barbell Back Squat", 4, 5, 8),
                    ("Romanian Deadlift", 3, 6, 10),
                    ("Leg Press", 3, 10, 15),
                    ("Seated Leg Curl", 3, 10, 15),
                    ("Standing Calf Raise", 3, 10, 15),
                ],
            },
            DayData {
                name: "Upper B",
                target_muscles: &["lats", "chest", "biceps", "triceps"],
                exercises: &[
                    ("Incline Dumbbell Press", 3, 8, 12),
                    ("Pull-Up", 3, 6, 10),
                    ("Seated Cable Row", 3, 8, 12),
                    ("Cable Fly", 2, 12, 15),
                    ("Dumbbell Curl", 3, 10, 15),
                    ("Overhead Cable Triceps Extension", 2, 10, 15),
                ],
            },
            DayData {
                name: "Lower B",
                target_muscles: &["glutes", "quads", "hamstrings", "calves"],
                exercises: &[
                    ("Barbell Hip Thrust", 4, 6, 10),
                    ("Bulgarian Split Squat", 3, 8, 12),
                    ("Leg Extension", 3, 10, 15),
                    ("Seated Leg Curl", 3, 10, 15),
                    ("Standing Calf Raise", 3, 12, 20),
                    ("Hanging Leg Raise", 2, 10, 15),
                ],
            },
        ],
    },
    BlueprintData {
        id: "upper_lower_4_upper_focus",
        name: "Upper/Lower 4-Day (Upper Focus)",
        description: "Upper/lower split with extra chest, back and shoulder volume and maintenance work for the legs.",
        confidence: Confidence::Emerging,
        focus_muscles: &["chest", "lats", "side delts"],
        rule_ids: &["regional_specialization", "weekly_volume"],
        days: &[
            DayData {
                name: "Upper A",
                target_muscles: &["chest", "lats", "side delts", "upper back"],
                exercises: &[
                    ("Barbell Bench Press", 4, 5, 8),
                    ("Pull-Up", 4, 6, 10),
                    ("Incline Dumbbell Press", 3, 8, 12),
                    ("Seated Cable Row", 3, 8, 12),
                    ("Dumbbell Lateral Raise", 4, 12, 20),
                    ("Cable Fly", 2, 12, 15),
                ],
            },
            DayData {
                name: "Lower A",
                target_muscles: &["quads", "hamstrings", "calves"],
                exercises: &[
                    ("Barbell Back Squat", 3, 5, 8),
                    ("Romanian Deadlift", 3, 6, 10),
                    ("Leg Extension", 2, 10, 15),
                    ("Standing Calf Raise", 2, 10, 15),
                ],
            },
            DayData {
                name: "Upper B",
                target_muscles: &["front delts", "lats", "chest", "side delts"],
                exercises: &[
                    ("Overhead Press", 4, 6, 10),
                    ("Lat Pulldown", 4, 8, 12),
                    ("Dumbbell Bench Press", 3, 8, 12),
                    ("Barbell Row", 3, 8, 10),
                    ("Dumbbell Lateral Raise", 3, 12, 20),
                    ("Overhead Cable Triceps Extension", 2, 10, 15),
                    ("Dumbbell Curl", 2, 10, 15),
                ],
            },
            DayData {
                name: "Lower B",
                target_muscles: &["glutes", "quads", "hamstrings"],
                exercises: &[
                    ("Barbell Hip Thrust", 3, 8, 12),
                    ("Leg Press", 3, 10, 15),
                    ("Seated Leg Curl", 2, 10, 15),
                    ("Standing Calf Raise", 2, 12, 20),
                ],
            },
        ],
    },
    BlueprintData {
        id: "upper_lower_4_lower_focus",
        name: "Upper/Lower 4-Day (Lower Focus)",
        description: "Upper/lower split with extra leg and glute volume and maintenance work for the upper body.",
        confidence: Confidence::Emerging,
        focus_muscles: &["quads", "glutes", "hamstrings"],
        rule_ids: &["regional_specialization", "long_muscle_length"],
        days: &[
            DayData {
                name: "Lower A",
                target_muscles: &["quads", "hamstrings", "glutes", "calves"],
                exercises: &[
                    ("Barbell Back Squat", 4, 5, 8),
                    ("Romanian Deadlift", 4, 6, 10),
                    ("Bulgarian Split Squat", 3, 8, 12),
                    ("Seated Leg Curl", 3, 10, 15),
                    ("Standing Calf Raise", 4, 10, 15),
                    ("Hip Abduction Machine", 2, 12, 20),
                ],
            },
            DayData {
                name: "Upper A",
                target_muscles: &["chest", "upper back", "side delts"],
                exercises: &[
                    ("Barbell Bench Press", 3, 5, 8),
                    ("Barbell Row", 3, 6, 10),
                    ("Dumbbell Lateral Raise", 2, 12, 20),
                    ("Triceps Pushdown", 2, 10, 15),
                ],
            },
            DayData {
                name: "Lower B",
                target_muscles: &["glutes", "quads", "hamstrings", "calves"],
                exercises: &[
                    ("Barbell Hip Thrust", 4, 6, 10),
                    ("Leg Press", 4, 10, 15),
                    ("Lying Leg Curl", 3, 10, 15),
                    ("Leg Extension", 3, 10, 15),
                    ("Standing Calf Raise", 3, 12, 20),
                ],
            },
            DayData {
                name: "Upper B",
                target_muscles: &["front delts", "lats", "chest"],
                exercises: &[
                    ("Overhead Press", 3, 6, 10),
                    ("Lat Pulldown", 3, 8, 12),
                    ("Incline Dumbbell Press", 2, 8, 12),
                    ("Dumbbell Curl", 2, 10, 15),
                ],
            },
        ],
    },
    BlueprintData {
        id: "push_pull_legs_6",
        name: "Push/Pull/Legs 6-Day",
        description: "Push, pull and leg sessions, each run twice per week.",
        confidence: Confidence::Emerging,
        focus_muscles: &[],
        rule_ids: &["twice_weekly_frequency", "weekly_volume", "high_frequency_splits"],
        days: &[
            DayData {
                name: "Push A",
                target_muscles: &["chest", "front delts", "triceps", "side delts"],
                exercises: &[
                    ("Barbell Bench Press", 4, 5, 8),
                    ("Overhead Press", 3, 6, 10),
                    ("Incline Dumbbell Press", 3, 8, 12),
                    ("Dumbbell Lateral Raise", 3, 12, 20),
                    ("Triceps Pushdown", 3, 10, 15),
                ],
            },
            DayData {
                name: "Pull A",
                target_muscles: &["lats", "upper back", "rear delts", "biceps"],
                exercises: &[
                    ("Pull-Up", 4, 6, 10),
                    ("Barbell Row", 3, 6, 10),
                    ("Seated Cable Row", 3, 10, 12),
                    ("Cable Face Pull", 3, 12, 20),
                    ("Dumbbell Curl", 3, 10, 15),
                ],
            },
            DayData {
                name: "Legs A",
                target_muscles: &["quads", "hamstrings", "glutes", "calves"],
                exercises: &[
                    ("Barbell Back Squat", 4, 5, 8),
                    ("Romanian Deadlift", 3, 6, 10),
                    ("Leg Extension", 3, 10, 15),
                    ("Seated Leg Curl", 3, 10, 15),
                    ("Standing Calf Raise", 4, 10, 15),
                ],
            },
            DayData {
                name: "Push B",
                target_muscles: &["front delts", "chest", "side delts", "triceps"],
                exercises: &[
                    ("Overhead Press", 4, 5, 8),
                    ("Dumbbell Bench Press", 3, 8, 12),
                    ("Cable Fly", 3, 12, 15),
                    ("Dumbbell Lateral Raise", 4, 12, 20),
                    ("Overhead Cable Triceps Extension", 3, 10, 15),
                ],
            },
            DayData {
                name: "Pull B",
                target_muscles: &["lats", "upper back", "biceps", "rear delts"],
                exercises: &[
                    ("Lat Pulldown", 4, 8, 12),
                    ("Chest-Supported Dumbbell Row", 3, 8, 12),
                    ("Cable Face Pull", 3, 12, 20),
                    ("Dumbbell Hammer Curl", 3, 10, 15),
                    ("Cable Curl", 2, 12, 15),
                ],
            },
            DayData {
                name: "Legs B",
                target_muscles: &["glutes", "quads", "hamstrings", "calves"],
                exercises: &[
                    ("Barbell Hip Thrust", 4, 6, 10),
                    ("Leg Press", 3, 10, 15),
                    ("Bulgarian Split Squat", 3, 8, 12),
                    ("Lying Leg Curl", 3, 10, 15),
                    ("Standing Calf Raise", 3, 12, 20),
                ],
            },
        ],
    },
];
