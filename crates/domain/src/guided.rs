use std::{collections::HashSet, sync::LazyLock};

use log::debug;
use regex::Regex;

use crate::{
    DayKind, EquipmentProfile, Experience, Focus, GuidedTemplate, NormalizedName,
    ProgramDesignAnswers, Region, Resolver, SessionLength, TemplateBlueprint, TemplateDay,
    TemplateExercise, normalize,
    weights::{
        LONG_SESSION_MAX_EXERCISES, MAX_SETS, MIN_SETS, PROTECTED_SLOTS,
        SHORT_SESSION_MAX_REMOVALS, SHORT_SESSION_MIN_EXERCISES,
    },
};

pub const GUIDED_SUFFIX: &str = " (Guided)";

static CORE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(squats?|deadlifts?|bench|rows?|press|pull ?ups?|chin ?ups?|hip thrusts?)\b")
        .expect("valid core exercise pattern")
});

static HIGH_SKILL_BARBELL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(barbell|squats?|deadlifts?|overhead press|pull ?ups?)\b")
        .expect("valid high skill pattern")
});

struct Accessory {
    name: &'static str,
    sets: u8,
    rep_min: u8,
    rep_max: u8,
}

impl From<&Accessory> for TemplateExercise {
    fn from(value: &Accessory) -> Self {
        TemplateExercise::new(value.name, value.sets, value.rep_min, value.rep_max)
    }
}

const UPPER_ACCESSORIES: [Accessory; 4] = [
    Accessory {
        name: "Cable Face Pull",
        sets: 3,
        rep_min: 12,
        rep_max: 20,
    },
    Accessory {
        name: "Dumbbell Lateral Raise",
        sets: 3,
        rep_min: 12,
        rep_max: 20,
    },
    Accessory {
        name: "Dumbbell Hammer Curl",
        sets: 2,
        rep_min: 10,
        rep_max: 15,
    },
    Accessory {
        name: "Overhead Cable Triceps Extension",
        sets: 2,
        rep_min: 10,
        rep_max: 15,
    },
];

const LOWER_ACCESSORIES: [Accessory; 3] = [
    Accessory {
        name: "Standing Calf Raise",
        sets: 3,
        rep_min: 10,
        rep_max: 15,
    },
    Accessory {
        name: "Seated Leg Curl",
        sets: 2,
        rep_min: 10,
        rep_max: 15,
    },
    Accessory {
        name: "Hanging Leg Raise",
        sets: 2,
        rep_min: 10,
        rep_max: 15,
    },
];

const FULL_ACCESSORIES: [Accessory; 3] = [
    Accessory {
        name: "Dumbbell Lateral Raise",
        sets: 2,
        rep_min: 12,
        rep_max: 20,
    },
    Accessory {
        name: "Standing Calf Raise",
        sets: 2,
        rep_min: 10,
        rep_max: 15,
    },
    Accessory {
        name: "Hanging Leg Raise",
        sets: 2,
        rep_min: 10,
        rep_max: 15,
    },
];

fn accessories(kind: DayKind) -> &'static [Accessory] {
    match kind {
        DayKind::Upper => &UPPER_ACCESSORIES,
        DayKind::Lower => &LOWER_ACCESSORIES,
        DayKind::Full => &FULL_ACCESSORIES,
    }
}

/// Exercises in the first two slots and the main lifts are never trimmed.
#[must_use]
pub fn is_core_exercise(slot: usize, name: &str) -> bool {
    slot < PROTECTED_SLOTS || CORE_PATTERN.is_match(&normalize(name))
}

/// Personalizes a blueprint without modifying it.
///
/// The day count is kept. A day can lose exercises: short sessions trim accessories, and an
/// entry whose resolved name is already used in the same day is dropped (see
/// [`apply_equipment`]), e.g. a day listing "Leg Press" twice without known substitutions.
#[must_use]
pub fn build(
    template: &TemplateBlueprint,
    answers: &ProgramDesignAnswers,
    resolver: &Resolver,
) -> GuidedTemplate {
    let mut days = template.days.clone();
    for day in &mut days {
        apply_session_length(day, answers.session_length);
        adjust_sets(day, answers);
        apply_equipment(day, answers.equipment, resolver);
    }
    GuidedTemplate {
        source_id: template.id.clone(),
        name: format!("{}{GUIDED_SUFFIX}", template.name),
        description: describe(template, answers),
        days_per_week: template.days_per_week,
        confidence: template.confidence,
        focus_muscles: template.focus_muscles.clone(),
        answers: *answers,
        days,
    }
}

pub fn apply_session_length(day: &mut TemplateDay, session_length: SessionLength) {
    match session_length {
        SessionLength::Moderate => {}
        SessionLength::Short => shorten(day),
        SessionLength::Long => lengthen(day),
    }
}

fn shorten(day: &mut TemplateDay) {
    let mut removed = 0;
    while day.exercises.len() > SHORT_SESSION_MIN_EXERCISES && removed < SHORT_SESSION_MAX_REMOVALS
    {
        let Some(slot) = (0..day.exercises.len())
            .rev()
            .find(|i| !is_core_exercise(*i, &day.exercises[*i].name))
        else {
            break;
        };
        let exercise = day.exercises.remove(slot);
        debug!("removed \"{}\" from \"{}\"", exercise.name, day.name);
        removed += 1;
    }

    for (slot, exercise) in day.exercises.iter_mut().enumerate() {
        if !is_core_exercise(slot, &exercise.name) {
            exercise.sets = exercise.sets.saturating_sub(1);
        }
    }
}

fn lengthen(day: &mut TemplateDay) {
    if day.exercises.len() <= LONG_SESSION_MAX_EXERCISES {
        let present = day
            .exercises
            .iter()
            .map(|e| NormalizedName::new(&e.name))
            .collect::<HashSet<_>>();
        if let Some(accessory) = accessories(day.kind())
            .iter()
            .find(|a| !present.contains(&NormalizedName::new(a.name)))
        {
            day.exercises.push(accessory.into());
        }
    }

    if let Some(first) = day.exercises.first_mut() {
        first.sets = first.sets.saturating_add(1).min(MAX_SETS);
    }
}

pub fn adjust_sets(day: &mut TemplateDay, answers: &ProgramDesignAnswers) {
    let kind = day.kind();
    for (slot, exercise) in day.exercises.iter_mut().enumerate() {
        let mut sets = exercise.sets;

        if answers.experience == Experience::Beginner && sets > 2 {
            sets -= 1;
        }

        match (answers.focus.region(), kind) {
            (Some(Region::Upper), DayKind::Upper) | (Some(Region::Lower), DayKind::Lower)
                if slot < 2 =>
            {
                sets = sets.saturating_add(1);
            }
            (Some(Region::Upper), DayKind::Lower) | (Some(Region::Lower), DayKind::Upper)
                if slot >= 2 && sets > 1 =>
            {
                sets -= 1;
            }
            _ => {}
        }

        if answers.equipment == EquipmentProfile::DumbbellOnly
            && sets > 2
            && HIGH_SKILL_BARBELL_PATTERN.is_match(&normalize(&exercise.name))
        {
            sets -= 1;
        }

        exercise.sets = sets.clamp(MIN_SETS, MAX_SETS);
    }
}

/// Replaces exercises the equipment profile cannot support. Each resolved name is used at most
/// once per day; entries that cannot be made unique are dropped.
pub fn apply_equipment(day: &mut TemplateDay, equipment: EquipmentProfile, resolver: &Resolver) {
    let mut used = HashSet::new();
    let mut exercises = Vec::with_capacity(day.exercises.len());
    for mut exercise in std::mem::take(&mut day.exercises) {
        let resolved = resolver.resolve(&exercise.name, equipment, &used);
        if !used.insert(NormalizedName::new(&resolved)) {
            debug!(
                "dropped \"{}\" from \"{}\" as \"{resolved}\" is already used",
                exercise.name, day.name
            );
            continue;
        }
        exercise.name = resolved;
        exercises.push(exercise);
    }
    day.exercises = exercises;
}

#[must_use]
pub fn describe(template: &TemplateBlueprint, answers: &ProgramDesignAnswers) -> String {
    let focus = match answers.focus {
        Focus::None => "balanced muscle emphasis",
        Focus::Upper => "extra upper body volume",
        Focus::Lower => "extra lower body volume",
    };
    let session = match answers.session_length {
        SessionLength::Short => "shorter sessions with trimmed accessories",
        SessionLength::Moderate => "standard session length",
        SessionLength::Long => "longer sessions with an added accessory",
    };
    let experience = match answers.experience {
        Experience::Beginner => "a beginner",
        Experience::Intermediate => "an intermediate lifter",
        Experience::Advanced => "an advanced lifter",
    };
    let equipment = match answers.equipment {
        EquipmentProfile::FullGym => "using a full gym",
        EquipmentProfile::DumbbellOnly => "using dumbbells and bodyweight only",
    };
    format!(
        "Personalized from {} for {experience}: {focus}, {session}, {equipment}.",
        template.name
    )
}
