use log::debug;

use crate::{
    ExerciseProfile, Muscle, ProfileRegistry, TemplateDay, TemplateExercise,
    weights::{
        FATIGUE_WEIGHT, HEAVY_REP_MAX, INTENSITY_WEIGHT, MIN_KNOWN_COVERAGE, MODERATE_REP_MAX,
        MUSCLE_PRIORITY_WEIGHT, PRIMARY_FOCUS_BONUS, PRIMARY_MUSCLE_SLOTS, SECONDARY_FOCUS_BONUS,
        SECONDARY_MUSCLE_SLOTS, SKILL_WEIGHT, STABILITY_WEIGHT, UNKNOWN_PROFILE_SCORE,
    },
};

/// Fraction of exercises with a known profile.
#[must_use]
pub fn known_coverage(exercises: &[TemplateExercise], registry: &ProfileRegistry) -> f64 {
    if exercises.is_empty() {
        return 0.0;
    }
    let known = exercises
        .iter()
        .filter(|e| registry.lookup(&e.name).is_some())
        .count();
    ratio(known, exercises.len())
}

/// Reorders the exercises of a day so that heavy, skill-demanding work on the day's main
/// muscles comes first. Days with too few known exercises keep their order.
#[must_use]
pub fn optimize_order(
    day: &TemplateDay,
    focus_muscles: &[Muscle],
    registry: &ProfileRegistry,
) -> Vec<TemplateExercise> {
    let coverage = known_coverage(&day.exercises, registry);
    if coverage < MIN_KNOWN_COVERAGE {
        debug!(
            "keeping order of \"{}\" (known coverage {coverage:.2})",
            day.name
        );
        return day.exercises.clone();
    }

    let mut scored = day
        .exercises
        .iter()
        .map(|e| {
            let score = registry.lookup(&e.name).map_or(UNKNOWN_PROFILE_SCORE, |p| {
                exercise_score(e, p, &day.target_muscles, focus_muscles)
            });
            (score, e)
        })
        .collect::<Vec<_>>();
    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    scored.into_iter().map(|(_, e)| e.clone()).collect()
}

#[must_use]
pub fn exercise_score(
    exercise: &TemplateExercise,
    profile: &ExerciseProfile,
    target_muscles: &[Muscle],
    focus_muscles: &[Muscle],
) -> f64 {
    muscle_priority(profile, target_muscles, focus_muscles) * MUSCLE_PRIORITY_WEIGHT
        + f64::from(profile.skill_demand.rank()) * SKILL_WEIGHT
        + f64::from(profile.fatigue_cost.rank()) * FATIGUE_WEIGHT
        + f64::from(profile.stability_requirement.inverse_rank()) * STABILITY_WEIGHT
        + intensity_bucket(exercise.rep_min) * INTENSITY_WEIGHT
}

#[must_use]
pub fn muscle_priority(
    profile: &ExerciseProfile,
    target_muscles: &[Muscle],
    focus_muscles: &[Muscle],
) -> f64 {
    let slot_weight = |muscle: &Muscle, slots: usize| {
        target_muscles
            .iter()
            .position(|m| m == muscle)
            .map_or(0.0, |i| slot_value(slots.saturating_sub(i)))
    };

    let mut priority = slot_weight(&profile.primary_muscle, PRIMARY_MUSCLE_SLOTS);
    if focus_muscles.contains(&profile.primary_muscle) {
        priority += PRIMARY_FOCUS_BONUS;
    }
    if let Some(secondary) = &profile.secondary_muscle {
        priority += slot_weight(secondary, SECONDARY_MUSCLE_SLOTS);
        if focus_muscles.contains(secondary) {
            priority += SECONDARY_FOCUS_BONUS;
        }
    }
    priority
}

#[must_use]
pub fn intensity_bucket(rep_min: u8) -> f64 {
    if rep_min <= HEAVY_REP_MAX {
        3.0
    } else if rep_min <= MODERATE_REP_MAX {
        2.0
    } else {
        1.0
    }
}

fn slot_value(slots: usize) -> f64 {
    f64::from(u32::try_from(slots).unwrap_or(u32::MAX))
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, total: usize) -> f64 {
    part as f64 / total as f64
}
