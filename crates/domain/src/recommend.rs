use log::debug;

use crate::{
    EquipmentProfile, Experience, Focus, ProgramDesignAnswers, Region, Resolver, SessionLength,
    TemplateBlueprint, is_compatible, normalize,
    weights::{
        BEGINNER_HIGH_FREQUENCY_PENALTY, BEGINNER_MAX_DAYS, COMPATIBLE_FIT_WEIGHT,
        DAY_MATCH_BASE, DAY_MISMATCH_PENALTY, EVIDENCE_BONUS, EXACT_DAY_BONUS,
        FOCUS_KEYWORD_BONUS, FULL_GYM_FIT, MATCHING_FOCUS_BONUS, OPPOSITE_FOCUS_PENALTY,
        RECOVERABLE_FIT_WEIGHT, SHORT_SESSION_HIGH_FREQUENCY_PENALTY, SHORT_SESSION_MAX_DAYS,
        UNWANTED_SPECIALIZATION_PENALTY,
    },
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TemplateScore {
    pub days: i32,
    pub exact_days: i32,
    pub evidence: i32,
    pub focus: i32,
    pub experience: i32,
    pub session: i32,
    pub equipment_fit: i32,
}

impl TemplateScore {
    #[must_use]
    pub fn total(&self) -> i32 {
        self.days
            + self.exact_days
            + self.evidence
            + self.focus
            + self.experience
            + self.session
            + self.equipment_fit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation<'a> {
    pub index: usize,
    pub template: &'a TemplateBlueprint,
    pub score: TemplateScore,
}

#[must_use]
pub fn score(
    template: &TemplateBlueprint,
    answers: &ProgramDesignAnswers,
    resolver: &Resolver,
) -> TemplateScore {
    let day_difference =
        (i32::from(template.days_per_week) - i32::from(*answers.days_per_week)).abs();
    TemplateScore {
        days: (DAY_MATCH_BASE - DAY_MISMATCH_PENALTY * day_difference).max(0),
        exact_days: if day_difference == 0 {
            EXACT_DAY_BONUS
        } else {
            0
        },
        evidence: if template.confidence.is_evidence_backed() {
            EVIDENCE_BONUS
        } else {
            0
        },
        focus: focus_score(template, answers.focus),
        experience: if answers.experience == Experience::Beginner
            && template.days_per_week > BEGINNER_MAX_DAYS
        {
            BEGINNER_HIGH_FREQUENCY_PENALTY
        } else {
            0
        },
        session: if answers.session_length == SessionLength::Short
            && template.days_per_week > SHORT_SESSION_MAX_DAYS
        {
            SHORT_SESSION_HIGH_FREQUENCY_PENALTY
        } else {
            0
        },
        equipment_fit: equipment_fit_score(template, answers.equipment, resolver),
    }
}

#[must_use]
pub fn focus_score(template: &TemplateBlueprint, focus: Focus) -> i32 {
    let specialization = template.specialization();
    let Some(wanted) = focus.region() else {
        return if specialization.is_some() {
            UNWANTED_SPECIALIZATION_PENALTY
        } else {
            0
        };
    };

    let mut score = match specialization {
        Some(region) if region == wanted => MATCHING_FOCUS_BONUS,
        Some(_) => OPPOSITE_FOCUS_PENALTY,
        None => 0,
    };
    let keyword = match wanted {
        Region::Upper => "upper",
        Region::Lower => "lower",
    };
    if normalize(&template.name).contains(keyword) || normalize(&template.id).contains(keyword) {
        score += FOCUS_KEYWORD_BONUS;
    }
    score
}

/// How well the template can be run with the given equipment, from 0 to 24.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn equipment_fit_score(
    template: &TemplateBlueprint,
    equipment: EquipmentProfile,
    resolver: &Resolver,
) -> i32 {
    if !equipment.is_restrictive() {
        return FULL_GYM_FIT;
    }

    let (total, compatible, recoverable) = template.exercises().fold(
        (0_u32, 0_u32, 0_u32),
        |(total, compatible, recoverable), e| {
            if is_compatible(&e.name, equipment) {
                (total + 1, compatible + 1, recoverable)
            } else if resolver.is_recoverable(&e.name, equipment) {
                (total + 1, compatible, recoverable + 1)
            } else {
                (total + 1, compatible, recoverable)
            }
        },
    );

    if total == 0 {
        return 0;
    }

    let total = f64::from(total);
    (f64::from(compatible) / total * COMPATIBLE_FIT_WEIGHT
        + f64::from(recoverable) / total * RECOVERABLE_FIT_WEIGHT)
        .round() as i32
}

/// Scores of all templates in input order.
#[must_use]
pub fn rank<'a>(
    templates: &'a [TemplateBlueprint],
    answers: &ProgramDesignAnswers,
    resolver: &Resolver,
) -> Vec<Recommendation<'a>> {
    templates
        .iter()
        .enumerate()
        .map(|(index, template)| Recommendation {
            index,
            template,
            score: score(template, answers, resolver),
        })
        .collect()
}

/// Template with the highest total score. Equal scores resolve to the first listed template.
#[must_use]
pub fn recommend<'a>(
    templates: &'a [TemplateBlueprint],
    answers: &ProgramDesignAnswers,
    resolver: &Resolver,
) -> Option<Recommendation<'a>> {
    let best = rank(templates, answers, resolver)
        .into_iter()
        .fold(None, |best: Option<Recommendation<'a>>, candidate| match best {
            Some(b) if b.score.total() >= candidate.score.total() => Some(b),
            _ => Some(candidate),
        });
    if let Some(best) = &best {
        debug!(
            "recommending \"{}\" with score {}",
            best.template.id,
            best.score.total()
        );
    }
    best
}
