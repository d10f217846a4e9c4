//! Tuning constants of the ordering and recommendation heuristics.

// Day exercise order
pub const MIN_KNOWN_COVERAGE: f64 = 0.6;
pub const MUSCLE_PRIORITY_WEIGHT: f64 = 4.0;
pub const SKILL_WEIGHT: f64 = 3.0;
pub const FATIGUE_WEIGHT: f64 = 2.0;
pub const STABILITY_WEIGHT: f64 = 1.0;
pub const INTENSITY_WEIGHT: f64 = 0.5;
pub const UNKNOWN_PROFILE_SCORE: f64 = -1.0;
pub const PRIMARY_MUSCLE_SLOTS: usize = 4;
pub const SECONDARY_MUSCLE_SLOTS: usize = 2;
pub const PRIMARY_FOCUS_BONUS: f64 = 2.0;
pub const SECONDARY_FOCUS_BONUS: f64 = 1.0;
pub const HEAVY_REP_MAX: u8 = 6;
pub const MODERATE_REP_MAX: u8 = 10;

// Template recommendation
pub const DAY_MATCH_BASE: i32 = 40;
pub const DAY_MISMATCH_PENALTY: i32 = 10;
pub const EXACT_DAY_BONUS: i32 = 20;
pub const EVIDENCE_BONUS: i32 = 15;
pub const UNWANTED_SPECIALIZATION_PENALTY: i32 = -25;
pub const MATCHING_FOCUS_BONUS: i32 = 35;
pub const OPPOSITE_FOCUS_PENALTY: i32 = -20;
pub const FOCUS_KEYWORD_BONUS: i32 = 8;
pub const BEGINNER_MAX_DAYS: u8 = 5;
pub const BEGINNER_HIGH_FREQUENCY_PENALTY: i32 = -8;
pub const SHORT_SESSION_MAX_DAYS: u8 = 4;
pub const SHORT_SESSION_HIGH_FREQUENCY_PENALTY: i32 = -6;
pub const FULL_GYM_FIT: i32 = 24;
pub const COMPATIBLE_FIT_WEIGHT: f64 = 20.0;
pub const RECOVERABLE_FIT_WEIGHT: f64 = 10.0;

// Guided builder
pub const MIN_SETS: u8 = 1;
pub const MAX_SETS: u8 = 6;
pub const SHORT_SESSION_MIN_EXERCISES: usize = 4;
pub const SHORT_SESSION_MAX_REMOVALS: usize = 2;
pub const LONG_SESSION_MAX_EXERCISES: usize = 6;
pub const PROTECTED_SLOTS: usize = 2;
