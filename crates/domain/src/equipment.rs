use std::sync::LazyLock;

use regex::Regex;
use strum::{AsRefStr, Display, EnumString};

use crate::normalize;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentTier {
    Barbell,
    Cable,
    Machine,
    Dumbbells,
    Bodyweight,
    Unknown,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, AsRefStr, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum EquipmentProfile {
    #[default]
    #[strum(to_string = "full_gym")]
    FullGym,
    #[strum(
        to_string = "dumbbell_only",
        serialize = "dumbbells_only",
        serialize = "home_dumbbells"
    )]
    DumbbellOnly,
}

impl EquipmentProfile {
    #[must_use]
    pub fn accepts(self, tier: EquipmentTier) -> bool {
        match self {
            EquipmentProfile::FullGym => true,
            EquipmentProfile::DumbbellOnly => {
                matches!(tier, EquipmentTier::Dumbbells | EquipmentTier::Bodyweight)
            }
        }
    }

    #[must_use]
    pub fn is_restrictive(self) -> bool {
        self != EquipmentProfile::FullGym
    }
}

static BODYWEIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(push ?ups?|pull ?ups?|chin ?ups?|dips?|plank|hanging|ab wheel|russian twist)\b")
        .expect("valid bodyweight pattern")
});

/// Movements whose names do not mention their equipment. More specific keys come first.
/// Keys match regardless of spacing, so "T-Bar Row" and "Step Up" hit "t bar row" and "step up".
const TIER_HINTS: [(&str, EquipmentTier); 26] = [
    ("romanian deadlift", EquipmentTier::Barbell),
    ("stiff leg deadlift", EquipmentTier::Barbell),
    ("deadlift", EquipmentTier::Barbell),
    ("hack squat", EquipmentTier::Machine),
    ("bulgarian split squat", EquipmentTier::Dumbbells),
    ("split squat", EquipmentTier::Dumbbells),
    ("front squat", EquipmentTier::Barbell),
    ("back squat", EquipmentTier::Barbell),
    ("hip thrust", EquipmentTier::Barbell),
    ("good morning", EquipmentTier::Barbell),
    ("bench press", EquipmentTier::Barbell),
    ("overhead press", EquipmentTier::Barbell),
    ("military press", EquipmentTier::Barbell),
    ("bent over row", EquipmentTier::Barbell),
    ("t bar row", EquipmentTier::Machine),
    ("seated row", EquipmentTier::Cable),
    ("face pull", EquipmentTier::Cable),
    ("leg press", EquipmentTier::Machine),
    ("leg extension", EquipmentTier::Machine),
    ("leg curl", EquipmentTier::Machine),
    ("calf raise", EquipmentTier::Machine),
    ("hip abduction", EquipmentTier::Machine),
    ("lateral raise", EquipmentTier::Dumbbells),
    ("rear delt fly", EquipmentTier::Dumbbells),
    ("lunge", EquipmentTier::Dumbbells),
    ("step up", EquipmentTier::Dumbbells),
];

#[must_use]
pub fn infer_tier(name: &str) -> EquipmentTier {
    let name = normalize(name);
    let has = |tokens: &[&str]| tokens.iter().any(|t| name.contains(t));

    if has(&["barbell"]) {
        EquipmentTier::Barbell
    } else if has(&["cable", "pulldown", "pushdown"]) {
        EquipmentTier::Cable
    } else if has(&["machine", "pec deck"]) {
        EquipmentTier::Machine
    } else if has(&["dumbbell", "arnold", "goblet"]) {
        EquipmentTier::Dumbbells
    } else if BODYWEIGHT_PATTERN.is_match(&name) {
        EquipmentTier::Bodyweight
    } else {
        let compact = name.replace(' ', "");
        TIER_HINTS
            .iter()
            .find(|(hint, _)| compact.contains(&hint.replace(' ', "")))
            .map_or(EquipmentTier::Unknown, |(_, tier)| *tier)
    }
}

#[must_use]
pub fn is_compatible(name: &str, equipment: EquipmentProfile) -> bool {
    equipment.accepts(infer_tier(name))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Barbell Back Squat", EquipmentTier::Barbell)]
    #[case("Barbell Hip Thrust", EquipmentTier::Barbell)]
    #[case("Lat Pulldown", EquipmentTier::Cable)]
    #[case("Triceps Pushdown", EquipmentTier::Cable)]
    #[case("Cable Lateral Raise", EquipmentTier::Cable)]
    #[case("Pec Deck", EquipmentTier::Machine)]
    #[case("Smith Machine Squat", EquipmentTier::Machine)]
    #[case("Machine-Assisted Pull-Up", EquipmentTier::Machine)]
    #[case("Dumbbell Bench Press", EquipmentTier::Dumbbells)]
    #[case("Arnold Press", EquipmentTier::Dumbbells)]
    #[case("Goblet Squat", EquipmentTier::Dumbbells)]
    #[case("Push-Up", EquipmentTier::Bodyweight)]
    #[case("Weighted Pull Up", EquipmentTier::Bodyweight)]
    #[case("Chin-ups", EquipmentTier::Bodyweight)]
    #[case("Parallel Bar Dips", EquipmentTier::Bodyweight)]
    #[case("Side Plank", EquipmentTier::Bodyweight)]
    #[case("Hanging Leg Raise", EquipmentTier::Bodyweight)]
    #[case("Ab Wheel Rollout", EquipmentTier::Bodyweight)]
    #[case("Russian Twist", EquipmentTier::Bodyweight)]
    #[case("Romanian Deadlift", EquipmentTier::Barbell)]
    #[case("Leg Press", EquipmentTier::Machine)]
    #[case("Lateral Raise", EquipmentTier::Dumbbells)]
    #[case("Bulgarian Split Squat", EquipmentTier::Dumbbells)]
    #[case("Walking Lunge", EquipmentTier::Dumbbells)]
    #[case("Hack Squat", EquipmentTier::Machine)]
    #[case("T-Bar Row", EquipmentTier::Machine)]
    #[case("Stiff-Leg Deadlift", EquipmentTier::Barbell)]
    #[case("Step-Up", EquipmentTier::Dumbbells)]
    #[case("Diptych Curl", EquipmentTier::Unknown)]
    #[case("Nordic Curl", EquipmentTier::Unknown)]
    #[case("", EquipmentTier::Unknown)]
    fn test_infer_tier(#[case] name: &str, #[case] expected: EquipmentTier) {
        assert_eq!(infer_tier(name), expected);
    }

    #[rstest]
    #[case("Barbell Back Squat")]
    #[case("Nordic Curl")]
    #[case("qwzx 123 !!")]
    #[case("")]
    fn test_full_gym_accepts_everything(#[case] name: &str) {
        assert!(is_compatible(name, EquipmentProfile::FullGym));
    }

    #[rstest]
    #[case("Goblet Squat", true)]
    #[case("Push-Up", true)]
    #[case("Barbell Row", false)]
    #[case("Cable Fly", false)]
    #[case("Leg Press", false)]
    #[case("Nordic Curl", false)]
    fn test_dumbbell_only_compatibility(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_compatible(name, EquipmentProfile::DumbbellOnly), expected);
    }

    #[rstest]
    #[case("full_gym", EquipmentProfile::FullGym)]
    #[case("dumbbell_only", EquipmentProfile::DumbbellOnly)]
    #[case("dumbbells_only", EquipmentProfile::DumbbellOnly)]
    #[case("home_dumbbells", EquipmentProfile::DumbbellOnly)]
    #[case("Dumbbell_Only", EquipmentProfile::DumbbellOnly)]
    fn test_equipment_profile_from_str(#[case] value: &str, #[case] expected: EquipmentProfile) {
        assert_eq!(value.parse::<EquipmentProfile>(), Ok(expected));
    }

    #[test]
    fn test_equipment_profile_display_is_canonical() {
        assert_eq!(
            "home_dumbbells"
                .parse::<EquipmentProfile>()
                .map(|e| e.to_string()),
            Ok("dumbbell_only".to_string())
        );
        assert_eq!(EquipmentProfile::FullGym.to_string(), "full_gym");
    }
}
