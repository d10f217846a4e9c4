use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use log::debug;

use crate::{EquipmentProfile, NormalizedName, ProfileRegistry, is_compatible, normalize};

type FallbackTable = HashMap<String, &'static [&'static str]>;

const DUMBBELL_ONLY_FALLBACKS: &[(&str, &[&str])] = &[
    ("barbell back squat", &["Goblet Squat", "Bulgarian Split Squat", "Dumbbell Lunge"]),
    ("back squat", &["Goblet Squat", "Bulgarian Split Squat"]),
    ("barbell front squat", &["Goblet Squat", "Dumbbell Front Squat"]),
    ("front squat", &["Goblet Squat", "Dumbbell Front Squat"]),
    ("hack squat", &["Goblet Squat", "Bulgarian Split Squat"]),
    ("leg press", &["Goblet Squat", "Bulgarian Split Squat"]),
    ("leg extension", &["Dumbbell Step-Up", "Goblet Squat"]),
    ("leg curl", &["Dumbbell Romanian Deadlift", "Dumbbell Hamstring Curl"]),
    ("seated leg curl", &["Dumbbell Romanian Deadlift", "Dumbbell Hamstring Curl"]),
    ("lying leg curl", &["Dumbbell Hamstring Curl", "Dumbbell Romanian Deadlift"]),
    ("romanian deadlift", &["Dumbbell Romanian Deadlift", "Single-Leg Dumbbell Romanian Deadlift"]),
    ("barbell romanian deadlift", &["Dumbbell Romanian Deadlift"]),
    ("deadlift", &["Dumbbell Romanian Deadlift", "Dumbbell Deadlift"]),
    ("conventional deadlift", &["Dumbbell Deadlift", "Dumbbell Romanian Deadlift"]),
    ("hip thrust", &["Dumbbell Hip Thrust", "Dumbbell Glute Bridge"]),
    ("barbell hip thrust", &["Dumbbell Hip Thrust"]),
    ("standing calf raise", &["Dumbbell Calf Raise"]),
    ("calf raise", &["Dumbbell Calf Raise"]),
    ("bench press", &["Dumbbell Bench Press", "Push-Up"]),
    ("barbell bench press", &["Dumbbell Bench Press", "Push-Up"]),
    ("incline bench press", &["Incline Dumbbell Press", "Dumbbell Bench Press"]),
    ("barbell incline bench press", &["Incline Dumbbell Press"]),
    ("machine chest press", &["Dumbbell Bench Press", "Push-Up"]),
    ("cable fly", &["Dumbbell Fly"]),
    ("pec deck", &["Dumbbell Fly"]),
    ("overhead press", &["Dumbbell Shoulder Press", "Arnold Press"]),
    ("barbell overhead press", &["Dumbbell Shoulder Press", "Arnold Press"]),
    ("cable lateral raise", &["Dumbbell Lateral Raise"]),
    ("lateral raise", &["Dumbbell Lateral Raise"]),
    ("face pull", &["Dumbbell Rear Delt Fly"]),
    ("cable face pull", &["Dumbbell Rear Delt Fly"]),
    ("reverse pec deck", &["Dumbbell Rear Delt Fly"]),
    ("barbell row", &["One-Arm Dumbbell Row", "Chest-Supported Dumbbell Row"]),
    ("bent over row", &["One-Arm Dumbbell Row", "Chest-Supported Dumbbell Row"]),
    ("barbell bent over row", &["One-Arm Dumbbell Row", "Chest-Supported Dumbbell Row"]),
    ("t bar row", &["Chest-Supported Dumbbell Row", "One-Arm Dumbbell Row"]),
    ("seated cable row", &["Chest-Supported Dumbbell Row", "One-Arm Dumbbell Row"]),
    ("lat pulldown", &["Pull-Up", "Dumbbell Pullover"]),
    ("straight arm pulldown", &["Dumbbell Pullover"]),
    ("triceps pushdown", &["Dumbbell Overhead Triceps Extension", "Bench Dips"]),
    ("overhead cable triceps extension", &["Dumbbell Overhead Triceps Extension"]),
    ("cable curl", &["Dumbbell Curl", "Dumbbell Hammer Curl"]),
    ("barbell curl", &["Dumbbell Curl"]),
    ("ez bar curl", &["Dumbbell Curl"]),
    ("cable crunch", &["Plank", "Hanging Leg Raise"]),
    ("hip abduction machine", &["Dumbbell Lateral Lunge"]),
];

static DUMBBELL_ONLY: LazyLock<FallbackTable> = LazyLock::new(|| {
    DUMBBELL_ONLY_FALLBACKS
        .iter()
        .map(|(name, replacements)| (compact(name), *replacements))
        .collect()
});

/// Table key of a name. Spacing is ignored, so "T-Bar Row" and "T Bar Row" share a key.
fn compact(name: &str) -> String {
    normalize(name).replace(' ', "")
}

/// Static replacements for an exercise under an equipment profile.
#[must_use]
pub fn fallbacks(equipment: EquipmentProfile, name: &str) -> &'static [&'static str] {
    let table = match equipment {
        EquipmentProfile::FullGym => return &[],
        EquipmentProfile::DumbbellOnly => &*DUMBBELL_ONLY,
    };
    table.get(&compact(name)).copied().unwrap_or_default()
}

/// Finds replacements for exercises that the equipment profile does not support or that are
/// already used in the same day.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a ProfileRegistry,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(registry: &'a ProfileRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &'a ProfileRegistry {
        self.registry
    }

    /// Returns `name` itself if it is compatible and unused, else the best replacement. If no
    /// replacement exists, `name` is returned unchanged.
    ///
    /// `used` contains normalized names. Each name is expanded at most once, so the search
    /// terminates on cyclic substitution graphs.
    #[must_use]
    pub fn resolve(
        &self,
        name: &str,
        equipment: EquipmentProfile,
        used: &HashSet<NormalizedName>,
    ) -> String {
        let mut visited = HashSet::new();
        let resolved = self.resolve_with(name, equipment, used, &mut visited);
        if resolved != name {
            debug!("substituted \"{name}\" by \"{resolved}\" ({equipment})");
        }
        resolved
    }

    fn resolve_with(
        &self,
        name: &str,
        equipment: EquipmentProfile,
        used: &HashSet<NormalizedName>,
        visited: &mut HashSet<NormalizedName>,
    ) -> String {
        let is_unused = |n: &str| !used.contains(&NormalizedName::new(n));
        let is_available = |n: &str| is_compatible(n, equipment) && is_unused(n);

        if is_available(name) {
            return name.to_string();
        }

        if !visited.insert(NormalizedName::new(name)) {
            return name.to_string();
        }

        let candidates = self.candidates(name, equipment);

        for candidate in &candidates {
            if is_available(candidate.as_str()) {
                return candidate.clone();
            }
            let resolved = self.resolve_with(candidate, equipment, used, visited);
            if is_available(resolved.as_str()) {
                return resolved;
            }
        }

        if let Some(candidate) = candidates.iter().find(|c| is_unused(c.as_str())) {
            debug!("no compatible substitute for \"{name}\", falling back to \"{candidate}\"");
            return candidate.clone();
        }

        if !candidates.is_empty() {
            debug!("all substitutes for \"{name}\" are already used");
        }

        name.to_string()
    }

    /// Profile substitutions followed by the static fallbacks of the equipment profile.
    #[must_use]
    pub fn candidates(&self, name: &str, equipment: EquipmentProfile) -> Vec<String> {
        self.registry
            .lookup(name)
            .map(|p| p.substitutions.clone())
            .unwrap_or_default()
            .into_iter()
            .chain(fallbacks(equipment, name).iter().map(ToString::to_string))
            .collect()
    }

    /// True if `name` is incompatible with the equipment profile but can be replaced by a
    /// compatible exercise.
    #[must_use]
    pub fn is_recoverable(&self, name: &str, equipment: EquipmentProfile) -> bool {
        !is_compatible(name, equipment)
            && is_compatible(&self.resolve(name, equipment, &HashSet::new()), equipment)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::exercise::tests::profile;

    use super::*;

    fn used(names: &[&str]) -> HashSet<NormalizedName> {
        names.iter().map(|n| NormalizedName::new(n)).collect()
    }

    #[rstest]
    #[case(EquipmentProfile::FullGym, "Barbell Back Squat", 0)]
    #[case(EquipmentProfile::DumbbellOnly, "Barbell Back Squat", 3)]
    #[case(EquipmentProfile::DumbbellOnly, "  LAT   pulldown ", 2)]
    #[case(EquipmentProfile::DumbbellOnly, "Zercher Squat", 0)]
    #[case(EquipmentProfile::DumbbellOnly, "Bent Over Row", 2)]
    #[case(EquipmentProfile::DumbbellOnly, "Bent-Over Row", 2)]
    #[case(EquipmentProfile::DumbbellOnly, "Bentover Row", 2)]
    #[case(EquipmentProfile::DumbbellOnly, "Barbell Bent Over Row", 2)]
    #[case(EquipmentProfile::DumbbellOnly, "T Bar Row", 2)]
    #[case(EquipmentProfile::DumbbellOnly, "T-Bar Row", 2)]
    #[case(EquipmentProfile::DumbbellOnly, "TBar Row", 2)]
    fn test_fallbacks(
        #[case] equipment: EquipmentProfile,
        #[case] name: &str,
        #[case] expected: usize,
    ) {
        assert_eq!(fallbacks(equipment, name).len(), expected);
    }

    #[test]
    fn test_dumbbell_only_fallbacks_are_compatible() {
        for (name, replacements) in DUMBBELL_ONLY_FALLBACKS {
            assert_eq!(*name, NormalizedName::new(name).as_str(), "unnormalized key");
            for replacement in *replacements {
                assert!(
                    is_compatible(replacement, EquipmentProfile::DumbbellOnly),
                    "incompatible fallback \"{replacement}\" for \"{name}\""
                );
            }
        }
    }

    #[rstest]
    #[case(&[], "Goblet Squat")]
    #[case(&["goblet squat"], "Bulgarian Split Squat")]
    #[case(&["goblet squat", "bulgarian split squat"], "Dumbbell Lunge")]
    fn test_resolve_dumbbell_only_squat(#[case] used_names: &[&str], #[case] expected: &str) {
        let registry = ProfileRegistry::default();
        let resolved = Resolver::new(&registry).resolve(
            "Barbell Back Squat",
            EquipmentProfile::DumbbellOnly,
            &used(used_names),
        );
        assert_eq!(resolved, expected);
        assert!(is_compatible(&resolved, EquipmentProfile::DumbbellOnly));
    }

    #[test]
    fn test_resolve_keeps_compatible_unused_name() {
        let registry = ProfileRegistry::new([profile("Goblet Squat", "quads", &["Lunge"])]);
        assert_eq!(
            Resolver::new(&registry).resolve(
                "Goblet Squat",
                EquipmentProfile::DumbbellOnly,
                &HashSet::new()
            ),
            "Goblet Squat"
        );
    }

    #[test]
    fn test_resolve_used_name_under_full_gym() {
        let registry = ProfileRegistry::new([profile(
            "Leg Press",
            "quads",
            &["Hack Squat", "Belt Squat"],
        )]);
        assert_eq!(
            Resolver::new(&registry).resolve(
                "Leg Press",
                EquipmentProfile::FullGym,
                &used(&["leg press", "hack squat"])
            ),
            "Belt Squat"
        );
    }

    #[test]
    fn test_resolve_prefers_profile_substitutions() {
        let registry = ProfileRegistry::new([profile(
            "Barbell Back Squat",
            "quads",
            &["Dumbbell Split Squat"],
        )]);
        assert_eq!(
            Resolver::new(&registry).resolve(
                "Barbell Back Squat",
                EquipmentProfile::DumbbellOnly,
                &HashSet::new()
            ),
            "Dumbbell Split Squat"
        );
    }

    #[test]
    fn test_resolve_follows_substitution_chain() {
        let registry = ProfileRegistry::new([
            profile("Smith Machine Squat", "quads", &["Zercher Squat"]),
            profile("Zercher Squat", "quads", &["Kettlebell Front Squat", "Goblet Squat"]),
        ]);
        assert_eq!(
            Resolver::new(&registry).resolve(
                "Smith Machine Squat",
                EquipmentProfile::DumbbellOnly,
                &HashSet::new()
            ),
            "Goblet Squat"
        );
    }

    #[test]
    fn test_resolve_terminates_on_cycle() {
        let registry = ProfileRegistry::new([
            profile("Machine A", "quads", &["Machine B"]),
            profile("Machine B", "quads", &["Machine A"]),
        ]);
        let resolver = Resolver::new(&registry);
        assert_eq!(
            resolver.resolve("Machine A", EquipmentProfile::DumbbellOnly, &HashSet::new()),
            "Machine B"
        );
        assert_eq!(
            resolver.resolve(
                "Machine A",
                EquipmentProfile::DumbbellOnly,
                &used(&["machine b"])
            ),
            "Machine A"
        );
    }

    #[test]
    fn test_resolve_terminates_on_self_reference() {
        let registry = ProfileRegistry::new([profile("Cable Row", "lats", &["Cable Row"])]);
        assert_eq!(
            Resolver::new(&registry).resolve(
                "Cable Row",
                EquipmentProfile::DumbbellOnly,
                &HashSet::new()
            ),
            "Cable Row"
        );
    }

    #[test]
    fn test_resolve_without_candidates_returns_name() {
        let registry = ProfileRegistry::default();
        assert_eq!(
            Resolver::new(&registry).resolve(
                "Nordic Curl",
                EquipmentProfile::DumbbellOnly,
                &HashSet::new()
            ),
            "Nordic Curl"
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let registry = ProfileRegistry::new([
            profile("Cable Fly", "chest", &["Machine Fly", "Pec Deck"]),
            profile("Pec Deck", "chest", &["Cable Fly"]),
        ]);
        let resolver = Resolver::new(&registry);
        let first = resolver.resolve("Cable Fly", EquipmentProfile::DumbbellOnly, &HashSet::new());
        for _ in 0..10 {
            assert_eq!(
                resolver.resolve("Cable Fly", EquipmentProfile::DumbbellOnly, &HashSet::new()),
                first
            );
        }
        assert_eq!(first, "Dumbbell Fly");
    }

    #[rstest]
    #[case("Barbell Bent Over Row", "One-Arm Dumbbell Row")]
    #[case("Bent Over Row", "One-Arm Dumbbell Row")]
    #[case("Bent-Over Row", "One-Arm Dumbbell Row")]
    #[case("T Bar Row", "Chest-Supported Dumbbell Row")]
    #[case("T-Bar Row", "Chest-Supported Dumbbell Row")]
    fn test_resolve_dumbbell_only_row(#[case] name: &str, #[case] expected: &str) {
        let registry = ProfileRegistry::default();
        let resolver = Resolver::new(&registry);
        assert_eq!(
            resolver.resolve(name, EquipmentProfile::DumbbellOnly, &HashSet::new()),
            expected
        );
        assert!(resolver.is_recoverable(name, EquipmentProfile::DumbbellOnly));
    }

    #[rstest]
    #[case("Barbell Back Squat", true)]
    #[case("Goblet Squat", false)]
    #[case("Nordic Curl", false)]
    fn test_is_recoverable(#[case] name: &str, #[case] expected: bool) {
        let registry = ProfileRegistry::default();
        assert_eq!(
            Resolver::new(&registry).is_recoverable(name, EquipmentProfile::DumbbellOnly),
            expected
        );
    }
}
