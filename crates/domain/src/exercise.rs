use std::collections::HashMap;

use derive_more::{AsRef, Display};
use log::debug;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

use crate::{NormalizedName, normalize};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, AsRefStr, StrumDisplay, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Low = 1, medium = 2, high = 3.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
        }
    }

    /// High = 1, medium = 2, low = 3.
    #[must_use]
    pub fn inverse_rank(self) -> u8 {
        4 - self.rank()
    }
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Muscle(String);

impl Muscle {
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self(normalize(label))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn region(&self) -> Option<Region> {
        if LOWER_BODY_KEYWORDS.iter().any(|k| self.0.contains(k)) {
            Some(Region::Lower)
        } else if UPPER_BODY_KEYWORDS.iter().any(|k| self.0.contains(k)) {
            Some(Region::Upper)
        } else {
            None
        }
    }
}

impl From<&str> for Muscle {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Region {
    Upper,
    Lower,
}

const UPPER_BODY_KEYWORDS: [&str; 12] = [
    "chest", "pec", "back", "lat", "trap", "shoulder", "delt", "bicep", "tricep", "arm", "upper",
    "rhomboid",
];

const LOWER_BODY_KEYWORDS: [&str; 11] = [
    "quad", "hamstring", "glute", "calf", "calves", "adductor", "abductor", "hip", "leg",
    "lower", "posterior chain",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseProfile {
    pub name: String,
    pub primary_muscle: Muscle,
    pub secondary_muscle: Option<Muscle>,
    pub skill_demand: Level,
    pub stability_requirement: Level,
    pub fatigue_cost: Level,
    pub long_length_bias: bool,
    pub substitutions: Vec<String>,
}

/// Exercise profiles keyed by normalized name. The first profile inserted under a name wins.
#[derive(Debug, Default, Clone)]
pub struct ProfileRegistry {
    entries: Vec<(NormalizedName, ExerciseProfile)>,
    index: HashMap<NormalizedName, usize>,
}

impl ProfileRegistry {
    #[must_use]
    pub fn new(profiles: impl IntoIterator<Item = ExerciseProfile>) -> Self {
        let mut registry = Self::default();
        for profile in profiles {
            let key = NormalizedName::new(&profile.name);
            if key.is_empty() {
                debug!("ignoring exercise profile without name");
                continue;
            }
            if registry.index.contains_key(&key) {
                debug!("ignoring duplicate exercise profile \"{}\"", profile.name);
                continue;
            }
            registry.index.insert(key.clone(), registry.entries.len());
            registry.entries.push((key, profile));
        }
        registry
    }

    /// Exact match on the normalized name, else the longest key that contains or is contained
    /// in the query. Equal lengths resolve to the earlier inserted profile.
    #[must_use]
    pub fn lookup(&self, query: &str) -> Option<&ExerciseProfile> {
        let query = NormalizedName::new(query);
        if query.is_empty() {
            return None;
        }
        if let Some(i) = self.index.get(&query) {
            return Some(&self.entries[*i].1);
        }
        self.entries
            .iter()
            .filter(|(key, _)| key.overlaps(&query))
            .fold(None, |best: Option<&(NormalizedName, ExerciseProfile)>, entry| {
                match best {
                    Some(b) if b.0.len() >= entry.0.len() => Some(b),
                    _ => Some(entry),
                }
            })
            .map(|(_, profile)| profile)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExerciseProfile> {
        self.entries.iter().map(|(_, profile)| profile)
    }
}
