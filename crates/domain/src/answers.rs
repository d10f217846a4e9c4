use derive_more::{Deref, Display, Into};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

use crate::{EquipmentProfile, Region};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramDesignAnswers {
    pub days_per_week: DaysPerWeek,
    pub focus: Focus,
    pub equipment: EquipmentProfile,
    pub session_length: SessionLength,
    pub experience: Experience,
}

impl Default for ProgramDesignAnswers {
    fn default() -> Self {
        Self {
            days_per_week: DaysPerWeek(3),
            focus: Focus::None,
            equipment: EquipmentProfile::FullGym,
            session_length: SessionLength::Moderate,
            experience: Experience::Intermediate,
        }
    }
}

#[derive(Deref, Display, Into, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DaysPerWeek(u8);

impl DaysPerWeek {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 7;

    pub fn new(value: u8) -> Result<Self, DaysPerWeekError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DaysPerWeekError::OutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl TryFrom<u8> for DaysPerWeek {
    type Error = DaysPerWeekError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DaysPerWeekError {
    #[error("Days per week must be between 2 and 7 ({0})")]
    OutOfRange(u8),
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, AsRefStr, StrumDisplay, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Focus {
    #[default]
    #[strum(to_string = "none", serialize = "no_focus", serialize = "balanced")]
    None,
    #[strum(to_string = "upper_focus", serialize = "upper")]
    Upper,
    #[strum(to_string = "lower_focus", serialize = "lower")]
    Lower,
}

impl Focus {
    #[must_use]
    pub fn region(self) -> Option<Region> {
        match self {
            Focus::None => None,
            Focus::Upper => Some(Region::Upper),
            Focus::Lower => Some(Region::Lower),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, AsRefStr, StrumDisplay, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SessionLength {
    Short,
    #[default]
    Moderate,
    Long,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, AsRefStr, StrumDisplay, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Experience {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}
