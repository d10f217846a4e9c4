use derive_more::{AsRef, Display};

/// Canonical form used whenever exercise names or muscle labels are compared.
#[must_use]
pub fn normalize(name: &str) -> String {
    let folded = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect::<String>();
    folded.split(' ').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" ")
}

#[derive(AsRef, Debug, Display, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(normalize(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if either name contains the other.
    #[must_use]
    pub fn overlaps(&self, other: &NormalizedName) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && (self.0.contains(other.as_str()) || other.0.contains(self.as_str()))
    }
}

impl From<&str> for NormalizedName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for NormalizedName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
