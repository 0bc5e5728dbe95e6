//! Credit entries and exclusion filtering

use std::fmt;

use chrono::{DateTime, FixedOffset};

/// Subscriber tier, selects the palette of the entry's row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    #[default]
    One,
    Two,
    Three,
}

impl Tier {
    /// Tier from the subscription plan column: `"2..."` and `"3..."` select
    /// tiers 2 and 3, anything else is tier 1.
    pub fn from_marker(marker: &str) -> Self {
        match marker.chars().next() {
            Some('2') => Tier::Two,
            Some('3') => Tier::Three,
            _ => Tier::One,
        }
    }

    /// Tier number (1-3)
    pub fn number(self) -> u8 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
        }
    }

    /// 2-bit attribute value for this tier
    pub fn attribute(self) -> u8 {
        self.number() - 1
    }
}

/// One named row in the credits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub tier: Tier,
    /// Subscribed since; informational only
    pub since: Option<DateTime<FixedOffset>>,
}

impl Entry {
    pub fn new(name: impl Into<String>, tier: Tier) -> Self {
        Self {
            name: name.into(),
            tier,
            since: None,
        }
    }

    pub fn with_since(mut self, since: DateTime<FixedOffset>) -> Self {
        self.since = Some(since);
        self
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Tier {}", self.name, self.tier.number())?;
        if let Some(since) = self.since {
            write!(f, " since {}", since.to_rfc3339())?;
        }
        Ok(())
    }
}

/// Names to leave out of the credits, matched case-insensitively
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeList {
    names: Vec<String>,
}

impl ExcludeList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    /// Parse a comma separated list (`"alice,Bob"`)
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.names.iter().any(|n| *n == name)
    }
}

/// Placeholder entries for local testing without a subscriber export
pub fn dummy_entries() -> Vec<Entry> {
    const NAMES: [(&str, Tier); 3] = [
        ("First", Tier::One),
        ("Second", Tier::Two),
        ("Third", Tier::Three),
    ];
    const REPEAT: usize = 11;

    NAMES
        .iter()
        .cycle()
        .take(NAMES.len() * REPEAT)
        .map(|&(name, tier)| Entry::new(name, tier))
        .collect()
}
