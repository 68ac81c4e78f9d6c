//! Sports and entity kinds served by the sports statistics API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A sport covered by the sports statistics API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sport {
    Football,
    Basketball,
    Baseball,
    Hockey,
    Rugby,
    AmericanFootball,
    Mma,
}

impl Sport {
    pub const ALL: [Sport; 7] = [
        Sport::Football,
        Sport::Basketball,
        Sport::Baseball,
        Sport::Hockey,
        Sport::Rugby,
        Sport::AmericanFootball,
        Sport::Mma,
    ];

    /// Slug used in favorite scopes, config keys and API hostnames.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Basketball => "basketball",
            Sport::Baseball => "baseball",
            Sport::Hockey => "hockey",
            Sport::Rugby => "rugby",
            Sport::AmericanFootball => "american-football",
            Sport::Mma => "mma",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Sport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Sport::ALL
            .into_iter()
            .find(|sport| sport.slug() == normalized)
            .ok_or_else(|| Error::Parse(format!("unknown sport '{s}'")))
    }
}

/// Kind of entity listed for a sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    League,
    Team,
    Game,
    Fighter,
    /// Weight-class categories; the API returns them as bare strings.
    Category,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::League,
        EntityKind::Team,
        EntityKind::Game,
        EntityKind::Fighter,
        EntityKind::Category,
    ];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            EntityKind::League => "league",
            EntityKind::Team => "team",
            EntityKind::Game => "game",
            EntityKind::Fighter => "fighter",
            EntityKind::Category => "category",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let singular = normalized
            .strip_suffix("ies")
            .map(|stem| format!("{stem}y"))
            .or_else(|| normalized.strip_suffix('s').map(str::to_string))
            .unwrap_or(normalized);
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == singular)
            .ok_or_else(|| Error::Parse(format!("unknown entity kind '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sport_parses_slug_and_underscore_forms() {
        assert_eq!("football".parse::<Sport>().unwrap(), Sport::Football);
        assert_eq!(
            "american_football".parse::<Sport>().unwrap(),
            Sport::AmericanFootball
        );
        assert_eq!("MMA".parse::<Sport>().unwrap(), Sport::Mma);
    }

    #[test]
    fn sport_rejects_unknown() {
        assert!(matches!("curling".parse::<Sport>(), Err(Error::Parse(_))));
    }

    #[test]
    fn entity_kind_accepts_plurals() {
        assert_eq!("leagues".parse::<EntityKind>().unwrap(), EntityKind::League);
        assert_eq!(
            "categories".parse::<EntityKind>().unwrap(),
            EntityKind::Category
        );
        assert_eq!("game".parse::<EntityKind>().unwrap(), EntityKind::Game);
    }

    #[test]
    fn sport_display_matches_slug() {
        assert_eq!(Sport::AmericanFootball.to_string(), "american-football");
    }
}
