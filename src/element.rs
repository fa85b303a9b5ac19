//! Elemental types and their base stat profiles.
//!
//! There are five base types and ten delta types. Each type has exactly one
//! immutable `BaseStats` record compiled into the crate.

use crate::numeric::{ratio, StatValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An elemental's type affinity.
///
/// The type decides the matchup multiplier against every other type and is
/// never changed once assigned to a combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Fire,
    Water,
    Earth,
    Wind,
    Lightning,
    Magma,
    Smoke,
    Plasma,
    Steam,
    Sand,
    Thunder,
    Ice,
    Crystal,
    Flora,
    Storm,
}

impl ElementType {
    /// Every type, base types first.
    pub const ALL: [ElementType; 15] = [
        ElementType::Fire,
        ElementType::Water,
        ElementType::Earth,
        ElementType::Wind,
        ElementType::Lightning,
        ElementType::Magma,
        ElementType::Smoke,
        ElementType::Plasma,
        ElementType::Steam,
        ElementType::Sand,
        ElementType::Thunder,
        ElementType::Ice,
        ElementType::Crystal,
        ElementType::Flora,
        ElementType::Storm,
    ];

    /// Number of distinct types.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this type in [`ElementType::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this is one of the ten delta types (as opposed to the five
    /// base types).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elemental_combat::ElementType;
    ///
    /// assert!(!ElementType::Fire.is_delta());
    /// assert!(ElementType::Magma.is_delta());
    /// ```
    pub fn is_delta(self) -> bool {
        self.index() >= 5
    }

    /// Get the name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Fire => "Fire",
            ElementType::Water => "Water",
            ElementType::Earth => "Earth",
            ElementType::Wind => "Wind",
            ElementType::Lightning => "Lightning",
            ElementType::Magma => "Magma",
            ElementType::Smoke => "Smoke",
            ElementType::Plasma => "Plasma",
            ElementType::Steam => "Steam",
            ElementType::Sand => "Sand",
            ElementType::Thunder => "Thunder",
            ElementType::Ice => "Ice",
            ElementType::Crystal => "Crystal",
            ElementType::Flora => "Flora",
            ElementType::Storm => "Storm",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The immutable stat profile of an elemental type.
///
/// Health and mana are whole numbers; attack, defense and speed are exact
/// fractions.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::{BaseStats, ElementType};
/// use elemental_combat::numeric::ratio;
///
/// let fire = BaseStats::of(ElementType::Fire);
/// assert_eq!(fire.health, 1000);
/// assert_eq!(fire.attack, ratio(12, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    /// Maximum health.
    pub health: u64,
    /// Maximum mana.
    pub mana: u64,
    /// Attack multiplier.
    pub attack: StatValue,
    /// Defense divisor.
    pub defense: StatValue,
    /// Speed, used by the caller for turn order.
    pub speed: StatValue,
}

impl BaseStats {
    /// Create a stat profile from tenths, the unit the type tables are
    /// written in.
    fn tenths(health: u64, mana: u64, attack: i64, defense: i64, speed: i64) -> Self {
        Self {
            health,
            mana,
            attack: ratio(attack, 10),
            defense: ratio(defense, 10),
            speed: ratio(speed, 10),
        }
    }

    /// Get the base stats of an elemental type.
    pub fn of(element: ElementType) -> Self {
        match element {
            ElementType::Fire => Self::tenths(1000, 500, 12, 9, 10),
            ElementType::Water => Self::tenths(1000, 500, 10, 11, 10),
            ElementType::Earth => Self::tenths(1000, 500, 11, 12, 8),
            ElementType::Wind => Self::tenths(1000, 500, 10, 9, 12),
            ElementType::Lightning => Self::tenths(1000, 500, 11, 8, 12),
            ElementType::Magma => Self::tenths(1000, 500, 14, 10, 7),
            ElementType::Smoke => Self::tenths(1000, 500, 8, 12, 11),
            ElementType::Plasma => Self::tenths(1000, 500, 13, 6, 12),
            ElementType::Steam => Self::tenths(1000, 500, 10, 12, 9),
            ElementType::Sand => Self::tenths(1000, 500, 10, 14, 7),
            ElementType::Thunder => Self::tenths(1000, 500, 11, 11, 9),
            ElementType::Ice => Self::tenths(1000, 500, 13, 7, 11),
            ElementType::Crystal => Self::tenths(1000, 500, 9, 12, 10),
            ElementType::Flora => Self::tenths(1000, 500, 9, 11, 11),
            ElementType::Storm => Self::tenths(1000, 500, 13, 11, 6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, element) in ElementType::ALL.iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn test_base_and_delta_split() {
        let deltas = ElementType::ALL.iter().filter(|e| e.is_delta()).count();
        assert_eq!(deltas, 10);
        assert!(!ElementType::Lightning.is_delta());
        assert!(ElementType::Storm.is_delta());
    }

    #[test]
    fn test_base_stats_are_positive() {
        for element in ElementType::ALL {
            let stats = BaseStats::of(element);
            assert!(stats.health > 0);
            assert!(stats.attack > ratio(0, 1));
            assert!(stats.defense > ratio(0, 1));
            assert!(stats.speed > ratio(0, 1));
        }
    }

    #[test]
    fn test_water_profile() {
        let water = BaseStats::of(ElementType::Water);
        assert_eq!(water.mana, 500);
        assert_eq!(water.defense, ratio(11, 10));
        assert_eq!(water.speed, ratio(1, 1));
    }

    #[test]
    fn test_display_matches_variant() {
        assert_eq!(ElementType::Thunder.to_string(), "Thunder");
    }
}
