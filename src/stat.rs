//! Stat identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of an elemental's five stats.
///
/// Only attack, defense and speed can be modified by statuses; health and
/// mana change through harm, heal and mana costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stat {
    Health,
    Mana,
    Attack,
    Defense,
    Speed,
}

impl Stat {
    /// Whether a status may carry a modifier for this stat.
    pub fn is_modifiable(self) -> bool {
        matches!(self, Stat::Attack | Stat::Defense | Stat::Speed)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stat::Health => "health",
            Stat::Mana => "mana",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::Speed => "speed",
        };
        f.write_str(s)
    }
}
