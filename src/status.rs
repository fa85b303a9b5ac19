//! Status descriptors.
//!
//! A status is an immutable, named descriptor that either nudges one combat
//! stat by an exact fraction or blocks a category of abilities. Statuses are
//! applied to elementals through their [`EffectLedger`](crate::EffectLedger)
//! and expire after two rounds.

use crate::error::CombatError;
use crate::name::Name;
use crate::numeric::StatValue;
use crate::stat::Stat;
use serde::{Deserialize, Serialize};

/// What a status does while it is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEffect {
    /// Adds `delta` to the net value of `stat`.
    Modifier { stat: Stat, delta: StatValue },
    /// Prevents attacking, supporting, or both.
    Block { attack: bool, support: bool },
}

/// An immutable named status.
///
/// Exactly one of "modifies a stat" or "blocks attack/support" holds; the
/// constructor rejects anything else, so an invalid status cannot exist.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::{Stat, Status};
/// use elemental_combat::numeric::ratio;
///
/// let burn = Status::new("Burn", Some((Stat::Attack, ratio(-2, 10))), false, false).unwrap();
/// assert_eq!(burn.modifier_for(Stat::Attack), Some(ratio(-1, 5)));
/// assert!(!burn.blocks_attack());
///
/// // Neither a modifier nor a block
/// assert!(Status::new("Nothing", None, false, false).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StatusRecord", into = "StatusRecord")]
pub struct Status {
    name: Name,
    effect: StatusEffect,
}

impl Status {
    /// Create a new status.
    ///
    /// # Arguments
    ///
    /// * `name` - The status name
    /// * `modifier` - The stat this status changes and the amount added to it
    /// * `blocks_attack` - Whether offensive abilities are blocked
    /// * `blocks_support` - Whether support abilities are blocked
    ///
    /// # Errors
    ///
    /// Returns `CombatError::IllegalStatus` if the status modifies nothing,
    /// combines a modifier with a block, or modifies health or mana.
    pub fn new(
        name: impl Into<Name>,
        modifier: Option<(Stat, StatValue)>,
        blocks_attack: bool,
        blocks_support: bool,
    ) -> Result<Self, CombatError> {
        let name = name.into();
        let blocks = blocks_attack || blocks_support;
        let effect = match (modifier, blocks) {
            (None, false) => {
                return Err(CombatError::IllegalStatus {
                    name,
                    reason: "this status modifies nothing",
                })
            }
            (Some(_), true) => {
                return Err(CombatError::IllegalStatus {
                    name,
                    reason: "this status changes more than one property",
                })
            }
            (Some((stat, _)), false) if !stat.is_modifiable() => {
                return Err(CombatError::IllegalStatus {
                    name,
                    reason: "only attack, defense and speed can be modified",
                })
            }
            (Some((stat, delta)), false) => StatusEffect::Modifier { stat, delta },
            (None, true) => StatusEffect::Block {
                attack: blocks_attack,
                support: blocks_support,
            },
        };
        Ok(Self { name, effect })
    }

    /// Create a status that adds `delta` to `stat`.
    pub fn modifier(
        name: impl Into<Name>,
        stat: Stat,
        delta: StatValue,
    ) -> Result<Self, CombatError> {
        Self::new(name, Some((stat, delta)), false, false)
    }

    /// Create a status that blocks attacking and/or supporting.
    pub fn block(
        name: impl Into<Name>,
        attack: bool,
        support: bool,
    ) -> Result<Self, CombatError> {
        Self::new(name, None, attack, support)
    }

    /// Get the status name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Get what this status does.
    pub fn effect(&self) -> StatusEffect {
        self.effect
    }

    /// The delta this status adds to `stat`, if it modifies that stat.
    pub fn modifier_for(&self, stat: Stat) -> Option<StatValue> {
        match self.effect {
            StatusEffect::Modifier { stat: s, delta } if s == stat => Some(delta),
            _ => None,
        }
    }

    /// Whether this status prevents using offensive abilities.
    pub fn blocks_attack(&self) -> bool {
        matches!(self.effect, StatusEffect::Block { attack: true, .. })
    }

    /// Whether this status prevents using support abilities.
    pub fn blocks_support(&self) -> bool {
        matches!(self.effect, StatusEffect::Block { support: true, .. })
    }
}

/// Flat serialized form of a status, also the shape used in catalog data.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StatusRecord {
    name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stat: Option<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    delta: Option<StatValue>,
    #[serde(default)]
    blocks_attack: bool,
    #[serde(default)]
    blocks_support: bool,
}

impl TryFrom<StatusRecord> for Status {
    type Error = CombatError;

    fn try_from(record: StatusRecord) -> Result<Self, Self::Error> {
        let modifier = match (record.stat, record.delta) {
            (Some(stat), Some(delta)) => Some((stat, delta)),
            (None, None) => None,
            _ => {
                return Err(CombatError::IllegalStatus {
                    name: record.name,
                    reason: "a stat modifier needs both a stat and a delta",
                })
            }
        };
        Status::new(
            record.name,
            modifier,
            record.blocks_attack,
            record.blocks_support,
        )
    }
}

impl From<Status> for StatusRecord {
    fn from(status: Status) -> Self {
        let (stat, delta, blocks_attack, blocks_support) = match status.effect {
            StatusEffect::Modifier { stat, delta } => (Some(stat), Some(delta), false, false),
            StatusEffect::Block { attack, support } => (None, None, attack, support),
        };
        Self {
            name: status.name,
            stat,
            delta,
            blocks_attack,
            blocks_support,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ratio;

    #[test]
    fn test_modifier_status() {
        let tailwind = Status::modifier("Tailwind", Stat::Speed, ratio(2, 10)).unwrap();
        assert_eq!(tailwind.modifier_for(Stat::Speed), Some(ratio(1, 5)));
        assert_eq!(tailwind.modifier_for(Stat::Attack), None);
        assert!(!tailwind.blocks_attack());
        assert!(!tailwind.blocks_support());
    }

    #[test]
    fn test_block_status() {
        let frost = Status::block("Frost", true, true).unwrap();
        assert!(frost.blocks_attack());
        assert!(frost.blocks_support());

        let rage = Status::block("Rage", false, true).unwrap();
        assert!(!rage.blocks_attack());
        assert!(rage.blocks_support());
        assert_eq!(rage.modifier_for(Stat::Attack), None);
    }

    #[test]
    fn test_status_modifying_nothing_is_rejected() {
        let err = Status::new("Empty", None, false, false).unwrap_err();
        assert!(matches!(err, CombatError::IllegalStatus { .. }));
    }

    #[test]
    fn test_status_with_modifier_and_block_is_rejected() {
        let err = Status::new("Both", Some((Stat::Attack, ratio(1, 5))), true, false).unwrap_err();
        assert!(matches!(err, CombatError::IllegalStatus { .. }));
    }

    #[test]
    fn test_health_and_mana_cannot_be_modified() {
        assert!(Status::modifier("Regen", Stat::Health, ratio(1, 5)).is_err());
        assert!(Status::modifier("Drain", Stat::Mana, ratio(-1, 5)).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let burn = Status::modifier("Burn", Stat::Attack, ratio(-2, 10)).unwrap();
        let json = serde_json::to_string(&burn).unwrap();
        let back: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(back, burn);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{ "name": "Broken", "stat": "Attack", "delta": [1, 5], "blocks_attack": true }"#;
        assert!(serde_json::from_str::<Status>(json).is_err());

        let json = r#"{ "name": "Half", "stat": "Attack" }"#;
        assert!(serde_json::from_str::<Status>(json).is_err());
    }
}
