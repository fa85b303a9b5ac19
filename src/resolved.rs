//! Resolved stat results module.
//!
//! Contains the `ResolvedStat` type, a net stat value together with the
//! breakdown of how it was reached. Presentation layers use the breakdown
//! to explain numbers to the player.

use crate::numeric::StatValue;
use crate::stat::Stat;
use serde::{Deserialize, Serialize};

/// A resolved stat value with full breakdown information.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::{ResolvedStat, Stat};
/// use elemental_combat::numeric::ratio;
///
/// let mut resolved = ResolvedStat::new(Stat::Attack, ratio(1, 1));
/// resolved.add_source("Base", ratio(6, 5));
/// resolved.add_transform("Burn -1/5", ratio(1, 1));
///
/// assert_eq!(resolved.sources.len(), 1);
/// assert_eq!(resolved.transforms.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedStat {
    /// The stat this value belongs to.
    pub stat: Stat,

    /// The final resolved value.
    pub value: StatValue,

    /// Breakdown of contributing sources, as `(description, value)`.
    pub sources: Vec<(String, StatValue)>,

    /// Breakdown of applied transforms, as `(description, value after)`,
    /// in application order.
    pub transforms: Vec<(String, StatValue)>,
}

impl ResolvedStat {
    /// Create a new `ResolvedStat` with an empty breakdown.
    pub fn new(stat: Stat, value: StatValue) -> Self {
        Self {
            stat,
            value,
            sources: Vec::new(),
            transforms: Vec::new(),
        }
    }

    /// Add a source contribution to the breakdown.
    pub fn add_source(&mut self, description: impl Into<String>, value: StatValue) {
        self.sources.push((description.into(), value));
    }

    /// Add a transform application to the breakdown.
    pub fn add_transform(&mut self, description: impl Into<String>, value: StatValue) {
        self.transforms.push((description.into(), value));
    }
}
