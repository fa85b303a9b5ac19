//! Per-elemental effect ledger.
//!
//! Statuses are staged in two collections: those expiring at the end of
//! this round and those expiring at the end of the next one. Newly applied
//! statuses always land in "next round", and advancing the round shifts
//! "next round" into "this round" while dropping what was there. A status
//! therefore lives through at most two `advance_round` calls.

use crate::ability::Ability;
use crate::numeric::StatValue;
use crate::stat::Stat;
use crate::status::Status;
use serde::{Deserialize, Serialize};

/// The statuses currently active on one elemental.
///
/// Entries are not deduplicated: applying the same status twice yields two
/// entries whose modifiers both count.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::{EffectLedger, Stat, Status};
/// use elemental_combat::numeric::ratio;
///
/// let burn = Status::modifier("Burn", Stat::Attack, ratio(-1, 5)).unwrap();
/// let mut ledger = EffectLedger::new();
///
/// ledger.apply([burn.clone(), burn]);
/// assert_eq!(ledger.stat_modifier(Stat::Attack), ratio(-2, 5));
///
/// ledger.advance_round();
/// assert_eq!(ledger.len(), 2);
/// ledger.advance_round();
/// assert!(ledger.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectLedger {
    /// Statuses that expire when the current round ends.
    this_round: Vec<Status>,
    /// Statuses that expire when the next round ends.
    next_round: Vec<Status>,
}

impl EffectLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the active statuses allow `ability` to be used.
    ///
    /// Offensive abilities are blocked by any status that blocks attacking;
    /// support abilities by any status that blocks supporting.
    pub fn can_use(&self, ability: &Ability) -> bool {
        let offensive = ability.is_offensive();
        !self.iter().any(|status| {
            (offensive && status.blocks_attack()) || (!offensive && status.blocks_support())
        })
    }

    /// Sum of the deltas of every active status that modifies `stat`.
    ///
    /// Returns zero when nothing modifies the stat.
    pub fn stat_modifier(&self, stat: Stat) -> StatValue {
        self.iter().filter_map(|s| s.modifier_for(stat)).sum()
    }

    /// Stage new statuses to expire at the end of the next round.
    pub fn apply<I>(&mut self, statuses: I)
    where
        I: IntoIterator<Item = Status>,
    {
        self.next_round.extend(statuses);
    }

    /// End the current round.
    ///
    /// Statuses expiring this round are dropped and those expiring next
    /// round become the ones expiring this round.
    pub fn advance_round(&mut self) {
        self.this_round = std::mem::take(&mut self.next_round);
    }

    /// Iterate over all active statuses, the older stage first.
    pub fn iter(&self) -> impl Iterator<Item = &Status> {
        self.this_round.iter().chain(self.next_round.iter())
    }

    /// Statuses that expire when the current round ends.
    pub fn expiring_this_round(&self) -> &[Status] {
        &self.this_round
    }

    /// Statuses that expire when the next round ends.
    pub fn expiring_next_round(&self) -> &[Status] {
        &self.next_round
    }

    /// Number of active status entries.
    pub fn len(&self) -> usize {
        self.this_round.len() + self.next_round.len()
    }

    /// Whether no status is active.
    pub fn is_empty(&self) -> bool {
        self.this_round.is_empty() && self.next_round.is_empty()
    }
}
