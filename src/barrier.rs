//! Protective barriers.
//!
//! A barrier is a depletable shield in front of an elemental's health.
//! Damage is taken out of the barrier first and whatever exceeds its
//! remaining health bleeds through to the next layer. A barrier may also
//! carry statuses that land on whoever hits it.
//!
//! Barriers have value semantics: cloning one gives an independent copy,
//! and elementals always store their own copy.

use crate::ability::TargetArity;
use crate::status::Status;
use serde::{Deserialize, Serialize};

/// A mutable barrier protecting one elemental (`Single`) or a whole side
/// (`All`).
///
/// # Examples
///
/// ```rust
/// use elemental_combat::{Barrier, TargetArity};
///
/// let mut wall = Barrier::single(50);
/// assert_eq!(wall.harm(80), 30);
/// assert_eq!(wall.health(), 0);
/// assert_eq!(wall.arity(), TargetArity::Single);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barrier {
    health: u64,
    arity: TargetArity,
    on_hit: Vec<Status>,
}

impl Barrier {
    /// Create a barrier.
    ///
    /// Repeated entries in `on_hit` are ignored.
    ///
    /// # Arguments
    ///
    /// * `health` - The initial barrier health
    /// * `arity` - Whether the barrier protects one elemental or a whole side
    /// * `on_hit` - Statuses an attacker receives upon hitting this barrier
    pub fn new<I>(health: u64, arity: TargetArity, on_hit: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        let mut effects: Vec<Status> = Vec::new();
        for status in on_hit {
            if !effects.contains(&status) {
                effects.push(status);
            }
        }
        Self {
            health,
            arity,
            on_hit: effects,
        }
    }

    /// Create a single-target barrier with no on-hit statuses.
    pub fn single(health: u64) -> Self {
        Self::new(health, TargetArity::Single, Vec::new())
    }

    /// Create a side-wide barrier with no on-hit statuses.
    pub fn all(health: u64) -> Self {
        Self::new(health, TargetArity::All, Vec::new())
    }

    /// The zero-health, effect-free barrier every elemental starts with.
    pub fn empty(arity: TargetArity) -> Self {
        Self::new(0, arity, Vec::new())
    }

    /// Remaining barrier health.
    pub fn health(&self) -> u64 {
        self.health
    }

    /// Whether this barrier protects one elemental or a whole side.
    pub fn arity(&self) -> TargetArity {
        self.arity
    }

    /// Statuses an attacker receives upon hitting this barrier.
    pub fn on_hit(&self) -> &[Status] {
        &self.on_hit
    }

    /// A copy of this barrier protecting `arity` instead.
    pub fn with_arity(&self, arity: TargetArity) -> Self {
        Self {
            arity,
            ..self.clone()
        }
    }

    /// Whether this barrier has neither health nor on-hit statuses.
    pub fn is_empty(&self) -> bool {
        self.health == 0 && self.on_hit.is_empty()
    }

    /// Take `amount` damage.
    ///
    /// The barrier loses at most its remaining health and the excess is
    /// returned as bleed-through: `max(0, amount - health)`.
    pub fn harm(&mut self, amount: u64) -> u64 {
        let bled_through = amount.saturating_sub(self.health);
        self.health = self.health.saturating_sub(amount);
        bled_through
    }
}

impl Default for Barrier {
    fn default() -> Self {
        Self::empty(TargetArity::Single)
    }
}
