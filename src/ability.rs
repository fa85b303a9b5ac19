//! Ability definitions.
//!
//! Abilities are immutable data. Their behaviour is fully described by the
//! fields below and carried out by the
//! [`CombatResolver`](crate::CombatResolver); there is no per-ability code.

use crate::barrier::Barrier;
use crate::name::Name;
use crate::status::Status;
use serde::{Deserialize, Serialize};

/// How many elementals an ability (or barrier) affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetArity {
    /// Exactly one elemental.
    Single,
    /// An entire side.
    All,
}

/// An immutable ability.
///
/// A positive `base_damage` makes the ability offensive; zero or negative
/// damage makes it a support ability, with negative damage healing.
/// A negative `mana_cost` recharges mana.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::{Ability, TargetArity};
///
/// let wildfire = Ability::builder("Wildfire")
///     .damage(80)
///     .mana_cost(90)
///     .arity(TargetArity::All)
///     .min_level(18)
///     .build();
///
/// assert!(wildfire.is_offensive());
/// assert_eq!(wildfire.barrier().arity(), TargetArity::All);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    name: Name,
    base_damage: i64,
    effects: Vec<Status>,
    mana_cost: i64,
    barrier: Barrier,
    arity: TargetArity,
    min_level: u32,
    bypasses_barriers: bool,
}

impl Ability {
    /// Start building an ability.
    pub fn builder(name: impl Into<Name>) -> AbilityBuilder {
        AbilityBuilder {
            name: name.into(),
            base_damage: 0,
            effects: Vec::new(),
            mana_cost: 0,
            barrier_health: 0,
            barrier: None,
            arity: TargetArity::Single,
            min_level: 1,
            bypasses_barriers: false,
        }
    }

    /// Get the ability name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Damage dealt to each target; negative values heal.
    pub fn base_damage(&self) -> i64 {
        self.base_damage
    }

    /// Statuses granted to targets on hit (offensive) or on use (support).
    pub fn effects(&self) -> &[Status] {
        &self.effects
    }

    /// Mana deducted from the user; negative values recharge.
    pub fn mana_cost(&self) -> i64 {
        self.mana_cost
    }

    /// Template of the barrier granted to every target.
    ///
    /// Callers only ever see the template; targets receive copies.
    pub fn barrier(&self) -> &Barrier {
        &self.barrier
    }

    /// How many targets this ability affects.
    pub fn arity(&self) -> TargetArity {
        self.arity
    }

    /// Level at which the ability is learned.
    pub fn min_level(&self) -> u32 {
        self.min_level
    }

    /// Whether the ability ignores barriers when used by the
    /// barrier-piercing element.
    pub fn bypasses_barriers(&self) -> bool {
        self.bypasses_barriers
    }

    /// Whether this ability deals damage.
    pub fn is_offensive(&self) -> bool {
        self.base_damage > 0
    }

    /// Whether this ability does not deal damage.
    pub fn is_support(&self) -> bool {
        !self.is_offensive()
    }
}

/// Builder for [`Ability`].
///
/// The barrier is given either as a health amount, in which case its arity
/// follows the ability's, or as an explicit template.
#[derive(Debug, Clone)]
pub struct AbilityBuilder {
    name: Name,
    base_damage: i64,
    effects: Vec<Status>,
    mana_cost: i64,
    barrier_health: u64,
    barrier: Option<Barrier>,
    arity: TargetArity,
    min_level: u32,
    bypasses_barriers: bool,
}

impl AbilityBuilder {
    /// Set the base damage; negative values heal.
    pub fn damage(mut self, base_damage: i64) -> Self {
        self.base_damage = base_damage;
        self
    }

    /// Add a status granted by the ability.
    pub fn effect(mut self, status: Status) -> Self {
        self.effects.push(status);
        self
    }

    /// Add several statuses granted by the ability.
    pub fn effects<I>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        self.effects.extend(statuses);
        self
    }

    /// Set the mana cost; negative values recharge.
    pub fn mana_cost(mut self, mana_cost: i64) -> Self {
        self.mana_cost = mana_cost;
        self
    }

    /// Grant a plain barrier with `health`, matching the ability's arity.
    pub fn barrier_health(mut self, health: u64) -> Self {
        self.barrier_health = health;
        self.barrier = None;
        self
    }

    /// Grant a copy of an explicit barrier template.
    ///
    /// The template takes on the ability's arity when built.
    pub fn barrier(mut self, template: Barrier) -> Self {
        self.barrier = Some(template);
        self
    }

    /// Set how many targets the ability affects.
    pub fn arity(mut self, arity: TargetArity) -> Self {
        self.arity = arity;
        self
    }

    /// Set the level at which the ability is learned.
    pub fn min_level(mut self, level: u32) -> Self {
        self.min_level = level;
        self
    }

    /// Let the ability ignore barriers when used by the barrier-piercing
    /// element.
    pub fn bypasses_barriers(mut self, bypass: bool) -> Self {
        self.bypasses_barriers = bypass;
        self
    }

    /// Finish building.
    pub fn build(self) -> Ability {
        let barrier = match self.barrier {
            Some(template) => template.with_arity(self.arity),
            None => Barrier::new(self.barrier_health, self.arity, Vec::new()),
        };
        Ability {
            name: self.name,
            base_damage: self.base_damage,
            effects: self.effects,
            mana_cost: self.mana_cost,
            barrier,
            arity: self.arity,
            min_level: self.min_level,
            bypasses_barriers: self.bypasses_barriers,
        }
    }
}
