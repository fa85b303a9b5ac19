//! Elemental (combatant) state.
//!
//! An `Elemental` is the mutable runtime state of one creature in battle:
//! health, mana, its immutable base stats, active statuses, the two barrier
//! slots and the set of abilities it knows. Net combat stats are computed
//! on demand from the base stats and the effect ledger.

use crate::ability::{Ability, TargetArity};
use crate::barrier::Barrier;
use crate::element::{BaseStats, ElementType};
use crate::error::CombatError;
use crate::ledger::EffectLedger;
use crate::matchup::{Matchup, MatchupTable};
use crate::name::Name;
use crate::numeric::{from_u64, StatValue, MIN_STAT};
use crate::resolved::ResolvedStat;
use crate::stat::Stat;
use crate::status::Status;
use crate::transform::{AdditiveTransform, FloorTransform, StatTransform};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One combatant.
///
/// Created with health and mana at their base maximums, no statuses and
/// empty barriers. Health never drops below 0; once it reaches 0 the
/// elemental has fainted and it is up to the caller to stop using it.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::{ElementType, Elemental};
/// use elemental_combat::numeric::ratio;
///
/// let mut water = Elemental::new(ElementType::Water);
/// assert_eq!(water.health(), 1000);
/// assert_eq!(water.net_defense(), ratio(11, 10));
///
/// water.harm(9).unwrap();
/// assert_eq!(water.health(), 991);
/// assert!(water.harm(-5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elemental {
    element: ElementType,
    level: u32,
    health: u64,
    mana: u64,
    base: BaseStats,
    ledger: EffectLedger,
    all_barrier: Barrier,
    single_barrier: Barrier,
    abilities: BTreeSet<Name>,
}

impl Elemental {
    /// Create a level 1 elemental with the standard base stats of `element`.
    pub fn new(element: ElementType) -> Self {
        Self::with_stats(element, BaseStats::of(element))
    }

    /// Create a level 1 elemental with custom base stats.
    pub fn with_stats(element: ElementType, base: BaseStats) -> Self {
        Self {
            element,
            level: 1,
            health: base.health,
            mana: base.mana,
            base,
            ledger: EffectLedger::new(),
            all_barrier: Barrier::empty(TargetArity::All),
            single_barrier: Barrier::empty(TargetArity::Single),
            abilities: BTreeSet::new(),
        }
    }

    /// Set the level this elemental was assembled at.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Add abilities to the known set.
    pub fn with_abilities<'a, I>(mut self, abilities: I) -> Self
    where
        I: IntoIterator<Item = &'a Ability>,
    {
        for ability in abilities {
            self.learn(ability);
        }
        self
    }

    /// Get the element type.
    pub fn element(&self) -> ElementType {
        self.element
    }

    /// Get the level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current health.
    pub fn health(&self) -> u64 {
        self.health
    }

    /// Health at creation.
    pub fn max_health(&self) -> u64 {
        self.base.health
    }

    /// Current mana.
    pub fn mana(&self) -> u64 {
        self.mana
    }

    /// The immutable base stats.
    pub fn base_stats(&self) -> &BaseStats {
        &self.base
    }

    /// Whether health has reached 0.
    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }

    /// The effect ledger.
    pub fn ledger(&self) -> &EffectLedger {
        &self.ledger
    }

    /// Iterate over active statuses.
    pub fn statuses(&self) -> impl Iterator<Item = &Status> {
        self.ledger.iter()
    }

    /// Names of the abilities this elemental knows.
    pub fn abilities(&self) -> impl Iterator<Item = &Name> {
        self.abilities.iter()
    }

    /// Whether this elemental knows `ability`.
    pub fn knows(&self, ability: &Ability) -> bool {
        self.abilities.contains(ability.name())
    }

    /// Add `ability` to the known set.
    ///
    /// Level requirements are checked by whoever assembles the roster, not
    /// here.
    pub fn learn(&mut self, ability: &Ability) {
        self.abilities.insert(ability.name().clone());
    }

    /// The matchup of this elemental attacking `other`.
    pub fn matchup_against(&self, other: &Elemental, table: &MatchupTable) -> Matchup {
        table.lookup(self.element, other.element)
    }

    /// Resolve a stat with its full breakdown.
    ///
    /// Attack, defense and speed start from the base value, receive one
    /// additive transform per active status that modifies them, and are
    /// floored at [`MIN_STAT`]. Health and mana resolve to their current
    /// values.
    pub fn resolve_stat(&self, stat: Stat) -> ResolvedStat {
        let base = match stat {
            Stat::Health => from_u64(self.health),
            Stat::Mana => from_u64(self.mana),
            Stat::Attack => self.base.attack,
            Stat::Defense => self.base.defense,
            Stat::Speed => self.base.speed,
        };
        let mut resolved = ResolvedStat::new(stat, base);
        resolved.add_source("Base", base);
        if !stat.is_modifiable() {
            return resolved;
        }

        let mut transforms: Vec<Box<dyn StatTransform>> = self
            .ledger
            .iter()
            .filter_map(|status| {
                status.modifier_for(stat).map(|delta| {
                    Box::new(AdditiveTransform::new(status.name().clone(), delta))
                        as Box<dyn StatTransform>
                })
            })
            .collect();
        transforms.push(Box::new(FloorTransform::new(MIN_STAT)));
        transforms.sort_by_key(|t| t.phase());

        let mut value = base;
        for transform in &transforms {
            value = transform.apply(value);
            resolved.add_transform(transform.description(), value);
        }
        resolved.value = value;
        resolved
    }

    /// Attack net of status modifiers.
    pub fn net_attack(&self) -> StatValue {
        self.resolve_stat(Stat::Attack).value
    }

    /// Defense net of status modifiers.
    pub fn net_defense(&self) -> StatValue {
        self.resolve_stat(Stat::Defense).value
    }

    /// Speed net of status modifiers.
    pub fn net_speed(&self) -> StatValue {
        self.resolve_stat(Stat::Speed).value
    }

    /// Whether this elemental knows `ability` and no active status blocks
    /// it.
    pub fn can_use(&self, ability: &Ability) -> bool {
        self.knows(ability) && self.ledger.can_use(ability)
    }

    /// Reduce health by `amount`, flooring at 0.
    ///
    /// # Errors
    ///
    /// Returns `CombatError::InvalidAmount` if `amount` is negative; healing
    /// goes through [`Elemental::heal`].
    pub fn harm(&mut self, amount: i64) -> Result<(), CombatError> {
        let amount = u64::try_from(amount).map_err(|_| CombatError::InvalidAmount(amount))?;
        self.take_damage(amount);
        Ok(())
    }

    /// Increase health by `amount`. Healing is not capped.
    ///
    /// # Errors
    ///
    /// Returns `CombatError::InvalidAmount` if `amount` is negative.
    pub fn heal(&mut self, amount: i64) -> Result<(), CombatError> {
        let amount = u64::try_from(amount).map_err(|_| CombatError::InvalidAmount(amount))?;
        self.restore(amount);
        Ok(())
    }

    /// Stage statuses on this elemental's ledger.
    pub fn apply_effects<I>(&mut self, statuses: I)
    where
        I: IntoIterator<Item = Status>,
    {
        self.ledger.apply(statuses);
    }

    /// End the current round for this elemental's statuses.
    pub fn end_round(&mut self) {
        self.ledger.advance_round();
    }

    /// The barrier protecting this elemental's whole side.
    pub fn all_barrier(&self) -> &Barrier {
        &self.all_barrier
    }

    /// The barrier protecting only this elemental.
    pub fn single_barrier(&self) -> &Barrier {
        &self.single_barrier
    }

    /// Replace the side-wide barrier with a copy of `barrier`.
    ///
    /// The stored copy always has `TargetArity::All`.
    pub fn set_all_barrier(&mut self, barrier: &Barrier) {
        self.all_barrier = barrier.with_arity(TargetArity::All);
    }

    /// Replace the single-target barrier with a copy of `barrier`.
    ///
    /// The stored copy always has `TargetArity::Single`.
    pub fn set_single_barrier(&mut self, barrier: &Barrier) {
        self.single_barrier = barrier.with_arity(TargetArity::Single);
    }

    pub(crate) fn all_barrier_mut(&mut self) -> &mut Barrier {
        &mut self.all_barrier
    }

    pub(crate) fn single_barrier_mut(&mut self) -> &mut Barrier {
        &mut self.single_barrier
    }

    pub(crate) fn take_damage(&mut self, amount: u64) {
        self.health = self.health.saturating_sub(amount);
    }

    pub(crate) fn restore(&mut self, amount: u64) {
        self.health = self.health.saturating_add(amount);
    }

    /// Deduct a mana cost; negative costs recharge.
    pub(crate) fn spend_mana(&mut self, cost: i64) {
        let amount = cost.unsigned_abs();
        self.mana = if cost >= 0 {
            self.mana.saturating_sub(amount)
        } else {
            self.mana.saturating_add(amount)
        };
    }
}
