//! Ability resolution module.
//!
//! Provides the `CombatResolver` type, the entry point for carrying out an
//! ability. Resolution is atomic: every precondition is checked before the
//! first mutation, so an error always leaves the source and targets exactly
//! as they were.
//!
//! The offensive pipeline runs in this order:
//! 1. The first target's side-wide barrier absorbs the combined damage and
//!    its on-hit statuses are applied to the source
//! 2. The bleed-through is split evenly (rounded up) across the targets
//! 3. Each share is absorbed by that target's own barrier
//! 4. What remains is scaled by attack, matchup and defense, and rounded up
//!
//! A [`BARRIER_PIERCING_ELEMENT`] source using an ability that bypasses
//! barriers skips steps 1 to 3.

use crate::ability::{Ability, TargetArity};
use crate::element::ElementType;
use crate::elemental::Elemental;
use crate::error::CombatError;
use crate::matchup::{Matchup, MatchupTable};
use crate::name::Name;
use crate::numeric::scale_damage;
use crate::status::Status;
use serde::{Deserialize, Serialize};

/// The element whose barrier-bypassing abilities ignore barriers.
pub const BARRIER_PIERCING_ELEMENT: ElementType = ElementType::Thunder;

/// What happened to one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Position of the target: its index in the target list for
    /// [`CombatResolver::resolve`], its battlefield index for
    /// [`CombatResolver::resolve_in`].
    pub target: usize,

    /// The matchup used for scaling. `None` for support abilities.
    pub matchup: Option<Matchup>,

    /// Raw damage soaked up by barriers before scaling.
    pub absorbed: u64,

    /// Damage dealt to health.
    pub damage: u64,

    /// Health restored.
    pub healed: u64,

    /// Whether the ability's statuses were applied.
    pub effects_applied: bool,

    /// Whether the ability's barrier was attached.
    pub barrier_granted: bool,
}

/// The outcome of a successful resolution.
///
/// The engine produces no text; presentation layers format this report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The ability that was used.
    pub ability: Name,

    /// Mana deducted from the source (negative when it recharged).
    pub mana_cost: i64,

    /// Barrier on-hit statuses applied to the source.
    pub recoil: Vec<Status>,

    /// One entry per target, in target order.
    pub hits: Vec<Hit>,
}

impl Resolution {
    /// Damage dealt across all targets.
    pub fn total_damage(&self) -> u64 {
        self.hits.iter().fold(0u64, |total, h| total.saturating_add(h.damage))
    }

    /// Healing done across all targets.
    pub fn total_healed(&self) -> u64 {
        self.hits.iter().fold(0u64, |total, h| total.saturating_add(h.healed))
    }
}

/// Access to the source and targets of one resolution.
///
/// Lets disjoint borrows and a shared battlefield run the same algorithm.
trait Participants {
    fn source(&mut self) -> &mut Elemental;

    fn target(&mut self, i: usize) -> &mut Elemental;

    fn target_count(&self) -> usize;

    /// Identifier of the `i`th target reported in its [`Hit`].
    fn target_index(&self, i: usize) -> usize;
}

/// A source and separately borrowed targets.
struct Disjoint<'a, 'b> {
    source: &'a mut Elemental,
    targets: &'a mut [&'b mut Elemental],
}

impl Participants for Disjoint<'_, '_> {
    fn source(&mut self) -> &mut Elemental {
        &mut *self.source
    }

    fn target(&mut self, i: usize) -> &mut Elemental {
        &mut *self.targets[i]
    }

    fn target_count(&self) -> usize {
        self.targets.len()
    }

    fn target_index(&self, i: usize) -> usize {
        i
    }
}

/// Validated indices into one battlefield.
struct Field<'a> {
    field: &'a mut [Elemental],
    source: usize,
    targets: &'a [usize],
}

impl Participants for Field<'_> {
    fn source(&mut self) -> &mut Elemental {
        &mut self.field[self.source]
    }

    fn target(&mut self, i: usize) -> &mut Elemental {
        &mut self.field[self.targets[i]]
    }

    fn target_count(&self) -> usize {
        self.targets.len()
    }

    fn target_index(&self, i: usize) -> usize {
        self.targets[i]
    }
}

/// Carries out abilities against a matchup table.
///
/// The resolver holds only immutable data and can be shared by any number
/// of battles.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::{Ability, CombatResolver, ElementType, Elemental};
///
/// let resolver = CombatResolver::new().unwrap();
/// let ember = Ability::builder("Ember").damage(10).mana_cost(10).build();
///
/// let mut fire = Elemental::new(ElementType::Fire).with_abilities([&ember]);
/// let mut water = Elemental::new(ElementType::Water);
///
/// let resolution = resolver.resolve(&ember, &mut fire, &mut [&mut water]).unwrap();
/// assert_eq!(resolution.total_damage(), 9);
/// assert_eq!(water.health(), 991);
/// assert_eq!(fire.mana(), 490);
/// ```
#[derive(Debug, Clone)]
pub struct CombatResolver {
    table: MatchupTable,
}

impl CombatResolver {
    /// Create a resolver using the standard matchup table.
    pub fn new() -> Result<Self, CombatError> {
        Ok(Self::with_table(MatchupTable::standard()?))
    }

    /// Create a resolver using a custom matchup table.
    pub fn with_table(table: MatchupTable) -> Self {
        Self { table }
    }

    /// The matchup table in use.
    pub fn table(&self) -> &MatchupTable {
        &self.table
    }

    /// Use `ability` from `source` on `targets`.
    ///
    /// # Errors
    ///
    /// Checked in this order, first failure wins:
    /// * `CombatError::NoTargets` if `targets` is empty
    /// * `CombatError::IllegalAbility` if `source` cannot use the ability
    /// * `CombatError::InsufficientMana` if `source` cannot pay for it
    /// * `CombatError::TargetCountMismatch` if a single-target ability has
    ///   several targets
    ///
    /// A barrier is granted only when the ability's barrier has health or
    /// on-hit statuses. An ability with an empty barrier leaves the targets'
    /// existing barriers untouched and reports `barrier_granted: false`.
    ///
    /// Damage that would not fit in a `u64` saturates at `u64::MAX`.
    pub fn resolve(
        &self,
        ability: &Ability,
        source: &mut Elemental,
        targets: &mut [&mut Elemental],
    ) -> Result<Resolution, CombatError> {
        if targets.is_empty() {
            tracing::debug!(ability = %ability.name(), "rejected: no targets");
            return Err(CombatError::NoTargets);
        }
        self.run(ability, &mut Disjoint { source, targets })
    }

    /// Use `ability` from `field[source]` on the elementals at `targets`.
    ///
    /// The source may appear among the targets, which is how an elemental
    /// heals or shields itself. Barrier grants follow the same rule as
    /// [`CombatResolver::resolve`].
    ///
    /// # Errors
    ///
    /// As [`CombatResolver::resolve`], with index validation right after
    /// the empty check:
    /// * `CombatError::TargetOutOfRange` if the source or a target index is
    ///   outside `field`
    /// * `CombatError::DuplicateTarget` if a target index repeats
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elemental_combat::{Ability, CombatResolver, ElementType, Elemental};
    ///
    /// let resolver = CombatResolver::new().unwrap();
    /// let sunlight = Ability::builder("Sunlight").damage(-100).mana_cost(50).build();
    ///
    /// let mut field = vec![Elemental::new(ElementType::Flora).with_abilities([&sunlight])];
    /// field[0].harm(300).unwrap();
    ///
    /// resolver.resolve_in(&sunlight, &mut field, 0, &[0]).unwrap();
    /// assert_eq!(field[0].health(), 800);
    /// ```
    pub fn resolve_in(
        &self,
        ability: &Ability,
        field: &mut [Elemental],
        source: usize,
        targets: &[usize],
    ) -> Result<Resolution, CombatError> {
        if targets.is_empty() {
            tracing::debug!(ability = %ability.name(), "rejected: no targets");
            return Err(CombatError::NoTargets);
        }
        if source >= field.len() {
            return Err(CombatError::TargetOutOfRange(source));
        }
        for (i, &index) in targets.iter().enumerate() {
            if index >= field.len() {
                return Err(CombatError::TargetOutOfRange(index));
            }
            if targets[..i].contains(&index) {
                return Err(CombatError::DuplicateTarget(index));
            }
        }
        self.run(
            ability,
            &mut Field {
                field,
                source,
                targets,
            },
        )
    }

    fn run<P: Participants>(
        &self,
        ability: &Ability,
        p: &mut P,
    ) -> Result<Resolution, CombatError> {
        Self::check(ability, p)?;

        let count = p.target_count();
        let source_element = p.source().element();
        tracing::debug!(
            ability = %ability.name(),
            source = %source_element,
            targets = count,
            "resolving ability"
        );

        let mut recoil = Vec::new();
        let mut hits = Vec::with_capacity(count);

        if ability.is_offensive() {
            let damage = ability.base_damage().unsigned_abs();
            let raw = if source_element == BARRIER_PIERCING_ELEMENT && ability.bypasses_barriers() {
                vec![damage; count]
            } else {
                let (raw, on_hit) = Self::absorb(damage, p);
                recoil = on_hit;
                raw
            };

            for (i, raw_damage) in raw.into_iter().enumerate() {
                let attack = p.source().net_attack();
                let target = p.target(i);
                let matchup = self.table.lookup(source_element, target.element());
                let dealt = scale_damage(
                    attack,
                    matchup.multiplier(),
                    target.net_defense(),
                    raw_damage,
                );
                target.take_damage(dealt);

                let effects_applied = dealt > 0;
                if effects_applied {
                    target.apply_effects(ability.effects().iter().cloned());
                }
                tracing::trace!(
                    index = p.target_index(i),
                    ?matchup,
                    raw = raw_damage,
                    damage = dealt,
                    "hit"
                );
                hits.push(Hit {
                    target: p.target_index(i),
                    matchup: Some(matchup),
                    absorbed: damage - raw_damage,
                    damage: dealt,
                    healed: 0,
                    effects_applied,
                    barrier_granted: false,
                });
            }
        } else {
            let amount = ability.base_damage().unsigned_abs();
            for i in 0..count {
                let target = p.target(i);
                target.restore(amount);
                target.apply_effects(ability.effects().iter().cloned());
                tracing::trace!(index = p.target_index(i), healed = amount, "support");
                hits.push(Hit {
                    target: p.target_index(i),
                    matchup: None,
                    absorbed: 0,
                    damage: 0,
                    healed: amount,
                    effects_applied: true,
                    barrier_granted: false,
                });
            }
        }

        let template = ability.barrier();
        if !template.is_empty() {
            for (i, hit) in hits.iter_mut().enumerate() {
                let target = p.target(i);
                match ability.arity() {
                    TargetArity::All => target.set_all_barrier(template),
                    TargetArity::Single => target.set_single_barrier(template),
                }
                hit.barrier_granted = true;
            }
        }

        p.source().spend_mana(ability.mana_cost());

        Ok(Resolution {
            ability: ability.name().clone(),
            mana_cost: ability.mana_cost(),
            recoil,
            hits,
        })
    }

    /// Check every precondition that does not depend on indices.
    fn check<P: Participants>(ability: &Ability, p: &mut P) -> Result<(), CombatError> {
        let count = p.target_count();
        let source = p.source();

        if !source.can_use(ability) {
            tracing::debug!(ability = %ability.name(), "rejected: cannot use");
            return Err(CombatError::IllegalAbility {
                element: source.element(),
                ability: ability.name().clone(),
            });
        }

        let cost = ability.mana_cost();
        if cost > 0 && source.mana() < cost.unsigned_abs() {
            tracing::debug!(ability = %ability.name(), "rejected: insufficient mana");
            return Err(CombatError::InsufficientMana {
                ability: ability.name().clone(),
                required: cost.unsigned_abs(),
                available: source.mana(),
            });
        }

        if ability.arity() == TargetArity::Single && count > 1 {
            tracing::debug!(ability = %ability.name(), count, "rejected: too many targets");
            return Err(CombatError::TargetCountMismatch {
                ability: ability.name().clone(),
                count,
            });
        }

        Ok(())
    }

    /// Run `damage` per target through the barriers.
    ///
    /// Returns the raw damage reaching each target and the on-hit statuses
    /// that were applied to the source.
    fn absorb<P: Participants>(damage: u64, p: &mut P) -> (Vec<u64>, Vec<Status>) {
        let count = p.target_count();
        let n = count as u64;

        // Totals are u128 so a side-wide hit never wraps.
        let total = u128::from(damage) * u128::from(n);
        let shield = p.target(0).all_barrier_mut();
        let before = shield.health();
        shield.harm(u64::try_from(total).unwrap_or(u64::MAX));
        let bled = total - u128::from(before - shield.health());
        let on_hit = shield.on_hit().to_vec();
        p.source().apply_effects(on_hit.iter().cloned());

        let share = u64::try_from(bled.div_ceil(u128::from(n))).unwrap_or(u64::MAX);
        let raw = (0..count)
            .map(|i| p.target(i).single_barrier_mut().harm(share))
            .collect();
        (raw, on_hit)
    }
}
